//! Registry facade.
//!
//! Every operation validates its address arguments before opening a
//! connection, builds the proxies it needs on a fresh connection, and
//! returns a `BlockchainResult`. Owner-signed operations (`set_token_uri`,
//! `approve`) are preceded by an operator-funded fee transfer to the owner
//! and are not attempted when that transfer fails.

use alloy::primitives::Address;
use std::sync::Arc;

use crate::blockchain::address::{parse_address, parse_addresses};
use crate::blockchain::client::{ChainBackend, Connector, HttpConnector};
use crate::blockchain::fee::FeeTransfer;
use crate::blockchain::transaction::TxExecutor;
use crate::blockchain::types::{BlockchainError, BlockchainResult, TxReceipt};
use crate::blockchain::wallet::{generate_account, GeneratedAccount, Wallet};
use crate::config::loader::ConfigError;
use crate::config::schema::RegistryConfig;
use crate::config::validation::validate_config;
use crate::contracts::{LandApproval, LandRegistry, RequesterStatus, UserRegistry};

/// Client for the user-registry and land-registration contracts.
pub struct RegistryClient {
    config: Arc<RegistryConfig>,
    connector: Arc<dyn Connector>,
    operator: Wallet,
    user_contract: Address,
    land_contract: Address,
}

impl RegistryClient {
    /// Create a client that talks to the configured node over HTTP.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        let connector = Arc::new(HttpConnector::new(&config.chain));
        Self::with_connector(config, connector)
    }

    /// Create a client over a custom connection factory.
    pub fn with_connector(
        config: RegistryConfig,
        connector: Arc<dyn Connector>,
    ) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let private_key = config.operator.private_key.as_deref().ok_or_else(|| {
            BlockchainError::Wallet("Operator private key not set".to_string())
        })?;
        let operator = Wallet::from_private_key(private_key)?;

        if !config.operator.address.is_empty() {
            let declared = parse_address(&config.operator.address)?;
            if declared != operator.address() {
                return Err(BlockchainError::Wallet(format!(
                    "Operator address {} does not match private key ({})",
                    declared,
                    operator.address()
                ))
                .into());
            }
        }

        let user_contract = parse_address(&config.contracts.user_registry)?;
        let land_contract = parse_address(&config.contracts.land_registry)?;

        tracing::info!(
            rpc_url = %config.chain.rpc_url,
            operator = %operator.address(),
            user_registry = %user_contract,
            land_registry = %land_contract,
            "Registry client initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            connector,
            operator,
            user_contract,
            land_contract,
        })
    }

    /// Generate a fresh account with its recovery phrase.
    pub fn create_address() -> BlockchainResult<GeneratedAccount> {
        generate_account()
    }

    /// Whether `input` is a well-formed account address.
    pub fn is_address(input: &str) -> bool {
        crate::blockchain::is_address(input)
    }

    /// Address of the operator account.
    pub fn operator_address(&self) -> Address {
        self.operator.address()
    }

    fn executor(&self, backend: Arc<dyn ChainBackend>) -> TxExecutor {
        TxExecutor::new(backend, &self.config.chain, &self.config.gas)
    }

    fn user_registry(&self) -> BlockchainResult<UserRegistry> {
        let reader = self.connector.read_only()?;
        let signer = self.connector.with_signer(&self.operator)?;
        Ok(UserRegistry::new(self.user_contract, reader, self.executor(signer)))
    }

    fn land_registry(&self) -> BlockchainResult<LandRegistry> {
        self.land_registry_as(&self.operator)
    }

    fn land_registry_as(&self, signer: &Wallet) -> BlockchainResult<LandRegistry> {
        let reader = self.connector.read_only()?;
        let backend = self.connector.with_signer(signer)?;
        Ok(LandRegistry::new(self.land_contract, reader, self.executor(backend)))
    }

    fn fee_transfer(&self) -> BlockchainResult<FeeTransfer> {
        let backend = self.connector.with_signer(&self.operator)?;
        FeeTransfer::new(self.executor(backend), &self.config.gas)
    }

    // User registry writes

    pub async fn whitelist_user_approver_l1(&self, approver: &str) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        self.user_registry()?.whitelist_approver_l1(approver).await
    }

    pub async fn add_user(&self, approver: &str, account: &str) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        let account = parse_address(account)?;
        self.user_registry()?.add_user(approver, account).await
    }

    pub async fn add_user_bulk<S: AsRef<str>>(
        &self,
        approver: &str,
        accounts: &[S],
    ) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        let accounts = parse_addresses(accounts)?;
        self.user_registry()?.add_user_bulk(approver, accounts).await
    }

    // Land registry writes

    pub async fn whitelist_approver_l1(&self, approver: &str) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        self.land_registry()?.whitelist_approver_l1(approver).await
    }

    pub async fn whitelist_approver_l2(&self, approver: &str) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        self.land_registry()?.whitelist_approver_l2(approver).await
    }

    pub async fn mint(
        &self,
        approver: &str,
        to: &str,
        land_id: u64,
        token_uri: &str,
    ) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        let to = parse_address(to)?;
        self.land_registry()?
            .mint(approver, to, land_id, token_uri.to_string())
            .await
    }

    /// Set a token URI, signed by the land owner after the fee transfer.
    pub async fn set_token_uri(
        &self,
        land_id: u64,
        token_uri: &str,
        owner: &Wallet,
    ) -> BlockchainResult<TxReceipt> {
        let registry = self.land_registry_as(owner)?;
        self.fee_transfer()?.pay(owner.address()).await?;
        registry.set_token_uri(land_id, token_uri.to_string()).await
    }

    /// Approve the operator for a land token, signed by the owner after the fee transfer.
    pub async fn approve(&self, land_id: u64, owner: &Wallet) -> BlockchainResult<TxReceipt> {
        let registry = self.land_registry_as(owner)?;
        self.fee_transfer()?.pay(owner.address()).await?;
        registry.approve(self.operator.address(), land_id).await
    }

    pub async fn approve_by_l1(
        &self,
        approver: &str,
        approval: LandApproval,
    ) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        self.land_registry()?.approve_by_l1(approver, approval).await
    }

    /// Run the owner `approve` flow, then submit the L2 approval.
    ///
    /// The L2 approval is only sent when the owner approval was mined successfully.
    pub async fn approve_by_l2(
        &self,
        approver: &str,
        approval: LandApproval,
        owner: &Wallet,
    ) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        let registry = self.land_registry()?;

        let prerequisite = |source: BlockchainError| BlockchainError::Prerequisite {
            operation: "approve",
            source: Box::new(source),
        };
        let receipt = self
            .approve(approval.land_id, owner)
            .await
            .map_err(prerequisite)?;
        if !receipt.status {
            return Err(prerequisite(BlockchainError::Reverted(
                receipt.transaction_hash,
            )));
        }

        registry.approve_by_l2(approver, approval).await
    }

    pub async fn request_land_for_sale(
        &self,
        requester: &str,
        land_id: u64,
    ) -> BlockchainResult<TxReceipt> {
        let requester = parse_address(requester)?;
        self.land_registry()?
            .request_land_for_sale(requester, land_id)
            .await
    }

    pub async fn owner_decision_for_raised_request(
        &self,
        land_owner: &str,
        requester: &str,
        land_id: u64,
        status: bool,
    ) -> BlockchainResult<TxReceipt> {
        let land_owner = parse_address(land_owner)?;
        let requester = parse_address(requester)?;
        self.land_registry()?
            .owner_decision_for_raised_request(land_owner, requester, land_id, status)
            .await
    }

    pub async fn registration_for_land_by_buyer(
        &self,
        requester: &str,
        land_id: u64,
        doc_uri: &str,
    ) -> BlockchainResult<TxReceipt> {
        let requester = parse_address(requester)?;
        self.land_registry()?
            .registration_for_land_by_buyer(requester, land_id, doc_uri.to_string())
            .await
    }

    pub async fn land_document_view_request_approve(
        &self,
        approver: &str,
        requester: &str,
        land_id: u64,
        status: bool,
    ) -> BlockchainResult<TxReceipt> {
        let approver = parse_address(approver)?;
        let requester = parse_address(requester)?;
        self.land_registry()?
            .land_document_view_request_approve(approver, requester, land_id, status)
            .await
    }

    // User registry reads

    pub async fn l1_approver_address(&self) -> BlockchainResult<Address> {
        self.user_registry()?.l1_approver_address().await
    }

    pub async fn verify_user(&self, account: &str) -> BlockchainResult<bool> {
        let account = parse_address(account)?;
        self.user_registry()?.verify_user(account).await
    }

    pub async fn all_user_addresses(&self) -> BlockchainResult<Vec<Address>> {
        self.user_registry()?.all_user_addresses().await
    }

    pub async fn user_count(&self) -> BlockchainResult<u64> {
        self.user_registry()?.user_count().await
    }

    // Land registry reads

    pub async fn metadata_uri(&self) -> BlockchainResult<String> {
        self.land_registry()?.metadata_uri().await
    }

    pub async fn view_document_by_requester(
        &self,
        requester: &str,
        land_id: u64,
    ) -> BlockchainResult<String> {
        let requester = parse_address(requester)?;
        self.land_registry()?
            .view_document_by_requester(requester, land_id)
            .await
    }

    pub async fn view_document_by_owner_or_approvers(
        &self,
        caller: &str,
        land_id: u64,
    ) -> BlockchainResult<String> {
        let caller = parse_address(caller)?;
        self.land_registry()?
            .view_document_by_owner_or_approvers(caller, land_id)
            .await
    }

    pub async fn owner_of(&self, land_id: u64) -> BlockchainResult<Address> {
        self.land_registry()?.owner_of(land_id).await
    }

    pub async fn land_requester_status(
        &self,
        requester: &str,
        land_id: u64,
    ) -> BlockchainResult<RequesterStatus> {
        let requester = parse_address(requester)?;
        self.land_registry()?
            .land_requester_status(requester, land_id)
            .await
    }

    pub async fn l1_approver(&self) -> BlockchainResult<Address> {
        self.land_registry()?.l1_approver().await
    }

    pub async fn l2_approver(&self) -> BlockchainResult<Address> {
        self.land_registry()?.l2_approver().await
    }

    pub async fn l1_approval_count(&self) -> BlockchainResult<u64> {
        self.land_registry()?.l1_approval_count().await
    }

    pub async fn l2_approval_count(&self) -> BlockchainResult<u64> {
        self.land_registry()?.l2_approval_count().await
    }

    pub async fn land_count(&self) -> BlockchainResult<u64> {
        self.land_registry()?.land_count().await
    }

    pub async fn land_registration_status(&self, land_id: u64) -> BlockchainResult<bool> {
        self.land_registry()?.land_registration_status(land_id).await
    }

    pub async fn completed_registrations(&self) -> BlockchainResult<u64> {
        self.land_registry()?.completed_registrations().await
    }

    pub async fn all_uris_for_land_owner(&self, land_owner: &str) -> BlockchainResult<Vec<String>> {
        let land_owner = parse_address(land_owner)?;
        self.land_registry()?
            .all_uris_for_land_owner(land_owner)
            .await
    }

    pub async fn document_requester_count(&self, land_id: u64) -> BlockchainResult<u64> {
        self.land_registry()?.document_requester_count(land_id).await
    }

    pub async fn document_requesters(&self, land_id: u64) -> BlockchainResult<Vec<Address>> {
        self.land_registry()?.document_requesters(land_id).await
    }
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("rpc_url", &self.config.chain.rpc_url)
            .field("operator", &self.operator.address())
            .field("user_contract", &self.user_contract)
            .field("land_contract", &self.land_contract)
            .finish()
    }
}
