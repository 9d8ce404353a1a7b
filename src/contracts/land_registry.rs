//! Land-registration contract proxy.
//!
//! Write calls go through the signer-bound executor; which key signs
//! depends on how the proxy was built (operator or land owner).

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use serde::Serialize;
use std::sync::Arc;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::query::{read, to_u64};
use crate::blockchain::transaction::TxExecutor;
use crate::blockchain::types::{BlockchainResult, GasPricing, TxReceipt};
use crate::contracts::abi::ILandRegistry;

/// Per-requester view and approval state for one land token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequesterStatus {
    pub view_document_status: bool,
    pub l1_approver_status: bool,
    pub l2_approver_status: bool,
    pub approve_count: u64,
}

/// Approver decision on a land token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandApproval {
    pub land_id: u64,
    pub approved: bool,
}

impl From<LandApproval> for ILandRegistry::ApprovalData {
    fn from(approval: LandApproval) -> Self {
        Self {
            tokenId: U256::from(approval.land_id),
            status: approval.approved,
        }
    }
}

/// Typed handle to the deployed land-registration contract.
#[derive(Clone)]
pub struct LandRegistry {
    address: Address,
    reader: Arc<dyn ChainBackend>,
    writer: TxExecutor,
}

impl LandRegistry {
    pub fn new(address: Address, reader: Arc<dyn ChainBackend>, writer: TxExecutor) -> Self {
        Self {
            address,
            reader,
            writer,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    async fn send<C: SolCall>(
        &self,
        operation: &'static str,
        call: C,
        pricing: GasPricing,
    ) -> BlockchainResult<TxReceipt> {
        self.writer
            .submit(operation, self.address, call.abi_encode().into(), pricing)
            .await
    }

    async fn query<C: SolCall>(&self, operation: &'static str, call: C) -> BlockchainResult<C::Return> {
        read(self.reader.as_ref(), operation, self.address, call).await
    }

    // Writes

    pub async fn whitelist_approver_l1(&self, approver: Address) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.whitelistApproverL1",
            ILandRegistry::whitelistApproverL1Call { approver },
            GasPricing::Boosted,
        )
        .await
    }

    pub async fn whitelist_approver_l2(&self, approver: Address) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.whitelistApproverL2",
            ILandRegistry::whitelistApproverL2Call { approver },
            GasPricing::Boosted,
        )
        .await
    }

    pub async fn mint(
        &self,
        approver: Address,
        to: Address,
        land_id: u64,
        token_uri: String,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.mint",
            ILandRegistry::mintCall {
                approver,
                to,
                tokenId: U256::from(land_id),
                tokenUri: token_uri,
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn set_token_uri(&self, land_id: u64, token_uri: String) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.setTokenURI",
            ILandRegistry::setTokenURICall {
                tokenId: U256::from(land_id),
                tokenUri: token_uri,
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn approve(&self, to: Address, land_id: u64) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.approve",
            ILandRegistry::approveCall {
                to,
                tokenId: U256::from(land_id),
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn approve_by_l1(
        &self,
        approver: Address,
        approval: LandApproval,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.approveByL1",
            ILandRegistry::approveByL1Call {
                approver,
                data: approval.into(),
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn approve_by_l2(
        &self,
        approver: Address,
        approval: LandApproval,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.approveByL2",
            ILandRegistry::approveByL2Call {
                approver,
                data: approval.into(),
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn request_land_for_sale(
        &self,
        requester: Address,
        land_id: u64,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.requestLandForSale",
            ILandRegistry::requestLandForSaleCall {
                requester,
                tokenId: U256::from(land_id),
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn owner_decision_for_raised_request(
        &self,
        land_owner: Address,
        requester: Address,
        land_id: u64,
        status: bool,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.ownerDecisionforRaisedRequest",
            ILandRegistry::ownerDecisionforRaisedRequestCall {
                landOwner: land_owner,
                requester,
                tokenId: U256::from(land_id),
                status,
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn registration_for_land_by_buyer(
        &self,
        requester: Address,
        land_id: u64,
        doc_uri: String,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.registrationForLandByBuyer",
            ILandRegistry::registrationForLandByBuyerCall {
                requester,
                tokenId: U256::from(land_id),
                docUri: doc_uri,
            },
            GasPricing::Node,
        )
        .await
    }

    pub async fn land_document_view_request_approve(
        &self,
        approver: Address,
        requester: Address,
        land_id: u64,
        status: bool,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "land.landDocumentViewRequestApprove",
            ILandRegistry::landDocumentViewRequestApproveCall {
                approver,
                requester,
                tokenId: U256::from(land_id),
                status,
            },
            GasPricing::Node,
        )
        .await
    }

    // Reads

    pub async fn view_document_by_requester(
        &self,
        requester: Address,
        land_id: u64,
    ) -> BlockchainResult<String> {
        self.query(
            "land.viewDocumentByRequesters",
            ILandRegistry::viewDocumentByRequestersCall {
                requester,
                tokenId: U256::from(land_id),
            },
        )
        .await
    }

    pub async fn view_document_by_owner_or_approvers(
        &self,
        caller: Address,
        land_id: u64,
    ) -> BlockchainResult<String> {
        self.query(
            "land.viewDocumentByOwnerOrLevelApprovers",
            ILandRegistry::viewDocumentByOwnerOrLevelApproversCall {
                caller,
                tokenId: U256::from(land_id),
            },
        )
        .await
    }

    pub async fn metadata_uri(&self) -> BlockchainResult<String> {
        self.query("land.metadataUri", ILandRegistry::metadataUriCall {})
            .await
    }

    pub async fn owner_of(&self, land_id: u64) -> BlockchainResult<Address> {
        self.query(
            "land.ownerOf",
            ILandRegistry::ownerOfCall {
                tokenId: U256::from(land_id),
            },
        )
        .await
    }

    pub async fn land_requester_status(
        &self,
        requester: Address,
        land_id: u64,
    ) -> BlockchainResult<RequesterStatus> {
        let status = self
            .query(
                "land.LandRequesterStatus",
                ILandRegistry::LandRequesterStatusCall {
                    requester,
                    tokenId: U256::from(land_id),
                },
            )
            .await?;

        Ok(RequesterStatus {
            view_document_status: status.viewDocumentStatus,
            l1_approver_status: status.l1ApproverStatus,
            l2_approver_status: status.l2ApproverStatus,
            approve_count: to_u64(status.approveCount)?,
        })
    }

    pub async fn l1_approver(&self) -> BlockchainResult<Address> {
        self.query("land.L1Approver", ILandRegistry::L1ApproverCall {})
            .await
    }

    pub async fn l2_approver(&self) -> BlockchainResult<Address> {
        self.query("land.L2Approver", ILandRegistry::L2ApproverCall {})
            .await
    }

    pub async fn l1_approval_count(&self) -> BlockchainResult<u64> {
        to_u64(
            self.query("land.L1ApprovalCounts", ILandRegistry::L1ApprovalCountsCall {})
                .await?,
        )
    }

    pub async fn l2_approval_count(&self) -> BlockchainResult<u64> {
        to_u64(
            self.query("land.L2ApprovalCounts", ILandRegistry::L2ApprovalCountsCall {})
                .await?,
        )
    }

    pub async fn land_count(&self) -> BlockchainResult<u64> {
        to_u64(self.query("land.LandCounts", ILandRegistry::LandCountsCall {}).await?)
    }

    pub async fn land_registration_status(&self, land_id: u64) -> BlockchainResult<bool> {
        self.query(
            "land.LandRegistrationStatus",
            ILandRegistry::LandRegistrationStatusCall {
                tokenId: U256::from(land_id),
            },
        )
        .await
    }

    pub async fn completed_registrations(&self) -> BlockchainResult<u64> {
        to_u64(
            self.query(
                "land.completedRegistrations",
                ILandRegistry::completedRegistrationsCall {},
            )
            .await?,
        )
    }

    pub async fn all_uris_for_land_owner(&self, land_owner: Address) -> BlockchainResult<Vec<String>> {
        self.query(
            "land.returnAllUriForLandOwner",
            ILandRegistry::returnAllUriForLandOwnerCall {
                landOwner: land_owner,
            },
        )
        .await
    }

    pub async fn document_requester_count(&self, land_id: u64) -> BlockchainResult<u64> {
        to_u64(
            self.query(
                "land.noOfRequestersInfoToViewDoc",
                ILandRegistry::noOfRequestersInfoToViewDocCall {
                    tokenId: U256::from(land_id),
                },
            )
            .await?,
        )
    }

    pub async fn document_requesters(&self, land_id: u64) -> BlockchainResult<Vec<Address>> {
        self.query(
            "land.allRequesterAddressForViewDocument",
            ILandRegistry::allRequesterAddressForViewDocumentCall {
                tokenId: U256::from(land_id),
            },
        )
        .await
    }
}

impl std::fmt::Debug for LandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LandRegistry")
            .field("address", &self.address)
            .field("writer", &self.writer)
            .finish()
    }
}
