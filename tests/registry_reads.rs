//! Read-only queries against the in-memory chain.

use alloy::primitives::{Address, U256};
use alloy::sol_types::{SolCall, SolValue};
use land_registry_client::blockchain::BlockchainError;
use land_registry_client::contracts::abi::{ILandRegistry, IUserRegistry};
use land_registry_client::RequesterStatus;

mod common;

use common::{Recorded, LAND_CONTRACT, SOME_ADDRESS, USER_CONTRACT};

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_counts_convert_to_integers() {
    let (client, chain) = common::client(1);
    chain.respond(IUserRegistry::UserCountsCall::SELECTOR, U256::from(12).abi_encode());
    chain.respond(
        ILandRegistry::LandCountsCall::SELECTOR,
        U256::from(9_007_199_254_740_991u64).abi_encode(),
    );
    chain.respond(ILandRegistry::L1ApprovalCountsCall::SELECTOR, U256::from(3).abi_encode());
    chain.respond(ILandRegistry::L2ApprovalCountsCall::SELECTOR, U256::from(2).abi_encode());
    chain.respond(
        ILandRegistry::completedRegistrationsCall::SELECTOR,
        U256::from(1).abi_encode(),
    );
    chain.respond(
        ILandRegistry::noOfRequestersInfoToViewDocCall::SELECTOR,
        U256::ZERO.abi_encode(),
    );

    assert_eq!(client.user_count().await.unwrap(), 12);
    assert_eq!(client.land_count().await.unwrap(), 9_007_199_254_740_991);
    assert_eq!(client.l1_approval_count().await.unwrap(), 3);
    assert_eq!(client.l2_approval_count().await.unwrap(), 2);
    assert_eq!(client.completed_registrations().await.unwrap(), 1);
    assert_eq!(client.document_requester_count(4).await.unwrap(), 0);
}

#[tokio::test]
async fn test_oversized_count_is_an_error() {
    let (client, chain) = common::client(1);
    chain.respond(ILandRegistry::LandCountsCall::SELECTOR, U256::MAX.abi_encode());

    let err = client.land_count().await.unwrap_err();
    assert!(matches!(err, BlockchainError::Overflow(v) if v == U256::MAX));
}

#[tokio::test]
async fn test_requester_status_unpacks_in_order() {
    let (client, chain) = common::client(1);
    chain.respond(
        ILandRegistry::LandRequesterStatusCall::SELECTOR,
        (true, false, true, U256::from(3)).abi_encode_params(),
    );

    let status = client
        .land_requester_status(SOME_ADDRESS, 8)
        .await
        .unwrap();
    assert_eq!(
        status,
        RequesterStatus {
            view_document_status: true,
            l1_approver_status: false,
            l2_approver_status: true,
            approve_count: 3,
        }
    );
}

#[tokio::test]
async fn test_passthrough_values() {
    let (client, chain) = common::client(1);
    let users = vec![addr(SOME_ADDRESS), addr(USER_CONTRACT)];
    chain.respond(IUserRegistry::getAllUserAddressCall::SELECTOR, users.abi_encode());
    chain.respond(IUserRegistry::verifyUserCall::SELECTOR, true.abi_encode());
    chain.respond(
        IUserRegistry::L1ApproverAddressCall::SELECTOR,
        addr(SOME_ADDRESS).abi_encode(),
    );
    chain.respond(
        ILandRegistry::metadataUriCall::SELECTOR,
        "ipfs://QmMeta".to_string().abi_encode(),
    );
    chain.respond(
        ILandRegistry::returnAllUriForLandOwnerCall::SELECTOR,
        vec!["ipfs://a".to_string(), "ipfs://b".to_string()].abi_encode(),
    );
    chain.respond(ILandRegistry::ownerOfCall::SELECTOR, addr(SOME_ADDRESS).abi_encode());
    chain.respond(ILandRegistry::LandRegistrationStatusCall::SELECTOR, false.abi_encode());
    chain.respond(
        ILandRegistry::viewDocumentByRequestersCall::SELECTOR,
        "ipfs://QmDoc".to_string().abi_encode(),
    );

    assert_eq!(client.all_user_addresses().await.unwrap(), users);
    assert!(client.verify_user(SOME_ADDRESS).await.unwrap());
    assert_eq!(client.l1_approver_address().await.unwrap(), addr(SOME_ADDRESS));
    assert_eq!(client.metadata_uri().await.unwrap(), "ipfs://QmMeta");
    assert_eq!(
        client.all_uris_for_land_owner(SOME_ADDRESS).await.unwrap(),
        vec!["ipfs://a", "ipfs://b"]
    );
    assert_eq!(client.owner_of(1).await.unwrap(), addr(SOME_ADDRESS));
    assert!(!client.land_registration_status(1).await.unwrap());
    assert_eq!(
        client
            .view_document_by_requester(SOME_ADDRESS, 1)
            .await
            .unwrap(),
        "ipfs://QmDoc"
    );
}

#[tokio::test]
async fn test_reads_use_the_right_contract_and_never_send() {
    let (client, chain) = common::client(1);
    chain.respond(IUserRegistry::UserCountsCall::SELECTOR, U256::from(1).abi_encode());
    chain.respond(ILandRegistry::L2ApproverCall::SELECTOR, addr(SOME_ADDRESS).abi_encode());

    client.user_count().await.unwrap();
    client.l2_approver().await.unwrap();

    let calls: Vec<_> = chain
        .events()
        .into_iter()
        .map(|event| match event {
            Recorded::Call { to, .. } => to,
            other => panic!("unexpected request {:?}", other),
        })
        .collect();
    assert_eq!(calls, vec![Some(addr(USER_CONTRACT)), Some(addr(LAND_CONTRACT))]);
}

#[tokio::test]
async fn test_node_errors_are_returned() {
    let (client, _chain) = common::client(1);

    let err = client.document_requesters(3).await.unwrap_err();
    assert!(matches!(err, BlockchainError::Rpc(_)));

    let err = client
        .view_document_by_owner_or_approvers(SOME_ADDRESS, 3)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("execution reverted"));
}

#[tokio::test]
async fn test_undecodable_response_is_abi_error() {
    let (client, chain) = common::client(1);
    chain.respond(ILandRegistry::L1ApproverCall::SELECTOR, vec![0x01, 0x02]);

    let err = client.l1_approver().await.unwrap_err();
    assert!(matches!(err, BlockchainError::Abi(_)));
}
