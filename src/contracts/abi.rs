//! Contract interfaces.
//!
//! These must stay in lockstep with the deployed bytecode.

use alloy::sol;

sol! {
    interface IUserRegistry {
        struct UserDetails {
            address approver;
            address account;
        }

        function whitelistApproverL1(address approver) external;
        function addUser(UserDetails details) external;
        function addUserBulk1(address approver, address[] accounts) external;

        function verifyUser(address account) external view returns (bool);
        function getAllUserAddress() external view returns (address[]);
        function UserCounts() external view returns (uint256);
        function L1ApproverAddress() external view returns (address);
    }
}

sol! {
    interface ILandRegistry {
        struct ApprovalData {
            uint256 tokenId;
            bool status;
        }

        function whitelistApproverL1(address approver) external;
        function whitelistApproverL2(address approver) external;
        function mint(address approver, address to, uint256 tokenId, string tokenUri) external;
        function setTokenURI(uint256 tokenId, string tokenUri) external;
        function approve(address to, uint256 tokenId) external;
        function approveByL1(address approver, ApprovalData data) external;
        function approveByL2(address approver, ApprovalData data) external;
        function requestLandForSale(address requester, uint256 tokenId) external;
        function ownerDecisionforRaisedRequest(address landOwner, address requester, uint256 tokenId, bool status) external;
        function registrationForLandByBuyer(address requester, uint256 tokenId, string docUri) external;
        function landDocumentViewRequestApprove(address approver, address requester, uint256 tokenId, bool status) external;

        function viewDocumentByRequesters(address requester, uint256 tokenId) external view returns (string);
        function viewDocumentByOwnerOrLevelApprovers(address caller, uint256 tokenId) external view returns (string);
        function metadataUri() external view returns (string);
        function ownerOf(uint256 tokenId) external view returns (address);
        function LandRequesterStatus(address requester, uint256 tokenId)
            external
            view
            returns (
                bool viewDocumentStatus,
                bool l1ApproverStatus,
                bool l2ApproverStatus,
                uint256 approveCount
            );
        function L1Approver() external view returns (address);
        function L2Approver() external view returns (address);
        function L1ApprovalCounts() external view returns (uint256);
        function L2ApprovalCounts() external view returns (uint256);
        function LandCounts() external view returns (uint256);
        function LandRegistrationStatus(uint256 tokenId) external view returns (bool);
        function completedRegistrations() external view returns (uint256);
        function returnAllUriForLandOwner(address landOwner) external view returns (string[]);
        function noOfRequestersInfoToViewDoc(uint256 tokenId) external view returns (uint256);
        function allRequesterAddressForViewDocument(uint256 tokenId) external view returns (address[]);
    }
}
