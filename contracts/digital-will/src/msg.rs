use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use shared::InputPolicy;

use crate::state::{Beneficiary, ProofOfLife, Will};

#[cw_serde]
pub struct InstantiateMsg {
    /// Config administrator (defaults to the instantiator)
    pub owner: Option<String>,
    /// Clamp (default) or reject out-of-range shares and periods
    pub input_policy: Option<InputPolicy>,
    /// Period used by check-ins that omit one (defaults to 30 days)
    pub default_check_in_period: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a will for the sender
    CreateWill { executor: String },
    /// Replace the executor of the sender's will
    UpdateExecutor { executor: String },
    /// Take the sender's will out of force
    DeactivateWill {},
    /// Execute an owner's will (executor only, after the grace period)
    ExecuteWill { owner: String },
    /// Insert or update a beneficiary of the sender's will
    SetBeneficiary {
        beneficiary: String,
        share: u64,
        asset_type: String,
        custom_data: Option<String>,
    },
    /// Remove a beneficiary from the sender's will
    RemoveBeneficiary { beneficiary: String },
    /// Record proof of life for the sender
    CheckIn { period: Option<u64> },
    /// Update contract config (config owner only)
    UpdateConfig {
        owner: Option<String>,
        input_policy: Option<InputPolicy>,
        default_check_in_period: Option<u64>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get config
    #[returns(ConfigResponse)]
    GetConfig {},

    /// Get will by owner
    #[returns(WillResponse)]
    GetWill { owner: String },

    /// Get a single beneficiary entry
    #[returns(BeneficiaryResponse)]
    GetBeneficiary { owner: String, beneficiary: String },

    /// List beneficiaries of a will
    #[returns(BeneficiariesResponse)]
    ListBeneficiaries {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Get proof-of-life record
    #[returns(ProofOfLifeResponse)]
    GetProofOfLifeStatus { owner: String },

    /// Check if a will is in force
    #[returns(ActiveResponse)]
    IsWillActive { owner: String },

    /// Check if a will can be executed now
    #[returns(CanExecuteResponse)]
    CanExecute { owner: String },

    /// Get accepted asset type tags
    #[returns(AssetTypesResponse)]
    GetValidAssetTypes {},
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub input_policy: InputPolicy,
    pub default_check_in_period: u64,
    pub min_check_in_period: u64,
    pub max_check_in_period: u64,
}

#[cw_serde]
pub struct WillResponse {
    pub will: Option<Will>,
}

#[cw_serde]
pub struct BeneficiaryResponse {
    pub beneficiary: Option<Beneficiary>,
}

#[cw_serde]
pub struct BeneficiaryInfo {
    pub address: Addr,
    pub share: u64,
    pub asset_type: String,
    pub custom_data: Option<String>,
}

#[cw_serde]
pub struct BeneficiariesResponse {
    pub beneficiaries: Vec<BeneficiaryInfo>,
}

#[cw_serde]
pub struct ProofOfLifeResponse {
    pub proof: Option<ProofOfLife>,
}

#[cw_serde]
pub struct ActiveResponse {
    pub active: bool,
}

#[cw_serde]
pub struct CanExecuteResponse {
    pub can_execute: bool,
    pub reason: String,
    /// Seconds until the grace period has elapsed, if it has not
    pub grace_remaining: Option<u64>,
}

#[cw_serde]
pub struct AssetTypesResponse {
    pub asset_types: Vec<String>,
}
