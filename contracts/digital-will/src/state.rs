use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use shared::InputPolicy;

#[cw_serde]
pub struct Will {
    /// Whether the will is currently in force
    pub active: bool,
    /// Sole account allowed to execute the will
    pub executor: Addr,
    /// Block time of the last mutation
    pub last_modified: u64,
    /// Terminal flag, set once by a successful execution
    pub executed: bool,
    /// Sum of all live beneficiary shares (never above 100)
    pub total_shares: u64,
    /// Creation time
    pub created_at: u64,
}

impl Will {
    pub fn is_active(&self) -> bool {
        self.active && !self.executed
    }
}

#[cw_serde]
pub struct Beneficiary {
    /// Proportional claim in [1, 100]
    pub share: u64,
    /// One of the fixed asset type tags
    pub asset_type: String,
    /// Free-text note, 1-255 characters when present
    pub custom_data: Option<String>,
}

#[cw_serde]
pub struct ProofOfLife {
    /// Block time of the most recent check-in
    pub last_check_in: u64,
    /// Seconds after the last check-in before the will may be executed
    pub check_in_period: u64,
}

#[cw_serde]
pub struct Config {
    /// Administrator allowed to update this config
    pub owner: Addr,
    /// Whether out-of-range shares and periods are clamped or rejected
    pub input_policy: InputPolicy,
    /// Period recorded when a check-in does not name one
    pub default_check_in_period: u64,
}

/// Configuration
pub const CONFIG: Item<Config> = Item::new("config");

/// Wills indexed by owner
pub const WILLS: Map<&Addr, Will> = Map::new("wills");

/// Beneficiaries indexed by (owner, beneficiary)
pub const BENEFICIARIES: Map<(&Addr, &Addr), Beneficiary> = Map::new("beneficiaries");

/// Proof-of-life records indexed by owner
pub const PROOFS: Map<&Addr, ProofOfLife> = Map::new("proofs_of_life");
