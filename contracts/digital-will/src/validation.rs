//! Bounds checks and clamping applied before every mutation.
//!
//! The `validate_*` and `sanitize_*` functions are pure. The `resolve_*`
//! functions combine them according to the configured [`InputPolicy`].

use shared::InputPolicy;

use crate::error::ContractError;

pub const MIN_SHARE: u64 = 1;
pub const MAX_SHARE: u64 = 100;
pub const MAX_TOTAL_SHARES: u64 = 100;

pub const MIN_CHECK_IN_PERIOD: u64 = 2_592_000; // 30 days
pub const MAX_CHECK_IN_PERIOD: u64 = 31_536_000; // 365 days

pub const MAX_CUSTOM_DATA_LEN: usize = 255;

pub const VALID_ASSET_TYPES: [&str; 6] = [
    "STX",
    "BTC",
    "NFT",
    "DIGITAL-ASSET",
    "PHYSICAL-ASSET",
    "OTHER",
];

pub fn validate_share(share: u64) -> bool {
    (MIN_SHARE..=MAX_SHARE).contains(&share)
}

/// Out-of-range shares collapse to the minimum share.
pub fn sanitize_share(share: u64) -> u64 {
    if validate_share(share) {
        share
    } else {
        MIN_SHARE
    }
}

pub fn validate_check_in_period(period: u64) -> bool {
    period > 0 && (MIN_CHECK_IN_PERIOD..=MAX_CHECK_IN_PERIOD).contains(&period)
}

/// Out-of-range periods collapse to the minimum period.
pub fn sanitize_check_in_period(period: u64) -> u64 {
    if validate_check_in_period(period) {
        period
    } else {
        MIN_CHECK_IN_PERIOD
    }
}

pub fn validate_asset_type(tag: &str) -> bool {
    !tag.is_empty() && VALID_ASSET_TYPES.contains(&tag)
}

/// Absent data is always valid. Length is counted in characters.
pub fn validate_custom_data(data: Option<&str>) -> bool {
    match data {
        None => true,
        Some(data) => {
            let len = data.chars().count();
            len > 0 && len <= MAX_CUSTOM_DATA_LEN
        }
    }
}

pub fn valid_asset_types() -> Vec<String> {
    VALID_ASSET_TYPES.iter().map(|tag| tag.to_string()).collect()
}

pub fn resolve_share(policy: InputPolicy, share: u64) -> Result<u64, ContractError> {
    match policy {
        InputPolicy::Clamp => {
            let share = sanitize_share(share);
            if !validate_share(share) {
                return Err(ContractError::ZeroShare {});
            }
            Ok(share)
        }
        InputPolicy::Strict => {
            if share < MIN_SHARE {
                return Err(ContractError::ZeroShare {});
            }
            if share > MAX_SHARE {
                return Err(ContractError::InvalidShareValue {});
            }
            Ok(share)
        }
    }
}

pub fn resolve_check_in_period(policy: InputPolicy, period: u64) -> Result<u64, ContractError> {
    let period = match policy {
        InputPolicy::Clamp => sanitize_check_in_period(period),
        InputPolicy::Strict => period,
    };
    if !validate_check_in_period(period) {
        return Err(ContractError::InvalidPeriod {});
    }
    Ok(period)
}
