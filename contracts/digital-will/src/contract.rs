use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use shared::{has_elapsed, time_remaining, InputPolicy};

use crate::error::ContractError;
use crate::msg::{
    ActiveResponse, AssetTypesResponse, BeneficiariesResponse, BeneficiaryInfo,
    BeneficiaryResponse, CanExecuteResponse, ConfigResponse, ExecuteMsg, InstantiateMsg,
    ProofOfLifeResponse, QueryMsg, WillResponse,
};
use crate::state::{
    Beneficiary, Config, ProofOfLife, Will, BENEFICIARIES, CONFIG, PROOFS, WILLS,
};
use crate::validation::{
    resolve_check_in_period, resolve_share, valid_asset_types, validate_asset_type,
    validate_check_in_period, validate_custom_data, MAX_CHECK_IN_PERIOD, MAX_TOTAL_SHARES,
    MIN_CHECK_IN_PERIOD,
};

const CONTRACT_NAME: &str = "crates.io:digital-will";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let default_check_in_period = msg.default_check_in_period.unwrap_or(MIN_CHECK_IN_PERIOD);
    if !validate_check_in_period(default_check_in_period) {
        return Err(ContractError::InvalidPeriod {});
    }

    let config = Config {
        owner,
        input_policy: msg.input_policy.unwrap_or_default(),
        default_check_in_period,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("input_policy", policy_name(config.input_policy))
        .add_attribute(
            "default_check_in_period",
            config.default_check_in_period.to_string(),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateWill { executor } => execute_create_will(deps, env, info, executor),
        ExecuteMsg::UpdateExecutor { executor } => {
            execute_update_executor(deps, env, info, executor)
        }
        ExecuteMsg::DeactivateWill {} => execute_deactivate_will(deps, env, info),
        ExecuteMsg::ExecuteWill { owner } => execute_execute_will(deps, env, info, owner),
        ExecuteMsg::SetBeneficiary {
            beneficiary,
            share,
            asset_type,
            custom_data,
        } => execute_set_beneficiary(
            deps,
            env,
            info,
            beneficiary,
            share,
            asset_type,
            custom_data,
        ),
        ExecuteMsg::RemoveBeneficiary { beneficiary } => {
            execute_remove_beneficiary(deps, env, info, beneficiary)
        }
        ExecuteMsg::CheckIn { period } => execute_check_in(deps, env, info, period),
        ExecuteMsg::UpdateConfig {
            owner,
            input_policy,
            default_check_in_period,
        } => execute_update_config(deps, info, owner, input_policy, default_check_in_period),
    }
}

pub fn execute_create_will(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    executor: String,
) -> Result<Response, ContractError> {
    let executor_addr = deps.api.addr_validate(&executor)?;

    if WILLS.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyInitialized {});
    }

    if executor_addr == info.sender {
        return Err(ContractError::InvalidExecutor {});
    }

    let now = env.block.time.seconds();
    let will = Will {
        active: true,
        executor: executor_addr,
        last_modified: now,
        executed: false,
        total_shares: 0,
        created_at: now,
    };
    WILLS.save(deps.storage, &info.sender, &will)?;

    Ok(Response::new()
        .add_attribute("method", "create_will")
        .add_attribute("owner", info.sender)
        .add_attribute("executor", will.executor))
}

pub fn execute_update_executor(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    executor: String,
) -> Result<Response, ContractError> {
    let executor_addr = deps.api.addr_validate(&executor)?;
    let mut will = load_mutable_will(deps.as_ref(), &info.sender)?;

    if executor_addr == info.sender {
        return Err(ContractError::InvalidExecutor {});
    }

    will.executor = executor_addr;
    will.last_modified = env.block.time.seconds();
    WILLS.save(deps.storage, &info.sender, &will)?;

    Ok(Response::new()
        .add_attribute("method", "update_executor")
        .add_attribute("owner", info.sender)
        .add_attribute("executor", will.executor))
}

pub fn execute_deactivate_will(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut will = load_mutable_will(deps.as_ref(), &info.sender)?;

    will.active = false;
    will.last_modified = env.block.time.seconds();
    WILLS.save(deps.storage, &info.sender, &will)?;

    Ok(Response::new()
        .add_attribute("method", "deactivate_will")
        .add_attribute("owner", info.sender))
}

pub fn execute_execute_will(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let mut will = WILLS
        .may_load(deps.storage, &owner_addr)?
        .ok_or(ContractError::NotFound {})?;
    let proof = PROOFS
        .may_load(deps.storage, &owner_addr)?
        .ok_or(ContractError::NotFound {})?;

    if info.sender != will.executor {
        return Err(ContractError::NotAuthorized {});
    }

    if will.executed {
        return Err(ContractError::WillExecuted {});
    }

    if !will.active {
        return Err(ContractError::NotAuthorized {});
    }

    let now = env.block.time.seconds();
    if !has_elapsed(now, proof.last_check_in, proof.check_in_period) {
        return Err(ContractError::NotAuthorized {});
    }

    if will.total_shares == 0 {
        return Err(ContractError::InvalidBeneficiary {});
    }

    // Records intent only; asset movement happens outside this contract
    will.executed = true;
    will.active = false;
    will.last_modified = now;
    WILLS.save(deps.storage, &owner_addr, &will)?;

    Ok(Response::new()
        .add_attribute("method", "execute_will")
        .add_attribute("owner", owner_addr)
        .add_attribute("executor", info.sender)
        .add_attribute("total_shares", will.total_shares.to_string()))
}

pub fn execute_set_beneficiary(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: String,
    share: u64,
    asset_type: String,
    custom_data: Option<String>,
) -> Result<Response, ContractError> {
    let beneficiary_addr = deps.api.addr_validate(&beneficiary)?;
    let config = CONFIG.load(deps.storage)?;
    let mut will = load_mutable_will(deps.as_ref(), &info.sender)?;

    if beneficiary_addr == info.sender {
        return Err(ContractError::InvalidBeneficiary {});
    }

    let share = resolve_share(config.input_policy, share)?;

    if !validate_asset_type(&asset_type) {
        return Err(ContractError::InvalidAssetType {});
    }

    if !validate_custom_data(custom_data.as_deref()) {
        return Err(ContractError::InvalidCustomData {});
    }

    // Replace this beneficiary's previous contribution rather than adding to it
    let previous_share = BENEFICIARIES
        .may_load(deps.storage, (&info.sender, &beneficiary_addr))?
        .map(|entry| entry.share)
        .unwrap_or(0);
    let new_total = will.total_shares.saturating_sub(previous_share) + share;
    if new_total > MAX_TOTAL_SHARES {
        return Err(ContractError::InvalidShareValue {});
    }

    will.total_shares = new_total;
    will.last_modified = env.block.time.seconds();
    WILLS.save(deps.storage, &info.sender, &will)?;

    let entry = Beneficiary {
        share,
        asset_type,
        custom_data,
    };
    BENEFICIARIES.save(deps.storage, (&info.sender, &beneficiary_addr), &entry)?;

    Ok(Response::new()
        .add_attribute("method", "set_beneficiary")
        .add_attribute("owner", info.sender)
        .add_attribute("beneficiary", beneficiary_addr)
        .add_attribute("share", share.to_string())
        .add_attribute("asset_type", entry.asset_type)
        .add_attribute("total_shares", new_total.to_string()))
}

pub fn execute_remove_beneficiary(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: String,
) -> Result<Response, ContractError> {
    let beneficiary_addr = deps.api.addr_validate(&beneficiary)?;
    let mut will = load_mutable_will(deps.as_ref(), &info.sender)?;

    let entry = BENEFICIARIES
        .may_load(deps.storage, (&info.sender, &beneficiary_addr))?
        .ok_or(ContractError::NotFound {})?;

    will.total_shares = will.total_shares.saturating_sub(entry.share);
    will.last_modified = env.block.time.seconds();
    WILLS.save(deps.storage, &info.sender, &will)?;
    BENEFICIARIES.remove(deps.storage, (&info.sender, &beneficiary_addr));

    Ok(Response::new()
        .add_attribute("method", "remove_beneficiary")
        .add_attribute("owner", info.sender)
        .add_attribute("beneficiary", beneficiary_addr)
        .add_attribute("total_shares", will.total_shares.to_string()))
}

pub fn execute_check_in(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    period: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let period = resolve_check_in_period(
        config.input_policy,
        period.unwrap_or(config.default_check_in_period),
    )?;

    let proof = ProofOfLife {
        last_check_in: env.block.time.seconds(),
        check_in_period: period,
    };
    PROOFS.save(deps.storage, &info.sender, &proof)?;

    Ok(Response::new()
        .add_attribute("method", "check_in")
        .add_attribute("owner", info.sender)
        .add_attribute("last_check_in", proof.last_check_in.to_string())
        .add_attribute("check_in_period", proof.check_in_period.to_string()))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    owner: Option<String>,
    input_policy: Option<InputPolicy>,
    default_check_in_period: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::NotAuthorized {});
    }

    if let Some(owner) = owner {
        config.owner = deps.api.addr_validate(&owner)?;
    }

    if let Some(policy) = input_policy {
        config.input_policy = policy;
    }

    // Never clamped: an administrator typo should not silently become 30 days
    if let Some(period) = default_check_in_period {
        if !validate_check_in_period(period) {
            return Err(ContractError::InvalidPeriod {});
        }
        config.default_check_in_period = period;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute("owner", config.owner)
        .add_attribute("input_policy", policy_name(config.input_policy))
        .add_attribute(
            "default_check_in_period",
            config.default_check_in_period.to_string(),
        ))
}

/// Loads the sender's will, failing if it is missing or already executed.
fn load_mutable_will(deps: Deps, owner: &Addr) -> Result<Will, ContractError> {
    let will = WILLS
        .may_load(deps.storage, owner)?
        .ok_or(ContractError::NotFound {})?;

    if will.executed {
        return Err(ContractError::WillExecuted {});
    }

    Ok(will)
}

fn policy_name(policy: InputPolicy) -> &'static str {
    match policy {
        InputPolicy::Clamp => "clamp",
        InputPolicy::Strict => "strict",
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetConfig {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GetWill { owner } => to_json_binary(&query_will(deps, owner)?),
        QueryMsg::GetBeneficiary { owner, beneficiary } => {
            to_json_binary(&query_beneficiary(deps, owner, beneficiary)?)
        }
        QueryMsg::ListBeneficiaries {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_list_beneficiaries(deps, owner, start_after, limit)?),
        QueryMsg::GetProofOfLifeStatus { owner } => {
            to_json_binary(&query_proof_of_life(deps, owner)?)
        }
        QueryMsg::IsWillActive { owner } => to_json_binary(&query_is_will_active(deps, owner)?),
        QueryMsg::CanExecute { owner } => to_json_binary(&query_can_execute(deps, env, owner)?),
        QueryMsg::GetValidAssetTypes {} => to_json_binary(&AssetTypesResponse {
            asset_types: valid_asset_types(),
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        input_policy: config.input_policy,
        default_check_in_period: config.default_check_in_period,
        min_check_in_period: MIN_CHECK_IN_PERIOD,
        max_check_in_period: MAX_CHECK_IN_PERIOD,
    })
}

fn query_will(deps: Deps, owner: String) -> StdResult<WillResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let will = WILLS.may_load(deps.storage, &owner_addr)?;
    Ok(WillResponse { will })
}

fn query_beneficiary(
    deps: Deps,
    owner: String,
    beneficiary: String,
) -> StdResult<BeneficiaryResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let beneficiary_addr = deps.api.addr_validate(&beneficiary)?;
    let beneficiary = BENEFICIARIES.may_load(deps.storage, (&owner_addr, &beneficiary_addr))?;
    Ok(BeneficiaryResponse { beneficiary })
}

fn query_list_beneficiaries(
    deps: Deps,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BeneficiariesResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(|addr| Bound::exclusive(addr));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    let beneficiaries = BENEFICIARIES
        .prefix(&owner_addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, entry) = item?;
            Ok(BeneficiaryInfo {
                address,
                share: entry.share,
                asset_type: entry.asset_type,
                custom_data: entry.custom_data,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BeneficiariesResponse { beneficiaries })
}

fn query_proof_of_life(deps: Deps, owner: String) -> StdResult<ProofOfLifeResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let proof = PROOFS.may_load(deps.storage, &owner_addr)?;
    Ok(ProofOfLifeResponse { proof })
}

fn query_is_will_active(deps: Deps, owner: String) -> StdResult<ActiveResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let active = WILLS
        .may_load(deps.storage, &owner_addr)?
        .map(|will| will.is_active())
        .unwrap_or(false);
    Ok(ActiveResponse { active })
}

fn query_can_execute(deps: Deps, env: Env, owner: String) -> StdResult<CanExecuteResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let now = env.block.time.seconds();

    let blocked = |reason: &str, grace_remaining: Option<u64>| CanExecuteResponse {
        can_execute: false,
        reason: reason.to_string(),
        grace_remaining,
    };

    let Some(will) = WILLS.may_load(deps.storage, &owner_addr)? else {
        return Ok(blocked("Will not found", None));
    };
    let Some(proof) = PROOFS.may_load(deps.storage, &owner_addr)? else {
        return Ok(blocked("No proof of life recorded", None));
    };

    if will.executed {
        return Ok(blocked("Will already executed", None));
    }
    if !will.active {
        return Ok(blocked("Will is not active", None));
    }

    let remaining = time_remaining(now, proof.last_check_in, proof.check_in_period);
    if remaining.is_some() {
        return Ok(blocked("Grace period has not elapsed", remaining));
    }

    if will.total_shares == 0 {
        return Ok(blocked("Will has no beneficiaries", None));
    }

    Ok(CanExecuteResponse {
        can_execute: true,
        reason: "Will can be executed".to_string(),
        grace_remaining: None,
    })
}
