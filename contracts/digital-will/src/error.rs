use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Not authorized")]
    NotAuthorized {},

    #[error("Will already exists for this owner")]
    AlreadyInitialized {},

    #[error("Record not found")]
    NotFound {},

    #[error("Invalid beneficiary")]
    InvalidBeneficiary {},

    #[error("Will has already been executed")]
    WillExecuted {},

    #[error("Executor cannot be the will owner")]
    InvalidExecutor {},

    #[error("Unknown asset type")]
    InvalidAssetType {},

    #[error("Custom data must be between 1 and 255 characters")]
    InvalidCustomData {},

    #[error("Check-in period out of range")]
    InvalidPeriod {},

    #[error("Share must be at least 1")]
    ZeroShare {},

    #[error("Total shares cannot exceed 100")]
    InvalidShareValue {},
}
