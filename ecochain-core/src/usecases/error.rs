use thiserror::Error;

use crate::{entities::PickupStatus, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("This is not allowed")]
    Unauthorized,
    #[error("Operation not allowed while the pickup is {0}")]
    InvalidState(PickupStatus),
    #[error("Insufficient EcoPoints balance")]
    InsufficientBalance,
    #[error("The weight must be a positive number of kilograms")]
    Weight,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("This pickup has already been rated")]
    AlreadyRated,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("The amount must be positive")]
    Amount,
    #[error("The redemption rate of the store is invalid")]
    RedemptionRate,
    #[error("A role has already been chosen")]
    RoleAlreadyAssigned,
    #[error("The voucher has expired")]
    VoucherExpired,
    #[error("The voucher has already been used")]
    VoucherAlreadyUsed,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
