#[macro_use]
extern crate log;

mod accept_pickup;
mod cancel_pickup;
mod complete_pickup;
mod create_pickup_request;
mod expire_redemptions;
mod queries;
mod rate_pickup;
mod redeem_points;
mod user_profile;

pub mod prelude {
    pub use super::{
        accept_pickup::*, cancel_pickup::*, complete_pickup::*, create_pickup_request::*,
        expire_redemptions::*, queries::*, rate_pickup::*, redeem_points::*, user_profile::*,
    };
}

pub mod cfg;
pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ecochain_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod mem {
    pub use ecochain_db_mem::Connections;
}

/// All flows run on behalf of an authenticated user.
pub(crate) fn authenticated(caller: Option<&Id>) -> Result<&Id> {
    caller.ok_or_else(|| usecases::Error::Unauthenticated.into())
}
