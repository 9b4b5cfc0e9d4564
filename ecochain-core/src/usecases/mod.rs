mod accept_pickup;
mod cancel_pickup;
mod choose_role;
mod collector_availability;
mod complete_pickup;
mod create_pickup;
mod error;
mod leaderboard;
mod rate_pickup;
mod redeem_points;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    accept_pickup::*, cancel_pickup::*, choose_role::*, collector_availability::*,
    complete_pickup::*, create_pickup::*, error::Error, leaderboard::*, rate_pickup::*,
    redeem_points::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
use self::prelude::*;

pub fn user_pickups<R: PickupRepo>(repo: &R, citizen: &Id) -> Result<Vec<PickupRequest>> {
    Ok(repo.pickups_of_citizen(citizen)?)
}

pub fn pending_pickups<R: PickupRepo>(repo: &R) -> Result<Vec<PickupRequest>> {
    Ok(repo.pickups_with_status(PickupStatus::Pending)?)
}

pub fn collector_pickups<R: PickupRepo>(repo: &R, collector: &Id) -> Result<Vec<PickupRequest>> {
    Ok(repo.pickups_of_collector(collector)?)
}

pub fn recent_transactions<R: TransactionRepo>(
    repo: &R,
    user: &Id,
    limit: u64,
) -> Result<Vec<Transaction>> {
    let pagination = Pagination {
        offset: None,
        limit: Some(limit),
    };
    Ok(repo.transactions_of_user(user, &pagination)?)
}

pub fn active_partner_stores<R: StoreRepo>(repo: &R) -> Result<Vec<PartnerStore>> {
    Ok(repo.active_stores()?)
}
