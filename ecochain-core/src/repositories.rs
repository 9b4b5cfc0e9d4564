// Low-level record store access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait UserRepo {
    fn create_user(&mut self, user: &User) -> Result<()>;
    fn update_user(&mut self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user(&self, id: &Id) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait PickupRepo {
    fn create_pickup(&mut self, pickup: &PickupRequest) -> Result<()>;
    fn update_pickup(&mut self, pickup: &PickupRequest) -> Result<()>;

    fn get_pickup(&self, id: &Id) -> Result<PickupRequest>;

    // Newest first
    fn pickups_of_citizen(&self, citizen_id: &Id) -> Result<Vec<PickupRequest>>;
    fn pickups_of_collector(&self, collector_id: &Id) -> Result<Vec<PickupRequest>>;
    fn pickups_with_status(&self, status: PickupStatus) -> Result<Vec<PickupRequest>>;

    fn count_pickups(&self) -> Result<usize>;
}

// The ledger is append-only: entries are never updated
// or deleted after creation, so the trait offers neither.
pub trait TransactionRepo {
    fn append_transaction(&mut self, transaction: &Transaction) -> Result<()>;

    // Newest first
    fn transactions_of_user(
        &self,
        user_id: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Transaction>>;
}

pub trait RedemptionRepo {
    fn create_redemption(&mut self, redemption: &Redemption) -> Result<()>;
    fn update_redemption(&mut self, redemption: &Redemption) -> Result<()>;

    fn get_redemption(&self, id: &Id) -> Result<Redemption>;
    fn get_redemption_by_voucher(&self, voucher: &VoucherCode) -> Result<Redemption>;

    fn redemptions_of_user(&self, user_id: &Id) -> Result<Vec<Redemption>>;
    fn pending_redemptions_expiring_before(&self, at: Timestamp) -> Result<Vec<Redemption>>;
}

pub trait StoreRepo {
    fn create_store(&mut self, store: &PartnerStore) -> Result<()>;

    fn get_store(&self, id: &Id) -> Result<PartnerStore>;
    fn active_stores(&self) -> Result<Vec<PartnerStore>>;
}
