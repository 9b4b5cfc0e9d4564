use crate::repositories::*;

/// The full record store as seen by the use cases.
pub trait Db: UserRepo + PickupRepo + TransactionRepo + RedemptionRepo + StoreRepo {}

impl<T> Db for T where T: UserRepo + PickupRepo + TransactionRepo + RedemptionRepo + StoreRepo {}
