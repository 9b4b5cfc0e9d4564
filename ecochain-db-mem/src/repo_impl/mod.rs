use std::collections::HashMap;

use ecochain_core::{entities::*, repositories::*};

mod pickup;
mod redemption;
mod store;
mod transaction;
mod user;

type Result<T> = std::result::Result<T, Error>;

/// All records of the hub, keyed by id.
///
/// Cloning takes a deep snapshot which the transaction wrapper
/// relies on for rollback.
#[derive(Debug, Default, Clone)]
pub struct Records {
    users: HashMap<Id, User>,
    pickups: HashMap<Id, PickupRequest>,
    transactions: Vec<Transaction>,
    redemptions: HashMap<Id, Redemption>,
    stores: HashMap<Id, PartnerStore>,
}

fn insert_new<T>(map: &mut HashMap<Id, T>, id: Id, record: T) -> Result<()> {
    use std::collections::hash_map::Entry;
    match map.entry(id) {
        Entry::Occupied(_) => Err(Error::AlreadyExists),
        Entry::Vacant(entry) => {
            entry.insert(record);
            Ok(())
        }
    }
}

fn replace_existing<T>(map: &mut HashMap<Id, T>, id: &Id, record: T) -> Result<()> {
    match map.get_mut(id) {
        Some(slot) => {
            *slot = record;
            Ok(())
        }
        None => Err(Error::NotFound),
    }
}

fn newest_first(pickups: &mut [PickupRequest]) {
    pickups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
