use std::result;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

pub use ecochain_entities::builders::*;

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for PickupRequest {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Transaction {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Redemption {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for PartnerStore {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn newest_first(pickups: &mut [PickupRequest]) {
    pickups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[derive(Debug, Default)]
pub struct MockDb {
    pub users: Vec<User>,
    pub pickups: Vec<PickupRequest>,
    pub transactions: Vec<Transaction>,
    pub redemptions: Vec<Redemption>,
    pub stores: Vec<PartnerStore>,
}

impl UserRepo for MockDb {
    fn create_user(&mut self, user: &User) -> RepoResult<()> {
        create(&mut self.users, user.clone())
    }

    fn update_user(&mut self, user: &User) -> RepoResult<()> {
        update(&mut self.users, user)
    }

    fn get_user(&self, id: &Id) -> RepoResult<User> {
        get(&self.users, id.as_str())
    }

    fn try_get_user(&self, id: &Id) -> RepoResult<Option<User>> {
        Ok(self.get_user(id).ok())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.len())
    }
}

impl PickupRepo for MockDb {
    fn create_pickup(&mut self, pickup: &PickupRequest) -> RepoResult<()> {
        create(&mut self.pickups, pickup.clone())
    }

    fn update_pickup(&mut self, pickup: &PickupRequest) -> RepoResult<()> {
        update(&mut self.pickups, pickup)
    }

    fn get_pickup(&self, id: &Id) -> RepoResult<PickupRequest> {
        get(&self.pickups, id.as_str())
    }

    fn pickups_of_citizen(&self, citizen_id: &Id) -> RepoResult<Vec<PickupRequest>> {
        let mut pickups: Vec<_> = self
            .pickups
            .iter()
            .filter(|p| p.is_owned_by(citizen_id))
            .cloned()
            .collect();
        newest_first(&mut pickups);
        Ok(pickups)
    }

    fn pickups_of_collector(&self, collector_id: &Id) -> RepoResult<Vec<PickupRequest>> {
        let mut pickups: Vec<_> = self
            .pickups
            .iter()
            .filter(|p| p.is_assigned_to(collector_id))
            .cloned()
            .collect();
        newest_first(&mut pickups);
        Ok(pickups)
    }

    fn pickups_with_status(&self, status: PickupStatus) -> RepoResult<Vec<PickupRequest>> {
        let mut pickups: Vec<_> = self
            .pickups
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect();
        newest_first(&mut pickups);
        Ok(pickups)
    }

    fn count_pickups(&self) -> RepoResult<usize> {
        Ok(self.pickups.len())
    }
}

impl TransactionRepo for MockDb {
    fn append_transaction(&mut self, transaction: &Transaction) -> RepoResult<()> {
        create(&mut self.transactions, transaction.clone())
    }

    fn transactions_of_user(
        &self,
        user_id: &Id,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .transactions
            .iter()
            .filter(|t| t.user_id == *user_id)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(transactions.into_iter().skip(offset).take(limit).collect())
    }
}

impl RedemptionRepo for MockDb {
    fn create_redemption(&mut self, redemption: &Redemption) -> RepoResult<()> {
        create(&mut self.redemptions, redemption.clone())
    }

    fn update_redemption(&mut self, redemption: &Redemption) -> RepoResult<()> {
        update(&mut self.redemptions, redemption)
    }

    fn get_redemption(&self, id: &Id) -> RepoResult<Redemption> {
        get(&self.redemptions, id.as_str())
    }

    fn get_redemption_by_voucher(&self, voucher: &VoucherCode) -> RepoResult<Redemption> {
        self.redemptions
            .iter()
            .find(|r| r.voucher == *voucher)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn redemptions_of_user(&self, user_id: &Id) -> RepoResult<Vec<Redemption>> {
        Ok(self
            .redemptions
            .iter()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect())
    }

    fn pending_redemptions_expiring_before(&self, at: Timestamp) -> RepoResult<Vec<Redemption>> {
        Ok(self
            .redemptions
            .iter()
            .filter(|r| r.status == RedemptionStatus::Pending && r.expires_at <= at)
            .cloned()
            .collect())
    }
}

impl StoreRepo for MockDb {
    fn create_store(&mut self, store: &PartnerStore) -> RepoResult<()> {
        create(&mut self.stores, store.clone())
    }

    fn get_store(&self, id: &Id) -> RepoResult<PartnerStore> {
        get(&self.stores, id.as_str())
    }

    fn active_stores(&self) -> RepoResult<Vec<PartnerStore>> {
        Ok(self
            .stores
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }
}

// Seeding helpers shared by the use case tests.

pub fn seed_citizen(db: &mut MockDb, eco_points: u64) -> Id {
    let user = User::build()
        .name("citizen")
        .role(Role::Citizen)
        .eco_points(eco_points)
        .finish();
    let id = user.id.clone();
    db.create_user(&user).unwrap();
    id
}

pub fn seed_collector(db: &mut MockDb) -> Id {
    let user = User::build().name("collector").role(Role::Collector).finish();
    let id = user.id.clone();
    db.create_user(&user).unwrap();
    id
}

pub fn seed_pickup(db: &mut MockDb, citizen: &Id, status: PickupStatus) -> Id {
    let pickup = PickupRequest::build()
        .citizen(citizen.clone())
        .status(status)
        .finish();
    let id = pickup.id.clone();
    db.create_pickup(&pickup).unwrap();
    id
}

pub fn seed_accepted_pickup(db: &mut MockDb, citizen: &Id, collector: &Id) -> Id {
    let pickup = PickupRequest::build()
        .citizen(citizen.clone())
        .collector(collector.clone())
        .status(PickupStatus::Accepted)
        .finish();
    let id = pickup.id.clone();
    db.create_pickup(&pickup).unwrap();
    id
}
