use super::*;

use crate::cfg::Cfg;

pub fn user_pickups(connections: &mem::Connections, caller: Option<&Id>) -> Result<Vec<PickupRequest>> {
    let citizen = authenticated(caller)?;
    let db = connections.shared();
    Ok(usecases::user_pickups(&*db, citizen)?)
}

/// All open requests that collectors can pick from, newest first.
pub fn pending_pickups(connections: &mem::Connections) -> Result<Vec<PickupRequest>> {
    let db = connections.shared();
    Ok(usecases::pending_pickups(&*db)?)
}

pub fn collector_pickups(
    connections: &mem::Connections,
    caller: Option<&Id>,
) -> Result<Vec<PickupRequest>> {
    let collector = authenticated(caller)?;
    let db = connections.shared();
    Ok(usecases::collector_pickups(&*db, collector)?)
}

/// The most recent ledger entries of the calling user.
pub fn recent_transactions(
    connections: &mem::Connections,
    cfg: &Cfg,
    caller: Option<&Id>,
) -> Result<Vec<Transaction>> {
    let user = authenticated(caller)?;
    let db = connections.shared();
    Ok(usecases::recent_transactions(&*db, user, cfg.ledger_page_size)?)
}

pub fn top_recyclers(
    connections: &mem::Connections,
    cfg: &Cfg,
) -> Result<Vec<usecases::RecyclerRank>> {
    let db = connections.shared();
    Ok(usecases::top_recyclers(&*db, cfg.leaderboard_len)?)
}

pub fn top_collectors(
    connections: &mem::Connections,
    cfg: &Cfg,
) -> Result<Vec<usecases::CollectorRank>> {
    let db = connections.shared();
    Ok(usecases::top_collectors(&*db, cfg.leaderboard_len)?)
}

pub fn active_partner_stores(connections: &mem::Connections) -> Result<Vec<PartnerStore>> {
    let db = connections.shared();
    Ok(usecases::active_partner_stores(&*db)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn pending_pickups_for_collectors() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 0);
        let collector = fixture.create_collector("bob");
        let open = fixture.request_pickup(&citizen);
        let _accepted = fixture.accepted_pickup(&citizen, &collector);

        let pending = flows::pending_pickups(&fixture.db_connections).unwrap();
        assert_eq!(1, pending.len());
        assert_eq!(open, pending[0].id);

        let mine = flows::user_pickups(&fixture.db_connections, Some(&citizen)).unwrap();
        assert_eq!(2, mine.len());
    }

    #[test]
    fn recent_transactions_are_limited_to_one_page() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 0);
        let collector = fixture.create_collector("bob");
        for _ in 0..25 {
            let pickup_id = fixture.accepted_pickup(&citizen, &collector);
            flows::complete_pickup(
                &fixture.db_connections,
                Some(&collector),
                usecases::CompletePickup {
                    pickup_id,
                    actual_weight_kg: 1.0,
                },
            )
            .unwrap();
        }

        let transactions =
            flows::recent_transactions(&fixture.db_connections, &fixture.cfg, Some(&citizen))
                .unwrap();
        assert_eq!(20, transactions.len());
    }

    #[test]
    fn leaderboards_are_capped() {
        let fixture = BackendFixture::new();
        for i in 0..12 {
            fixture.create_citizen(&format!("citizen {i}"), i * 10);
        }
        let board =
            flows::top_recyclers(&fixture.db_connections, &fixture.cfg).unwrap();
        assert_eq!(10, board.len());
        assert_eq!(110, board[0].eco_points);
    }

    #[test]
    fn only_active_stores_are_listed() {
        let fixture = BackendFixture::new();
        fixture.create_store("Green Mart", 10.0);
        let closed = PartnerStore::build().name("Closed").inactive().finish();
        fixture.db_connections.exclusive().create_store(&closed).unwrap();

        let stores = flows::active_partner_stores(&fixture.db_connections).unwrap();
        assert_eq!(1, stores.len());
        assert_eq!("Green Mart", stores[0].name);
    }
}
