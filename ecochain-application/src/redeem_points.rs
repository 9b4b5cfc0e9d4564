use super::*;

use crate::cfg::Cfg;

/// Converts EcoPoints of the calling user into a store voucher.
pub fn redeem_points(
    connections: &mem::Connections,
    cfg: &Cfg,
    caller: Option<&Id>,
    redeem: usecases::RedeemPoints,
) -> Result<usecases::Redeemed> {
    let user = authenticated(caller)?;
    Ok(connections.exclusive().transaction(|db| {
        usecases::redeem_points(db, user, redeem, cfg.redemption_validity).map_err(|err| {
            warn!("User {user} could not redeem points: {err}");
            err
        })
    })?)
}

/// Settles a voucher that a partner store has scanned.
pub fn complete_redemption(
    connections: &mem::Connections,
    caller: Option<&Id>,
    voucher: &VoucherCode,
) -> Result<Redemption> {
    authenticated(caller)?;
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::complete_redemption(db, voucher, Timestamp::now()))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn redeem_and_settle_voucher() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 120);
        let store = fixture.create_store("Green Mart", 10.0);

        let redeemed = flows::redeem_points(
            &fixture.db_connections,
            &fixture.cfg,
            Some(&citizen),
            usecases::RedeemPoints {
                store_id: store,
                eco_points: 100,
            },
        )
        .unwrap();
        assert_eq!(10.0, redeemed.value_redeemed);
        assert_eq!(20, fixture.get_user(&citizen).eco_points);

        let settled =
            flows::complete_redemption(&fixture.db_connections, Some(&citizen), &redeemed.voucher)
                .unwrap();
        assert_eq!(RedemptionStatus::Completed, settled.status);
    }

    #[test]
    fn failed_redemption_leaves_the_balance_untouched() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 50);
        let store = fixture.create_store("Green Mart", 10.0);

        assert!(matches!(
            flows::redeem_points(
                &fixture.db_connections,
                &fixture.cfg,
                Some(&citizen),
                usecases::RedeemPoints {
                    store_id: store,
                    eco_points: 100,
                },
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::InsufficientBalance
            )))
        ));
        assert_eq!(50, fixture.get_user(&citizen).eco_points);
    }
}
