use super::prelude::*;

/// How long a voucher stays redeemable unless configured otherwise.
pub const DEFAULT_REDEMPTION_VALIDITY: Duration = Duration::hours(24);

#[derive(Debug, Clone)]
pub struct RedeemPoints {
    pub store_id: Id,
    pub eco_points: u64,
}

#[derive(Debug, Clone)]
pub struct Redeemed {
    pub redemption_id: Id,
    pub voucher: VoucherCode,
    pub value_redeemed: f64,
}

/// Converts part of a user's balance into a pending store voucher.
///
/// Debits the balance, inserts the redemption, and appends the negative
/// ledger entry. Callers must wrap this in a single store transaction.
pub fn redeem_points<R>(
    repo: &mut R,
    user_id: &Id,
    redeem: RedeemPoints,
    validity: Duration,
) -> Result<Redeemed>
where
    R: UserRepo + StoreRepo + RedemptionRepo + TransactionRepo,
{
    let RedeemPoints {
        store_id,
        eco_points,
    } = redeem;
    if eco_points == 0 {
        return Err(Error::Amount);
    }
    let store = repo.get_store(&store_id)?;
    if !store.redemption_rate.is_finite() || store.redemption_rate <= 0.0 {
        return Err(Error::RedemptionRate);
    }
    let mut user = repo.get_user(user_id)?;
    if user.eco_points < eco_points {
        return Err(Error::InsufficientBalance);
    }

    let value_redeemed = eco_points as f64 / store.redemption_rate;
    let voucher = VoucherCode::new();
    let created_at = Timestamp::now();
    let redemption = Redemption {
        id: Id::new(),
        user_id: user_id.clone(),
        store_id,
        eco_points_used: eco_points,
        value_redeemed,
        voucher,
        status: RedemptionStatus::Pending,
        created_at,
        expires_at: created_at + validity,
    };

    user.eco_points -= eco_points;
    repo.update_user(&user)?;
    repo.create_redemption(&redemption)?;
    repo.append_transaction(&Transaction::redeem(
        user_id.clone(),
        eco_points,
        format!("Redeemed at {}", store.name),
        redemption.id.clone(),
    ))?;

    log::info!(
        "User {user_id} redeemed {eco_points} EcoPoints at store {store}",
        store = store.id
    );
    Ok(Redeemed {
        redemption_id: redemption.id,
        voucher,
        value_redeemed,
    })
}

/// Settles a pending voucher when the partner store scans it.
pub fn complete_redemption<R: RedemptionRepo>(
    repo: &mut R,
    voucher: &VoucherCode,
    now: Timestamp,
) -> Result<Redemption> {
    let mut redemption = repo.get_redemption_by_voucher(voucher)?;
    match redemption.status {
        RedemptionStatus::Pending => {
            if redemption.is_expired_at(now) {
                redemption.status = RedemptionStatus::Expired;
                repo.update_redemption(&redemption)?;
                return Err(Error::VoucherExpired);
            }
            redemption.status = RedemptionStatus::Completed;
            repo.update_redemption(&redemption)?;
            Ok(redemption)
        }
        RedemptionStatus::Completed => Err(Error::VoucherAlreadyUsed),
        RedemptionStatus::Expired => Err(Error::VoucherExpired),
    }
}

/// Sweeps all overdue pending redemptions to `expired`.
///
/// Points were already burned at redemption time, so this has no ledger
/// effect.
pub fn expire_redemptions<R: RedemptionRepo>(repo: &mut R, now: Timestamp) -> Result<usize> {
    let overdue = repo.pending_redemptions_expiring_before(now)?;
    let count = overdue.len();
    for mut redemption in overdue {
        redemption.status = RedemptionStatus::Expired;
        repo.update_redemption(&redemption)?;
    }
    if count > 0 {
        log::info!("Expired {count} overdue redemptions");
    }
    Ok(count)
}
