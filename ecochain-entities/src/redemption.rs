use strum::{Display as EnumDisplay, EnumString};

use crate::{id::Id, time::Timestamp, voucher::VoucherCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RedemptionStatus {
    Pending,
    Completed,
    Expired,
}

/// A time-limited voucher created by exchanging EcoPoints for store credit.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Redemption {
    pub id              : Id,
    pub user_id         : Id,
    /// Weak reference, the store record is never cascaded.
    pub store_id        : Id,
    pub eco_points_used : u64,
    /// Derived: `eco_points_used / redemption_rate` of the store.
    pub value_redeemed  : f64,
    pub voucher         : VoucherCode,
    pub status          : RedemptionStatus,
    pub created_at      : Timestamp,
    pub expires_at      : Timestamp,
}

impl Redemption {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}
