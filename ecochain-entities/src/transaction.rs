use std::{fmt, str::FromStr};

use strum::{Display as EnumDisplay, EnumString};
use uuid::Uuid;

use crate::{id::Id, time::Timestamp};

/// Opaque, unique reference that links a ledger entry to the completion
/// that minted it. Random, not guessable and without any on-chain
/// pretensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedgerRef(Uuid);

impl LedgerRef {
    pub const STR_LEN: usize = 32;

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for LedgerRef {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

#[derive(Debug)]
pub struct LedgerRefParseError;

impl fmt::Display for LedgerRefParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Invalid ledger reference")
    }
}

impl FromStr for LedgerRef {
    type Err = LedgerRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>().map(Into::into).map_err(|_| LedgerRefParseError)
    }
}

impl fmt::Display for LedgerRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0.as_simple())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TransactionKind {
    Earn,
    Redeem,
}

/// An entry of the append-only EcoPoints ledger.
///
/// Entries are never updated or deleted after creation. The signed amount
/// is positive for `earn` and negative for `redeem` entries, which the
/// constructors enforce.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id            : Id,
    pub user_id       : Id,
    pub kind          : TransactionKind,
    pub amount        : i64,
    pub description   : String,
    pub pickup_id     : Option<Id>,
    pub redemption_id : Option<Id>,
    pub ledger_ref    : Option<LedgerRef>,
    pub created_at    : Timestamp,
}

impl Transaction {
    pub fn earn(
        user_id: Id,
        eco_points: u64,
        description: String,
        pickup_id: Id,
        ledger_ref: LedgerRef,
    ) -> Self {
        Self {
            id: Id::new(),
            user_id,
            kind: TransactionKind::Earn,
            amount: eco_points as i64,
            description,
            pickup_id: Some(pickup_id),
            redemption_id: None,
            ledger_ref: Some(ledger_ref),
            created_at: Timestamp::now(),
        }
    }

    pub fn redeem(user_id: Id, eco_points: u64, description: String, redemption_id: Id) -> Self {
        Self {
            id: Id::new(),
            user_id,
            kind: TransactionKind::Redeem,
            amount: -(eco_points as i64),
            description,
            pickup_id: None,
            redemption_id: Some(redemption_id),
            ledger_ref: None,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_refs_are_unique() {
        assert_ne!(LedgerRef::new(), LedgerRef::new());
    }

    #[test]
    fn ledger_ref_round_trip() {
        let r1 = LedgerRef::new();
        let s1 = r1.to_string();
        assert_eq!(LedgerRef::STR_LEN, s1.len());
        let r2 = s1.parse::<LedgerRef>().unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn signed_amounts() {
        let earn = Transaction::earn(
            Id::new(),
            48,
            "Recycled 4.8kg of plastic".into(),
            Id::new(),
            LedgerRef::new(),
        );
        assert_eq!(48, earn.amount);
        let redeem = Transaction::redeem(Id::new(), 100, "Redeemed at Green Mart".into(), Id::new());
        assert_eq!(-100, redeem.amount);
    }
}
