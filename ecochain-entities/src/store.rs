use crate::{id::Id, location::Location};

/// A partner store where EcoPoints can be redeemed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerStore {
    pub id              : Id,
    pub name            : String,
    pub category        : String,
    pub location        : Location,
    /// EcoPoints per currency unit. Store-set, must be positive.
    pub redemption_rate : f64,
    /// Gates visibility, not referential integrity.
    pub is_active       : bool,
}
