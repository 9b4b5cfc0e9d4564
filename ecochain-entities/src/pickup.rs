use strum::{Display as EnumDisplay, EnumString};

use crate::{
    id::Id, location::Location, rating::PickupRating, time::Timestamp, transaction::LedgerRef,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MaterialType {
    Plastic,
    Paper,
    Glass,
    Metal,
    Electronics,
    Organic,
}

/// Lifecycle of a pickup request.
///
/// `pending -> accepted -> completed`, with `pending -> cancelled` as the
/// alternate terminal branch. There are no regression transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PickupStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

impl PickupStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PickupRequest {
    pub id                  : Id,

    /// The owning citizen. Immutable after creation.
    pub citizen_id          : Id,
    /// The assigned collector. Set exactly once at acceptance.
    pub collector_id        : Option<Id>,

    pub material_type       : MaterialType,
    pub estimated_weight_kg : f64,
    /// Authoritative for the points calculation. Set at completion.
    pub actual_weight_kg    : Option<f64>,

    pub status              : PickupStatus,
    pub location            : Location,
    pub notes               : Option<String>,

    pub created_at          : Timestamp,
    pub scheduled_at        : Option<Timestamp>,
    pub completed_at        : Option<Timestamp>,

    /// Derived at completion, set exactly once.
    pub eco_points_earned   : Option<u64>,
    pub ledger_ref          : Option<LedgerRef>,

    /// Rating of the citizen, submitted by the collector.
    pub citizen_rating      : Option<PickupRating>,
    /// Rating of the collector, submitted by the citizen.
    pub collector_rating    : Option<PickupRating>,
}

impl PickupRequest {
    pub fn is_owned_by(&self, citizen_id: &Id) -> bool {
        self.citizen_id == *citizen_id
    }

    pub fn is_assigned_to(&self, collector_id: &Id) -> bool {
        self.collector_id.as_ref() == Some(collector_id)
    }
}
