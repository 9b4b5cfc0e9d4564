use strum::{Display as EnumDisplay, EnumString};

use crate::{id::Id, rating::AvgRatingValue};

/// The role a user has chosen after signing up.
///
/// Unset until chosen and fixed afterwards. There is no reversal path,
/// only an admin could reassign roles out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Citizen,
    Collector,
    Admin,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id                : Id,
    pub name              : Option<String>,
    pub role              : Option<Role>,

    /// EcoPoints balance. Only ever credited by completed pickups
    /// and debited by redemptions, hence never negative.
    pub eco_points        : u64,

    // Collector aggregates
    pub total_collections : u64,
    pub rating            : AvgRatingValue,
    pub is_available      : bool,
}

impl User {
    pub fn is_citizen(&self) -> bool {
        self.role == Some(Role::Citizen)
    }

    pub fn is_collector(&self) -> bool {
        self.role == Some(Role::Collector)
    }
}
