//! Serializable data structures of the EcoChain Hub API.
//!
//! All timestamps are unix epoch milliseconds.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use conv::ParseError;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Citizen,
    Collector,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Plastic,
    Paper,
    Glass,
    Metal,
    Electronics,
    Organic,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum PickupStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum RedemptionStatus {
    Pending,
    Completed,
    Expired,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earn,
    Redeem,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct RatingValue(u8);

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct AvgRatingValue(f64);

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    pub eco_points: u64,
    pub total_collections: u64,
    pub rating: AvgRatingValue,
    pub is_available: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PickupRating {
    pub value: RatingValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub created_at: i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PickupRequest {
    pub id                  : String,
    pub citizen_id          : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_id        : Option<String>,
    pub material_type       : MaterialType,
    pub estimated_weight_kg : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_weight_kg    : Option<f64>,
    pub status              : PickupStatus,
    pub address             : String,
    pub lat                 : f64,
    pub lng                 : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes               : Option<String>,
    pub created_at          : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at        : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at        : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eco_points_earned   : Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_ref          : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizen_rating      : Option<PickupRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_rating    : Option<PickupRating>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Transaction {
    pub id            : String,
    pub user_id       : String,
    pub kind          : TransactionKind,
    pub amount        : i64,
    pub description   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_id     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_id : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_ref    : Option<String>,
    pub created_at    : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Redemption {
    pub id              : String,
    pub user_id         : String,
    pub store_id        : String,
    pub eco_points_used : u64,
    pub value_redeemed  : f64,
    pub voucher         : String,
    pub status          : RedemptionStatus,
    pub created_at      : i64,
    pub expires_at      : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PartnerStore {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub redemption_rate: f64,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPickupRequest {
    pub material_type: MaterialType,
    pub estimated_weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewRating {
    pub pickup_id: String,
    pub value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RedeemPointsRequest {
    pub store_id: String,
    pub eco_points: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RedeemPointsResponse {
    pub redemption_id: String,
    pub voucher: String,
    pub value_redeemed: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RecyclerRank {
    pub rank: usize,
    pub name: String,
    pub eco_points: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CollectorRank {
    pub rank: usize,
    pub name: String,
    pub total_collections: u64,
    pub rating: AvgRatingValue,
}
