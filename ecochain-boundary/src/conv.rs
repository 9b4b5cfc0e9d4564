use super::*;
use ecochain_entities as e;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Voucher(#[from] e::voucher::VoucherDecodingError),
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Citizen => UserRole::Citizen,
            Collector => UserRole::Collector,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Citizen => Citizen,
            UserRole::Collector => Collector,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::pickup::MaterialType> for MaterialType {
    fn from(from: e::pickup::MaterialType) -> Self {
        use e::pickup::MaterialType::*;
        match from {
            Plastic => MaterialType::Plastic,
            Paper => MaterialType::Paper,
            Glass => MaterialType::Glass,
            Metal => MaterialType::Metal,
            Electronics => MaterialType::Electronics,
            Organic => MaterialType::Organic,
        }
    }
}

impl From<MaterialType> for e::pickup::MaterialType {
    fn from(from: MaterialType) -> Self {
        use e::pickup::MaterialType::*;
        match from {
            MaterialType::Plastic => Plastic,
            MaterialType::Paper => Paper,
            MaterialType::Glass => Glass,
            MaterialType::Metal => Metal,
            MaterialType::Electronics => Electronics,
            MaterialType::Organic => Organic,
        }
    }
}

impl From<e::pickup::PickupStatus> for PickupStatus {
    fn from(from: e::pickup::PickupStatus) -> Self {
        use e::pickup::PickupStatus::*;
        match from {
            Pending => PickupStatus::Pending,
            Accepted => PickupStatus::Accepted,
            Completed => PickupStatus::Completed,
            Cancelled => PickupStatus::Cancelled,
        }
    }
}

impl From<PickupStatus> for e::pickup::PickupStatus {
    fn from(from: PickupStatus) -> Self {
        use e::pickup::PickupStatus::*;
        match from {
            PickupStatus::Pending => Pending,
            PickupStatus::Accepted => Accepted,
            PickupStatus::Completed => Completed,
            PickupStatus::Cancelled => Cancelled,
        }
    }
}

impl From<e::redemption::RedemptionStatus> for RedemptionStatus {
    fn from(from: e::redemption::RedemptionStatus) -> Self {
        use e::redemption::RedemptionStatus::*;
        match from {
            Pending => RedemptionStatus::Pending,
            Completed => RedemptionStatus::Completed,
            Expired => RedemptionStatus::Expired,
        }
    }
}

impl From<RedemptionStatus> for e::redemption::RedemptionStatus {
    fn from(from: RedemptionStatus) -> Self {
        use e::redemption::RedemptionStatus::*;
        match from {
            RedemptionStatus::Pending => Pending,
            RedemptionStatus::Completed => Completed,
            RedemptionStatus::Expired => Expired,
        }
    }
}

impl From<e::transaction::TransactionKind> for TransactionKind {
    fn from(from: e::transaction::TransactionKind) -> Self {
        use e::transaction::TransactionKind::*;
        match from {
            Earn => TransactionKind::Earn,
            Redeem => TransactionKind::Redeem,
        }
    }
}

impl From<e::rating::RatingValue> for RatingValue {
    fn from(from: e::rating::RatingValue) -> Self {
        Self(from.into())
    }
}

impl From<e::rating::AvgRatingValue> for AvgRatingValue {
    fn from(from: e::rating::AvgRatingValue) -> Self {
        Self(from.into())
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<Coordinate> for e::geo::MapPoint {
    fn from(from: Coordinate) -> Self {
        Self::new(from.lat, from.lng)
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            role,
            eco_points,
            total_collections,
            rating,
            is_available,
        } = from;
        Self {
            id: id.into(),
            name,
            role: role.map(Into::into),
            eco_points,
            total_collections,
            rating: rating.into(),
            is_available,
        }
    }
}

impl From<e::rating::PickupRating> for PickupRating {
    fn from(from: e::rating::PickupRating) -> Self {
        let e::rating::PickupRating {
            value,
            feedback,
            created_at,
        } = from;
        Self {
            value: value.into(),
            feedback,
            created_at: created_at.as_milliseconds(),
        }
    }
}

impl From<e::pickup::PickupRequest> for PickupRequest {
    fn from(from: e::pickup::PickupRequest) -> Self {
        let e::pickup::PickupRequest {
            id,
            citizen_id,
            collector_id,
            material_type,
            estimated_weight_kg,
            actual_weight_kg,
            status,
            location,
            notes,
            created_at,
            scheduled_at,
            completed_at,
            eco_points_earned,
            ledger_ref,
            citizen_rating,
            collector_rating,
        } = from;
        Self {
            id: id.into(),
            citizen_id: citizen_id.into(),
            collector_id: collector_id.map(Into::into),
            material_type: material_type.into(),
            estimated_weight_kg,
            actual_weight_kg,
            status: status.into(),
            address: location.address,
            lat: location.pos.lat(),
            lng: location.pos.lng(),
            notes,
            created_at: created_at.as_milliseconds(),
            scheduled_at: scheduled_at.map(e::time::Timestamp::as_milliseconds),
            completed_at: completed_at.map(e::time::Timestamp::as_milliseconds),
            eco_points_earned,
            ledger_ref: ledger_ref.map(|r| r.to_string()),
            citizen_rating: citizen_rating.map(Into::into),
            collector_rating: collector_rating.map(Into::into),
        }
    }
}

impl From<e::transaction::Transaction> for Transaction {
    fn from(from: e::transaction::Transaction) -> Self {
        let e::transaction::Transaction {
            id,
            user_id,
            kind,
            amount,
            description,
            pickup_id,
            redemption_id,
            ledger_ref,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            kind: kind.into(),
            amount,
            description,
            pickup_id: pickup_id.map(Into::into),
            redemption_id: redemption_id.map(Into::into),
            ledger_ref: ledger_ref.map(|r| r.to_string()),
            created_at: created_at.as_milliseconds(),
        }
    }
}

impl From<e::redemption::Redemption> for Redemption {
    fn from(from: e::redemption::Redemption) -> Self {
        let e::redemption::Redemption {
            id,
            user_id,
            store_id,
            eco_points_used,
            value_redeemed,
            voucher,
            status,
            created_at,
            expires_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            store_id: store_id.into(),
            eco_points_used,
            value_redeemed,
            voucher: voucher.encode_to_string(),
            status: status.into(),
            created_at: created_at.as_milliseconds(),
            expires_at: expires_at.as_milliseconds(),
        }
    }
}

impl TryFrom<Redemption> for e::redemption::Redemption {
    type Error = ParseError;

    fn try_from(from: Redemption) -> Result<Self, Self::Error> {
        let Redemption {
            id,
            user_id,
            store_id,
            eco_points_used,
            value_redeemed,
            voucher,
            status,
            created_at,
            expires_at,
        } = from;
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            store_id: store_id.into(),
            eco_points_used,
            value_redeemed,
            voucher: voucher.parse()?,
            status: status.into(),
            created_at: e::time::Timestamp::from_milliseconds(created_at),
            expires_at: e::time::Timestamp::from_milliseconds(expires_at),
        })
    }
}

impl From<e::store::PartnerStore> for PartnerStore {
    fn from(from: e::store::PartnerStore) -> Self {
        let e::store::PartnerStore {
            id,
            name,
            category,
            location,
            redemption_rate,
            is_active,
        } = from;
        Self {
            id: id.into(),
            name,
            category,
            address: location.address,
            lat: location.pos.lat(),
            lng: location.pos.lng(),
            redemption_rate,
            is_active,
        }
    }
}
