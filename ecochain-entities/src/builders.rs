//! Builders to conveniently create entities in tests.

use crate::{
    geo::MapPoint, id::Id, location::Location, pickup::*, rating::AvgRatingValue, store::*,
    time::Timestamp, user::*,
};

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{partner_store_builder::*, pickup_builder::*, user_builder::*};

pub mod user_builder {
    use super::*;

    #[derive(Debug)]
    pub struct UserBuild(User);

    impl UserBuild {
        pub fn id(mut self, id: impl Into<Id>) -> Self {
            self.0.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.0.name = Some(name.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.0.role = Some(role);
            self
        }
        pub fn eco_points(mut self, eco_points: u64) -> Self {
            self.0.eco_points = eco_points;
            self
        }
        pub fn total_collections(mut self, total_collections: u64) -> Self {
            self.0.total_collections = total_collections;
            self
        }
        pub fn finish(self) -> User {
            self.0
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild(User {
                id: Id::new(),
                name: None,
                role: None,
                eco_points: 0,
                total_collections: 0,
                rating: AvgRatingValue::default(),
                is_available: false,
            })
        }
    }
}

pub mod pickup_builder {
    use super::*;

    #[derive(Debug)]
    pub struct PickupRequestBuild(PickupRequest);

    impl PickupRequestBuild {
        pub fn id(mut self, id: impl Into<Id>) -> Self {
            self.0.id = id.into();
            self
        }
        pub fn citizen(mut self, id: impl Into<Id>) -> Self {
            self.0.citizen_id = id.into();
            self
        }
        pub fn collector(mut self, id: impl Into<Id>) -> Self {
            self.0.collector_id = Some(id.into());
            self
        }
        pub fn material_type(mut self, material_type: MaterialType) -> Self {
            self.0.material_type = material_type;
            self
        }
        pub fn estimated_weight_kg(mut self, kg: f64) -> Self {
            self.0.estimated_weight_kg = kg;
            self
        }
        pub fn status(mut self, status: PickupStatus) -> Self {
            self.0.status = status;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.0.location.pos = pos;
            self
        }
        pub fn finish(self) -> PickupRequest {
            self.0
        }
    }

    impl Builder for PickupRequest {
        type Build = PickupRequestBuild;
        fn build() -> Self::Build {
            PickupRequestBuild(PickupRequest {
                id: Id::new(),
                citizen_id: Id::new(),
                collector_id: None,
                material_type: MaterialType::Plastic,
                estimated_weight_kg: 1.0,
                actual_weight_kg: None,
                status: PickupStatus::Pending,
                location: Location {
                    address: "somewhere".into(),
                    pos: MapPoint::default(),
                },
                notes: None,
                created_at: Timestamp::now(),
                scheduled_at: None,
                completed_at: None,
                eco_points_earned: None,
                ledger_ref: None,
                citizen_rating: None,
                collector_rating: None,
            })
        }
    }
}

pub mod partner_store_builder {
    use super::*;

    #[derive(Debug)]
    pub struct PartnerStoreBuild(PartnerStore);

    impl PartnerStoreBuild {
        pub fn id(mut self, id: impl Into<Id>) -> Self {
            self.0.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.0.name = name.into();
            self
        }
        pub fn redemption_rate(mut self, rate: f64) -> Self {
            self.0.redemption_rate = rate;
            self
        }
        pub fn inactive(mut self) -> Self {
            self.0.is_active = false;
            self
        }
        pub fn finish(self) -> PartnerStore {
            self.0
        }
    }

    impl Builder for PartnerStore {
        type Build = PartnerStoreBuild;
        fn build() -> Self::Build {
            PartnerStoreBuild(PartnerStore {
                id: Id::new(),
                name: "store".into(),
                category: "groceries".into(),
                location: Location {
                    address: "somewhere".into(),
                    pos: MapPoint::default(),
                },
                redemption_rate: 10.0,
                is_active: true,
            })
        }
    }
}
