
pub mod prelude {
    pub use ecochain_core::{
        entities::*,
        gateways::geocode::NoReverseGeocoding,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use ecochain_entities::builders::*;

    pub mod mem {
        pub use super::super::super::mem::*;
    }

    pub use crate::{
        cfg::Cfg,
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: mem::Connections,
        pub cfg: Cfg,
        pub geo: NoReverseGeocoding,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db_connections: mem::Connections::init(),
                cfg: Cfg::default(),
                geo: NoReverseGeocoding,
            }
        }

        pub fn create_citizen(&self, name: &str, eco_points: u64) -> Id {
            let user = User::build()
                .name(name)
                .role(Role::Citizen)
                .eco_points(eco_points)
                .finish();
            let id = user.id.clone();
            self.db_connections.exclusive().create_user(&user).unwrap();
            id
        }

        pub fn create_collector(&self, name: &str) -> Id {
            let user = User::build().name(name).role(Role::Collector).finish();
            let id = user.id.clone();
            self.db_connections.exclusive().create_user(&user).unwrap();
            id
        }

        pub fn create_store(&self, name: &str, redemption_rate: f64) -> Id {
            let store = PartnerStore::build()
                .name(name)
                .redemption_rate(redemption_rate)
                .finish();
            let id = store.id.clone();
            self.db_connections.exclusive().create_store(&store).unwrap();
            id
        }

        pub fn get_user(&self, id: &Id) -> User {
            self.db_connections.shared().get_user(id).unwrap()
        }

        pub fn get_pickup(&self, id: &Id) -> PickupRequest {
            self.db_connections.shared().get_pickup(id).unwrap()
        }

        pub fn request_pickup(&self, citizen: &Id) -> Id {
            flows::create_pickup_request(
                &self.db_connections,
                &self.geo,
                Some(citizen),
                default_new_pickup(),
            )
            .unwrap()
        }

        pub fn accepted_pickup(&self, citizen: &Id, collector: &Id) -> Id {
            let pickup_id = self.request_pickup(citizen);
            flows::accept_pickup(&self.db_connections, Some(collector), &pickup_id).unwrap();
            pickup_id
        }
    }

    pub fn default_new_pickup() -> usecases::NewPickupRequest {
        usecases::NewPickupRequest {
            material_type: MaterialType::Plastic,
            estimated_weight_kg: 5.0,
            location: Location {
                address: "Recycling Street 7".into(),
                pos: MapPoint::new(52.52, 13.405),
            },
            notes: None,
            scheduled_at: None,
        }
    }
}
