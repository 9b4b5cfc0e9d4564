pub mod entities {
    pub use ecochain_entities::{
        geo::*, id::*, location::*, pickup::*, rating::*, redemption::*, store::*, time::*,
        transaction::*, user::*, voucher::*,
    };
}

pub mod db;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;
