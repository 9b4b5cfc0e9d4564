#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ecochain-entities
//!
//! Reusable, agnostic domain entities for EcoChain Hub.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod id;
pub mod location;
pub mod pickup;
pub mod rating;
pub mod redemption;
pub mod store;
pub mod time;
pub mod transaction;
pub mod user;
pub mod voucher;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
