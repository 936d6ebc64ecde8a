//! # geoaddr-core
//!
//! Repository and gateway abstractions plus the use cases (the business
//! logic) of the geoaddr address service. The use cases are generic over
//! the repository implementations; the concrete storage and geocoding
//! backends live in separate crates.

pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use geoaddr_entities::{address::*, delivery::*, geo::*, id::*, time::*, user::*};
}

pub use repositories::Error as RepoError;
