//! The flows that tie the use cases to the storage backend and the
//! geocoding gateway. Each flow acquires its own database connection,
//! read-only for queries and exclusive for mutations.

#[macro_use]
extern crate log;

mod create_delivery;
mod create_establishment;
mod delete_addresses;
mod nearest_establishment;
mod queries;

pub mod prelude {
    pub use super::{
        create_delivery::*, create_establishment::*, delete_addresses::*,
        nearest_establishment::*, queries::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use geoaddr_core::{
    entities::*, gateways::geocode::GeoCodingGateway, repositories::*, usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use geoaddr_db_sqlite::Connections;
}
