use crate::gateways::geocode::GeoCodingGateway;

mod create_delivery;
mod create_establishment;
mod error;
mod nearest_establishment;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_delivery::*, create_establishment::*, error::Error, nearest_establishment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
use self::prelude::*;

/// Resolves the position of a new address record via the geocoding
/// gateway. A provider failure surfaces as `Error::Geocode` before any
/// storage interaction, so failed calls have no side effects.
fn resolve_position(geo: &dyn GeoCodingGateway, fields: &AddressFields) -> Result<MapPoint> {
    let (lat, lng) = geo.resolve_address_lat_lng(fields).ok_or_else(|| {
        log::debug!("Unable to geocode address '{fields}'");
        Error::Geocode
    })?;
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)
}

pub fn get_establishment<R: EstablishmentRepo>(repo: &R, id: &str) -> Result<Address> {
    Ok(repo.get_establishment(id)?)
}

pub fn delete_establishment<R: EstablishmentRepo>(repo: &R, id: &str) -> Result<u64> {
    Ok(repo.delete_establishment(id)?)
}

pub fn search_establishments<R: EstablishmentRepo>(
    repo: &R,
    criteria: &SearchCriteria,
) -> Result<Vec<Address>> {
    Ok(repo.search_establishments(criteria)?)
}

pub fn count_establishments<R: EstablishmentRepo>(repo: &R) -> Result<u64> {
    Ok(repo.count_establishments()?)
}

pub fn deliveries_of_user<R: DeliveryRepo>(repo: &R, user_id: UserId) -> Result<Vec<Delivery>> {
    Ok(repo.all_deliveries_of_user(user_id)?)
}

pub fn get_delivery<R: DeliveryRepo>(repo: &R, user_id: UserId, id: &str) -> Result<Delivery> {
    Ok(repo.get_delivery(user_id, id)?)
}

pub fn delete_delivery<R: DeliveryRepo>(repo: &R, user_id: UserId, id: &str) -> Result<u64> {
    Ok(repo.mark_delivery_deleted(user_id, id)?)
}
