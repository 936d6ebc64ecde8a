use super::prelude::*;
use crate::gateways::geocode::GeoCodingGateway;

/// The caller-supplied fields of a new address record.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub street: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl From<NewAddress> for AddressFields {
    fn from(from: NewAddress) -> Self {
        let NewAddress {
            street,
            suburb,
            city,
            postal_code,
            state,
            country,
        } = from;
        Self {
            street,
            suburb,
            city,
            postal_code,
            state,
            country,
        }
    }
}

/// Geocodes the new address and stores it as an establishment.
///
/// The geocoding stage runs first; if it fails no storage call is
/// attempted. A storage failure after a successful geocode leaves no
/// record behind, only the geocoding effort is lost.
pub fn create_establishment<R>(
    repo: &R,
    geo: &dyn GeoCodingGateway,
    new_address: NewAddress,
) -> Result<Id>
where
    R: EstablishmentRepo,
{
    let fields = AddressFields::from(new_address);
    let pos = super::resolve_position(geo, &fields)?;
    let address = Address {
        id: Id::new(),
        fields,
        pos: Some(pos),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new establishment address {}", address.id);
    repo.create_establishment(&address)?;
    Ok(address.id)
}
