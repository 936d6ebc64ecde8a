use super::*;

pub use crate::usecases::NewAddress;

/// Geocodes and stores a new establishment address, then reads the
/// stored record back for the caller.
pub fn create_establishment(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    new_address: NewAddress,
) -> Result<Address> {
    let connection = connections.exclusive()?;
    let id = usecases::create_establishment(&connection, geo_gw, new_address)?;
    info!("Created establishment address {id}");
    Ok(usecases::get_establishment(&connection, id.as_str())?)
}
