use super::*;

use crate::usecases::NewAddress;

pub fn create_delivery(
    connections: &sqlite::Connections,
    geo_gw: &dyn GeoCodingGateway,
    user_id: UserId,
    new_address: NewAddress,
) -> Result<Delivery> {
    let connection = connections.exclusive()?;
    let id = usecases::create_delivery(&connection, geo_gw, user_id, new_address)?;
    info!("Created delivery address {id} for user {user_id}");
    Ok(usecases::get_delivery(&connection, user_id, id.as_str())?)
}
