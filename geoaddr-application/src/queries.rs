use super::*;

pub fn get_establishment(connections: &sqlite::Connections, id: &str) -> Result<Address> {
    let connection = connections.shared()?;
    Ok(usecases::get_establishment(&connection, id)?)
}

pub fn search_establishments(
    connections: &sqlite::Connections,
    criteria: &SearchCriteria,
) -> Result<Vec<Address>> {
    let connection = connections.shared()?;
    Ok(usecases::search_establishments(&connection, criteria)?)
}

pub fn count_establishments(connections: &sqlite::Connections) -> Result<u64> {
    let connection = connections.shared()?;
    Ok(usecases::count_establishments(&connection)?)
}

/// All delivery addresses of the user, including logically deleted ones.
pub fn deliveries_of_user(
    connections: &sqlite::Connections,
    user_id: UserId,
) -> Result<Vec<Delivery>> {
    let connection = connections.shared()?;
    Ok(usecases::deliveries_of_user(&connection, user_id)?)
}

pub fn get_delivery(
    connections: &sqlite::Connections,
    user_id: UserId,
    id: &str,
) -> Result<Delivery> {
    let connection = connections.shared()?;
    Ok(usecases::get_delivery(&connection, user_id, id)?)
}
