use super::*;

/// Physically removes an establishment address. Returns the number of
/// removed records; deleting an unknown id is not an error.
pub fn delete_establishment(connections: &sqlite::Connections, id: &str) -> Result<u64> {
    let connection = connections.exclusive()?;
    let count = usecases::delete_establishment(&connection, id)?;
    if count == 0 {
        info!("No establishment address found for id {id}");
    } else {
        info!("Deleted establishment address {id}");
    }
    Ok(count)
}

/// Flags a delivery address of the user as deleted, keeping the record.
/// Returns the number of matched records, so repeating the call yields
/// 1 again while a foreign or unknown id yields 0.
pub fn delete_delivery(
    connections: &sqlite::Connections,
    user_id: UserId,
    id: &str,
) -> Result<u64> {
    let connection = connections.exclusive()?;
    let count = usecases::delete_delivery(&connection, user_id, id)?;
    if count == 0 {
        info!("No delivery address of user {user_id} found for id {id}");
    } else {
        info!("Marked delivery address {id} of user {user_id} as deleted");
    }
    Ok(count)
}
