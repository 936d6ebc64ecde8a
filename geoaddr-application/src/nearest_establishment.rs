use super::*;

/// Finds the establishment closest to one of the user's delivery
/// addresses within `max_distance` and returns the full record.
pub fn nearest_establishment(
    connections: &sqlite::Connections,
    user_id: UserId,
    delivery_id: &str,
    max_distance: Distance,
) -> Result<Address> {
    let connection = connections.shared()?;
    let id = usecases::nearest_establishment(&connection, user_id, delivery_id, max_distance)?;
    debug!("Nearest establishment for delivery {delivery_id} of user {user_id}: {id}");
    Ok(usecases::get_establishment(&connection, id.as_str())?)
}
