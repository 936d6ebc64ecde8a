use super::prelude::*;

/// Finds the establishment closest to one of the user's delivery
/// addresses, bounded by `max_distance`.
///
/// Ownership of the delivery is enforced by the lookup itself; a foreign
/// or missing delivery id and a delivery without a resolved location all
/// surface as `NotFound`, as does an empty search radius.
pub fn nearest_establishment<R>(
    repo: &R,
    user_id: UserId,
    delivery_id: &str,
    max_distance: Distance,
) -> Result<Id>
where
    R: EstablishmentRepo + DeliveryRepo,
{
    let delivery = repo.get_delivery(user_id, delivery_id)?;
    let Some(center) = delivery.address.pos else {
        log::debug!("Delivery address {delivery_id} has no resolved location");
        return Err(Error::Repo(RepoError::NotFound));
    };
    Ok(repo.nearest_establishment(center, max_distance)?)
}
