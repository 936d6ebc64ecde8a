use super::{prelude::*, NewAddress};
use crate::gateways::geocode::GeoCodingGateway;

/// Geocodes the new address and stores it as a delivery address owned
/// by the given user. Same sequencing as for establishments: geocoding
/// first, no storage call on geocoding failure.
pub fn create_delivery<R>(
    repo: &R,
    geo: &dyn GeoCodingGateway,
    user_id: UserId,
    new_address: NewAddress,
) -> Result<Id>
where
    R: DeliveryRepo,
{
    let fields = AddressFields::from(new_address);
    let pos = super::resolve_position(geo, &fields)?;
    let delivery = Delivery {
        address: Address {
            id: Id::new(),
            fields,
            pos: Some(pos),
            created_at: Timestamp::now(),
        },
        user_id,
        deleted: false,
    };
    log::debug!(
        "Creating new delivery address {} for user {user_id}",
        delivery.address.id
    );
    repo.create_delivery(&delivery)?;
    Ok(delivery.address.id)
}
