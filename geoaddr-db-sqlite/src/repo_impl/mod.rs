use diesel::{prelude::*, result::Error as DieselError, sqlite::SqliteConnection};

use geoaddr_core::{entities::*, repositories as repo};

use super::{models, schema};

mod delivery;
mod establishment;

pub(crate) use self::{delivery::*, establishment::*};

type Result<T> = std::result::Result<T, repo::Error>;

// Approximate length of one degree of latitude in meters.
const METERS_PER_LAT_DEG: f64 = 111_195.0;

fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

/// Restores a stored coordinate pair, discarding (and logging) values
/// that are no longer within the valid range.
fn to_map_point(id: &str, lat: Option<f64>, lng: Option<f64>) -> Option<MapPoint> {
    let (lat, lng) = lat.zip(lng)?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng);
    if pos.is_none() {
        log::warn!("Stored position of address {id} is out of range: ({lat}, {lng})");
    }
    pos
}

fn into_address(entity: models::EstablishmentEntity) -> Address {
    let pos = to_map_point(&entity.id, entity.lat, entity.lng);
    let models::EstablishmentEntity {
        id,
        created_at,
        street,
        suburb,
        city,
        postal_code,
        state,
        country,
        ..
    } = entity;
    Address {
        id: id.into(),
        fields: AddressFields {
            street,
            suburb,
            city,
            postal_code,
            state,
            country,
        },
        pos,
        created_at: Timestamp::from_millis(created_at),
    }
}

fn into_delivery(entity: models::DeliveryEntity) -> Delivery {
    let pos = to_map_point(&entity.id, entity.lat, entity.lng);
    let models::DeliveryEntity {
        id,
        user_id,
        created_at,
        street,
        suburb,
        city,
        postal_code,
        state,
        country,
        deleted,
        ..
    } = entity;
    Delivery {
        address: Address {
            id: id.into(),
            fields: AddressFields {
                street,
                suburb,
                city,
                postal_code,
                state,
                country,
            },
            pos,
            created_at: Timestamp::from_millis(created_at),
        },
        user_id: UserId::new(user_id as u64),
        deleted: deleted != 0,
    }
}
