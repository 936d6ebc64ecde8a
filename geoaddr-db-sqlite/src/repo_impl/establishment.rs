use super::*;

use geoaddr_core::repositories::{AddressField, SearchCriteria, SortDirection};

pub fn create_establishment(conn: &mut SqliteConnection, addr: &Address) -> Result<()> {
    use schema::establishment::dsl;
    let (lat, lng) = addr.pos.map(MapPoint::to_lat_lng_deg).unzip();
    let insertable = models::NewEstablishment {
        id: addr.id.as_str(),
        created_at: addr.created_at.as_millis(),
        street: addr.fields.street.as_deref(),
        suburb: addr.fields.suburb.as_deref(),
        city: addr.fields.city.as_deref(),
        postal_code: addr.fields.postal_code.as_deref(),
        state: addr.fields.state.as_deref(),
        country: addr.fields.country.as_deref(),
        lat,
        lng,
    };
    diesel::insert_into(dsl::establishment)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub fn get_establishment(conn: &mut SqliteConnection, id: &str) -> Result<Address> {
    use schema::establishment::dsl;
    let entity = dsl::establishment
        .filter(dsl::id.eq(id))
        .first::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(into_address(entity))
}

pub fn delete_establishment(conn: &mut SqliteConnection, id: &str) -> Result<u64> {
    use schema::establishment::dsl;
    let count = diesel::delete(dsl::establishment.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}

pub fn search_establishments(
    conn: &mut SqliteConnection,
    criteria: &SearchCriteria,
) -> Result<Vec<Address>> {
    use schema::establishment::dsl;
    let mut query = dsl::establishment.into_boxed();
    for filter in &criteria.filter {
        let value = filter.value.clone();
        query = match filter.field {
            AddressField::Street => query.filter(dsl::street.eq(value)),
            AddressField::Suburb => query.filter(dsl::suburb.eq(value)),
            AddressField::City => query.filter(dsl::city.eq(value)),
            AddressField::PostalCode => query.filter(dsl::postal_code.eq(value)),
            AddressField::State => query.filter(dsl::state.eq(value)),
            AddressField::Country => query.filter(dsl::country.eq(value)),
        };
    }
    for (field, direction) in &criteria.order_by {
        use AddressField as F;
        use SortDirection as D;
        query = match (field, direction) {
            (F::Street, D::Ascending) => query.then_order_by(dsl::street.asc()),
            (F::Street, D::Descending) => query.then_order_by(dsl::street.desc()),
            (F::Suburb, D::Ascending) => query.then_order_by(dsl::suburb.asc()),
            (F::Suburb, D::Descending) => query.then_order_by(dsl::suburb.desc()),
            (F::City, D::Ascending) => query.then_order_by(dsl::city.asc()),
            (F::City, D::Descending) => query.then_order_by(dsl::city.desc()),
            (F::PostalCode, D::Ascending) => query.then_order_by(dsl::postal_code.asc()),
            (F::PostalCode, D::Descending) => query.then_order_by(dsl::postal_code.desc()),
            (F::State, D::Ascending) => query.then_order_by(dsl::state.asc()),
            (F::State, D::Descending) => query.then_order_by(dsl::state.desc()),
            (F::Country, D::Ascending) => query.then_order_by(dsl::country.asc()),
            (F::Country, D::Descending) => query.then_order_by(dsl::country.desc()),
        };
    }
    if let Some(offset) = criteria.pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = criteria.pagination.limit {
        query = query.limit(limit as i64);
    }
    Ok(query
        .load::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_address)
        .collect())
}

pub fn nearest_establishment(
    conn: &mut SqliteConnection,
    center: MapPoint,
    max_distance: Distance,
) -> Result<Id> {
    use schema::establishment::dsl;
    let (center_lat, center_lng) = center.to_lat_lng_deg();

    // Pre-filter candidates with a coordinate window before computing
    // exact distances. The window must always contain the circle with
    // radius `max_distance` around the center.
    let lat_delta = max_distance.to_meters() / METERS_PER_LAT_DEG;
    let lat_min = (center_lat - lat_delta).max(LatCoord::min().to_deg());
    let lat_max = (center_lat + lat_delta).min(LatCoord::max().to_deg());

    let mut query = dsl::establishment
        .into_boxed()
        .filter(dsl::lat.is_not_null())
        .filter(dsl::lat.ge(lat_min))
        .filter(dsl::lat.le(lat_max))
        .order(dsl::rowid.asc());

    // The longitude window degenerates near the poles and when it would
    // cross the antimeridian. In both cases the latitude window alone
    // still contains the circle, so just skip the longitude filter.
    let cos_lat = center_lat.to_radians().cos();
    if cos_lat > 0.0 {
        let lng_delta = max_distance.to_meters() / (METERS_PER_LAT_DEG * cos_lat);
        let lng_min = center_lng - lng_delta;
        let lng_max = center_lng + lng_delta;
        if lng_min >= LngCoord::min().to_deg() && lng_max <= LngCoord::max().to_deg() {
            query = query.filter(dsl::lng.ge(lng_min)).filter(dsl::lng.le(lng_max));
        }
    }

    query
        .load::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .filter_map(|entity| {
            let pos = to_map_point(&entity.id, entity.lat, entity.lng)?;
            Some((Id::from(entity.id), center.distance(pos)))
        })
        .filter(|(_, distance)| *distance <= max_distance)
        // Candidates arrive ordered by rowid and the first of
        // equidistant candidates wins, i.e. ties resolve to the
        // earliest persisted record.
        .fold(None::<(Id, Distance)>, |best, (id, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((id, distance)),
        })
        .map(|(id, _)| id)
        .ok_or(geoaddr_core::RepoError::NotFound)
}

pub fn count_establishments(conn: &mut SqliteConnection) -> Result<u64> {
    use schema::establishment::dsl;
    let count = dsl::establishment
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}
