use super::*;

pub fn create_delivery(conn: &mut SqliteConnection, delivery: &Delivery) -> Result<()> {
    use schema::delivery::dsl;
    let addr = &delivery.address;
    let (lat, lng) = addr.pos.map(MapPoint::to_lat_lng_deg).unzip();
    let insertable = models::NewDelivery {
        id: addr.id.as_str(),
        user_id: delivery.user_id.to_u64() as i64,
        created_at: addr.created_at.as_millis(),
        street: addr.fields.street.as_deref(),
        suburb: addr.fields.suburb.as_deref(),
        city: addr.fields.city.as_deref(),
        postal_code: addr.fields.postal_code.as_deref(),
        state: addr.fields.state.as_deref(),
        country: addr.fields.country.as_deref(),
        lat,
        lng,
        deleted: i16::from(delivery.deleted),
    };
    diesel::insert_into(dsl::delivery)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub fn all_deliveries_of_user(conn: &mut SqliteConnection, user_id: UserId) -> Result<Vec<Delivery>> {
    use schema::delivery::dsl;
    Ok(dsl::delivery
        .filter(dsl::user_id.eq(user_id.to_u64() as i64))
        .order(dsl::rowid.asc())
        .load::<models::DeliveryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_delivery)
        .collect())
}

pub fn get_delivery(conn: &mut SqliteConnection, user_id: UserId, id: &str) -> Result<Delivery> {
    use schema::delivery::dsl;
    let entity = dsl::delivery
        .filter(dsl::id.eq(id))
        .filter(dsl::user_id.eq(user_id.to_u64() as i64))
        .first::<models::DeliveryEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(into_delivery(entity))
}

pub fn mark_delivery_deleted(
    conn: &mut SqliteConnection,
    user_id: UserId,
    id: &str,
) -> Result<u64> {
    use schema::delivery::dsl;
    // SQLite counts the rows matched by an UPDATE even if the stored
    // value does not change, so repeating a delete still reports 1.
    let count = diesel::update(
        dsl::delivery
            .filter(dsl::id.eq(id))
            .filter(dsl::user_id.eq(user_id.to_u64() as i64)),
    )
    .set(dsl::deleted.eq(1_i16))
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(count as u64)
}
