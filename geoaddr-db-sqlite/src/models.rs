use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = establishment)]
pub struct NewEstablishment<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub street: Option<&'a str>,
    pub suburb: Option<&'a str>,
    pub city: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub state: Option<&'a str>,
    pub country: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Queryable)]
pub struct EstablishmentEntity {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub street: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Insertable)]
#[diesel(table_name = delivery)]
pub struct NewDelivery<'a> {
    pub id: &'a str,
    pub user_id: i64,
    pub created_at: i64,
    pub street: Option<&'a str>,
    pub suburb: Option<&'a str>,
    pub city: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub state: Option<&'a str>,
    pub country: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub deleted: i16,
}

#[derive(Queryable)]
pub struct DeliveryEntity {
    pub rowid: i64,
    pub id: String,
    pub user_id: i64,
    pub created_at: i64,
    pub street: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub deleted: i16,
}
