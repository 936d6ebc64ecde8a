mod deliveries;

pub mod prelude {
    use std::cell::Cell;

    pub use geoaddr_core::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        repositories::{Error as RepoError, *},
        usecases::{Error as UsecaseError, NewAddress},
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    // Roughly one meter in latitude degrees.
    pub const METER_DEG: f64 = 1.0 / 111_195.0;

    pub fn new_address(street: &str) -> NewAddress {
        NewAddress {
            street: Some(street.into()),
            postal_code: Some("00000".into()),
            city: Some("Springfield".into()),
            state: Some("ST".into()),
            country: Some("Country".into()),
            ..Default::default()
        }
    }

    /// Geocoding double with a configurable reply.
    pub struct FakeGeoGw {
        reply: Cell<Option<(f64, f64)>>,
    }

    impl FakeGeoGw {
        pub fn new(reply: Option<(f64, f64)>) -> Self {
            Self {
                reply: Cell::new(reply),
            }
        }

        pub fn set_reply(&self, reply: Option<(f64, f64)>) {
            self.reply.set(reply);
        }
    }

    impl GeoCodingGateway for FakeGeoGw {
        fn resolve_address_lat_lng(&self, _: &AddressFields) -> Option<(f64, f64)> {
            self.reply.get()
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub geo_gw: FakeGeoGw,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            geoaddr_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                geo_gw: FakeGeoGw::new(Some((0.0, 0.0))),
            }
        }

        pub fn create_establishment(&self, street: &str, at: (f64, f64)) -> Address {
            self.geo_gw.set_reply(Some(at));
            flows::create_establishment(&self.db_connections, &self.geo_gw, new_address(street))
                .unwrap()
        }

        pub fn create_delivery(&self, user_id: UserId, at: (f64, f64)) -> Delivery {
            self.geo_gw.set_reply(Some(at));
            flows::create_delivery(
                &self.db_connections,
                &self.geo_gw,
                user_id,
                new_address("12 Elm St"),
            )
            .unwrap()
        }

        /// Inserts a delivery record directly, bypassing the geocoding
        /// stage, e.g. to obtain a record without a resolved location.
        pub fn insert_delivery(&self, user_id: UserId, at: Option<(f64, f64)>) -> Delivery {
            let delivery = Delivery {
                address: Address {
                    id: Id::new(),
                    fields: new_address("12 Elm St").into(),
                    pos: at.and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng)),
                    created_at: Timestamp::now(),
                },
                user_id,
                deleted: false,
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_delivery(&delivery)
                .unwrap();
            delivery
        }
    }
}
