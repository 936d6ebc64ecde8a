use std::{cell::RefCell, cmp::Ordering};

use crate::{entities::*, gateways::geocode::GeoCodingGateway, repositories::*, RepoError};

/// In-memory repositories for use case tests.
#[derive(Default)]
pub struct MockDb {
    pub establishments: RefCell<Vec<Address>>,
    pub deliveries: RefCell<Vec<Delivery>>,
}

pub struct FixedGeoGw {
    lat: f64,
    lng: f64,
}

impl FixedGeoGw {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl GeoCodingGateway for FixedGeoGw {
    fn resolve_address_lat_lng(&self, _: &AddressFields) -> Option<(f64, f64)> {
        Some((self.lat, self.lng))
    }
}

pub struct FailingGeoGw;

impl GeoCodingGateway for FailingGeoGw {
    fn resolve_address_lat_lng(&self, _: &AddressFields) -> Option<(f64, f64)> {
        None
    }
}

pub fn address_at(lat_lng: Option<(f64, f64)>) -> Address {
    Address {
        id: Id::new(),
        fields: AddressFields::default(),
        pos: lat_lng.and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng)),
        created_at: Timestamp::now(),
    }
}

pub fn delivery_at(user_id: UserId, lat_lng: Option<(f64, f64)>) -> Delivery {
    Delivery {
        address: address_at(lat_lng),
        user_id,
        deleted: false,
    }
}

fn field_value(fields: &AddressFields, field: AddressField) -> Option<&str> {
    match field {
        AddressField::Street => fields.street.as_deref(),
        AddressField::Suburb => fields.suburb.as_deref(),
        AddressField::City => fields.city.as_deref(),
        AddressField::PostalCode => fields.postal_code.as_deref(),
        AddressField::State => fields.state.as_deref(),
        AddressField::Country => fields.country.as_deref(),
    }
}

impl EstablishmentRepo for MockDb {
    fn create_establishment(&self, addr: &Address) -> Result<(), RepoError> {
        self.establishments.borrow_mut().push(addr.clone());
        Ok(())
    }

    fn get_establishment(&self, id: &str) -> Result<Address, RepoError> {
        self.establishments
            .borrow()
            .iter()
            .find(|a| a.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn delete_establishment(&self, id: &str) -> Result<u64, RepoError> {
        let mut establishments = self.establishments.borrow_mut();
        let before = establishments.len();
        establishments.retain(|a| a.id.as_str() != id);
        Ok((before - establishments.len()) as u64)
    }

    fn search_establishments(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Address>, RepoError> {
        let mut matches: Vec<_> = self
            .establishments
            .borrow()
            .iter()
            .filter(|a| {
                criteria
                    .filter
                    .iter()
                    .all(|f| field_value(&a.fields, f.field) == Some(f.value.as_str()))
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            for (field, dir) in &criteria.order_by {
                let ord = field_value(&a.fields, *field).cmp(&field_value(&b.fields, *field));
                let ord = match dir {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        let offset = criteria.pagination.offset.unwrap_or(0) as usize;
        let limit = criteria
            .pagination
            .limit
            .map_or(usize::MAX, |limit| limit as usize);
        Ok(matches.into_iter().skip(offset).take(limit).collect())
    }

    fn nearest_establishment(
        &self,
        center: MapPoint,
        max_distance: Distance,
    ) -> Result<Id, RepoError> {
        self.establishments
            .borrow()
            .iter()
            .filter_map(|a| a.pos.map(|pos| (a.id.clone(), center.distance(pos))))
            .filter(|(_, distance)| *distance <= max_distance)
            // Stable: the first of equidistant candidates wins.
            .fold(None::<(Id, Distance)>, |best, (id, distance)| match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((id, distance)),
            })
            .map(|(id, _)| id)
            .ok_or(RepoError::NotFound)
    }

    fn count_establishments(&self) -> Result<u64, RepoError> {
        Ok(self.establishments.borrow().len() as u64)
    }
}

impl DeliveryRepo for MockDb {
    fn create_delivery(&self, delivery: &Delivery) -> Result<(), RepoError> {
        self.deliveries.borrow_mut().push(delivery.clone());
        Ok(())
    }

    fn all_deliveries_of_user(&self, user_id: UserId) -> Result<Vec<Delivery>, RepoError> {
        Ok(self
            .deliveries
            .borrow()
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_delivery(&self, user_id: UserId, id: &str) -> Result<Delivery, RepoError> {
        self.deliveries
            .borrow()
            .iter()
            .find(|d| d.user_id == user_id && d.address.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn mark_delivery_deleted(&self, user_id: UserId, id: &str) -> Result<u64, RepoError> {
        let mut matched = 0;
        for d in self.deliveries.borrow_mut().iter_mut() {
            if d.user_id == user_id && d.address.id.as_str() == id {
                d.deleted = true;
                matched += 1;
            }
        }
        Ok(matched)
    }
}

mod search {
    use super::{super::search_establishments, *};

    fn establishment(street: &str, city: &str) -> Address {
        Address {
            id: Id::new(),
            fields: AddressFields {
                street: Some(street.into()),
                city: Some(city.into()),
                ..Default::default()
            },
            pos: None,
            created_at: Timestamp::now(),
        }
    }

    fn sample_db() -> MockDb {
        let db = MockDb::default();
        db.establishments.borrow_mut().extend([
            establishment("3 Oak Ave", "Springfield"),
            establishment("1 Main St", "Springfield"),
            establishment("2 Main St", "Shelbyville"),
            establishment("4 Pine Rd", "Springfield"),
        ]);
        db
    }

    #[test]
    fn empty_criteria_match_all() {
        let db = sample_db();
        let found = search_establishments(&db, &SearchCriteria::default()).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn filter_then_order_then_paginate() {
        let db = sample_db();
        let criteria = SearchCriteria {
            filter: vec![FieldFilter {
                field: AddressField::City,
                value: "Springfield".into(),
            }],
            order_by: vec![(AddressField::Street, SortDirection::Descending)],
            pagination: Pagination {
                offset: Some(1),
                limit: Some(1),
            },
        };
        let found = search_establishments(&db, &criteria).unwrap();
        // Ordered: 4 Pine Rd, 3 Oak Ave, 1 Main St; offset 1, limit 1.
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields.street.as_deref(), Some("3 Oak Ave"));
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let db = sample_db();
        let criteria = SearchCriteria {
            filter: vec![FieldFilter {
                field: AddressField::Country,
                value: "Atlantis".into(),
            }],
            ..Default::default()
        };
        assert!(search_establishments(&db, &criteria).unwrap().is_empty());
    }
}
