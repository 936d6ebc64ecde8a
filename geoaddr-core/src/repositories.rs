// Low-level database access traits.
// Each repository is responsible for a single record kind. Records are
// only referenced by their id and never modified in place: the system
// has no update operation, mutation is create + delete.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested record could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// The address fields that search criteria may filter and sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    Suburb,
    City,
    PostalCode,
    State,
    Country,
}

/// An equality constraint on a single address field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: AddressField,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A result-window specification for establishment searches.
///
/// Backends apply the parts in this logical order: filter, then order,
/// then offset, then limit. An empty filter matches all records.
/// The concrete query language of the storage backend never leaks
/// through this type.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub filter: Vec<FieldFilter>,
    pub order_by: Vec<(AddressField, SortDirection)>,
    pub pagination: Pagination,
}

pub trait EstablishmentRepo {
    fn create_establishment(&self, addr: &Address) -> Result<()>;

    fn get_establishment(&self, id: &str) -> Result<Address>;

    /// Physical delete. Returns the number of removed records (0 or 1,
    /// the id is a unique key).
    fn delete_establishment(&self, id: &str) -> Result<u64>;

    /// Returns an empty vector (not an error) when nothing matches.
    fn search_establishments(&self, criteria: &SearchCriteria) -> Result<Vec<Address>>;

    /// The establishment with a position closest to `center`, considering
    /// only establishments within `max_distance`. Fails with `NotFound`
    /// when no establishment lies within the bound.
    ///
    /// The tie-break among equidistant candidates is backend-defined
    /// (stable, but not part of the contract).
    fn nearest_establishment(&self, center: MapPoint, max_distance: Distance) -> Result<Id>;

    fn count_establishments(&self) -> Result<u64>;
}

pub trait DeliveryRepo {
    fn create_delivery(&self, delivery: &Delivery) -> Result<()>;

    /// All delivery addresses of the user, including logically deleted
    /// ones (callers see the `deleted` flag).
    fn all_deliveries_of_user(&self, user_id: UserId) -> Result<Vec<Delivery>>;

    /// Lookup constrained by both id and owner. An id that exists but
    /// belongs to another user yields `NotFound`, indistinguishable from
    /// a missing record.
    fn get_delivery(&self, user_id: UserId, id: &str) -> Result<Delivery>;

    /// Sets the logical-deletion flag. Returns the number of records
    /// matched by the (user, id) predicate regardless of whether the
    /// flag was already set, so repeated calls keep returning 1.
    fn mark_delivery_deleted(&self, user_id: UserId, id: &str) -> Result<u64>;
}
