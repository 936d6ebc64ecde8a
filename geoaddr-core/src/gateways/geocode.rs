use crate::entities::AddressFields;

pub trait GeoCodingGateway {
    /// Resolves the given address to the best matching latitude/longitude
    /// pair. Returns `None` if the provider fails or yields no match;
    /// an empty provider response is a failure, not an empty success.
    fn resolve_address_lat_lng(&self, addr: &AddressFields) -> Option<(f64, f64)>;
}
