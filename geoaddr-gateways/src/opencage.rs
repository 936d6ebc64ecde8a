use geocoding::{Forward, Opencage, Point};

use geoaddr_core::{entities::AddressFields, gateways::geocode::GeoCodingGateway};

/// Forward geocoding backed by the OpenCage API.
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

fn oc_resolve_address_lat_lng(api_key: String, query: &str) -> Option<(f64, f64)> {
    let oc_req = Opencage::new(api_key);
    match oc_req.forward(query) {
        Ok(res) => {
            let points: Vec<Point<f64>> = res;
            if let Some(point) = points.first() {
                log::debug!("Resolved address location '{query}': {point:?}");
                // Point axes: x = longitude, y = latitude.
                return Some((point.y(), point.x()));
            }
            log::debug!("No location found for address '{query}'");
        }
        Err(err) => {
            log::warn!("Failed to resolve address location '{query}': {err}");
        }
    }
    None
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &AddressFields) -> Option<(f64, f64)> {
        if addr.is_empty() {
            return None;
        }
        let Some(api_key) = &self.api_key else {
            log::warn!("Unable to resolve address location: no OpenCage API key");
            return None;
        };
        oc_resolve_address_lat_lng(api_key.clone(), &addr.to_string())
    }
}
