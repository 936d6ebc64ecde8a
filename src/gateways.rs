use geoaddr_core::{entities::AddressFields, gateways::geocode::GeoCodingGateway};
use geoaddr_gateways::opencage::OpenCage;

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> GeoGw {
    match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            GeoGw::new(OpenCage::new(Some(api_key.clone())))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            GeoGw::new(DummyGeoGw)
        }
    }
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, _: &AddressFields) -> Option<(f64, f64)> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        None
    }
}

pub struct GeoGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoGw {
    fn resolve_address_lat_lng(&self, addr: &AddressFields) -> Option<(f64, f64)> {
        self.0.resolve_address_lat_lng(addr)
    }
}
