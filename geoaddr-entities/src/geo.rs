use std::fmt;

// Mean earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographical distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

/// Latitude in degrees within [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90.0)
    }

    pub const fn max() -> Self {
        Self(90.0)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if deg.is_finite() && (Self::min().0..=Self::max().0).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

/// Longitude in degrees within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180.0)
    }

    pub const fn max() -> Self {
        Self(180.0)
    }

    pub fn try_from_deg(deg: f64) -> Option<Self> {
        if deg.is_finite() && (Self::min().0..=Self::max().0).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

/// A point on the map with a valid latitude/longitude pair.
///
/// Either both coordinates are valid or the point cannot be constructed,
/// so a partially populated location is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let lat = LatCoord::try_from_deg(lat)?;
        let lng = LngCoord::try_from_deg(lng)?;
        Some(Self::new(lat, lng))
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    /// Great-circle distance to another point (haversine).
    pub fn distance(self, other: Self) -> Distance {
        let lat1 = self.lat.to_rad();
        let lat2 = other.lat.to_rad();
        let dlat = (other.lat.to_deg() - self.lat.to_deg()).to_radians();
        let dlng = (other.lng.to_deg() - self.lng.to_deg()).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_meters(EARTH_RADIUS_METERS * c)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat.to_deg(), self.lng.to_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn reject_out_of_range_coordinates() {
        assert!(LatCoord::try_from_deg(-90.000_001).is_none());
        assert!(LatCoord::try_from_deg(90.000_001).is_none());
        assert!(LngCoord::try_from_deg(-180.000_001).is_none());
        assert!(LngCoord::try_from_deg(180.000_001).is_none());
        assert!(LatCoord::try_from_deg(f64::NAN).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(91.0, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -181.0).is_none());
    }

    #[test]
    fn accept_boundary_coordinates() {
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 0.0).is_some());
    }

    #[test]
    fn coordinates_survive_deg_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let lat = rng.gen_range(-90.0..=90.0);
            let lng = rng.gen_range(-180.0..=180.0);
            let pt = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
            assert_eq!((lat, lng), pt.to_lat_lng_deg());
        }
    }

    #[test]
    fn haversine_distance() {
        let a = MapPoint::try_from_lat_lng_deg(0.0, 0.0).unwrap();
        let b = MapPoint::try_from_lat_lng_deg(1.0, 0.0).unwrap();
        // One degree of latitude is roughly 111.2 km.
        let d = a.distance(b).to_meters();
        assert!((d - 111_195.0).abs() < 10.0);
        assert_eq!(a.distance(a).to_meters(), 0.0);
        // Symmetric
        assert_eq!(a.distance(b), b.distance(a));
    }
}
