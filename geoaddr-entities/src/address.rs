use std::fmt;

use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// The free-text components of a postal address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressFields {
    pub street      : Option<String>,
    pub suburb      : Option<String>,
    pub city        : Option<String>,
    pub postal_code : Option<String>,
    pub state       : Option<String>,
    pub country     : Option<String>,
}

impl AddressFields {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.suburb.is_none()
            && self.city.is_none()
            && self.postal_code.is_none()
            && self.state.is_none()
            && self.country.is_none()
    }
}

/// Renders the text that is sent to the geocoding provider:
/// the non-empty fields, comma-separated, in the order
/// street, suburb, postal code, city, state, country.
impl fmt::Display for AddressFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = [
            &self.street,
            &self.suburb,
            &self.postal_code,
            &self.city,
            &self.state,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");
        f.write_str(&text)
    }
}

/// A persisted address record.
///
/// The id is assigned on creation and immutable afterwards. There is no
/// update operation anywhere in the system; records are replaced by
/// creating a new one and deleting the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Id,
    pub fields: AddressFields,
    pub pos: Option<MapPoint>,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_text_omits_empty_fields() {
        let fields = AddressFields {
            street: Some("1 Main St".into()),
            suburb: None,
            city: Some("Springfield".into()),
            postal_code: Some("00000".into()),
            state: Some("ST".into()),
            country: Some("Country".into()),
        };
        assert_eq!(
            fields.to_string(),
            "1 Main St, 00000, Springfield, ST, Country"
        );
    }

    #[test]
    fn geocoding_text_of_empty_address() {
        assert!(AddressFields::default().is_empty());
        assert_eq!(AddressFields::default().to_string(), "");
    }

    #[test]
    fn geocoding_text_skips_whitespace_only_fields() {
        let fields = AddressFields {
            street: Some("1 Main St".into()),
            suburb: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(fields.to_string(), "1 Main St");
    }
}
