//! Location Entity
//!
//! Geofenced work sites. Coordinates are range-checked client-side.

use serde::{Deserialize, Serialize};

use super::{wire, EntityId};
use crate::validation::{
    check_latitude, check_longitude, require_some, require_text, Validate, ValidationError, ValidationResult,
};

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Validate for Coordinates {
    fn validate(&self) -> ValidationResult {
        check_latitude(self.latitude)?;
        check_longitude(self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    pub address: Option<String>,
    #[serde(deserialize_with = "wire::number")]
    pub latitude: f64,
    #[serde(deserialize_with = "wire::number")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "wire::opt_number")]
    pub radius_meters: Option<f64>,
}

impl Location {
    pub fn to_draft(&self) -> LocationDraft {
        LocationDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            radius_meters: self.radius_meters,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationDraft {
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_meters: Option<f64>,
}

impl Validate for LocationDraft {
    fn validate(&self) -> ValidationResult {
        require_text("name", &self.name, "Please enter a location name")?;
        require_some("latitude", &self.latitude, "Please enter a latitude")?;
        require_some("longitude", &self.longitude, "Please enter a longitude")?;
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            Coordinates { latitude, longitude }.validate()?;
        }
        if let Some(radius) = self.radius_meters {
            if radius <= 0.0 {
                return Err(ValidationError::new("radius_meters", "Radius must be greater than zero"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{LATITUDE_RANGE_MESSAGE, LONGITUDE_RANGE_MESSAGE};

    fn draft(lat: f64, lng: f64) -> LocationDraft {
        LocationDraft {
            name: "Warehouse".into(),
            latitude: Some(lat),
            longitude: Some(lng),
            radius_meters: Some(150.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(draft(90.0, 180.0).validate().is_ok());
        assert!(draft(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(draft(90.5, 10.0).validate().unwrap_err().message, LATITUDE_RANGE_MESSAGE);
        assert_eq!(draft(10.0, -181.0).validate().unwrap_err().message, LONGITUDE_RANGE_MESSAGE);
    }

    #[test]
    fn test_missing_coordinate() {
        let mut d = draft(1.0, 1.0);
        d.longitude = None;
        assert_eq!(d.validate().unwrap_err().field, "longitude");
    }

    #[test]
    fn test_radius_positive() {
        let mut d = draft(1.0, 1.0);
        d.radius_meters = Some(0.0);
        assert_eq!(d.validate().unwrap_err().field, "radius_meters");
    }

    #[test]
    fn test_decodes_string_coordinates() {
        let loc: Location =
            serde_json::from_str(r#"{"id": 2, "name": "HQ", "latitude": "12.9716", "longitude": 77.5946}"#).unwrap();
        assert_eq!(loc.latitude, 12.9716);
        assert!(loc.to_draft().validate().is_ok());
    }
}
