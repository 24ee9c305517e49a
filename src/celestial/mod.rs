//! Sky objects handed to the pointing calculations by catalog tooling

use crate::coordinates::EquatorialCoordinate;
use serde::{Deserialize, Serialize};

/// A trait for objects that have a fixed position in the sky
pub trait CelestialObject {
    /// Display name of the object
    fn name(&self) -> &str;

    /// Position of the object
    fn equatorial(&self) -> EquatorialCoordinate;
}

/// A catalog entry as emitted by the catalog build
///
/// Catalogs store right ascension in degrees. Fields the pointing code does
/// not use (type, frequency, notes, references) are ignored on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSource {
    /// Slug identifier
    #[serde(default)]
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Right ascension in degrees
    pub ra_deg: f64,
    /// Declination in degrees
    pub dec_deg: f64,
}

impl CatalogSource {
    /// Create a new catalog source
    pub fn new(name: &str, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            id: String::new(),
            name: name.to_string(),
            ra_deg,
            dec_deg,
        }
    }
}

impl CelestialObject for CatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn equatorial(&self) -> EquatorialCoordinate {
        EquatorialCoordinate::from_degrees(self.ra_deg, self.dec_deg)
    }
}
