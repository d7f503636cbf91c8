//! Geographic location model
//!
//! A named point with fixed coordinates. Only the name can change after
//! construction.

use log::debug;

/// A named point given by longitude and latitude
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    longitude: f64,
    latitude: f64,
}

impl Location {
    /// Create a new Location
    #[must_use]
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
        }
    }

    /// Get the current name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the location; coordinates are left untouched
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Renaming location '{}' to '{}'", self.name, name);
        self.name = name;
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the coordinates as `(longitude, latitude)`
    #[must_use]
    pub const fn get_coordinates(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}
