use std::collections::HashSet;

use shared::City;

use crate::{error::CatalogError, render::MapSurface};

/// Cities offered for selection, in the order the service listed them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: Vec<City>,
}

impl Catalog {
    /// Validates the whole list before accepting any of it.
    pub fn from_cities(cities: Vec<City>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !city.coordinate().is_finite() {
                return Err(CatalogError::InvalidCoordinate(city.name.clone()));
            }
            if !seen.insert(city.name.as_str()) {
                return Err(CatalogError::DuplicateCity(city.name.clone()));
            }
        }
        Ok(Self { cities })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|city| city.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// One clickable marker per city.
    pub fn place_markers(&self, map: &mut impl MapSurface) {
        for city in &self.cities {
            map.add_city_marker(city);
        }
    }
}
