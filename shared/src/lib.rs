use serde::{Deserialize, Serialize};

/// A `[lat, lon]` pair as the optimization service writes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lat, coord.lon]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<City>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub start_node: String,
    pub end_node: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub start_node: String,
    pub end_node: String,
    #[serde(default)]
    pub base_coords: Vec<Coordinate>,
    #[serde(default)]
    pub opt_coords: Vec<Coordinate>,
    pub baseline_time: f64,
    pub optimized_time: f64,
    pub time_saved: f64,
    pub baseline_cost: f64,
    pub optimized_cost: f64,
    pub cost_saved: f64,
    pub efficiency_gain: f64,
    #[serde(default)]
    pub baseline_path: Vec<String>,
    #[serde(default)]
    pub optimized_path: Vec<String>,
}

/// Parameters of `GET /report`, in the order they are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub start_node: String,
    pub end_node: String,
    pub opt_time: f64,
    pub base_time: f64,
}

impl From<&OptimizationResult> for ReportQuery {
    fn from(result: &OptimizationResult) -> Self {
        Self {
            start_node: result.start_node.clone(),
            end_node: result.end_node.clone(),
            opt_time: result.optimized_time,
            base_time: result.baseline_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl RouteBounds {
    /// Smallest box covering every coordinate, `None` when there are none.
    pub fn from_coords<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let init = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        Some(iter.fold(init, |bounds, c| Self {
            min_lat: bounds.min_lat.min(c.lat),
            max_lat: bounds.max_lat.max(c.lat),
            min_lon: bounds.min_lon.min(c.lon),
            max_lon: bounds.max_lon.max(c.lon),
        }))
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coord.lat)
            && (self.min_lon..=self.max_lon).contains(&coord.lon)
    }
}
