use serde::Serialize;
use shared::{City, Coordinate, OptimizationResult, RouteBounds};

use crate::config::FIT_PADDING_PX;

/// Handle of a line drawn on the map, issued by the [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u32);

/// Polyline options, serialized with the names the map library expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<&'static str>,
    pub opacity: f64,
}

/// Dashed and faded: the route before optimization.
pub const BASELINE_STYLE: LineStyle = LineStyle {
    color: "#f59e0b",
    weight: 3,
    dash_array: Some("10, 10"),
    opacity: 0.7,
};

pub const OPTIMIZED_STYLE: LineStyle = LineStyle {
    color: "#10b981",
    weight: 5,
    dash_array: None,
    opacity: 0.9,
};

/// The drawing operations the controller needs from a map widget.
///
/// The browser build implements it over Leaflet; tests use a recording fake.
pub trait MapSurface {
    fn add_city_marker(&mut self, city: &City);

    fn add_route(&mut self, path: &[Coordinate], style: &LineStyle) -> OverlayId;

    /// Removing an id the map no longer knows is a no-op.
    fn remove_route(&mut self, id: OverlayId);

    fn fit_bounds(&mut self, bounds: RouteBounds, padding_px: u32);
}

/// The live baseline/optimized overlay pair.
#[derive(Debug, Default)]
pub struct RouteLayers {
    baseline: Option<OverlayId>,
    optimized: Option<OverlayId>,
}

impl RouteLayers {
    pub fn baseline(&self) -> Option<OverlayId> {
        self.baseline
    }

    pub fn optimized(&self) -> Option<OverlayId> {
        self.optimized
    }

    /// Replaces the current pair with the routes of `result` and fits the
    /// viewport around them. Returns the fitted bounds, if any.
    pub fn render(
        &mut self,
        map: &mut impl MapSurface,
        result: &OptimizationResult,
    ) -> Option<RouteBounds> {
        self.clear(map);

        if !result.base_coords.is_empty() {
            self.baseline = Some(map.add_route(&result.base_coords, &BASELINE_STYLE));
        }
        if !result.opt_coords.is_empty() {
            self.optimized = Some(map.add_route(&result.opt_coords, &OPTIMIZED_STYLE));
        }

        let bounds = RouteBounds::from_coords(result.base_coords.iter().chain(&result.opt_coords));
        match bounds {
            Some(bounds) => map.fit_bounds(bounds, FIT_PADDING_PX),
            None => tracing::debug!("result has no coordinates, viewport left as is"),
        }
        bounds
    }

    pub fn clear(&mut self, map: &mut impl MapSurface) {
        if let Some(id) = self.baseline.take() {
            map.remove_route(id);
        }
        if let Some(id) = self.optimized.take() {
            map.remove_route(id);
        }
    }
}
