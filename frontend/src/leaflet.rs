use serde_wasm_bindgen::to_value;
use shared::{City, Coordinate, RouteBounds};
use wasm_bindgen::prelude::{JsValue, wasm_bindgen};

use crate::{
    config::MapConfig,
    render::{LineStyle, MapSurface, OverlayId},
};

/// Browser event a city marker fires when clicked; `detail` is `{ name }`.
pub const MARKER_CLICK_EVENT: &str = "city-marker-click";

#[wasm_bindgen(module = "/leaflet_map.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map_js(config: JsValue);
    #[wasm_bindgen(js_name = addCityMarker)]
    fn add_city_marker_js(city: JsValue);
    #[wasm_bindgen(js_name = addRoute)]
    fn add_route_js(coords: JsValue, style: JsValue) -> u32;
    #[wasm_bindgen(js_name = removeRoute)]
    fn remove_route_js(id: u32);
    #[wasm_bindgen(js_name = fitRoutes)]
    fn fit_routes_js(bounds: JsValue, padding: u32);
}

/// [`MapSurface`] backed by the Leaflet map in `leaflet_map.js`.
#[derive(Debug, Default)]
pub struct LeafletMap;

impl LeafletMap {
    pub fn mount(config: &MapConfig) -> Self {
        match to_value(config) {
            Ok(value) => init_map_js(value),
            Err(err) => tracing::error!("map config not serializable: {err}"),
        }
        Self
    }
}

impl MapSurface for LeafletMap {
    fn add_city_marker(&mut self, city: &City) {
        match to_value(city) {
            Ok(value) => add_city_marker_js(value),
            Err(err) => tracing::warn!("skipping marker for {}: {err}", city.name),
        }
    }

    fn add_route(&mut self, path: &[Coordinate], style: &LineStyle) -> OverlayId {
        let coords = to_value(path).unwrap_or(JsValue::NULL);
        let style = to_value(style).unwrap_or(JsValue::NULL);
        OverlayId(add_route_js(coords, style))
    }

    fn remove_route(&mut self, id: OverlayId) {
        remove_route_js(id.0);
    }

    fn fit_bounds(&mut self, bounds: RouteBounds, padding_px: u32) {
        if let Ok(value) = to_value(&bounds) {
            fit_routes_js(value, padding_px);
        }
    }
}
