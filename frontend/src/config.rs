use serde::Serialize;
use shared::Coordinate;

pub const DEFAULT_LOG_FILTER: &str = "optiroute_frontend=debug";
pub const SUBMIT_LABEL: &str = "Find Optimized Route";
pub const SUBMIT_PENDING_LABEL: &str = "Optimizing...";
/// Margin in pixels kept around the routes when fitting the viewport.
pub const FIT_PADDING_PX: u32 = 50;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_root: String,
    pub log_filter: String,
    pub map: MapConfig,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_root: normalize_api_root(option_env!("FRONTEND_API_ROOT").unwrap_or_default()),
            log_filter: option_env!("FRONTEND_LOG")
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
            map: MapConfig::default(),
        }
    }
}

/// Passed as-is to `initMap` in the map bridge.
#[derive(Debug, Clone, Serialize)]
pub struct MapConfig {
    pub container_id: &'static str,
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: &'static str,
    pub subdomains: &'static str,
    pub max_zoom: u8,
    pub attribution: &'static str,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map-visual",
            // Continental US
            center: Coordinate {
                lat: 39.8283,
                lon: -98.5795,
            },
            zoom: 4,
            tile_url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            subdomains: "abcd",
            max_zoom: 19,
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
        }
    }
}

fn normalize_api_root(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
