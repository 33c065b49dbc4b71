use optiroute_frontend::{
    Controller, Effect, Msg,
    error::FetchFailure,
    orchestrator::RequestState,
    render::{LineStyle, MapSurface, OverlayId},
};
use serde_json::json;
use shared::{CitiesResponse, City, Coordinate, OptimizationResult, RouteBounds};

#[derive(Default)]
struct FakeMap {
    markers: Vec<String>,
    live: Vec<(OverlayId, LineStyle)>,
    fits: Vec<RouteBounds>,
    next_id: u32,
}

impl MapSurface for FakeMap {
    fn add_city_marker(&mut self, city: &City) {
        self.markers.push(city.name.clone());
    }

    fn add_route(&mut self, _path: &[Coordinate], style: &LineStyle) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.live.push((id, *style));
        id
    }

    fn remove_route(&mut self, id: OverlayId) {
        self.live.retain(|(live, _)| *live != id);
    }

    fn fit_bounds(&mut self, bounds: RouteBounds, _padding_px: u32) {
        self.fits.push(bounds);
    }
}

fn cities_payload() -> Vec<City> {
    let body = json!({
        "cities": [
            {"name": "A", "lat": 0.0, "lon": 0.0},
            {"name": "B", "lat": 1.0, "lon": 1.0}
        ]
    });
    serde_json::from_value::<CitiesResponse>(body).unwrap().cities
}

fn optimize_payload() -> OptimizationResult {
    let body = json!({
        "start_node": "A",
        "end_node": "B",
        "base_coords": [[0, 0], [1, 1]],
        "opt_coords": [[0, 0], [1, 1]],
        "baseline_time": 10,
        "optimized_time": 7,
        "time_saved": 3,
        "baseline_cost": 40.5,
        "optimized_cost": 31.25,
        "cost_saved": 9.25,
        "efficiency_gain": 30,
        "baseline_path": ["A", "B"],
        "optimized_path": ["A", "B"]
    });
    serde_json::from_value(body).unwrap()
}

fn started(map: &mut FakeMap) -> Controller {
    let mut controller = Controller::new("");
    assert_eq!(controller.start(), vec![Effect::LoadCatalog]);
    let effects = controller.update(Msg::CitiesFetched(Ok(cities_payload())), map);
    assert!(effects.is_empty());
    controller
}

#[test]
fn click_submit_and_render_scenario() {
    let mut map = FakeMap::default();
    let mut controller = started(&mut map);
    assert_eq!(map.markers, vec!["A", "B"]);

    controller.update(Msg::MarkerClicked("A".into()), &mut map);
    controller.update(Msg::MarkerClicked("B".into()), &mut map);
    assert_eq!(controller.selection().start(), Some("A"));
    assert_eq!(controller.selection().end(), Some("B"));

    let effects = controller.update(Msg::Submit, &mut map);
    assert!(matches!(&effects[..], [Effect::Optimize(req)] if req.start_node == "A" && req.end_node == "B"));
    assert_eq!(controller.request_state(), RequestState::InFlight);
    assert_eq!(controller.submit_control().label, "Optimizing...");

    let effects = controller.update(Msg::OptimizationFetched(Ok(optimize_payload())), &mut map);
    assert!(effects.is_empty());

    let panel = controller.presenter().panel().expect("results panel visible");
    assert_eq!(panel.time_saved, "3 min");
    assert_eq!(panel.baseline_cost, "$40.5");
    assert_eq!(panel.efficiency_gain, "30%");
    assert_eq!(map.live.len(), 2);

    let fitted = map.fits.last().expect("viewport fitted");
    assert!(fitted.contains(Coordinate { lat: 0.0, lon: 0.0 }));
    assert!(fitted.contains(Coordinate { lat: 1.0, lon: 1.0 }));

    assert_eq!(controller.request_state(), RequestState::Idle);
    assert!(!controller.submit_control().disabled);
    assert_eq!(controller.submit_control().label, "Find Optimized Route");
}

#[test]
fn duplicate_selection_never_sends_request() {
    let mut map = FakeMap::default();
    let mut controller = started(&mut map);
    controller.update(Msg::StartChanged("A".into()), &mut map);
    controller.update(Msg::EndChanged("A".into()), &mut map);

    let effects = controller.update(Msg::Submit, &mut map);

    assert_eq!(
        effects,
        vec![Effect::Alert("Origin and Destination cannot be the same".into())]
    );
    assert_eq!(controller.request_state(), RequestState::Idle);
    assert!(controller.current_result().is_none());
}

#[test]
fn gate_reopens_after_failure() {
    let mut map = FakeMap::default();
    let mut controller = started(&mut map);
    controller.update(Msg::MarkerClicked("A".into()), &mut map);
    controller.update(Msg::MarkerClicked("B".into()), &mut map);
    controller.update(Msg::Submit, &mut map);

    let effects = controller.update(
        Msg::OptimizationFetched(Err(FetchFailure::Payload("missing field".into()))),
        &mut map,
    );

    assert_eq!(effects.len(), 1);
    assert_eq!(controller.request_state(), RequestState::Idle);
    assert!(!controller.submit_control().disabled);
    assert!(map.live.is_empty());
    assert!(!controller.presenter().is_visible());

    let retry = controller.update(Msg::Submit, &mut map);
    assert!(matches!(&retry[..], [Effect::Optimize(_)]));
}

#[test]
fn repeated_results_replace_overlays() {
    let mut map = FakeMap::default();
    let mut controller = started(&mut map);
    controller.update(Msg::MarkerClicked("A".into()), &mut map);
    controller.update(Msg::MarkerClicked("B".into()), &mut map);

    for _ in 0..3 {
        controller.update(Msg::Submit, &mut map);
        controller.update(Msg::OptimizationFetched(Ok(optimize_payload())), &mut map);
    }

    assert_eq!(map.live.len(), 2);
    assert_eq!(
        map.live.iter().map(|(id, _)| Some(*id)).collect::<Vec<_>>(),
        vec![controller.layers().baseline(), controller.layers().optimized()]
    );
}

#[test]
fn download_before_any_result_is_ignored() {
    let mut map = FakeMap::default();
    let mut controller = started(&mut map);

    assert!(controller.update(Msg::DownloadReport, &mut map).is_empty());
}
