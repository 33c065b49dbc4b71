use shared::{City, OptimizationResult, OptimizeRequest, ReportQuery};

use crate::{
    catalog::Catalog,
    error::{CatalogError, ClientError, FetchFailure},
    orchestrator::{Orchestrator, RequestState, SubmitControl, SubmitRejected},
    present::{Presenter, report_url},
    render::{MapSurface, RouteLayers},
    selection::Selection,
};

pub enum Msg {
    CitiesFetched(Result<Vec<City>, FetchFailure>),
    MarkerClicked(String),
    StartChanged(String),
    EndChanged(String),
    Submit,
    OptimizationFetched(Result<OptimizationResult, FetchFailure>),
    DownloadReport,
}

/// Work the browser glue carries out on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadCatalog,
    Optimize(OptimizeRequest),
    Alert(String),
    OpenReport(String),
}

/// The whole application state. Every mutation goes through [`Controller::update`],
/// one message at a time.
#[derive(Debug)]
pub struct Controller {
    api_root: String,
    catalog_requested: bool,
    catalog: Catalog,
    selection: Selection,
    orchestrator: Orchestrator,
    layers: RouteLayers,
    presenter: Presenter,
}

impl Controller {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            catalog_requested: false,
            catalog: Catalog::default(),
            selection: Selection::default(),
            orchestrator: Orchestrator::default(),
            layers: RouteLayers::default(),
            presenter: Presenter::default(),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn request_state(&self) -> RequestState {
        self.orchestrator.state()
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.orchestrator.control()
    }

    pub fn current_result(&self) -> Option<&OptimizationResult> {
        self.orchestrator.current()
    }

    pub fn layers(&self) -> &RouteLayers {
        &self.layers
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Startup: the city list is fetched exactly once.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.catalog_requested {
            return Vec::new();
        }
        self.catalog_requested = true;
        tracing::debug!("requesting city catalog from {}/cities", self.api_root);
        vec![Effect::LoadCatalog]
    }

    pub fn update(&mut self, msg: Msg, map: &mut impl MapSurface) -> Vec<Effect> {
        match msg {
            Msg::CitiesFetched(outcome) => self.on_cities(outcome, map),
            Msg::MarkerClicked(name) => {
                self.selection.click(&name);
                tracing::debug!(
                    "marker {name} clicked, selection {:?} -> {:?}",
                    self.selection.start(),
                    self.selection.end()
                );
                Vec::new()
            }
            Msg::StartChanged(value) => {
                self.selection.set_start(&value);
                Vec::new()
            }
            Msg::EndChanged(value) => {
                self.selection.set_end(&value);
                Vec::new()
            }
            Msg::Submit => self.on_submit(),
            Msg::OptimizationFetched(outcome) => self.on_optimization(outcome, map),
            Msg::DownloadReport => self.on_download(),
        }
    }

    fn on_cities(
        &mut self,
        outcome: Result<Vec<City>, FetchFailure>,
        map: &mut impl MapSurface,
    ) -> Vec<Effect> {
        let loaded = outcome
            .map_err(CatalogError::from)
            .and_then(Catalog::from_cities);
        match loaded {
            Ok(catalog) => {
                catalog.place_markers(map);
                tracing::info!("loaded {} cities", catalog.len());
                self.catalog = catalog;
                Vec::new()
            }
            Err(err) => {
                tracing::error!("failed to load cities: {err}");
                alert(ClientError::CatalogLoad(err))
            }
        }
    }

    fn on_submit(&mut self) -> Vec<Effect> {
        match self.orchestrator.submit(&self.selection) {
            Ok(request) => {
                tracing::info!(
                    "requesting optimization {} -> {}",
                    request.start_node,
                    request.end_node
                );
                vec![Effect::Optimize(request)]
            }
            Err(SubmitRejected::Busy) => {
                tracing::debug!("submit ignored, a request is already in flight");
                Vec::new()
            }
            Err(SubmitRejected::Invalid(err)) => {
                tracing::debug!("submit rejected: {err}");
                alert(ClientError::Validation(err))
            }
        }
    }

    fn on_optimization(
        &mut self,
        outcome: Result<OptimizationResult, FetchFailure>,
        map: &mut impl MapSurface,
    ) -> Vec<Effect> {
        match self.orchestrator.complete(outcome) {
            Ok(result) => {
                tracing::info!(
                    "optimization {} -> {}: {} min saved",
                    result.start_node,
                    result.end_node,
                    result.time_saved
                );
                self.layers.render(map, result);
                self.presenter.present(result);
                Vec::new()
            }
            Err(err) => {
                tracing::error!("optimization failed: {err}");
                alert(ClientError::Request(err))
            }
        }
    }

    fn on_download(&self) -> Vec<Effect> {
        match self.orchestrator.current() {
            Some(result) => {
                let url = report_url(&self.api_root, &ReportQuery::from(result));
                tracing::debug!("opening report {url}");
                vec![Effect::OpenReport(url)]
            }
            None => {
                tracing::debug!("{}", ClientError::ReportUnavailable);
                Vec::new()
            }
        }
    }
}

fn alert(err: ClientError) -> Vec<Effect> {
    err.user_message().map(Effect::Alert).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{RecordingMap, result_with};

    fn city(name: &str, lat: f64, lon: f64) -> City {
        City {
            name: name.into(),
            lat,
            lon,
        }
    }

    fn loaded(map: &mut RecordingMap) -> Controller {
        let mut controller = Controller::new("");
        controller.start();
        controller.update(
            Msg::CitiesFetched(Ok(vec![city("A", 0.0, 0.0), city("B", 1.0, 1.0)])),
            map,
        );
        controller
    }

    #[test]
    fn test_start_requests_catalog_once() {
        let mut controller = Controller::new("");
        assert_eq!(controller.start(), vec![Effect::LoadCatalog]);
        assert!(controller.start().is_empty());
    }

    #[test]
    fn test_catalog_failure_alerts_and_leaves_lists_empty() {
        let mut map = RecordingMap::default();
        let mut controller = Controller::new("");

        let effects = controller.update(
            Msg::CitiesFetched(Err(FetchFailure::Network("refused".into()))),
            &mut map,
        );

        assert_eq!(
            effects,
            vec![Effect::Alert(
                "Could not connect to API. Make sure the backend is running.".into()
            )]
        );
        assert!(controller.catalog().is_empty());
        assert!(map.markers.is_empty());
    }

    #[test]
    fn test_malformed_catalog_places_no_markers() {
        let mut map = RecordingMap::default();
        let mut controller = Controller::new("");

        let effects = controller.update(
            Msg::CitiesFetched(Ok(vec![city("A", 0.0, 0.0), city("A", 1.0, 1.0)])),
            &mut map,
        );

        assert_eq!(effects.len(), 1);
        assert!(controller.catalog().is_empty());
        assert!(map.markers.is_empty());
    }

    #[test]
    fn test_submit_emits_request_and_disables_control() {
        let mut map = RecordingMap::default();
        let mut controller = loaded(&mut map);
        controller.update(Msg::MarkerClicked("A".into()), &mut map);
        controller.update(Msg::MarkerClicked("B".into()), &mut map);

        let effects = controller.update(Msg::Submit, &mut map);

        assert_eq!(
            effects,
            vec![Effect::Optimize(OptimizeRequest {
                start_node: "A".into(),
                end_node: "B".into()
            })]
        );
        assert!(controller.submit_control().disabled);
        assert!(controller.update(Msg::Submit, &mut map).is_empty());
    }

    #[test]
    fn test_manual_edits_feed_the_request() {
        let mut map = RecordingMap::default();
        let mut controller = loaded(&mut map);
        controller.update(Msg::StartChanged("B".into()), &mut map);
        controller.update(Msg::EndChanged("A".into()), &mut map);

        let effects = controller.update(Msg::Submit, &mut map);

        assert!(matches!(
            &effects[..],
            [Effect::Optimize(req)] if req.start_node == "B" && req.end_node == "A"
        ));
    }

    #[test]
    fn test_failed_optimization_keeps_previous_routes() {
        let mut map = RecordingMap::default();
        let mut controller = loaded(&mut map);
        controller.update(Msg::StartChanged("A".into()), &mut map);
        controller.update(Msg::EndChanged("B".into()), &mut map);

        controller.update(Msg::Submit, &mut map);
        controller.update(
            Msg::OptimizationFetched(Ok(result_with(&[[0.0, 0.0]], &[[1.0, 1.0]]))),
            &mut map,
        );
        controller.update(Msg::Submit, &mut map);
        let effects = controller.update(
            Msg::OptimizationFetched(Err(FetchFailure::Status("500".into()))),
            &mut map,
        );

        assert_eq!(
            effects,
            vec![Effect::Alert("Optimization failed. Try different cities.".into())]
        );
        assert_eq!(controller.request_state(), RequestState::Idle);
        assert_eq!(map.routes.len(), 2);
        assert!(controller.presenter().is_visible());
        assert!(controller.current_result().is_some());
    }

    #[test]
    fn test_download_opens_report_for_stored_result() {
        let mut map = RecordingMap::default();
        let mut controller = Controller::new("http://api");
        controller.update(Msg::StartChanged("A".into()), &mut map);
        controller.update(Msg::EndChanged("B".into()), &mut map);
        controller.update(Msg::Submit, &mut map);
        controller.update(Msg::OptimizationFetched(Ok(result_with(&[], &[]))), &mut map);

        let effects = controller.update(Msg::DownloadReport, &mut map);

        assert_eq!(
            effects,
            vec![Effect::OpenReport(
                "http://api/report?start_node=A&end_node=B&opt_time=7&base_time=10".into()
            )]
        );
    }

    #[test]
    fn test_download_without_result_does_nothing() {
        let mut map = RecordingMap::default();
        let mut controller = loaded(&mut map);
        assert!(controller.update(Msg::DownloadReport, &mut map).is_empty());
    }
}
