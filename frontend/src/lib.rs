pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod leaflet;
pub mod logging;
pub mod orchestrator;
pub mod present;
pub mod render;
pub mod selection;

use seed::{prelude::*, virtual_dom::AtValue, *};
use serde::Deserialize;
use wasm_bindgen::{JsCast, prelude::wasm_bindgen};

use crate::catalog::Catalog;
use crate::config::ClientConfig;
pub use crate::controller::{Controller, Effect, Msg};
use crate::leaflet::{LeafletMap, MARKER_CLICK_EVENT};
use crate::present::{KpiPanel, Presenter};

pub struct Model {
    controller: Controller,
    map: LeafletMap,
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    let config = ClientConfig::from_build_env();

    orders.stream(streams::window_event(Ev::from(MARKER_CLICK_EVENT), |event| {
        let detail = event.dyn_into::<web_sys::CustomEvent>().ok()?.detail();
        match serde_wasm_bindgen::from_value::<MarkerClickPayload>(detail) {
            Ok(payload) => Some(Msg::MarkerClicked(payload.name)),
            Err(err) => {
                tracing::warn!("ignoring marker click without a city name: {err}");
                None
            }
        }
    }));

    let map = LeafletMap::mount(&config.map);
    let mut controller = Controller::new(config.api_root);
    let effects = controller.start();
    run_effects(effects, controller.api_root(), orders);

    Model { controller, map }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    let effects = model.controller.update(msg, &mut model.map);
    run_effects(effects, model.controller.api_root(), orders);
}

fn run_effects(effects: Vec<Effect>, api_root: &str, orders: &mut impl Orders<Msg>) {
    for effect in effects {
        match effect {
            Effect::LoadCatalog => {
                let api_root = api_root.to_string();
                orders.perform_cmd(async move {
                    Msg::CitiesFetched(api::fetch_cities(api_root).await)
                });
            }
            Effect::Optimize(payload) => {
                let api_root = api_root.to_string();
                orders.perform_cmd(async move {
                    Msg::OptimizationFetched(api::optimize(api_root, payload).await)
                });
            }
            Effect::Alert(message) => show_alert(&message),
            Effect::OpenReport(url) => open_in_new_tab(&url),
        }
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let header = h1!["Route Optimizer – baseline vs optimized"];
    let controls = view_controls(&model.controller);
    let results = view_results(model.controller.presenter());

    div![C!["app-container"], header, controls, results]
}

fn view_controls(controller: &Controller) -> Node<Msg> {
    let selection = controller.selection();
    let control = controller.submit_control();

    form![
        C!["controls"],
        fieldset![
            legend!["Route"],
            city_select(
                "Origin",
                "start-city",
                controller.catalog(),
                selection.start(),
                Msg::StartChanged
            ),
            city_select(
                "Destination",
                "end-city",
                controller.catalog(),
                selection.end(),
                Msg::EndChanged
            ),
            small!["Click a city marker to fill Origin, then Destination."],
        ],
        button![
            control.label,
            attrs! { At::Id => "optimize-btn", At::Disabled => bool_attr(control.disabled) },
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::Submit
            }),
        ],
    ]
}

fn city_select(
    label_text: &str,
    id: &str,
    catalog: &Catalog,
    selected: Option<&str>,
    msg: fn(String) -> Msg,
) -> Node<Msg> {
    let options = catalog
        .names()
        .map(|name| option![attrs! { At::Value => name }, name]);

    div![
        C!["input-field"],
        label![attrs! { At::For => id }, label_text],
        select![
            attrs! {
                At::Id => id,
                At::Value => selected.unwrap_or_default(),
            },
            option![attrs! { At::Value => "" }, "Select a city"],
            options,
            input_ev(Ev::Change, msg),
        ]
    ]
}

fn view_results(presenter: &Presenter) -> Node<Msg> {
    match presenter.panel() {
        Some(panel) => div![
            C!["results-panel"],
            h2!["Comparison"],
            view_kpis(panel),
            view_routes(panel),
            button![
                "Download report",
                attrs! { At::Id => "download-btn" },
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::DownloadReport
                }),
            ],
        ],
        None => div![C!["results-panel", "hidden"]],
    }
}

fn view_kpis(panel: &KpiPanel) -> Node<Msg> {
    let card = |label: &str, content: &str| {
        div![
            C!["kpi-card"],
            span![C!["label"], label],
            strong![content],
        ]
    };

    div![
        C!["kpi-grid"],
        card("Time saved", &panel.time_saved),
        card("Baseline time", &panel.baseline_time),
        card("Optimized time", &panel.optimized_time),
        card("Baseline cost", &panel.baseline_cost),
        card("Optimized cost", &panel.optimized_cost),
        card("Cost saved", &panel.cost_saved),
        card("Efficiency gain", &panel.efficiency_gain),
    ]
}

fn view_routes(panel: &KpiPanel) -> Node<Msg> {
    let line = |label: &str, route: &Option<String>| match route {
        Some(route) => p![C!["route-line"], strong![label], " ", route],
        None => empty![],
    };

    div![
        C!["route-summary"],
        line("Baseline:", &panel.baseline_route),
        line("Optimized:", &panel.optimized_route),
    ]
}

#[wasm_bindgen(start)]
pub fn start() {
    let config = ClientConfig::from_build_env();
    logging::init(&config.log_filter);
    App::start("app", init, update, view);
}

fn show_alert(message: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window to show alert: {message}");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        tracing::warn!("alert failed: {err:?}");
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window to open {url}");
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!("failed to open {url}: {err:?}");
    }
}

fn bool_attr(value: bool) -> AtValue {
    if value {
        AtValue::Some("true".into())
    } else {
        AtValue::Ignored
    }
}

#[derive(Deserialize)]
struct MarkerClickPayload {
    name: String,
}
