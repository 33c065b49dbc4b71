use shared::{OptimizationResult, ReportQuery};

/// Display strings for the results panel. Values come straight from the
/// service; only units are attached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiPanel {
    pub time_saved: String,
    pub baseline_time: String,
    pub optimized_time: String,
    pub baseline_cost: String,
    pub optimized_cost: String,
    pub cost_saved: String,
    pub efficiency_gain: String,
    pub baseline_route: Option<String>,
    pub optimized_route: Option<String>,
}

impl KpiPanel {
    pub fn from_result(result: &OptimizationResult) -> Self {
        Self {
            time_saved: minutes(result.time_saved),
            baseline_time: minutes(result.baseline_time),
            optimized_time: minutes(result.optimized_time),
            baseline_cost: dollars(result.baseline_cost),
            optimized_cost: dollars(result.optimized_cost),
            cost_saved: dollars(result.cost_saved),
            efficiency_gain: format!("{}%", number(result.efficiency_gain)),
            baseline_route: route_summary(&result.baseline_path),
            optimized_route: route_summary(&result.optimized_path),
        }
    }
}

/// The results panel: hidden until the first successful result.
#[derive(Debug, Default)]
pub struct Presenter {
    panel: Option<KpiPanel>,
}

impl Presenter {
    pub fn present(&mut self, result: &OptimizationResult) {
        self.panel = Some(KpiPanel::from_result(result));
    }

    pub fn panel(&self) -> Option<&KpiPanel> {
        self.panel.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.panel.is_some()
    }
}

/// `{api_root}/report?start_node=..&end_node=..&opt_time=..&base_time=..`
pub fn report_url(api_root: &str, query: &ReportQuery) -> String {
    format!(
        "{api_root}/report?start_node={}&end_node={}&opt_time={}&base_time={}",
        urlencoding::encode(&query.start_node),
        urlencoding::encode(&query.end_node),
        urlencoding::encode(&number(query.opt_time)),
        urlencoding::encode(&number(query.base_time)),
    )
}

fn minutes(value: f64) -> String {
    format!("{} min", number(value))
}

fn dollars(value: f64) -> String {
    format!("${}", number(value))
}

// Shortest round-trip form, so 3.0 reads "3" and 2.5 reads "2.5".
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn route_summary(path: &[String]) -> Option<String> {
    (!path.is_empty()).then(|| path.join(" → "))
}
