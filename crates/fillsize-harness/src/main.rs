#![forbid(unsafe_code)]

//! Prints the size plan for an env-configured request as JSON.
//!
//! ```text
//! FILLSIZE_ITEMS=7 FILLSIZE_TOTAL=1920 FILLSIZE_CROSS=120 cargo run -p fillsize-harness
//! ```
//!
//! Exit status is 0 on success, 2 when the configuration is invalid and 1
//! when the report cannot be encoded.

mod config;

use std::process::ExitCode;

use fillsize_core::Size;
use fillsize_layout::{SizePlan, SizingRequest, distribute};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::HarnessConfig;

/// Exit status for an invalid configuration.
const EXIT_INVALID_CONFIG: u8 = 2;

#[derive(Debug, Serialize)]
struct Report<'a> {
    request: &'a SizingRequest,
    plan: &'a [u32],
    sum: u64,
    over_budget: bool,
    extents: Vec<Size>,
}

/// Install the stderr subscriber. Returns `false` if one was already set.
fn init_logging(json: bool) -> bool {
    if json {
        return fillsize_core::logging::init_json("info");
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// The JSON object printed on stdout for `config`.
fn report(config: &HarnessConfig, plan: &SizePlan) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(Report {
        request: &config.request,
        plan: plan.as_slice(),
        sum: plan.total(),
        over_budget: plan.is_over_budget(),
        extents: plan.extents(config.cross),
    })
}

fn main() -> ExitCode {
    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fillsize-harness: {err}");
            return ExitCode::from(EXIT_INVALID_CONFIG);
        }
    };
    if !init_logging(config.log_json) {
        eprintln!("fillsize-harness: a tracing subscriber was already installed; logs go there");
    }

    let plan = distribute(&config.request);
    tracing::info!(
        items = config.request.item_count(),
        total = config.request.total(),
        planned = plan.total(),
        "plan computed"
    );
    if plan.is_over_budget() {
        tracing::warn!(
            excess = plan.total() - u64::from(plan.budget()),
            "container too small to give every item a pixel"
        );
    }

    match report(&config, &plan) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("fillsize-harness: failed to encode report: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fillsize_core::Axis;
    use serde_json::json;

    fn config(items: usize, total: u32, axis: Axis, cross: u32) -> HarnessConfig {
        HarnessConfig {
            request: SizingRequest::new(items, total, axis).unwrap(),
            cross,
            log_json: false,
        }
    }

    #[test]
    fn report_over_budget_case() {
        let config = config(3, 1, Axis::Primary, 8);
        let plan = distribute(&config.request);
        let value = report(&config, &plan).unwrap();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 5);
        for key in ["request", "plan", "sum", "over_budget", "extents"] {
            assert!(keys.contains(&key), "missing key {key}");
        }

        assert_eq!(
            value["request"],
            json!({ "item_count": 3, "total": 1, "axis": "primary" })
        );
        assert_eq!(value["plan"], json!([1, 1, 1]));
        assert_eq!(value["sum"], json!(3));
        assert_eq!(value["over_budget"], json!(true));
        assert_eq!(
            value["extents"],
            json!([
                { "width": 1, "height": 8 },
                { "width": 1, "height": 8 },
                { "width": 1, "height": 8 }
            ])
        );
    }

    #[test]
    fn report_fitting_secondary_axis() {
        let config = config(4, 10, Axis::Secondary, 50);
        let plan = distribute(&config.request);
        let value = report(&config, &plan).unwrap();

        assert_eq!(value["request"]["axis"], json!("secondary"));
        assert_eq!(value["plan"], json!([2, 3, 2, 3]));
        assert_eq!(value["sum"], json!(10));
        assert_eq!(value["over_budget"], json!(false));
        assert_eq!(value["extents"][1], json!({ "width": 50, "height": 3 }));
    }
}
