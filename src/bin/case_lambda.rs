//! AWS Lambda HTTP handler
//!
//! POST a `ScenarioRequest` JSON body, receive a `CaseReport`.
//! An empty body evaluates the standard scenario without simulation.

use integration_case::{ModelError, ScenarioRequest, ScenarioRunner};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;

/// Longest horizon accepted over HTTP (50 years)
const MAX_HORIZON_MONTHS: u32 = 600;

/// Most Monte Carlo trials accepted over HTTP
const MAX_TRIALS: u32 = 10_000;

fn parse_request(body: &Body) -> Result<ScenarioRequest, serde_json::Error> {
    match body {
        Body::Empty => Ok(ScenarioRequest::default()),
        Body::Text(text) => serde_json::from_str(text),
        Body::Binary(bytes) => serde_json::from_slice(bytes),
    }
}

/// Reject requests whose size would make a single invocation unbounded
fn check_limits(request: &ScenarioRequest) -> Result<(), String> {
    let horizon = request.assumptions.horizon_months;
    if horizon > MAX_HORIZON_MONTHS {
        return Err(format!(
            "horizon_months {horizon} exceeds the limit of {MAX_HORIZON_MONTHS}"
        ));
    }
    if let Some(simulation) = &request.simulation {
        if simulation.trials > MAX_TRIALS {
            return Err(format!(
                "trials {} exceeds the limit of {MAX_TRIALS}",
                simulation.trials
            ));
        }
    }
    Ok(())
}

fn error_body(message: impl std::fmt::Display) -> String {
    json!({ "error": message.to_string() }).to_string()
}

/// Status code and JSON body for a request body
fn respond(body: &Body) -> (u16, String) {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("Rejected request body: {e}");
            return (400, error_body(e));
        }
    };

    if let Err(message) = check_limits(&request) {
        log::warn!("Rejected request: {message}");
        return (400, error_body(message));
    }

    match ScenarioRunner::run(&request) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(json) => (200, json),
            Err(e) => {
                log::error!("Failed to serialise report: {e}");
                (500, error_body(e))
            }
        },
        Err(e @ ModelError::InvalidParameter { .. }) => (400, error_body(e)),
        Err(e) => {
            log::error!("Scenario evaluation failed: {e}");
            (500, error_body(e))
        }
    }
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let (status, body) = respond(event.body());
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(json: &str) -> Body {
        Body::Text(json.to_string())
    }

    #[test]
    fn test_empty_body_runs_standard_scenario() {
        let (status, body) = respond(&Body::Empty);
        assert_eq!(status, 200);

        let report: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(report["statement"]["rows"].as_array().map(Vec::len), Some(48));
        assert!(report["simulation"].is_null());
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let (status, body) = respond(&text("{ not json"));
        assert_eq!(status, 400);
        assert!(body.contains("error"));
    }

    #[test]
    fn test_zero_trials_is_bad_request() {
        let (status, body) = respond(&text(r#"{ "simulation": { "trials": 0 } }"#));
        assert_eq!(status, 400);
        assert!(body.contains("trials"));
    }

    #[test]
    fn test_binary_body_parsed() {
        let body = Body::Binary(br#"{ "assumptions": { "horizon_months": 12 } }"#.to_vec());
        let request = parse_request(&body).expect("parse");
        assert_eq!(request.assumptions.horizon_months, 12);
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let (status, body) = respond(&text(r#"{ "assumptions": { "horizon_months": 4000000000 } }"#));
        assert_eq!(status, 400);
        assert!(body.contains("horizon_months"));

        let (status, _) = respond(&text(r#"{ "assumptions": { "horizon_months": 600 } }"#));
        assert_eq!(status, 200);
    }

    #[test]
    fn test_oversized_trials_rejected() {
        let (status, body) = respond(&text(r#"{ "simulation": { "trials": 4000000000 } }"#));
        assert_eq!(status, 400);
        assert!(body.contains("trials"));

        let request: ScenarioRequest =
            serde_json::from_str(r#"{ "simulation": { "trials": 10000 } }"#).expect("parse");
        assert!(check_limits(&request).is_ok());
    }
}
