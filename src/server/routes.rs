use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::page;
use crate::chart::ChartSpec;
use crate::data::filter::{ControlState, PayloadRange, SiteSelection};
use crate::error::ApiError;
use crate::layout::PageLayout;
use crate::state::AppState;
use crate::views;

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/success-pie", get(success_pie))
        .route("/api/payload-scatter", get(payload_scatter))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Query parsing
// ---------------------------------------------------------------------------

/// Control snapshot as sent by the page: `?site=..&low=..&high=..`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControlQuery {
    #[serde(default)]
    pub site: SiteSelection,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ControlQuery {
    /// Resolve the snapshot against the loaded table.
    ///
    /// A missing payload bound falls back to the table's observed bound. NaN
    /// is rejected; an inverted or out-of-range interval is passed through
    /// unchanged.
    pub fn into_controls(self, state: &AppState) -> Result<ControlState, ApiError> {
        let (min, max) = state.table.payload_bounds();
        let low = resolve_bound("low", self.low, min)?;
        let high = resolve_bound("high", self.high, max)?;

        Ok(ControlState {
            site: self.site,
            payload: PayloadRange::new(low, high),
        })
    }
}

fn resolve_bound(name: &'static str, value: Option<f64>, default: f64) -> Result<f64, ApiError> {
    match value {
        None => Ok(default),
        Some(v) if v.is_nan() => Err(ApiError::InvalidParameter {
            name,
            value: v.to_string(),
        }),
        Some(v) => Ok(v),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&state.layout))
}

pub async fn layout(State(state): State<AppState>) -> Json<PageLayout> {
    Json(state.layout.as_ref().clone())
}

pub async fn success_pie(
    State(state): State<AppState>,
    query: Result<Query<ControlQuery>, QueryRejection>,
) -> Result<Json<ChartSpec>, ApiError> {
    let Query(query) = query?;
    let controls = query.into_controls(&state)?;
    log::debug!("success pie for site {}", controls.site);
    Ok(Json(views::success_pie(&state.table, &controls.site)))
}

pub async fn payload_scatter(
    State(state): State<AppState>,
    query: Result<Query<ControlQuery>, QueryRejection>,
) -> Result<Json<ChartSpec>, ApiError> {
    let Query(query) = query?;
    let controls = query.into_controls(&state)?;
    log::debug!(
        "payload scatter for site {} in {}..={} kg",
        controls.site,
        controls.payload.low,
        controls.payload.high
    );
    Ok(Json(views::payload_scatter(
        &state.table,
        &state.colors,
        &controls.site,
        controls.payload,
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;
    use crate::data::model::{LaunchRecord, LaunchTable, Outcome};

    fn state() -> AppState {
        AppState::new(LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 7000.0, Outcome::Failure, "FT"),
        ]))
    }

    fn parse(query: &str) -> Result<ControlQuery, QueryRejection> {
        let uri: Uri = format!("/api/payload-scatter?{query}").parse().expect("uri");
        Query::try_from_uri(&uri).map(|Query(q)| q)
    }

    #[test]
    fn missing_parameters_use_defaults() {
        let controls = parse("")
            .expect("empty query")
            .into_controls(&state())
            .expect("defaults");
        assert_eq!(controls.site, SiteSelection::All);
        assert_eq!(controls.payload, PayloadRange::new(500.0, 7000.0));
    }

    #[test]
    fn site_is_decoded_from_the_query_string() {
        let query = parse("site=KSC%20LC-39A&low=0").expect("query");
        assert_eq!(query.site, SiteSelection::Site("KSC LC-39A".into()));
        assert_eq!(parse("site=ALL").expect("query").site, SiteSelection::All);
    }

    #[test]
    fn malformed_bound_is_rejected() {
        assert!(parse("low=heavy").is_err());
        let err = parse("high=NaN")
            .expect("NaN parses as a float")
            .into_controls(&state())
            .expect_err("NaN bound");
        assert!(err.to_string().contains("'high'"));
    }

    #[test]
    fn inverted_range_is_passed_through() {
        let controls = parse("low=8000&high=100")
            .expect("query")
            .into_controls(&state())
            .expect("inverted range is not an error");
        assert_eq!(controls.payload, PayloadRange::new(8000.0, 100.0));
    }
}
