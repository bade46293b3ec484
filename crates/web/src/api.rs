//! JSON endpoints behind the dashboard page.

use std::time::Instant;

use {
    axum::{Json, extract::State},
    axum_extra::extract::{Query, QueryRejection},
    chrono::NaiveDate,
    mediascope_analytics::{DashboardSnapshot, FilterOptions, FilterParams, Kpis},
    mediascope_charts::DashboardFigures,
    serde::{Deserialize, Serialize},
    serde_json::{Value, json},
    tracing::info,
};

use crate::{
    error::{Result, WebError},
    state::AppState,
};

/// Raw query string of `/api/dashboard`. Keywords and locations repeat:
/// `?kw=Santé&kw=Sport&loc=Paris`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub kw: Vec<String>,
    pub loc: Vec<String>,
}

impl DashboardQuery {
    pub fn into_params(self) -> Result<FilterParams> {
        Ok(FilterParams {
            start: parse_day("start", self.start.as_deref())?,
            end: parse_day("end", self.end.as_deref())?,
            keywords: non_blank(self.kw),
            locations: non_blank(self.loc),
        })
    }
}

fn parse_day(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| WebError::BadRequest(format!("invalid {field} date: {value:?}"))),
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.trim().is_empty()).collect()
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub filters: FilterParams,
    pub kpis: Kpis,
    pub figures: DashboardFigures,
}

pub async fn options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(state.options.as_ref().clone())
}

pub async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<DashboardResponse>> {
    let Query(query) = query.map_err(|e| WebError::BadRequest(e.to_string()))?;
    let params = query.into_params()?;

    let started = Instant::now();
    let corpus = state.corpus.clone();
    let limits = state.limits.clone();
    let response = tokio::task::spawn_blocking(move || {
        let snapshot = DashboardSnapshot::compute(&corpus, &params, &limits);
        DashboardResponse {
            figures: DashboardFigures::from_snapshot(&snapshot),
            kpis: snapshot.kpis,
            filters: params,
        }
    })
    .await?;

    info!(
        total = response.kpis.total_articles,
        keywords = response.filters.keywords.len(),
        locations = response.filters.locations.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dashboard refreshed"
    );
    Ok(Json(response))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "articles": state.corpus.len() }))
}
