//! Read-only war data routes.
//!
//! Each handler prefers the poller's snapshot and falls back to a live fetch
//! when the feed has not loaded yet. A backend failure is served as `null`;
//! the dashboard shows its empty state rather than an error.

#[cfg(test)]
#[path = "war_test.rs"]
mod war_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;
use time::OffsetDateTime;

use crate::backend::types::{Assignment, Dispatch, Planet, Statistics, WarStatus};
use crate::services::map::{MapQuery, MapView, map_view};
use crate::services::news::{Briefing, NewsItem, briefings as build_briefings, news_feed};
use crate::services::orders::{OrderView, active_orders, order_views};
use crate::services::stats::{StatsView, stats_view};
use crate::state::{AppState, Refreshed};

async fn cached_war(state: &AppState) -> Option<WarStatus> {
    let cached = state.snapshot.read().await.war_status.clone();
    match cached {
        Some(war) => Some(war),
        None => state.api.war_status().await,
    }
}

async fn cached_planets(state: &AppState) -> Option<Vec<Planet>> {
    let cached = state.snapshot.read().await.planets.clone();
    match cached {
        Some(planets) => Some(planets),
        None => state.api.planets().await,
    }
}

async fn cached_statistics(state: &AppState) -> Option<Statistics> {
    let cached = state.snapshot.read().await.statistics.clone();
    match cached {
        Some(stats) => Some(stats),
        None => state.api.statistics().await,
    }
}

async fn cached_dispatches(state: &AppState) -> Option<Vec<Dispatch>> {
    let cached = state.snapshot.read().await.dispatches.clone();
    match cached {
        Some(d) => Some(d),
        None => state.api.dispatches().await,
    }
}

async fn cached_orders(state: &AppState) -> Option<Vec<Assignment>> {
    let cached = state.snapshot.read().await.orders.clone();
    match cached {
        Some(o) => Some(o),
        None => state.api.major_orders().await,
    }
}

/// `GET /api/war`
pub async fn war_status(State(state): State<AppState>) -> Json<Option<WarStatus>> {
    Json(cached_war(&state).await)
}

/// `GET /api/campaign`
pub async fn campaign(State(state): State<AppState>) -> Json<Option<Value>> {
    let cached = state.snapshot.read().await.campaign.clone();
    match cached {
        Some(c) => Json(Some(c)),
        None => Json(state.api.campaign().await),
    }
}

/// `GET /api/planets`
pub async fn planets(State(state): State<AppState>) -> Json<Option<Vec<Planet>>> {
    Json(cached_planets(&state).await)
}

/// `GET /api/planets/{index}`: always live; 404 when the backend has no such planet.
pub async fn planet(State(state): State<AppState>, Path(index): Path<u32>) -> Result<Json<Planet>, StatusCode> {
    state.api.planet(index).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/factions`
pub async fn factions(State(state): State<AppState>) -> Json<Option<Value>> {
    Json(state.api.factions().await)
}

/// `GET /api/biomes`
pub async fn biomes(State(state): State<AppState>) -> Json<Option<Value>> {
    Json(state.api.biomes().await)
}

/// `GET /api/statistics`: raw counters plus derived ratios.
pub async fn statistics(State(state): State<AppState>) -> Json<Option<StatsView>> {
    Json(cached_statistics(&state).await.as_ref().map(stats_view))
}

/// `GET /api/dispatches`: rendered feed, newest first.
pub async fn dispatches(State(state): State<AppState>) -> Json<Vec<NewsItem>> {
    Json(cached_dispatches(&state).await.as_deref().map(news_feed).unwrap_or_default())
}

/// `GET /api/briefings`
pub async fn briefings(State(state): State<AppState>) -> Json<Vec<Briefing>> {
    let war = cached_war(&state).await.unwrap_or_default();
    Json(build_briefings(&war, OffsetDateTime::now_utc()))
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct OrdersQuery {
    /// Include orders that are no longer active.
    #[serde(default)]
    pub all: bool,
}

/// `GET /api/orders[?all=true]`
pub async fn orders(State(state): State<AppState>, Query(query): Query<OrdersQuery>) -> Json<Vec<OrderView>> {
    let orders = cached_orders(&state).await.unwrap_or_default();
    let now = OffsetDateTime::now_utc();
    Json(if query.all { order_views(&orders, now) } else { active_orders(&orders, now) })
}

/// `GET /api/map[?x&y&width&height][&focus]`
pub async fn map(State(state): State<AppState>, Query(query): Query<MapQuery>) -> Json<MapView> {
    let planets = cached_planets(&state).await.unwrap_or_default();
    Json(map_view(&planets, &query))
}

/// `GET /api/snapshot`: when each feed last refreshed.
pub async fn refreshed(State(state): State<AppState>) -> Json<Refreshed> {
    Json(state.snapshot.read().await.refreshed.clone())
}
