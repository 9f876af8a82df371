//! Background polling of the war backend.
//!
//! DESIGN
//! ======
//! One task per feed, each on its own interval. A tick fetches the feed and
//! writes it into the shared [`Snapshot`](crate::state::Snapshot), so HTTP
//! handlers read cached data instead of fanning out to the backend. Missed
//! ticks are skipped rather than bunched up behind a slow backend.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch keeps the previous value and leaves its refresh time
//! untouched. The backend client already logs the failure; the poller only
//! records it at debug level.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use std::time::Duration;

use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::PollIntervals;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// War status, active campaign and planets.
    War,
    Stats,
    Dispatches,
    Orders,
}

impl Feed {
    pub const ALL: [Feed; 4] = [Feed::War, Feed::Stats, Feed::Dispatches, Feed::Orders];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::War => "war",
            Self::Stats => "stats",
            Self::Dispatches => "dispatches",
            Self::Orders => "orders",
        }
    }

    #[must_use]
    pub fn interval(self, poll: &PollIntervals) -> Duration {
        match self {
            Self::War => poll.war,
            Self::Stats => poll.stats,
            Self::Dispatches => poll.dispatches,
            Self::Orders => poll.orders,
        }
    }

    /// Fetch this feed once and store whatever succeeded. Returns whether
    /// the snapshot changed.
    pub async fn refresh(self, state: &AppState) -> bool {
        let now = OffsetDateTime::now_utc();
        match self {
            Self::War => {
                let (war, campaign, planets) =
                    tokio::join!(state.api.war_status(), state.api.campaign(), state.api.planets());
                let mut snap = state.snapshot.write().await;
                let updated = war.is_some() || campaign.is_some() || planets.is_some();
                if let Some(war) = war {
                    snap.war_status = Some(war);
                    snap.refreshed.war = Some(now);
                }
                if campaign.is_some() {
                    snap.campaign = campaign;
                }
                if planets.is_some() {
                    snap.planets = planets;
                }
                updated
            }
            Self::Stats => {
                let Some(stats) = state.api.statistics().await else {
                    return false;
                };
                let mut snap = state.snapshot.write().await;
                snap.statistics = Some(stats);
                snap.refreshed.stats = Some(now);
                true
            }
            Self::Dispatches => {
                let Some(dispatches) = state.api.dispatches().await else {
                    return false;
                };
                let mut snap = state.snapshot.write().await;
                snap.dispatches = Some(dispatches);
                snap.refreshed.dispatches = Some(now);
                true
            }
            Self::Orders => {
                let Some(orders) = state.api.major_orders().await else {
                    return false;
                };
                let mut snap = state.snapshot.write().await;
                snap.orders = Some(orders);
                snap.refreshed.orders = Some(now);
                true
            }
        }
    }
}

/// Spawn one polling task per feed. The first tick fires immediately.
pub fn spawn_pollers(state: AppState, poll: PollIntervals) -> Vec<JoinHandle<()>> {
    Feed::ALL
        .into_iter()
        .map(|feed| {
            let period = feed.interval(&poll);
            info!(feed = feed.name(), period_secs = period.as_secs(), "poller configured");
            let state = state.clone();
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    ticker.tick().await;
                    if !feed.refresh(&state).await {
                        debug!(feed = feed.name(), "refresh failed; keeping previous value");
                    }
                }
            })
        })
        .collect()
}
