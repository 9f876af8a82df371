//! Dispatch feed and generated briefings.
//!
//! Dispatches are backend news items written in the `<i=N>` markup. Each one
//! is split into a title and body and rendered to escaped HTML here, so the
//! frontend never interprets backend text itself.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use std::cmp::Reverse;

use markup::{Segment, parse, split_title, to_html};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use super::stats::group_thousands;
use crate::backend::types::{Dispatch, Statistics, WarStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Normal,
}

impl Priority {
    /// Backend priority string, case-insensitive. Anything else is `Normal`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("critical") => Self::Critical,
            Some("high") => Self::High,
            _ => Self::Normal,
        }
    }
}

// =============================================================================
// DISPATCH FEED
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub title_html: String,
    pub body_html: String,
    /// Parsed body, for clients that render segments themselves.
    pub segments: Vec<Segment>,
    pub published: Option<String>,
    pub priority: Priority,
}

#[must_use]
pub fn news_item(position: usize, dispatch: &Dispatch) -> NewsItem {
    let titled = split_title(dispatch.text());
    let segments = parse(&titled.body);
    NewsItem {
        id: dispatch.id_string().unwrap_or_else(|| position.to_string()),
        title_html: to_html(&parse(&titled.title)),
        body_html: to_html(&segments),
        title: titled.title,
        body: titled.body,
        segments,
        published: dispatch.published_at().map(str::to_owned),
        priority: Priority::parse(dispatch.priority.as_deref()),
    }
}

/// Feed items, newest first. Undated or unparsable timestamps sort last in
/// backend order.
#[must_use]
pub fn news_feed(dispatches: &[Dispatch]) -> Vec<NewsItem> {
    let mut dated: Vec<(Option<OffsetDateTime>, NewsItem)> = dispatches
        .iter()
        .enumerate()
        .map(|(i, d)| (d.published_at().and_then(parse_timestamp), news_item(i, d)))
        .collect();
    dated.sort_by_key(|(at, _)| Reverse(*at));
    dated.into_iter().map(|(_, item)| item).collect()
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

// =============================================================================
// BRIEFINGS
// =============================================================================

/// A briefing generated from war statistics rather than sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Briefing {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub priority: Priority,
}

fn briefing(id: &str, title: &str, content: String, timestamp: OffsetDateTime, priority: Priority) -> Briefing {
    Briefing { id: id.to_owned(), title: title.to_owned(), content, timestamp, priority }
}

/// Briefings for the current war status. The status summary is always
/// present; the rest appear when their numbers warrant it.
#[must_use]
pub fn briefings(war: &WarStatus, now: OffsetDateTime) -> Vec<Briefing> {
    let fallback = Statistics::default();
    let stats = war.statistics.as_ref().unwrap_or(&fallback);
    let mut out = vec![briefing(
        "war-status",
        "ONGOING GALACTIC WAR STATUS",
        format!(
            "Current mission success rate: {}%. Total active personnel: {}. Continue spreading managed democracy.",
            stats.mission_success_rate,
            group_thousands(stats.player_count)
        ),
        now,
        Priority::Normal,
    )];

    if stats.missions_won > stats.missions_lost {
        out.push(briefing(
            "victory",
            "VICTORY IN SIGHT",
            format!(
                "With {} missions won versus {} lost, our forces maintain strategic superiority. Morale is at peak levels.",
                group_thousands(stats.missions_won),
                group_thousands(stats.missions_lost)
            ),
            now - Duration::hours(1),
            Priority::High,
        ));
    }

    if let Some(multiplier) = war.impact_multiplier.filter(|m| *m != 0.0) {
        out.push(briefing(
            "impact",
            "WAR EFFORT IMPACT",
            format!(
                "Current war effort effectiveness multiplier: {:.2}%. All personnel are performing admirably in this sector.",
                multiplier * 100.0
            ),
            now - Duration::hours(2),
            Priority::Normal,
        ));
    }

    let kills = stats.total_kills();
    if kills > 0 {
        #[allow(clippy::cast_precision_loss)]
        let billions = kills as f64 / 1e9;
        out.push(briefing(
            "engagement",
            "ENEMY ENGAGEMENT REPORT",
            format!(
                "{billions:.1}B total enemy casualties across all sectors. Terminids remain the primary threat. \
                 Strategic doctrine: maintain firepower and advance democracy."
            ),
            now - Duration::hours(3),
            Priority::Normal,
        ));
    }

    if stats.deaths > 0 {
        out.push(briefing(
            "personnel",
            "PERSONNEL STATUS UPDATE",
            format!(
                "Total personnel casualties: {}. Revive count: {}. These soldiers have made the ultimate sacrifice for democracy.",
                group_thousands(stats.deaths),
                stats.revives
            ),
            now - Duration::hours(4),
            Priority::High,
        ));
    }

    out
}
