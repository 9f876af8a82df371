//! Derived war statistics for the live stats panel.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::Serialize;

use crate::backend::types::Statistics;

/// Raw counters plus the ratios and durations the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    #[serde(flatten)]
    pub raw: Statistics,
    pub total_kills: u64,
    pub total_missions: u64,
    /// Kills per death, with deaths floored at 1.
    pub kill_death_ratio: f64,
    /// Kills per mission, with missions floored at 1.
    pub kills_per_mission: f64,
    pub average_mission_ms: u64,
    pub time_played_text: String,
    pub mission_time_text: String,
    pub average_mission_text: String,
}

#[must_use]
pub fn stats_view(stats: &Statistics) -> StatsView {
    let total_kills = stats.total_kills();
    let total_missions = stats.total_missions();
    let missions_floor = total_missions.max(1);
    let average_mission_ms = stats.mission_time / missions_floor;

    #[allow(clippy::cast_precision_loss)]
    let (kill_death_ratio, kills_per_mission) = (
        total_kills as f64 / stats.deaths.max(1) as f64,
        total_kills as f64 / missions_floor as f64,
    );

    StatsView {
        raw: stats.clone(),
        total_kills,
        total_missions,
        kill_death_ratio,
        kills_per_mission,
        average_mission_ms,
        time_played_text: format_duration(stats.time_played),
        mission_time_text: format_duration(stats.mission_time),
        average_mission_text: format_duration(average_mission_ms),
    }
}

/// `"{h}h {m}m {s}s"`, `"{m}m {s}s"` or `"{s}s"` for a millisecond count.
#[must_use]
pub fn format_duration(ms: u64) -> String {
    let total = ms / 1000;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// `1234567` → `"1,234,567"`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
