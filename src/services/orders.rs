//! Major order views: progress, reward, deadline.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use serde::Serialize;
use time::OffsetDateTime;

use super::news::parse_timestamp;
use crate::backend::types::{Assignment, Reward};

/// Reward type the backend uses for medals.
const MEDALS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderProgress {
    NoData,
    Complete,
    InProgress,
    Waiting,
}

impl OrderProgress {
    /// `Complete` when every objective reads 1, `InProgress` when any reads 0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_progress(progress: Option<&[f64]>) -> Self {
        match progress {
            None | Some([]) => Self::NoData,
            Some(p) if p.iter().all(|v| *v == 1.0) => Self::Complete,
            Some(p) if p.iter().any(|v| *v == 0.0) => Self::InProgress,
            Some(_) => Self::Waiting,
        }
    }
}

/// `"1. Completed • 2. In Progress"`, one entry per objective.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn objectives_text(progress: Option<&[f64]>) -> String {
    let Some(progress) = progress.filter(|p| !p.is_empty()) else {
        return "No objectives".to_owned();
    };
    progress
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let state = if *v == 1.0 { "Completed" } else { "In Progress" };
            format!("{}. {state}", i + 1)
        })
        .collect::<Vec<_>>()
        .join(" • ")
}

#[must_use]
pub fn reward_text(reward: Option<&Reward>) -> String {
    let Some(reward) = reward else {
        return "No reward".to_owned();
    };
    let amount = format_amount(reward.amount);
    if reward.kind == MEDALS {
        format!("Medals: {amount}")
    } else {
        format!("Type {}: {amount}", reward.kind)
    }
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}

// =============================================================================
// DEADLINES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Urgent,
    /// Past the deadline, or less than an hour left.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRemaining {
    /// Fractional hours left; `None` without a parsable deadline.
    pub hours: Option<f64>,
    pub formatted: String,
    pub urgency: Urgency,
    /// The deadline is in the past.
    pub passed: bool,
}

#[must_use]
pub fn time_remaining(expiration: Option<&str>, now: OffsetDateTime) -> TimeRemaining {
    let Some(raw) = expiration else {
        return TimeRemaining { hours: None, formatted: "No deadline".to_owned(), urgency: Urgency::Normal, passed: false };
    };
    let Some(deadline) = parse_timestamp(raw) else {
        return TimeRemaining { hours: None, formatted: "Unknown".to_owned(), urgency: Urgency::Normal, passed: false };
    };

    let left = deadline - now;
    let total_minutes = left.whole_minutes();
    if left.is_negative() || left.is_zero() {
        return TimeRemaining {
            hours: Some(left.as_seconds_f64() / 3600.0),
            formatted: "EXPIRED".to_owned(),
            urgency: Urgency::Expired,
            passed: true,
        };
    }

    let (h, m) = (total_minutes / 60, total_minutes % 60);
    let mut parts = Vec::with_capacity(2);
    if h > 0 {
        parts.push(format!("{h}h"));
    }
    if m > 0 {
        parts.push(format!("{m}m"));
    }
    let formatted = if parts.is_empty() { "0m".to_owned() } else { parts.join(" ") };

    let urgency = match h {
        0 => Urgency::Expired,
        1..24 => Urgency::Urgent,
        _ => Urgency::Normal,
    };
    TimeRemaining { hours: Some(left.as_seconds_f64() / 3600.0), formatted, urgency, passed: false }
}

// =============================================================================
// ORDER VIEW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: String,
    pub title: String,
    pub objective: String,
    pub progress: OrderProgress,
    pub objectives: String,
    pub reward: String,
    pub time_remaining: TimeRemaining,
    pub priority: String,
    pub status: String,
}

#[must_use]
pub fn order_view(position: usize, order: &Assignment, now: OffsetDateTime) -> OrderView {
    let progress = order.progress.as_deref();
    let id = match order.id.as_ref() {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => position.to_string(),
        Some(other) => other.to_string(),
    };
    let priority = match (order.priority.as_deref(), order.flags) {
        (Some(p), _) if !p.is_empty() => p.to_ascii_lowercase(),
        (_, Some(1)) => "critical".to_owned(),
        _ => "normal".to_owned(),
    };
    OrderView {
        id,
        title: order
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("MAJOR ORDER {}", position + 1)),
        objective: order
            .objective_text()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Objective classified")
            .to_owned(),
        progress: OrderProgress::from_progress(progress),
        objectives: objectives_text(progress),
        reward: reward_text(order.reward.as_ref()),
        time_remaining: time_remaining(order.expiration.as_deref(), now),
        priority,
        status: order.status.clone().unwrap_or_else(|| "active".to_owned()),
    }
}

#[must_use]
pub fn order_views(orders: &[Assignment], now: OffsetDateTime) -> Vec<OrderView> {
    orders.iter().enumerate().map(|(i, o)| order_view(i, o, now)).collect()
}

/// Orders still running: status `active` and deadline not yet passed.
#[must_use]
pub fn active_orders(orders: &[Assignment], now: OffsetDateTime) -> Vec<OrderView> {
    order_views(orders, now)
        .into_iter()
        .filter(|o| o.status.eq_ignore_ascii_case("active") && !o.time_remaining.passed)
        .collect()
}
