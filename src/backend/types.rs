//! Wire records returned by the war backend.
//!
//! The backend has shipped several spellings of the same field over time
//! (`owner` / `currentOwner`, `message` / `content`, four timestamp names).
//! Each spelling is kept as its own optional field and resolved by an
//! accessor, so a payload carrying two spellings still deserializes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// WAR STATUS / STATISTICS
// =============================================================================

/// Galaxy-wide counters. Missing fields read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub missions_won: u64,
    pub missions_lost: u64,
    /// Total mission time, in milliseconds.
    pub mission_time: u64,
    pub terminid_kills: u64,
    pub automaton_kills: u64,
    pub illuminate_kills: u64,
    pub bullets_fired: u64,
    pub bullets_hit: u64,
    /// Total time played, in milliseconds.
    pub time_played: u64,
    pub deaths: u64,
    pub revives: u64,
    pub friendlies: u64,
    pub mission_success_rate: f64,
    pub accuracy: f64,
    pub player_count: u64,
}

impl Statistics {
    /// Kills across all factions, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_kills(&self) -> u64 {
        self.terminid_kills
            .saturating_add(self.automaton_kills)
            .saturating_add(self.illuminate_kills)
    }

    /// Won plus lost missions, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_missions(&self) -> u64 {
        self.missions_won.saturating_add(self.missions_lost)
    }
}

/// Aggregate war status. Unmodelled fields are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_multiplier: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// =============================================================================
// PLANETS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Ongoing defence or liberation event on a planet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanetEvent {
    pub faction: Option<String>,
    pub event_type: Option<Value>,
    pub health: Option<f64>,
    pub max_health: Option<f64>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Planet {
    pub index: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_owner: Option<String>,
    pub position: Option<Position>,
    /// Either a plain name or an object with a `name` field.
    pub biome_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub health: Option<f64>,
    pub max_health: Option<f64>,
    pub event: Option<PlanetEvent>,
}

impl Planet {
    #[must_use]
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_deref().or(self.current_owner.as_deref())
    }

    #[must_use]
    pub fn sector_name(&self) -> Option<&str> {
        self.section.as_deref().or(self.sector.as_deref())
    }

    #[must_use]
    pub fn biome_name(&self) -> Option<&str> {
        match self.biome_type.as_ref()? {
            Value::String(s) => Some(s.as_str()),
            Value::Object(o) => o.get("name").and_then(Value::as_str),
            _ => None,
        }
    }
}

// =============================================================================
// DISPATCHES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dispatch {
    /// Numeric or string id, depending on the backend version.
    pub id: Option<Value>,
    pub message: Option<String>,
    pub content: Option<String>,
    pub published: Option<String>,
    pub timestamp: Option<String>,
    pub created_at: Option<String>,
    pub date: Option<String>,
    pub priority: Option<String>,
}

impl Dispatch {
    /// Raw markup text of the dispatch.
    #[must_use]
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or_default()
    }

    /// First timestamp spelling present.
    #[must_use]
    pub fn published_at(&self) -> Option<&str> {
        self.published
            .as_deref()
            .or(self.timestamp.as_deref())
            .or(self.created_at.as_deref())
            .or(self.date.as_deref())
    }

    #[must_use]
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// =============================================================================
// MAJOR ORDERS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "type", default)]
    pub kind: i64,
    #[serde(default)]
    pub amount: f64,
}

/// A major order ("assignment").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assignment {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub briefing: Option<String>,
    pub description: Option<String>,
    pub objective: Option<String>,
    /// One entry per objective; `1` means complete.
    pub progress: Option<Vec<f64>>,
    pub tasks: Option<Vec<Value>>,
    pub reward: Option<Reward>,
    /// RFC 3339 deadline.
    pub expiration: Option<String>,
    pub flags: Option<i64>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl Assignment {
    #[must_use]
    pub fn objective_text(&self) -> Option<&str> {
        self.briefing
            .as_deref()
            .or(self.description.as_deref())
            .or(self.objective.as_deref())
    }
}

/// `/orders` payload: a bare list or `{ "orders": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MajorOrders {
    List(Vec<Assignment>),
    Wrapped {
        #[serde(default)]
        orders: Vec<Assignment>,
    },
}

impl MajorOrders {
    #[must_use]
    pub fn into_vec(self) -> Vec<Assignment> {
        match self {
            Self::List(v) | Self::Wrapped { orders: v } => v,
        }
    }
}

// =============================================================================
// COMMAND
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(default)]
    pub response: Option<String>,
}
