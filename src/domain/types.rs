//! Shared domain types.
//!
//! Registration types mirror the JSON served by the event API closely enough to
//! round-trip through the cache file. Fields the tool never reads are dropped on
//! decode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One restaurant's participation record in the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub restaurant: Restaurant,
    pub menu_type: MenuType,
    /// Meal periods offered. A missing or non-array `periods` offers none, and
    /// period entries without a numeric `id` are ignored.
    #[serde(default, deserialize_with = "lenient_periods")]
    pub periods: Vec<Period>,
}

/// Registration identifier. The API sends numbers; anything string-like is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistrationId {
    Number(serde_json::Number),
    Text(String),
}

impl From<u64> for RegistrationId {
    fn from(id: u64) -> Self {
        RegistrationId::Number(id.into())
    }
}

impl From<&str> for RegistrationId {
    fn from(id: &str) -> Self {
        RegistrationId::Text(id.to_string())
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationId::Number(n) => write!(f, "{n}"),
            RegistrationId::Text(s) => f.write_str(s),
        }
    }
}

fn lenient_periods<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Period>, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    let Value::Array(entries) = raw else {
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .filter_map(|entry| Period::deserialize(entry).ok())
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuType {
    pub id: u32,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: u32,
}

impl Registration {
    /// True if at least one offered period is in `period_ids`.
    pub fn offers_any_period(&self, period_ids: &[u32]) -> bool {
        self.periods.iter().any(|p| period_ids.contains(&p.id))
    }

    /// `"<restaurant> - <menu label> [<link_base>/<id>]"`
    pub fn display_line(&self, link_base: &str) -> String {
        format!(
            "{} - {} [{}/{}]",
            self.restaurant.name, self.menu_type.label, link_base, self.id
        )
    }
}

/// Document shape shared by the API response body and the cache file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationFeed {
    pub result: Vec<Registration>,
}

/// Period id the API uses for lunch.
pub const PERIOD_LUNCH: u32 = 1;
/// Period id the API uses for dinner.
pub const PERIOD_DINNER: u32 = 2;

/// Which meal period(s) the user wants suggestions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    Lunch,
    Dinner,
    Both,
}

impl Meal {
    /// Accepted period ids for this selector.
    pub fn period_ids(self) -> &'static [u32] {
        match self {
            Meal::Lunch => &[PERIOD_LUNCH],
            Meal::Dinner => &[PERIOD_DINNER],
            Meal::Both => &[PERIOD_LUNCH, PERIOD_DINNER],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Both => "both",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meal {
    type Err = String;

    /// English tokens plus the Portuguese ones the event site uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lunch" | "almoço" | "almoco" => Ok(Meal::Lunch),
            "dinner" | "jantar" => Ok(Meal::Dinner),
            "both" | "ambos" => Ok(Meal::Both),
            _ => Err(format!("Meal must be 'lunch', 'dinner' or 'both' (got '{s}')")),
        }
    }
}

/// Menu tier id, always within 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuTypeId(u8);

impl MenuTypeId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(id: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&id).then_some(Self(id))
    }

    pub fn all() -> Vec<MenuTypeId> {
        (Self::MIN..=Self::MAX).map(MenuTypeId).collect()
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn matches(self, raw_id: u32) -> bool {
        u32::from(self.0) == raw_id
    }
}

impl fmt::Display for MenuTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated user filter, built once from CLI input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub meal: Meal,
    /// Non-empty, deduplicated, in the order given.
    pub menu_types: Vec<MenuTypeId>,
    /// Always >= 1.
    pub count: usize,
    pub force_refresh: bool,
}

impl FilterConfig {
    pub fn accepts_menu_type(&self, raw_id: u32) -> bool {
        self.menu_types.iter().any(|m| m.matches(raw_id))
    }
}

/// Where the registrations for this run came from. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Cache,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::Remote => "remote",
            DataSource::Cache => "cache",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
