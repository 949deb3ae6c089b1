//! Admin console views.
//!
//! Each model is registered with the columns it lists, the fields it can be
//! filtered and searched on, and its default ordering. Listing loads the
//! whole table and applies search, filters and ordering in memory.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use time::{Date, OffsetDateTime};

use crate::errors::AppError;
use crate::models::{Activity, Entity, LeaderboardEntry, Team, User, Workout};

/// Search query parameter.
pub const SEARCH_PARAM: &str = "q";
/// Ordering override parameter, e.g. `o=-calories,user_name`.
pub const ORDERING_PARAM: &str = "o";

#[derive(Debug, Clone, Serialize)]
pub struct ModelAdmin {
    pub model: Entity,
    pub list_display: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    /// Field names, `-` prefix for descending.
    pub ordering: &'static [&'static str],
}

pub static REGISTRY: [ModelAdmin; 5] = [
    ModelAdmin {
        model: Entity::Users,
        list_display: &["name", "email", "team", "created_at"],
        list_filter: &["team", "created_at"],
        search_fields: &["name", "email"],
        ordering: &["-created_at"],
    },
    ModelAdmin {
        model: Entity::Teams,
        list_display: &["name", "description", "created_at"],
        list_filter: &[],
        search_fields: &["name"],
        ordering: &["-created_at"],
    },
    ModelAdmin {
        model: Entity::Activities,
        list_display: &[
            "user_name",
            "activity_type",
            "duration",
            "calories",
            "date",
            "created_at",
        ],
        list_filter: &["activity_type", "date", "created_at"],
        search_fields: &["user_name", "activity_type"],
        ordering: &["-date", "-created_at"],
    },
    ModelAdmin {
        model: Entity::Leaderboard,
        list_display: &[
            "rank",
            "user_name",
            "team",
            "total_calories",
            "total_activities",
            "updated_at",
        ],
        list_filter: &["team", "updated_at"],
        search_fields: &["user_name"],
        ordering: &["rank"],
    },
    ModelAdmin {
        model: Entity::Workouts,
        list_display: &["name", "category", "difficulty", "duration", "calories_estimate"],
        list_filter: &["category", "difficulty"],
        search_fields: &["name", "description"],
        ordering: &["name"],
    },
];

pub fn model_admin(entity: Entity) -> &'static ModelAdmin {
    let index = match entity {
        Entity::Users => 0,
        Entity::Teams => 1,
        Entity::Activities => 2,
        Entity::Leaderboard => 3,
        Entity::Workouts => 4,
    };
    &REGISTRY[index]
}

/// A single field value as seen by the admin views.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Date(Date),
    Timestamp(OffsetDateTime),
}

impl FieldValue {
    fn text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Date(d) => d.to_string(),
            FieldValue::Timestamp(ts) => ts.to_string(),
        }
    }

    /// Exact match on the text form; dates and timestamps match on `YYYY-MM-DD`.
    pub fn matches_filter(&self, raw: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == raw,
            FieldValue::Int(n) => raw.trim().parse::<i64>().is_ok_and(|v| v == *n),
            FieldValue::Date(d) => d.to_string() == raw,
            FieldValue::Timestamp(ts) => ts.date().to_string() == raw,
        }
    }

    fn contains_lowercase(&self, needle: &str) -> bool {
        self.text().to_lowercase().contains(needle)
    }

    fn to_json(&self) -> Value {
        match self {
            FieldValue::Int(n) => Value::from(*n),
            other => Value::String(other.text()),
        }
    }
}

/// Field access by name for admin listing.
pub trait AdminRecord {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

fn text(s: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(s.to_string()))
}

fn int(n: i32) -> Option<FieldValue> {
    Some(FieldValue::Int(i64::from(n)))
}

impl AdminRecord for User {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => text(&self.name),
            "email" => text(&self.email),
            "team" => text(&self.team),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

impl AdminRecord for Team {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => text(&self.name),
            "description" => text(&self.description),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

impl AdminRecord for Activity {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "user_id" => text(&self.user_id),
            "user_name" => text(&self.user_name),
            "activity_type" => text(&self.activity_type),
            "duration" => int(self.duration),
            "calories" => int(self.calories),
            "date" => Some(FieldValue::Date(self.date)),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

impl AdminRecord for LeaderboardEntry {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "user_id" => text(&self.user_id),
            "user_name" => text(&self.user_name),
            "team" => text(&self.team),
            "total_calories" => int(self.total_calories),
            "total_activities" => int(self.total_activities),
            "rank" => int(self.rank),
            "updated_at" => Some(FieldValue::Timestamp(self.updated_at)),
            _ => None,
        }
    }
}

impl AdminRecord for Workout {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => text(&self.name),
            "description" => text(&self.description),
            "difficulty" => text(&self.difficulty),
            "duration" => int(self.duration),
            "calories_estimate" => int(self.calories_estimate),
            "category" => text(&self.category),
            _ => None,
        }
    }
}

/// Parsed admin list parameters.
#[derive(Debug, Clone, Default)]
pub struct AdminQuery {
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub ordering: Option<Vec<String>>,
}

impl AdminQuery {
    pub fn from_params(params: HashMap<String, String>) -> Self {
        let mut query = AdminQuery::default();
        let mut filters: Vec<(String, String)> = Vec::new();

        for (key, value) in params {
            match key.as_str() {
                SEARCH_PARAM => {
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        query.search = Some(trimmed.to_lowercase());
                    }
                }
                ORDERING_PARAM => {
                    let fields: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(str::to_string)
                        .collect();
                    if !fields.is_empty() {
                        query.ordering = Some(fields);
                    }
                }
                _ => filters.push((key, value)),
            }
        }

        // HashMap iteration order is unspecified
        filters.sort();
        query.filters = filters;
        query
    }
}

#[derive(Debug, Serialize)]
pub struct AdminListResponse {
    pub model: Entity,
    pub columns: &'static [&'static str],
    pub rows: Vec<Map<String, Value>>,
    pub total_count: usize,
}

impl ModelAdmin {
    fn validate(&self, query: &AdminQuery) -> Result<(), AppError> {
        for (field, _) in &query.filters {
            if !self.list_filter.contains(&field.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Cannot filter {} by {field}",
                    self.model
                )));
            }
        }

        if let Some(ordering) = &query.ordering {
            for key in ordering {
                let field = key.trim_start_matches('-');
                if !self.list_display.contains(&field) {
                    return Err(AppError::InvalidInput(format!(
                        "Cannot order {} by {field}",
                        self.model
                    )));
                }
            }
        }

        Ok(())
    }

    fn matches<R: AdminRecord>(&self, record: &R, query: &AdminQuery) -> bool {
        let search_hit = query.search.as_deref().is_none_or(|needle| {
            self.search_fields
                .iter()
                .filter_map(|f| record.field(f))
                .any(|v| v.contains_lowercase(needle))
        });

        search_hit
            && query.filters.iter().all(|(field, raw)| {
                record
                    .field(field)
                    .is_some_and(|v| v.matches_filter(raw))
            })
    }

    /// Applies search, filters and ordering, then projects the
    /// `list_display` columns.
    pub fn list<R: AdminRecord>(
        &self,
        records: Vec<R>,
        query: &AdminQuery,
    ) -> Result<AdminListResponse, AppError> {
        self.validate(query)?;

        let ordering: Vec<&str> = match &query.ordering {
            Some(keys) => keys.iter().map(String::as_str).collect(),
            None => self.ordering.to_vec(),
        };

        let mut matched: Vec<R> = records
            .into_iter()
            .filter(|r| self.matches(r, query))
            .collect();
        matched.sort_by(|a, b| compare_by(a, b, &ordering));

        let rows: Vec<Map<String, Value>> = matched
            .iter()
            .map(|record| {
                self.list_display
                    .iter()
                    .map(|column| {
                        let value = record
                            .field(column)
                            .map(|v| v.to_json())
                            .unwrap_or(Value::Null);
                        (column.to_string(), value)
                    })
                    .collect()
            })
            .collect();

        Ok(AdminListResponse {
            model: self.model,
            columns: self.list_display,
            total_count: rows.len(),
            rows,
        })
    }
}

fn compare_by<R: AdminRecord>(a: &R, b: &R, ordering: &[&str]) -> Ordering {
    for key in ordering {
        let (field, descending) = match key.strip_prefix('-') {
            Some(field) => (field, true),
            None => (*key, false),
        };
        let ord = a.field(field).cmp(&b.field(field));
        let ord = if descending { ord.reverse() } else { ord };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
