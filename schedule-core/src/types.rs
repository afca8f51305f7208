use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A parsed schedule as returned by the backend.
///
/// The shape belongs to the server; this layer only stores it and forwards it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule(pub Value);

impl Schedule {
    /// Two-space indented JSON, the format shown in the YouGile form.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Group,
    Room,
    Teacher,
}

impl ScheduleType {
    pub const ALL: &'static [ScheduleType] = &[Self::Group, Self::Room, Self::Teacher];

    pub fn id(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Room => "room",
            Self::Teacher => "teacher",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Group => "Группа",
            Self::Room => "Аудитория",
            Self::Teacher => "Преподаватель",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }
}

/// Body of `POST /api/v1/schedule/parse`.
///
/// Fields are passed through as entered; an unparseable `max_weeks` goes out
/// as `null` so the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParseRequest {
    pub name: Option<String>,
    pub schedule_type: Option<String>,
    pub cleanup_files: bool,
    pub max_weeks: Option<i64>,
    pub save_to_file: bool,
    pub filename: Option<String>,
}

/// Body of `POST /api/v1/yougile/integrate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YougileRequest {
    pub login: Option<String>,
    pub password: Option<String>,
    pub schedule_data: Schedule,
    pub schedule_name: Option<String>,
    pub project_title: Option<String>,
}

/// Shared envelope of both analysis endpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisRequest<P> {
    pub login: Option<String>,
    pub password: Option<String>,
    pub project_title: Option<String>,
    pub search_parameters: P,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommonWindowParameters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub required_duration: Option<f64>,
    pub participants: Vec<String>,
    pub earliest_start_time: Option<String>,
    pub latest_end_time: Option<String>,
    pub min_gap_hours: Option<f64>,
    pub maximize_participants: bool,
    pub minimize_start_time: bool,
    pub minimize_total_idle: bool,
    pub minimize_max_gap: bool,
    pub include_holidays: bool,
    pub include_weekends: bool,
    pub weight_participants: Option<f64>,
    pub weight_start_time: Option<f64>,
    pub weight_total_idle: Option<f64>,
    pub weight_max_gap: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitWindowParameters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_duration: Option<f64>,
    pub min_segment_duration: Option<f64>,
    pub max_segments: Option<i64>,
    pub participants: Vec<String>,
    pub earliest_start_time: Option<String>,
    pub latest_end_time: Option<String>,
    pub min_gap_hours: Option<f64>,
    pub include_holidays: bool,
    pub include_weekends: bool,
}

/// Response of `GET /api/v1/health`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
