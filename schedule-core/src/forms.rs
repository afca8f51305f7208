//! Turning submitted form fields into typed request bodies.
//!
//! The collectors mirror what a browser `FormData` exposes: every field is a
//! string, and an unchecked checkbox is simply missing. A checkbox counts as
//! `true` whenever its field is present, whatever its value.

use serde_json::Value;
use thiserror::Error;

use crate::outcome::ApiOutcome;
use crate::types::{
    AnalysisRequest, CommonWindowParameters, ParseRequest, Schedule, SplitWindowParameters,
    YougileRequest,
};

/// Field names shared by the browser forms and the terminal front end.
pub mod field {
    pub const NAME: &str = "name";
    pub const SCHEDULE_TYPE: &str = "schedule_type";
    pub const CLEANUP_FILES: &str = "cleanup_files";
    pub const MAX_WEEKS: &str = "max_weeks";
    pub const SAVE_TO_FILE: &str = "save_to_file";

    pub const LOGIN: &str = "login";
    pub const PASSWORD: &str = "password";
    pub const PROJECT_TITLE: &str = "project_title";
    pub const SCHEDULE_DATA: &str = "schedule_data";
    pub const SCHEDULE_NAME: &str = "schedule_name";

    pub const PARTICIPANTS: &str = "participants";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const EARLIEST_START_TIME: &str = "earliest_start_time";
    pub const LATEST_END_TIME: &str = "latest_end_time";
    pub const MIN_GAP_HOURS: &str = "min_gap_hours";
    pub const INCLUDE_HOLIDAYS: &str = "include_holidays";
    pub const INCLUDE_WEEKENDS: &str = "include_weekends";

    pub const REQUIRED_DURATION: &str = "required_duration";
    pub const MAXIMIZE_PARTICIPANTS: &str = "maximize_participants";
    pub const MINIMIZE_START_TIME: &str = "minimize_start_time";
    pub const MINIMIZE_TOTAL_IDLE: &str = "minimize_total_idle";
    pub const MINIMIZE_MAX_GAP: &str = "minimize_max_gap";
    pub const WEIGHT_PARTICIPANTS: &str = "weight_participants";
    pub const WEIGHT_START_TIME: &str = "weight_start_time";
    pub const WEIGHT_TOTAL_IDLE: &str = "weight_total_idle";
    pub const WEIGHT_MAX_GAP: &str = "weight_max_gap";

    pub const TOTAL_DURATION: &str = "total_duration";
    pub const MIN_SEGMENT_DURATION: &str = "min_segment_duration";
    pub const MAX_SEGMENTS: &str = "max_segments";
}

/// Initial values for the form inputs, matching the backend model defaults.
pub mod defaults {
    pub const MAX_WEEKS: u32 = 21;
    pub const PROJECT_TITLE: &str = "Учебное расписание";
    pub const EARLIEST_START_TIME: &str = "07:00";
    pub const LATEST_END_TIME: &str = "23:00";
    pub const MIN_GAP_HOURS: f64 = 0.0;
    pub const WEIGHT: f64 = 1.0;
    pub const MIN_SEGMENT_DURATION: f64 = 0.5;
    pub const MAX_SEGMENTS: u32 = 5;
}

/// Ordered name/value pairs of one submitted form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(coerce_int)
    }

    fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(coerce_float)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Input rejected before any request is made.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Необходимо указать хотя бы одного участника")]
    NoParticipants,

    #[error("Неверный формат JSON данных расписания")]
    MalformedSchedule(#[source] serde_json::Error),
}

impl FormError {
    pub fn headline(&self) -> &'static str {
        match self {
            Self::NoParticipants => "Ошибка валидации",
            Self::MalformedSchedule(_) => "Ошибка парсинга JSON",
        }
    }

    pub fn outcome(&self) -> ApiOutcome {
        ApiOutcome::local_error(self.to_string())
    }
}

/// Split a comma separated participant list, trimming and dropping blanks.
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Integer coercion with leading-prefix semantics: `"4"`, `" 4 "` and `"4.7"`
/// give 4, `"abc"` gives `None`.
///
/// Decimal only: `"0x10"` gives 0, and values outside `i64` give `None` (sent
/// as `null`). Number inputs never submit either form.
pub fn coerce_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

/// Float coercion with leading-prefix semantics: `"1.5h"` gives 1.5, `"-"` and
/// `"abc"` give `None`. Non-finite results are `None` since JSON cannot carry
/// them.
pub fn coerce_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digit_run = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digit_run(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digit_run(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digit_run(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|f| f.is_finite())
}

pub fn collect_parse(fields: &FormFields) -> ParseRequest {
    ParseRequest {
        name: fields.text(field::NAME),
        schedule_type: fields.text(field::SCHEDULE_TYPE),
        cleanup_files: fields.has(field::CLEANUP_FILES),
        max_weeks: fields.int(field::MAX_WEEKS),
        save_to_file: fields.has(field::SAVE_TO_FILE),
        filename: None,
    }
}

pub fn collect_yougile(fields: &FormFields) -> Result<YougileRequest, FormError> {
    let raw = fields.get(field::SCHEDULE_DATA).unwrap_or_default();
    let schedule_data: Value = serde_json::from_str(raw).map_err(FormError::MalformedSchedule)?;
    Ok(YougileRequest {
        login: fields.text(field::LOGIN),
        password: fields.text(field::PASSWORD),
        schedule_data: Schedule(schedule_data),
        schedule_name: fields.text(field::SCHEDULE_NAME),
        project_title: fields.text(field::PROJECT_TITLE),
    })
}

fn collect_participants(fields: &FormFields) -> Result<Vec<String>, FormError> {
    let participants = parse_participants(fields.get(field::PARTICIPANTS).unwrap_or_default());
    if participants.is_empty() {
        return Err(FormError::NoParticipants);
    }
    Ok(participants)
}

fn envelope<P>(fields: &FormFields, search_parameters: P) -> AnalysisRequest<P> {
    AnalysisRequest {
        login: fields.text(field::LOGIN),
        password: fields.text(field::PASSWORD),
        project_title: fields.text(field::PROJECT_TITLE),
        search_parameters,
    }
}

pub fn collect_common_window(
    fields: &FormFields,
) -> Result<AnalysisRequest<CommonWindowParameters>, FormError> {
    let participants = collect_participants(fields)?;
    Ok(envelope(
        fields,
        CommonWindowParameters {
            start_date: fields.text(field::START_DATE),
            end_date: fields.text(field::END_DATE),
            required_duration: fields.float(field::REQUIRED_DURATION),
            participants,
            earliest_start_time: fields.text(field::EARLIEST_START_TIME),
            latest_end_time: fields.text(field::LATEST_END_TIME),
            min_gap_hours: fields.float(field::MIN_GAP_HOURS),
            maximize_participants: fields.has(field::MAXIMIZE_PARTICIPANTS),
            minimize_start_time: fields.has(field::MINIMIZE_START_TIME),
            minimize_total_idle: fields.has(field::MINIMIZE_TOTAL_IDLE),
            minimize_max_gap: fields.has(field::MINIMIZE_MAX_GAP),
            include_holidays: fields.has(field::INCLUDE_HOLIDAYS),
            include_weekends: fields.has(field::INCLUDE_WEEKENDS),
            weight_participants: fields.float(field::WEIGHT_PARTICIPANTS),
            weight_start_time: fields.float(field::WEIGHT_START_TIME),
            weight_total_idle: fields.float(field::WEIGHT_TOTAL_IDLE),
            weight_max_gap: fields.float(field::WEIGHT_MAX_GAP),
        },
    ))
}

pub fn collect_split_window(
    fields: &FormFields,
) -> Result<AnalysisRequest<SplitWindowParameters>, FormError> {
    let participants = collect_participants(fields)?;
    Ok(envelope(
        fields,
        SplitWindowParameters {
            start_date: fields.text(field::START_DATE),
            end_date: fields.text(field::END_DATE),
            total_duration: fields.float(field::TOTAL_DURATION),
            min_segment_duration: fields.float(field::MIN_SEGMENT_DURATION),
            max_segments: fields.int(field::MAX_SEGMENTS),
            participants,
            earliest_start_time: fields.text(field::EARLIEST_START_TIME),
            latest_end_time: fields.text(field::LATEST_END_TIME),
            min_gap_hours: fields.float(field::MIN_GAP_HOURS),
            include_holidays: fields.has(field::INCLUDE_HOLIDAYS),
            include_weekends: fields.has(field::INCLUDE_WEEKENDS),
        },
    ))
}
