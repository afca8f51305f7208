use log::debug;

use crate::tabs::{Method, Tab, TabGroup};
use crate::types::Schedule;

/// Something the user (or a settled request) did.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    TabClicked(Tab),
    MethodClicked(Method),
    /// The parse endpoint answered with success.
    ParseSucceeded {
        name: Option<String>,
        schedule: Option<Schedule>,
    },
    /// Copy the stored parse result into the YouGile form again.
    RefillRequested,
}

/// Field writes the page has to perform after an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Replace the YouGile form's schedule-data text.
    FillScheduleData(String),
    /// Replace the YouGile form's schedule-name text.
    FillScheduleName(String),
}

/// Navigation state plus the last successful parse result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub tabs: TabGroup<Tab>,
    pub methods: TabGroup<Method>,
    last_parse_result: Option<Schedule>,
}

impl ViewState {
    pub fn active_tab(&self) -> Option<Tab> {
        self.tabs.active()
    }

    pub fn active_method(&self) -> Option<Method> {
        self.methods.active()
    }

    pub fn last_parse_result(&self) -> Option<&Schedule> {
        self.last_parse_result.as_ref()
    }

    /// Apply one event and describe the field writes it causes.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::TabClicked(tab) => {
                self.tabs.activate(tab);
                Vec::new()
            }
            UiEvent::MethodClicked(method) => {
                self.methods.activate(method);
                Vec::new()
            }
            UiEvent::ParseSucceeded { name, schedule } => {
                let mut effects = Vec::new();
                if let Some(schedule) = schedule {
                    debug!("storing parse result for YouGile pre-fill");
                    self.last_parse_result = Some(schedule);
                    effects.extend(self.refill());
                }
                if let Some(name) = name.filter(|n| !n.is_empty()) {
                    effects.push(Effect::FillScheduleName(name));
                }
                effects
            }
            UiEvent::RefillRequested => self.refill(),
        }
    }

    /// Field writes that put the stored parse result into the YouGile form.
    /// Empty when nothing has been parsed yet.
    pub fn refill(&self) -> Vec<Effect> {
        self.last_parse_result
            .iter()
            .map(|schedule| Effect::FillScheduleData(schedule.to_pretty()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(name: &str, schedule: serde_json::Value) -> UiEvent {
        UiEvent::ParseSucceeded {
            name: Some(name.to_string()),
            schedule: Some(Schedule(schedule)),
        }
    }

    #[test]
    fn test_initial_markup_state() {
        let state = ViewState::default();
        assert_eq!(state.active_tab(), Some(Tab::Parse));
        assert_eq!(state.active_method(), Some(Method::Common));
        assert!(state.last_parse_result().is_none());
        assert!(state.refill().is_empty());
    }

    #[test]
    fn test_navigation_events() {
        let mut state = ViewState::default();
        assert!(state.handle(UiEvent::TabClicked(Tab::Analysis)).is_empty());
        assert!(state.handle(UiEvent::MethodClicked(Method::Split)).is_empty());
        assert_eq!(state.active_tab(), Some(Tab::Analysis));
        assert_eq!(state.active_method(), Some(Method::Split));
    }

    #[test]
    fn test_parse_success_fills_yougile_fields() {
        let mut state = ViewState::default();
        let effects = state.handle(parsed("W1", json!([{"week": 1}])));
        assert_eq!(
            effects,
            vec![
                Effect::FillScheduleData("[\n  {\n    \"week\": 1\n  }\n]".into()),
                Effect::FillScheduleName("W1".into()),
            ]
        );
        assert_eq!(state.last_parse_result(), Some(&Schedule(json!([{"week": 1}]))));
    }

    #[test]
    fn test_refill_is_idempotent() {
        let mut state = ViewState::default();
        state.handle(parsed("W1", json!({"days": ["Пн", "Вт"]})));
        let first = state.handle(UiEvent::RefillRequested);
        let second = state.handle(UiEvent::RefillRequested);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_newer_parse_replaces_older() {
        let mut state = ViewState::default();
        state.handle(parsed("W1", json!(1)));
        state.handle(parsed("W2", json!(2)));
        assert_eq!(state.last_parse_result(), Some(&Schedule(json!(2))));
    }

    #[test]
    fn test_parse_without_schedule_keeps_previous() {
        let mut state = ViewState::default();
        state.handle(parsed("W1", json!(1)));
        let effects = state.handle(UiEvent::ParseSucceeded {
            name: Some(String::new()),
            schedule: None,
        });
        assert!(effects.is_empty());
        assert_eq!(state.last_parse_result(), Some(&Schedule(json!(1))));
    }
}
