use leptos::prelude::*;
use leptos::task::spawn_local;
use schedule_core::submit::NETWORK_ERROR_HEADLINE;
use schedule_core::{
    submit_form, ApiOutcome, Effect, FormKind, HealthStatus, Presenter, RenderedResult, ViewState,
};

use crate::dom;

/// Service reachability as shown in the header.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Health {
    #[default]
    Checking,
    Up(HealthStatus),
    Down(String),
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub view: RwSignal<ViewState>,
    pub loading: RwSignal<bool>,
    pub result: RwSignal<Option<RenderedResult>>,
    pub yougile_schedule_data: RwSignal<String>,
    pub yougile_schedule_name: RwSignal<String>,
    pub health: RwSignal<Health>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::default()),
            loading: RwSignal::new(false),
            result: RwSignal::new(None),
            yougile_schedule_data: RwSignal::new(String::new()),
            yougile_schedule_name: RwSignal::new(String::new()),
            health: RwSignal::new(Health::Checking),
        }
    }

    /// Submit handler for one of the page's forms.
    pub fn submit_handler(self, kind: FormKind) -> impl Fn(web_sys::SubmitEvent) + Copy {
        move |ev| {
            ev.prevent_default();
            let Some(form) = dom::submitted_form(&ev) else {
                log::warn!("submit event without a form for {}", kind.form_id());
                return;
            };
            let fields = dom::form_fields(&form);
            let Some(client) = dom::api_client() else {
                self.show_result(RenderedResult::error(
                    NETWORK_ERROR_HEADLINE,
                    &ApiOutcome::local_error("Не удалось определить адрес сервера"),
                ));
                return;
            };
            spawn_local(async move {
                submit_form(&client, &self, kind, &fields).await;
            });
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for AppState {
    fn set_loading(&self, visible: bool) {
        self.loading.set(visible);
    }

    fn show_result(&self, result: RenderedResult) {
        self.result.set(Some(result));
    }

    fn update_view(&self, update: impl FnOnce(&mut ViewState) -> Vec<Effect>) -> Vec<Effect> {
        self.view.try_update(update).unwrap_or_default()
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::FillScheduleData(text) => self.yougile_schedule_data.set(text),
            Effect::FillScheduleName(name) => self.yougile_schedule_name.set(name),
        }
    }
}
