use leptos::prelude::*;
use schedule_core::forms::{defaults, field};
use schedule_core::{FormKind, Presenter, UiEvent};

use crate::state::AppState;

pub const SCHEDULE_DATA_ID: &str = "yougile-schedule-data";
pub const SCHEDULE_NAME_ID: &str = "yougile-schedule-name";

/// YouGile export form. Its schedule fields are pre-filled after every
/// successful parse and can be refilled from the last result on demand.
#[component]
pub fn YougileForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let kind = FormKind::Yougile;

    let on_data_input = move |ev: web_sys::Event| {
        state.yougile_schedule_data.set(event_target_value(&ev));
    };
    let on_name_input = move |ev: web_sys::Event| {
        state.yougile_schedule_name.set(event_target_value(&ev));
    };
    let on_refill = move |_: web_sys::MouseEvent| {
        state.dispatch(UiEvent::RefillRequested);
    };

    view! {
        <form id=kind.form_id() class="form" on:submit=state.submit_handler(kind)>
            <h2>"Интеграция с YouGile"</h2>
            <div class="form-group">
                <label for="yougile-login">"Логин YouGile"</label>
                <input type="email" id="yougile-login" name=field::LOGIN autocomplete="username" required />
            </div>
            <div class="form-group">
                <label for="yougile-password">"Пароль"</label>
                <input
                    type="password"
                    id="yougile-password"
                    name=field::PASSWORD
                    autocomplete="current-password"
                    required
                />
            </div>
            <div class="form-group">
                <label for="yougile-project-title">"Название проекта"</label>
                <input
                    type="text"
                    id="yougile-project-title"
                    name=field::PROJECT_TITLE
                    value=defaults::PROJECT_TITLE
                />
            </div>
            <div class="form-group">
                <label for=SCHEDULE_NAME_ID>"Название расписания"</label>
                <input
                    type="text"
                    id=SCHEDULE_NAME_ID
                    name=field::SCHEDULE_NAME
                    prop:value=move || state.yougile_schedule_name.get()
                    on:input=on_name_input
                />
            </div>
            <div class="form-group">
                <label for=SCHEDULE_DATA_ID>"Данные расписания (JSON)"</label>
                <textarea
                    id=SCHEDULE_DATA_ID
                    name=field::SCHEDULE_DATA
                    rows="12"
                    prop:value=move || state.yougile_schedule_data.get()
                    on:input=on_data_input
                ></textarea>
                <button type="button" class="btn btn-secondary" on:click=on_refill>
                    <i class="fas fa-sync"></i>
                    " Заполнить из последнего парсинга"
                </button>
            </div>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-upload"></i>
                " Загрузить в YouGile"
            </button>
        </form>
    }
}
