use leptos::prelude::*;
use schedule_core::forms::{defaults, field};
use schedule_core::{FormKind, ScheduleType};

use crate::state::AppState;

#[component]
pub fn ParseForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let kind = FormKind::Parse;

    let options = ScheduleType::ALL
        .iter()
        .map(|t| view! { <option value=t.id()>{t.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <form id=kind.form_id() class="form" on:submit=state.submit_handler(kind)>
            <h2>"Парсинг расписания"</h2>
            <div class="form-group">
                <label for="parse-name">"Название (группа, аудитория или преподаватель)"</label>
                <input type="text" id="parse-name" name=field::NAME placeholder="А-08-21" required />
            </div>
            <div class="form-group">
                <label for="parse-schedule-type">"Тип расписания"</label>
                <select id="parse-schedule-type" name=field::SCHEDULE_TYPE>
                    {options}
                </select>
            </div>
            <div class="form-group">
                <label for="parse-max-weeks">"Количество недель"</label>
                <input
                    type="number"
                    id="parse-max-weeks"
                    name=field::MAX_WEEKS
                    min="1"
                    value=defaults::MAX_WEEKS.to_string()
                />
            </div>
            <div class="form-group checkbox-group">
                <label>
                    <input type="checkbox" name=field::CLEANUP_FILES checked />
                    " Удалить временные файлы"
                </label>
                <label>
                    <input type="checkbox" name=field::SAVE_TO_FILE />
                    " Сохранить в файл"
                </label>
            </div>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-download"></i>
                " Получить расписание"
            </button>
        </form>
    }
}
