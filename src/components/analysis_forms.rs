use leptos::prelude::*;
use schedule_core::forms::{defaults, field};
use schedule_core::FormKind;

use crate::components::range_field::RangeField;
use crate::state::AppState;

/// Inputs both window searches share. Element ids are prefixed so the two
/// forms can live on one page.
#[component]
fn SearchBasics(prefix: &'static str) -> impl IntoView {
    let id = move |name: &str| format!("{prefix}-{name}");

    view! {
        <div class="form-row">
            <div class="form-group">
                <label for=id(field::LOGIN)>"Логин YouGile"</label>
                <input type="email" id=id(field::LOGIN) name=field::LOGIN required />
            </div>
            <div class="form-group">
                <label for=id(field::PASSWORD)>"Пароль"</label>
                <input type="password" id=id(field::PASSWORD) name=field::PASSWORD required />
            </div>
            <div class="form-group">
                <label for=id(field::PROJECT_TITLE)>"Название проекта"</label>
                <input
                    type="text"
                    id=id(field::PROJECT_TITLE)
                    name=field::PROJECT_TITLE
                    value=defaults::PROJECT_TITLE
                />
            </div>
        </div>
        <div class="form-group">
            <label for=id(field::PARTICIPANTS)>"Участники (через запятую)"</label>
            <textarea id=id(field::PARTICIPANTS) name=field::PARTICIPANTS rows="4"></textarea>
        </div>
        <div class="form-row">
            <div class="form-group">
                <label for=id(field::START_DATE)>"Дата начала"</label>
                <input type="date" id=id(field::START_DATE) name=field::START_DATE required />
            </div>
            <div class="form-group">
                <label for=id(field::END_DATE)>"Дата окончания"</label>
                <input type="date" id=id(field::END_DATE) name=field::END_DATE required />
            </div>
        </div>
        <div class="form-row">
            <div class="form-group">
                <label for=id(field::EARLIEST_START_TIME)>"Не раньше"</label>
                <input
                    type="time"
                    id=id(field::EARLIEST_START_TIME)
                    name=field::EARLIEST_START_TIME
                    value=defaults::EARLIEST_START_TIME
                />
            </div>
            <div class="form-group">
                <label for=id(field::LATEST_END_TIME)>"Не позже"</label>
                <input
                    type="time"
                    id=id(field::LATEST_END_TIME)
                    name=field::LATEST_END_TIME
                    value=defaults::LATEST_END_TIME
                />
            </div>
            <div class="form-group">
                <label for=id(field::MIN_GAP_HOURS)>"Минимальный перерыв (ч)"</label>
                <input
                    type="number"
                    id=id(field::MIN_GAP_HOURS)
                    name=field::MIN_GAP_HOURS
                    min="0"
                    step="0.25"
                    value=defaults::MIN_GAP_HOURS.to_string()
                />
            </div>
        </div>
        <div class="form-group checkbox-group">
            <label>
                <input type="checkbox" name=field::INCLUDE_HOLIDAYS />
                " Учитывать праздники"
            </label>
            <label>
                <input type="checkbox" name=field::INCLUDE_WEEKENDS />
                " Учитывать выходные"
            </label>
        </div>
    }
}

#[component]
pub fn CommonWindowForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let kind = FormKind::CommonWindow;

    view! {
        <form id=kind.form_id() class="form" on:submit=state.submit_handler(kind)>
            <h3>"Общее окно"</h3>
            <SearchBasics prefix="common" />
            <div class="form-group">
                <label for="common-required-duration">"Длительность встречи (ч)"</label>
                <input
                    type="number"
                    id="common-required-duration"
                    name=field::REQUIRED_DURATION
                    min="0.25"
                    step="0.25"
                    value="1"
                    required
                />
            </div>
            <fieldset class="criteria">
                <legend>"Критерии"</legend>
                <label>
                    <input type="checkbox" name=field::MAXIMIZE_PARTICIPANTS checked />
                    " Максимум участников"
                </label>
                <label>
                    <input type="checkbox" name=field::MINIMIZE_START_TIME />
                    " Раннее начало"
                </label>
                <label>
                    <input type="checkbox" name=field::MINIMIZE_TOTAL_IDLE />
                    " Минимум простоя"
                </label>
                <label>
                    <input type="checkbox" name=field::MINIMIZE_MAX_GAP />
                    " Минимум максимального разрыва"
                </label>
            </fieldset>
            <fieldset class="weights">
                <legend>"Веса критериев"</legend>
                <RangeField id=field::WEIGHT_PARTICIPANTS label="Участники" value=defaults::WEIGHT />
                <RangeField id=field::WEIGHT_START_TIME label="Время начала" value=defaults::WEIGHT />
                <RangeField id=field::WEIGHT_TOTAL_IDLE label="Простой" value=defaults::WEIGHT />
                <RangeField id=field::WEIGHT_MAX_GAP label="Разрыв" value=defaults::WEIGHT />
            </fieldset>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-search"></i>
                " Найти общее окно"
            </button>
        </form>
    }
}

#[component]
pub fn SplitWindowForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let kind = FormKind::SplitWindow;

    view! {
        <form id=kind.form_id() class="form" on:submit=state.submit_handler(kind)>
            <h3>"Сплит окно"</h3>
            <SearchBasics prefix="split" />
            <div class="form-row">
                <div class="form-group">
                    <label for="split-total-duration">"Общая длительность (ч)"</label>
                    <input
                        type="number"
                        id="split-total-duration"
                        name=field::TOTAL_DURATION
                        min="0.5"
                        step="0.25"
                        value="2"
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="split-min-segment">"Минимальный сегмент (ч)"</label>
                    <input
                        type="number"
                        id="split-min-segment"
                        name=field::MIN_SEGMENT_DURATION
                        min="0.25"
                        step="0.25"
                        value=defaults::MIN_SEGMENT_DURATION.to_string()
                    />
                </div>
                <div class="form-group">
                    <label for="split-max-segments">"Максимум сегментов"</label>
                    <input
                        type="number"
                        id="split-max-segments"
                        name=field::MAX_SEGMENTS
                        min="1"
                        value=defaults::MAX_SEGMENTS.to_string()
                    />
                </div>
            </div>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-search"></i>
                " Найти сплит окно"
            </button>
        </form>
    }
}
