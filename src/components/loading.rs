use leptos::prelude::*;

use crate::dom::LOADING_ID;
use crate::state::AppState;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div
            id=LOADING_ID
            class="loading"
            style:display=move || if state.loading.get() { "flex" } else { "none" }
        >
            <div class="spinner"></div>
            <p>"Обработка запроса..."</p>
        </div>
    }
}
