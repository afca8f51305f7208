use leptos::prelude::*;
use schedule_core::render::DATA_CAPTION;

use crate::dom::{self, RESULTS_CONTENT_ID, RESULTS_ID};
use crate::state::AppState;

/// Shows the latest submission outcome. Each new result replaces the
/// previous one wholesale.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Runs once per shown result; the panel is only laid out after the view
    // update lands, so the scroll waits a frame.
    Effect::new(move || {
        if state.result.with(Option::is_some) {
            dom::scroll_into_view_next_frame(RESULTS_ID);
        }
    });

    view! {
        <section
            id=RESULTS_ID
            class="results"
            style:display=move || if state.result.with(Option::is_some) { "block" } else { "none" }
        >
            <div id=RESULTS_CONTENT_ID>
                {move || state.result.get().map(|result| {
                    let icon = format!("fas fa-{}", result.kind.icon());
                    view! {
                        <div class=format!("result {}", result.kind.css_class())>
                            <h3>
                                <i class=icon></i>
                                " "
                                {result.headline}
                            </h3>
                            <p>{result.message}</p>
                            {result.data.map(|data| view! {
                                <div class="result-data">
                                    <h4>{DATA_CAPTION}</h4>
                                    <pre>{data}</pre>
                                </div>
                            })}
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
