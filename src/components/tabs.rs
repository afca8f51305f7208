use leptos::prelude::*;
use schedule_core::{Method, Presenter, Tab, TabKey, UiEvent};

use crate::state::AppState;

/// Top-level tab triggers. Clicking one routes through the view state, which
/// keeps exactly one tab and its panel marked active.
#[component]
pub fn Tabs() -> impl IntoView {
    let state = expect_context::<AppState>();

    let buttons: Vec<_> = Tab::ALL
        .iter()
        .map(|&tab| {
            let class = move || state.view.with(|v| v.tabs.class_for("tab-button", tab));
            view! {
                <button
                    type="button"
                    class=class
                    data-tab=tab.id()
                    on:click=move |_| state.dispatch(UiEvent::TabClicked(tab))
                >
                    {tab.label()}
                </button>
            }
        })
        .collect();

    view! { <nav class="tabs">{buttons}</nav> }
}

#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();
    let class = move || state.view.with(|v| v.tabs.class_for("tab-content", tab));

    view! {
        <section id=tab.panel_id() class=class>
            {children()}
        </section>
    }
}

/// Analysis method triggers, same contract as [`Tabs`] within the analysis tab.
#[component]
pub fn MethodTabs() -> impl IntoView {
    let state = expect_context::<AppState>();

    let buttons: Vec<_> = Method::ALL
        .iter()
        .map(|&method| {
            let class = move || state.view.with(|v| v.methods.class_for("method-tab", method));
            view! {
                <button
                    type="button"
                    class=class
                    data-method=method.id()
                    on:click=move |_| state.dispatch(UiEvent::MethodClicked(method))
                >
                    {method.label()}
                </button>
            }
        })
        .collect();

    view! { <div class="method-tabs">{buttons}</div> }
}
