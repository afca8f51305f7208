use leptos::prelude::*;
use schedule_core::{Method, Tab, TabKey};

use crate::state::AppState;
use crate::components::analysis_forms::{CommonWindowForm, SplitWindowForm};
use crate::components::health_badge::HealthBadge;
use crate::components::loading::LoadingIndicator;
use crate::components::parse_form::ParseForm;
use crate::components::results::ResultsPanel;
use crate::components::tabs::{MethodTabs, TabPanel, Tabs};
use crate::components::yougile_form::YougileForm;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    view! {
        <div class="container">
            <header class="header">
                <h1>"Расписание НИУ МЭИ \u{2192} YouGile"</h1>
                <HealthBadge />
            </header>
            <Tabs />
            <main class="main">
                <TabPanel tab=Tab::Parse>
                    <ParseForm />
                </TabPanel>
                <TabPanel tab=Tab::Yougile>
                    <YougileForm />
                </TabPanel>
                <TabPanel tab=Tab::Analysis>
                    <AnalysisArea />
                </TabPanel>
            </main>
            <LoadingIndicator />
            <ResultsPanel />
        </div>
    }
}

#[component]
fn AnalysisArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let method_class = move |method: Method| {
        state.view.with(|v| v.methods.class_for("method-content", method))
    };

    view! {
        <MethodTabs />
        <div id=Method::Common.panel_id() class=move || method_class(Method::Common)>
            <CommonWindowForm />
        </div>
        <div id=Method::Split.panel_id() class=move || method_class(Method::Split)>
            <SplitWindowForm />
        </div>
    }
}
