use schedule_api::ScheduleClient;
use schedule_core::FormFields;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const RESULTS_ID: &str = "results";
pub const RESULTS_CONTENT_ID: &str = "results-content";
pub const LOADING_ID: &str = "loading";

/// Snapshot a form's submitted fields the way `FormData` sees them:
/// unchecked checkboxes are left out, file inputs are skipped.
pub fn form_fields(form: &HtmlFormElement) -> FormFields {
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        log::warn!("FormData unavailable for #{}", form.id());
        return FormFields::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return FormFields::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// Form element behind a submit event.
pub fn submitted_form(ev: &web_sys::SubmitEvent) -> Option<HtmlFormElement> {
    ev.target()?.dyn_into().ok()
}

/// Client for the service that served this page.
pub fn api_client() -> Option<ScheduleClient> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(schedule_api::client(origin))
}

/// Scroll on the next animation frame, after pending view updates have
/// reached the DOM.
pub fn scroll_into_view_next_frame(id: &'static str) {
    let Some(window) = web_sys::window() else { return };
    let cb = Closure::once(move || scroll_into_view(id));
    let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    cb.forget();
}

pub fn scroll_into_view(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
