use leptos::prelude::*;
use schedule_core::range::RangeReadout;

/// A range input with a live readout next to it.
///
/// The readout shows the raw value the input reports, so `1` stays `1` and
/// `1.5` stays `1.5`.
#[component]
pub fn RangeField(
    id: &'static str,
    label: &'static str,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 2.0)] max: f64,
    #[prop(default = 0.1)] step: f64,
    value: f64,
) -> impl IntoView {
    let readout = RwSignal::new(RangeReadout::new(id, value));
    let readout_id = readout.with_untracked(|r| r.readout_id());

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        readout.update(|r| r.on_input(&raw));
    };

    view! {
        <div class="form-group range-group">
            <label for=id>{label}</label>
            <div class="range-row">
                <input
                    type="range"
                    id=id
                    name=id
                    min=min.to_string()
                    max=max.to_string()
                    step=step.to_string()
                    value=value.to_string()
                    on:input=on_input
                />
                <span id=readout_id class="range-value">
                    {move || readout.with(|r| r.text().to_string())}
                </span>
            </div>
        </div>
    }
}
