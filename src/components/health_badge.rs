use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dom;
use crate::state::{AppState, Health};

/// Service status in the header. Checked once when the page mounts.
#[component]
pub fn HealthBadge() -> impl IntoView {
    let state = expect_context::<AppState>();

    if let Some(client) = dom::api_client() {
        spawn_local(async move {
            let health = match client.health().await {
                Ok(status) => Health::Up(status),
                Err(e) => {
                    log::warn!("health check failed: {e}");
                    Health::Down(e.outcome().message)
                }
            };
            state.health.set(health);
        });
    } else {
        state.health.set(Health::Down("no window origin".into()));
    }

    let class = move || match state.health.get() {
        Health::Checking => "health-badge checking",
        Health::Up(ref s) if s.is_healthy() => "health-badge up",
        Health::Up(_) | Health::Down(_) => "health-badge down",
    };
    let text = move || match state.health.get() {
        Health::Checking => "Проверка сервиса...".to_string(),
        Health::Up(s) if s.version.is_empty() => s.message,
        Health::Up(s) => format!("{} (v{})", s.message, s.version),
        Health::Down(reason) => format!("Сервис недоступен: {reason}"),
    };
    let title = move || match state.health.get() {
        Health::Up(s) => s
            .endpoints
            .iter()
            .map(|(name, path)| format!("{name}: {path}"))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    };

    view! { <span class=class title=title>{text}</span> }
}
