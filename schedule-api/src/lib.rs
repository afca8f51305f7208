pub mod config;
pub mod http;

pub use config::{resolve_base_url, DEFAULT_BASE_URL};
pub use http::HttpTransport;

/// Client talking to the schedule service over HTTP.
pub type ScheduleClient = schedule_core::ApiClient<HttpTransport>;

pub fn client(base_url: impl Into<String>) -> ScheduleClient {
    schedule_core::ApiClient::new(HttpTransport::new(base_url))
}
