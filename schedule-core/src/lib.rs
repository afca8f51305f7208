pub mod types;
pub mod forms;
pub mod tabs;
pub mod range;
pub mod view_state;
pub mod outcome;
pub mod client;
pub mod render;
pub mod submit;

pub use client::{ApiClient, Endpoint, RawResponse, Transport};
pub use forms::{FormError, FormFields};
pub use outcome::{ApiError, ApiOutcome};
pub use render::{RenderedResult, ResultKind};
pub use submit::{submit_form, BusyGuard, FormKind, Presenter, SubmissionOutcome};
pub use tabs::{Method, Tab, TabGroup, TabKey};
pub use types::{HealthStatus, Schedule, ScheduleType};
pub use view_state::{Effect, UiEvent, ViewState};
