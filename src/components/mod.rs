pub mod app;
pub mod tabs;
pub mod range_field;
pub mod parse_form;
pub mod yougile_form;
pub mod analysis_forms;
pub mod results;
pub mod loading;
pub mod health_badge;
