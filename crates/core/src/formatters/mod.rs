pub mod json;
pub mod text;

pub use json::report_to_json;
pub use text::{TextConfig, report_to_text};
