//! Chart payloads and the HTML report that carries them.

pub mod plots;
pub mod report;

pub use report::{render_report, write_report};
