pub mod format;
pub mod render;
pub mod state;

pub use render::{render_comparison, render_profile, ReportFormat};
pub use state::FetchState;
