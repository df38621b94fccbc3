//! Logging setup and live quote presentation.

mod chart;
mod logging;
mod presenter_loop;
mod text;

pub use chart::ChartDashboard;
pub use logging::setup_logging;
pub use presenter_loop::run_presenter_loop;
pub use text::TextPresenter;
