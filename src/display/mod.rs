//! Display formatting for terminal output
//!
//! Plain-text renderings of the service results. JSON output bypasses this
//! module and serializes the results directly.

pub mod dashboard;
pub mod report;
pub mod transaction;
pub mod trends;
pub mod window;

pub use dashboard::{format_card_performance, format_dashboard};
pub use transaction::format_label_list;
pub use trends::format_trends;
pub use window::format_card_windows;
