//! Reusable widgets for the terminal window.

pub mod incident_alert;
pub mod title_bar;

pub use incident_alert::{ALERT_HEIGHT, ALERT_WIDTH, alert_lines, render_incident_alert};
pub use title_bar::{render_title_bar, window_title};
