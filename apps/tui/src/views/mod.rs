//! Views composed from components.

pub mod layout;
pub mod terminal;

pub use layout::WindowLayout;
pub use terminal::render_window;
