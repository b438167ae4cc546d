//! Visual theme for Chatpane.

mod styles;

pub use styles::GLOBAL_STYLES;
