//! Reusable UI components

mod button;
mod dialog;
mod icons;

pub use button::*;
pub use dialog::*;
pub use icons::*;
