//! Tab bar and the rules for switching tabs.

pub mod bar;
pub mod navigator;

pub use bar::TabBar;
