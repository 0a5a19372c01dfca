//! Console output outside of live displays.

pub mod notifier;
pub mod panel;
