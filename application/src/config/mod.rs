//! Application-level configuration.
//!
//! - [`PresenterParams`]: how the callback presenter renders progress

pub mod presenter_params;

pub use presenter_params::PresenterParams;
