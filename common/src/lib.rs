//! # Mapmark Common
//!
//! Shared models and ports used by every other crate in the workspace.
//!
//! * **[`geo`]**: the [`geo::Coordinate`] value object.
//! * **[`mappable`]**: the capability an entity needs to be placed on a map.
//! * **[`widget`]**: the port towards the external mapping library.
//! * **[`generator`]**: the port towards the synthetic data source.
//! * **[`config`]**: runtime configuration and initial map view options.
//! * **[`error`]**: the error taxonomy shared by all layers.

pub mod config;
pub mod error;
pub mod generator;
pub mod geo;
pub mod mappable;
pub mod widget;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target used for events that report a completed step to the user.
pub const SUCCESS_TARGET: &str = "mapmark::success";

/// Logs a success message. Rendered with its own prefix by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}
