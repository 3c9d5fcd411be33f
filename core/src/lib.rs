//! # Mapmark Core
//!
//! * **[`map`]**: the [`Map`] surface, the only thing callers drive directly.
//! * **[`entities`]**: demo [`Mappable`](mapmark_common::mappable::Mappable)
//!   implementations.
//! * **[`fake`]**: the `rand` backed [`DataGenerator`](mapmark_common::generator::DataGenerator).
//! * **[`widget`]**: implementations of the [`MapsApi`](mapmark_common::widget::MapsApi) port.

pub mod entities;
pub mod fake;
pub mod map;
pub mod widget;

pub use map::Map;
