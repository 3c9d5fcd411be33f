//! Hosts implementing the [`MapsApi`](mapmark_common::widget::MapsApi) port.
//!
//! * [`headless::HeadlessMaps`] keeps everything in memory and lets callers
//!   click markers programmatically.
//! * [`html::HtmlMaps`] writes a standalone Leaflet page.
//!
//! Both wrap the same in-process registry of regions, maps and markers.

pub mod headless;
pub mod html;
mod registry;
