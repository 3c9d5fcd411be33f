//! # Mapping Library Port
//!
//! The contract the map surface needs from an external mapping widget:
//! resolve a display region, create a map in it, create markers on that map
//! and subscribe to marker clicks.
//!
//! Click handlers do not get access to the host. They return an
//! [`OpenInfoWindow`] request and the host opens the window itself, which
//! keeps handlers free of borrows into the host that is calling them.

use std::fmt;

use crate::config::MapOptions;
use crate::geo::Coordinate;

/// A resolved display region, e.g. a `<div>` on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map#{}", self.0)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

/// Popup holding markup content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoWindow {
    content: String,
}

impl InfoWindow {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Asks the host to show this window on `map`, anchored at `anchor`.
    pub fn open(self, map: MapId, anchor: MarkerId) -> OpenInfoWindow {
        OpenInfoWindow {
            window: self,
            map,
            anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenInfoWindow {
    pub window: InfoWindow,
    pub map: MapId,
    pub anchor: MarkerId,
}

pub type ClickHandler = Box<dyn Fn() -> OpenInfoWindow>;

pub trait MapsApi {
    /// Looks up a display region by its identifier.
    fn find_region(&self, region_id: &str) -> Option<RegionHandle>;

    fn create_map(&mut self, region: RegionHandle, options: &MapOptions) -> anyhow::Result<MapId>;

    fn create_marker(&mut self, map: MapId, position: Coordinate) -> anyhow::Result<MarkerId>;

    /// Registers `handler` to run every time `marker` is clicked.
    ///
    /// Hosts must not invoke the handler during registration.
    fn add_click_listener(&mut self, marker: MarkerId, handler: ClickHandler)
        -> anyhow::Result<()>;
}
