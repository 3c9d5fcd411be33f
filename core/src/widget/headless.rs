//! In-memory mapping host.
//!
//! Stands in for a browser page: regions are declared up front, markers are
//! recorded, and [`HeadlessMaps::click`] plays the part of the UI event loop.

use mapmark_common::config::MapOptions;
use mapmark_common::error::{MapError, MapResult};
use mapmark_common::geo::Coordinate;
use mapmark_common::widget::{
    ClickHandler, MapId, MapsApi, MarkerId, OpenInfoWindow, RegionHandle,
};
use tracing::trace;

use super::registry::Registry;

#[derive(Default)]
pub struct HeadlessMaps {
    registry: Registry,
    open_windows: Vec<OpenInfoWindow>,
}

impl HeadlessMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions<I, S>(region_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new();
        for id in region_ids {
            host.add_region(id);
        }
        host
    }

    /// Declares a region. Declaring the same id twice is a no-op.
    pub fn add_region(&mut self, region_id: impl Into<String>) -> RegionHandle {
        self.registry.add_region(region_id)
    }

    /// Dispatches a click on `marker` to every listener registered on it.
    ///
    /// Returns the info windows opened by this click. Like windows in a
    /// browser they stay open, so [`open_windows`](Self::open_windows) grows
    /// with every click until [`close_all`](Self::close_all) is called.
    pub fn click(&mut self, marker: MarkerId) -> MapResult<&[OpenInfoWindow]> {
        let state = self
            .registry
            .marker(marker)
            .ok_or(MapError::UnknownMarker(marker))?;

        trace!(%marker, listeners = state.listeners.len(), "dispatching click");
        let first_new = self.open_windows.len();
        let opened: Vec<OpenInfoWindow> = state.listeners.iter().map(|handler| handler()).collect();
        self.open_windows.extend(opened);

        Ok(&self.open_windows[first_new..])
    }

    /// Every info window opened and not yet closed, oldest first.
    pub fn open_windows(&self) -> &[OpenInfoWindow] {
        &self.open_windows
    }

    pub fn close_all(&mut self) {
        self.open_windows.clear();
    }

    pub fn region_id(&self, region: RegionHandle) -> Option<&str> {
        self.registry.region_id(region)
    }

    pub fn map_region(&self, map: MapId) -> Option<RegionHandle> {
        self.registry.map(map).map(|state| state.region)
    }

    pub fn map_options(&self, map: MapId) -> Option<&MapOptions> {
        self.registry.map(map).map(|state| &state.options)
    }

    pub fn marker_count(&self) -> usize {
        self.registry.markers().len()
    }

    pub fn marker_position(&self, marker: MarkerId) -> Option<Coordinate> {
        self.registry.marker(marker).map(|state| state.position)
    }

    pub fn marker_map(&self, marker: MarkerId) -> Option<MapId> {
        self.registry.marker(marker).map(|state| state.map)
    }

    pub fn listener_count(&self, marker: MarkerId) -> usize {
        self.registry
            .marker(marker)
            .map_or(0, |state| state.listeners.len())
    }
}

impl MapsApi for HeadlessMaps {
    fn find_region(&self, region_id: &str) -> Option<RegionHandle> {
        self.registry.find_region(region_id)
    }

    fn create_map(&mut self, region: RegionHandle, options: &MapOptions) -> anyhow::Result<MapId> {
        self.registry.create_map(region, options)
    }

    fn create_marker(&mut self, map: MapId, position: Coordinate) -> anyhow::Result<MarkerId> {
        self.registry.create_marker(map, position)
    }

    fn add_click_listener(
        &mut self,
        marker: MarkerId,
        handler: ClickHandler,
    ) -> anyhow::Result<()> {
        self.registry.add_click_listener(marker, handler)
    }
}
