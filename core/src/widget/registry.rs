//! Bookkeeping shared by the in-process hosts: declared regions, created maps
//! and placed markers with their listeners.

use mapmark_common::config::MapOptions;
use mapmark_common::geo::Coordinate;
use mapmark_common::widget::{ClickHandler, MapId, MapsApi, MarkerId, RegionHandle};

pub(crate) struct MapState {
    pub region: RegionHandle,
    pub options: MapOptions,
}

pub(crate) struct MarkerState {
    pub map: MapId,
    pub position: Coordinate,
    pub listeners: Vec<ClickHandler>,
}

#[derive(Default)]
pub(crate) struct Registry {
    regions: Vec<String>,
    maps: Vec<MapState>,
    markers: Vec<MarkerState>,
}

impl Registry {
    /// Declares a region. Declaring the same id twice returns the existing handle.
    pub fn add_region(&mut self, region_id: impl Into<String>) -> RegionHandle {
        let region_id = region_id.into();
        if let Some(handle) = self.find_region(&region_id) {
            return handle;
        }
        self.regions.push(region_id);
        RegionHandle(self.regions.len() - 1)
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn region_id(&self, region: RegionHandle) -> Option<&str> {
        self.regions.get(region.0).map(String::as_str)
    }

    pub fn maps(&self) -> &[MapState] {
        &self.maps
    }

    pub fn map(&self, map: MapId) -> Option<&MapState> {
        self.maps.get(map.0)
    }

    pub fn markers(&self) -> &[MarkerState] {
        &self.markers
    }

    pub fn marker(&self, marker: MarkerId) -> Option<&MarkerState> {
        self.markers.get(marker.0)
    }
}

impl MapsApi for Registry {
    fn find_region(&self, region_id: &str) -> Option<RegionHandle> {
        self.regions
            .iter()
            .position(|id| id == region_id)
            .map(RegionHandle)
    }

    fn create_map(&mut self, region: RegionHandle, options: &MapOptions) -> anyhow::Result<MapId> {
        if region.0 >= self.regions.len() {
            anyhow::bail!("region handle {} is not attached to this host", region.0);
        }
        self.maps.push(MapState {
            region,
            options: *options,
        });
        Ok(MapId(self.maps.len() - 1))
    }

    fn create_marker(&mut self, map: MapId, position: Coordinate) -> anyhow::Result<MarkerId> {
        if map.0 >= self.maps.len() {
            anyhow::bail!("{map} does not exist");
        }
        self.markers.push(MarkerState {
            map,
            position,
            listeners: Vec::new(),
        });
        Ok(MarkerId(self.markers.len() - 1))
    }

    fn add_click_listener(
        &mut self,
        marker: MarkerId,
        handler: ClickHandler,
    ) -> anyhow::Result<()> {
        let Some(state) = self.markers.get_mut(marker.0) else {
            anyhow::bail!("{marker} does not exist");
        };
        state.listeners.push(handler);
        Ok(())
    }
}
