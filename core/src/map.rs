//! # Map Surface
//!
//! Restricts what callers can do with the mapping library to one thing:
//! placing markers for [`Mappable`] entities.

use std::rc::Rc;

use mapmark_common::config::MapOptions;
use mapmark_common::error::{MapError, MapResult};
use mapmark_common::mappable::Mappable;
use mapmark_common::widget::{InfoWindow, MapId, MapsApi, MarkerId, RegionHandle};
use tracing::{debug, trace};

/// A map bound to one display region of the widget host it owns.
pub struct Map<A: MapsApi> {
    api: A,
    map: MapId,
    region: RegionHandle,
    options: MapOptions,
    markers: Vec<MarkerId>,
}

impl<A: MapsApi> Map<A> {
    /// Creates a map in `region_id` with the default whole-world view.
    pub fn new(api: A, region_id: &str) -> MapResult<Self> {
        Self::with_options(api, region_id, MapOptions::default())
    }

    /// Creates a map in `region_id`.
    ///
    /// Fails with [`MapError::Initialization`] when the host has no such region
    /// and with [`MapError::InvalidCoordinate`] when the centre is out of range.
    pub fn with_options(mut api: A, region_id: &str, options: MapOptions) -> MapResult<Self> {
        let region = api
            .find_region(region_id)
            .ok_or_else(|| MapError::Initialization(region_id.to_string()))?;
        options.center.validate()?;

        let map = api.create_map(region, &options)?;
        debug!(%map, region_id, zoom = options.zoom, center = %options.center, "created map");

        Ok(Self {
            api,
            map,
            region,
            options,
            markers: Vec::new(),
        })
    }

    /// Places a marker for `mappable` and shows its content when clicked.
    ///
    /// The content is rendered when the click happens, not here.
    pub fn add_marker<M>(&mut self, mappable: Rc<M>) -> MapResult<MarkerId>
    where
        M: Mappable + ?Sized + 'static,
    {
        let position = mappable.location().validate()?;

        let map = self.map;
        let marker = self.api.create_marker(map, position)?;

        self.api.add_click_listener(
            marker,
            Box::new(move || {
                trace!(%marker, "rendering marker content");
                InfoWindow::new(mappable.marker_content()).open(map, marker)
            }),
        )?;

        debug!(%map, %marker, %position, "placed marker");
        self.markers.push(marker);
        Ok(marker)
    }

    pub fn map_id(&self) -> MapId {
        self.map
    }

    pub fn region(&self) -> RegionHandle {
        self.region
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Markers placed through this surface, in insertion order.
    pub fn markers(&self) -> &[MarkerId] {
        &self.markers
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Mutable access to the host, for driving its event dispatch.
    pub fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    pub fn into_api(self) -> A {
        self.api
    }
}
