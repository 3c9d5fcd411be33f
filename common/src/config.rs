use crate::geo::Coordinate;

/// Highest zoom level the supported tile sources serve.
pub const MAX_ZOOM: u8 = 22;

pub struct Config {
    /// Skips the banner line printed at startup.
    pub no_banner: bool,
    /// Output verbosity. Each level hides more of the terminal output.
    pub quiet: u8,
    /// Seed for the data generator.
    ///
    /// `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

/// Initial view of a freshly created map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub zoom: u8,
    pub center: Coordinate,
}

impl MapOptions {
    /// Zoom levels above [`MAX_ZOOM`] are clamped.
    pub fn new(zoom: u8, center: Coordinate) -> Self {
        Self {
            zoom: zoom.min(MAX_ZOOM),
            center,
        }
    }
}

impl Default for MapOptions {
    /// Whole-world view centred on the origin.
    fn default() -> Self {
        Self::new(2, Coordinate::ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_shows_the_whole_world() {
        let options = MapOptions::default();
        assert_eq!(options.zoom, 2);
        assert_eq!(options.center, Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let options = MapOptions::new(40, Coordinate::ORIGIN);
        assert_eq!(options.zoom, MAX_ZOOM);
    }
}
