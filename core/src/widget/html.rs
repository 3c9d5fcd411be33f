//! Standalone HTML page backed by Leaflet.
//!
//! Every marker's popup is filled by running its click listeners when the page
//! is rendered, so the page is a snapshot of the entities at render time.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use mapmark_common::config::MapOptions;
use mapmark_common::geo::Coordinate;
use mapmark_common::widget::{ClickHandler, MapId, MapsApi, MarkerId, RegionHandle};
use tracing::debug;

use super::registry::{MapState, Registry};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

pub struct HtmlMaps {
    title: String,
    registry: Registry,
}

impl HtmlMaps {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            registry: Registry::default(),
        }
    }

    /// Declares a `<div>` with the given id. Declaring the same id twice is a no-op.
    pub fn with_region(mut self, region_id: impl Into<String>) -> Self {
        self.registry.add_region(region_id);
        self
    }

    pub fn marker_count(&self) -> usize {
        self.registry.markers().len()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html lang=\"en\">");
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, "  <meta charset=\"utf-8\">");
        let _ = writeln!(out, "  <title>{}</title>", encode_text(&self.title));
        let _ = writeln!(out, "  <link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\">");
        let _ = writeln!(out, "  <script src=\"{LEAFLET_JS}\"></script>");
        let _ = writeln!(out, "  <style>.mapmark-region {{ height: 100vh; }}</style>");
        let _ = writeln!(out, "</head>");
        let _ = writeln!(out, "<body>");

        for region_id in self.registry.regions() {
            let _ = writeln!(
                out,
                "  <div id=\"{}\" class=\"mapmark-region\"></div>",
                encode_double_quoted_attribute(region_id)
            );
        }

        let _ = writeln!(out, "  <script>");
        for (idx, state) in self.registry.maps().iter().enumerate() {
            self.render_map(&mut out, MapId(idx), state);
        }
        let _ = writeln!(out, "  </script>");
        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");

        debug!(
            maps = self.registry.maps().len(),
            markers = self.registry.markers().len(),
            bytes = out.len(),
            "rendered page"
        );
        out
    }

    fn render_map(&self, out: &mut String, map: MapId, state: &MapState) {
        let var = format!("map{}", map.0);
        let region_id = self.registry.region_id(state.region).unwrap_or_default();
        let center = state.options.center;

        let _ = writeln!(
            out,
            "    const {var} = L.map({}).setView([{}, {}], {});",
            js_string(region_id),
            center.lat,
            center.lng,
            state.options.zoom
        );
        let _ = writeln!(
            out,
            "    L.tileLayer({}, {{ attribution: {} }}).addTo({var});",
            js_string(TILE_URL),
            js_string(TILE_ATTRIBUTION)
        );

        for marker in self.registry.markers().iter().filter(|m| m.map == map) {
            let _ = write!(
                out,
                "    L.marker([{}, {}]).addTo({var})",
                marker.position.lat, marker.position.lng
            );
            // Leaflet keeps one popup open per map, so the last listener wins.
            if let Some(open) = marker.listeners.iter().map(|handler| handler()).last() {
                let _ = write!(out, ".bindPopup({})", js_string(open.window.content()));
            }
            let _ = writeln!(out, ";");
        }
    }
}

impl MapsApi for HtmlMaps {
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

/// Quotes `s` as a JavaScript string literal that is safe inside `<script>`.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use mapmark_common::widget::InfoWindow;

    use super::*;

    #[test]
    fn js_string_escapes_script_breakers() {
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
        assert_eq!(js_string("</script>"), r#""\u003C/script\u003E""#);
        assert_eq!(js_string("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(js_string("\u{1}"), r#""\u0001""#);
    }

    #[test]
    fn empty_page_declares_regions() {
        let page = HtmlMaps::new("Demo").with_region("map").with_region("map");
        let html = page.render();
        assert_eq!(html.matches("<div id=\"map\"").count(), 1);
        assert!(html.contains("<title>Demo</title>"));
        assert!(!html.contains("L.map("));
    }

    #[test]
    fn renders_map_and_popups() {
        let mut page = HtmlMaps::new("Demo").with_region("map");
        let region = page.find_region("map").unwrap();
        let map = page
            .create_map(region, &MapOptions::new(4, Coordinate::new(10.0, 20.0)))
            .unwrap();
        let with_popup = page.create_marker(map, Coordinate::new(52.5, 20.25)).unwrap();
        page.create_marker(map, Coordinate::new(-1.0, -2.0)).unwrap();
        page.add_click_listener(
            with_popup,
            Box::new(move || InfoWindow::new("<h1>Acme</h1>").open(map, with_popup)),
        )
        .unwrap();

        let html = page.render();
        assert!(html.contains(r#"const map0 = L.map("map").setView([10, 20], 4);"#));
        assert!(html.contains(
            r#"L.marker([52.5, 20.25]).addTo(map0).bindPopup("\u003Ch1\u003EAcme\u003C/h1\u003E");"#
        ));
        assert!(html.contains("L.marker([-1, -2]).addTo(map0);"));
        assert_eq!(page.marker_count(), 2);
    }

    #[test]
    fn title_is_escaped() {
        let html = HtmlMaps::new("<b>").render();
        assert!(html.contains("<title>&lt;b&gt;</title>"));
    }
}
