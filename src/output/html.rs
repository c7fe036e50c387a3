//! Standalone HTML export.
//!
//! The page loads Leaflet from a CDN and rebuilds the composed map from an
//! embedded JSON document. All styling decisions (colors, radii, popups,
//! legend markup) are made in Rust; the bootstrap script only instantiates
//! Leaflet objects from the document.

use crate::{core::map::QuakeMap, feed::FeedStatus, ui::popup::escape_html, Result};
use std::path::Path;

const LEAFLET_VERSION: &str = "1.9.4";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{TITLE}}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{{LEAFLET_VERSION}}/dist/leaflet.css">
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #{{CONTAINER}} { height: 100%; width: 100%; }
    .info.legend { background: white; padding: 6px 10px; line-height: 18px; border-radius: 5px; box-shadow: 0 0 15px rgba(0, 0, 0, 0.2); }
    .info.legend i { display: inline-block; width: 18px; height: 18px; margin-right: 4px; opacity: 0.9; vertical-align: middle; }
    .feed-banner { position: absolute; top: 10px; left: 50%; transform: translateX(-50%); z-index: 1000; background: #fff3cd; color: #664d03; border: 1px solid #ffecb5; border-radius: 4px; padding: 6px 12px; font: 14px sans-serif; }
  </style>
</head>
<body>
{{BANNER}}  <div id="{{CONTAINER}}"></div>
  <script src="https://unpkg.com/leaflet@{{LEAFLET_VERSION}}/dist/leaflet.js"></script>
  <script type="application/json" id="quakemap-data">{{DATA}}</script>
  <script>
    (function () {
      var doc = JSON.parse(document.getElementById("quakemap-data").textContent);
      var baseMaps = {}, overlayMaps = {}, active = [];

      doc.layers.baseLayers.forEach(function (l) {
        var layer = L.tileLayer(l.urlTemplate, l.options);
        baseMaps[l.name] = layer;
        if (l.visible) { active.push(layer); }
      });

      doc.layers.overlays.forEach(function (o) {
        var group = L.layerGroup(o.markers.map(function (m) {
          var marker = L.circleMarker([m.lat, m.lng], {
            radius: m.radius,
            fillColor: m.fillColor,
            weight: m.weight,
            opacity: m.opacity,
            fillOpacity: m.fillOpacity
          });
          if (m.popup) { marker.bindPopup(m.popup); }
          return marker;
        }));
        overlayMaps[o.name] = group;
        if (o.visible) { active.push(group); }
      });

      var map = L.map(doc.container, {
        center: doc.view.center,
        zoom: doc.view.zoom,
        minZoom: doc.view.minZoom,
        maxZoom: doc.view.maxZoom,
        layers: active
      });

      L.control.layers(baseMaps, overlayMaps, {
        collapsed: doc.layerControl.collapsed,
        position: doc.layerControl.position
      }).addTo(map);

      var legend = L.control({ position: doc.legend.position });
      legend.onAdd = function () {
        var div = L.DomUtil.create("div", "info legend");
        div.innerHTML = doc.legend.html;
        return div;
      };
      legend.addTo(map);
    })();
  </script>
</body>
</html>
"#;

/// Writes a [`QuakeMap`] as a self-contained HTML page
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    title: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self {
            title: "Earthquakes".to_string(),
        }
    }
}

impl HtmlExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self, map: &QuakeMap) -> Result<String> {
        let data = embed_json(&serde_json::to_string(&map.to_page_json())?);
        let banner = match &map.status {
            FeedStatus::Unavailable { reason } => format!(
                "  <div class=\"feed-banner\" role=\"status\">Earthquake feed unavailable: {}</div>\n",
                escape_html(reason)
            ),
            FeedStatus::Loaded { .. } => String::new(),
        };

        let title = escape_html(&self.title);
        let container = escape_html(&map.container_id);
        Ok(fill_template(
            PAGE_TEMPLATE,
            &[
                ("TITLE", title.as_str()),
                ("LEAFLET_VERSION", LEAFLET_VERSION),
                ("CONTAINER", container.as_str()),
                ("BANNER", banner.as_str()),
                ("DATA", data.as_str()),
            ],
        ))
    }

    pub fn write_to<P: AsRef<Path>>(&self, map: &QuakeMap, path: P) -> Result<()> {
        let path = path.as_ref();
        let page = self.render(map)?;
        std::fs::write(path, &page)?;
        log::info!("wrote {} ({} bytes)", path.display(), page.len());
        Ok(())
    }
}

/// Substitutes `{{NAME}}` placeholders in one pass over `template`.
///
/// Inserted values are never rescanned, so they may contain placeholder
/// syntax themselves. Unknown placeholders are left as they are.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            values
                .iter()
                .find(|(name, _)| *name == &after[..end])
                .map(|(_, value)| (*value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Makes serialized JSON safe to place inside a `<script>` element
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::map::MapComposer;
    use crate::core::geo::LatLng;
    use crate::layers::{marker::CircleMarker, overlay::MarkerLayer};
    use crate::ui::popup::Popup;

    fn map_with(status: FeedStatus, popup: &str) -> QuakeMap {
        let marker = CircleMarker::new(LatLng::new(1.0, 2.0), 5.0)
            .with_popup(Popup::new(popup.to_string()));
        let overlay =
            MarkerLayer::new("earthquakes".to_string(), "Earthquakes".to_string()).with_markers(vec![marker]);
        MapComposer::default().compose(overlay, status).unwrap()
    }

    #[test]
    fn test_page_has_single_map_container() {
        let page = HtmlExporter::default()
            .render(&map_with(FeedStatus::Loaded { rendered: 1, skipped: 0 }, "<p>x</p>"))
            .unwrap();
        assert_eq!(page.matches("<div id=\"map\">").count(), 1);
        assert!(page.contains("leaflet@1.9.4/dist/leaflet.js"));
        assert!(!page.contains("feed-banner\" role"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let page = HtmlExporter::default()
            .render(&map_with(
                FeedStatus::Loaded { rendered: 1, skipped: 0 },
                "</script><script>alert(1)</script>",
            ))
            .unwrap();
        assert!(!page.contains("</script><script>alert(1)"));
        assert!(page.contains("<\\/script>"));
    }

    #[test]
    fn test_unavailable_banner() {
        let page = HtmlExporter::new("Quakes")
            .render(&map_with(
                FeedStatus::Unavailable {
                    reason: "HTTP 503 <oops>".to_string(),
                },
                "",
            ))
            .unwrap();
        assert!(page.contains("Earthquake feed unavailable: HTTP 503 &lt;oops&gt;"));
        assert!(page.contains("<title>Quakes</title>"));
    }

    #[test]
    fn test_placeholders_in_values_are_not_expanded() {
        let page = HtmlExporter::new("{{DATA}}")
            .render(&map_with(
                FeedStatus::Unavailable {
                    reason: "upstream said {{TITLE}}".to_string(),
                },
                "{{BANNER}}",
            ))
            .unwrap();
        assert!(page.contains("<title>{{DATA}}</title>"));
        assert!(page.contains("Earthquake feed unavailable: upstream said {{TITLE}}</div>"));
        assert_eq!(page.matches("<div class=\"feed-banner\"").count(), 1);
        assert_eq!(page.matches("\"container\":\"map\"").count(), 1);
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(
            fill_template("a{{X}}b{{Y}}c{{Z}}", &[("X", "{{Y}}"), ("Y", "2")]),
            "a{{Y}}b2c{{Z}}"
        );
        assert_eq!(fill_template("{{X", &[("X", "1")]), "{{X");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        HtmlExporter::default()
            .write_to(&map_with(FeedStatus::Loaded { rendered: 1, skipped: 0 }, ""), &path)
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
