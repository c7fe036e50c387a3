/// End-to-end pipeline tests: feed document in, composed map and HTML page out
#[cfg(test)]
mod integration_tests {
    use quakemap::layers::base::Layer;
    use quakemap::prelude::*;
    use std::io::Write;

    const TESTVILLE_FEED: &str = r#"{
        "type": "FeatureCollection",
        "metadata": { "title": "USGS All Earthquakes, Past Week", "count": 1 },
        "features": [
            {
                "type": "Feature",
                "id": "tv001",
                "properties": { "mag": 3.2, "place": "Testville", "time": 1700000000000 },
                "geometry": { "type": "Point", "coordinates": [20.0, 10.0, 4.2] }
            }
        ]
    }"#;

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(QuakeMapConfig::default().with_access_token("pk.test"))
    }

    #[tokio::test]
    async fn test_single_event_end_to_end() {
        let source = StaticFeedSource::new("testville", TESTVILLE_FEED);
        let outcome = orchestrator().run(&source).await.unwrap();
        assert!(outcome.is_loaded());

        let map = outcome.map();
        let overlay = map.overlay().expect("earthquake overlay");
        assert_eq!(overlay.len(), 1);

        let marker = &overlay.markers()[0];
        assert_eq!(marker.position(), LatLng::new(10.0, 20.0));
        assert_eq!(marker.fill_color(), "#f03b20");
        assert!((marker.radius - 16.0).abs() < 1e-9);

        let popup = marker.popup_text().unwrap();
        assert!(popup.contains("Testville"));
        assert!(popup.contains("3.2"));
        assert!(popup.contains("Tue Nov 14 2023 22:13:20 UTC"));
    }

    #[tokio::test]
    async fn test_empty_feed_still_composes_full_map() {
        let source = StaticFeedSource::new(
            "empty",
            r#"{ "type": "FeatureCollection", "features": [] }"#,
        );
        let outcome = orchestrator().run(&source).await.unwrap();
        assert!(outcome.is_loaded());

        let map = outcome.map();
        assert_eq!(map.marker_count(), 0);
        assert_eq!(
            map.layers.base_names(),
            vec!["Street Map", "Dark Map", "Satellite Map"]
        );
        assert_eq!(map.layers.active_base().map(|l| l.name()), Some("Street Map"));
        assert_eq!(map.layers.overlay_names(), vec!["Earthquakes"]);
        assert!(!map.layer_control.collapsed);
        assert_eq!(map.legend.entries.len(), 5);
        assert_eq!(map.legend.position, Position::BottomRight);
        assert_eq!(map.viewport.center, LatLng::new(38.0, -110.0));
        assert_eq!(map.viewport.zoom, 4.0);
    }

    #[tokio::test]
    async fn test_unreadable_feed_renders_banner() {
        let source = StaticFeedSource::new("broken", "<html>502 Bad Gateway</html>");
        let outcome = orchestrator().run(&source).await.unwrap();
        assert!(!outcome.is_loaded());
        assert_eq!(outcome.map().marker_count(), 0);

        let page = HtmlExporter::default().render(outcome.map()).unwrap();
        assert!(page.contains("Earthquake feed unavailable:"));
        assert!(page.contains("mapbox/streets-v11"));
        assert!(page.contains("\"state\":\"unavailable\""));
    }

    #[tokio::test]
    async fn test_file_source_to_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("feed.geojson");
        let output = dir.path().join("quakes.html");
        std::fs::File::create(&input)
            .unwrap()
            .write_all(TESTVILLE_FEED.as_bytes())
            .unwrap();

        let source = StaticFeedSource::from_file(&input).unwrap();
        assert_eq!(source.describe(), input.display().to_string());

        let outcome = orchestrator().run(&source).await.unwrap();
        HtmlExporter::default()
            .write_to(outcome.map(), &output)
            .unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.contains("<div id=\"map\"></div>"));
        assert!(page.contains("Testville"));
        assert!(page.contains("access_token={accessToken}"));
        assert!(page.contains("pk.test"));
        assert!(page.contains("\"fillColor\":\"#f03b20\""));
        assert!(page.contains("\"state\":\"loaded\""));
    }

    #[test]
    fn test_magnitude_ladder() {
        let renderer = FeatureRenderer::default();
        let colors: Vec<String> = [0.5, 1.5, 2.5, 3.5, 5.0]
            .iter()
            .map(|m| renderer.render_event(&QuakeEvent::new(LatLng::new(0.0, 0.0), Some(*m))))
            .map(|marker| marker.fill_color().to_string())
            .collect();
        assert_eq!(
            colors,
            vec!["#c2e699", "#fecc5c", "#fd8d3c", "#f03b20", "#6f0303"]
        );

        let floor = renderer.render_event(&QuakeEvent::new(LatLng::new(0.0, 0.0), None));
        assert_eq!(floor.radius, 2.0);
        assert_eq!(floor.fill_color(), "#c2e699");
    }
}
