use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A GeoJSON position: `[longitude, latitude]` with optional extra elements
/// (USGS appends depth in kilometres)
pub type Position = Vec<f64>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    /// Looks up a property, treating JSON `null` as absent
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .filter(|value| !value.is_null())
    }
}

/// Feed-level metadata carried by USGS feature collections
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    /// Generation time in epoch milliseconds
    #[serde(default)]
    pub generated: Option<i64>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Root GeoJSON object.
///
/// Collection members are kept as raw JSON so that one malformed feature
/// can be rejected on its own instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection {
        #[serde(default)]
        metadata: Option<FeedMetadata>,
        features: Vec<serde_json::Value>,
    },
}

impl GeoJson {
    /// Parses a GeoJSON document
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    pub fn feature_count(&self) -> usize {
        match self {
            GeoJson::Feature(_) => 1,
            GeoJson::FeatureCollection { features, .. } => features.len(),
        }
    }

    /// Consumes the document, decoding each feature independently
    pub fn into_features(self) -> Vec<crate::Result<GeoJsonFeature>> {
        match self {
            GeoJson::Feature(feature) => vec![Ok(feature)],
            GeoJson::FeatureCollection { features, .. } => features
                .into_iter()
                .enumerate()
                .map(|(index, raw)| {
                    serde_json::from_value(raw).map_err(|e| {
                        crate::Error::InvalidFeature(format!("feature #{}: {}", index, e))
                    })
                })
                .collect(),
        }
    }

    pub fn metadata(&self) -> Option<&FeedMetadata> {
        match self {
            GeoJson::FeatureCollection { metadata, .. } => metadata.as_ref(),
            GeoJson::Feature(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USGS_SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": { "title": "USGS All Earthquakes, Past Week", "generated": 1700000000000, "count": 2 },
        "features": [
            {
                "type": "Feature",
                "id": "ak0241",
                "properties": { "place": "51 km S of Denali", "mag": null },
                "geometry": { "type": "Point", "coordinates": [-149.9, 61.2, 33.0] }
            },
            {
                "type": "Feature",
                "id": "hv7317",
                "properties": { "place": "Volcano, Hawaii", "mag": 2.1 },
                "geometry": { "type": "Point", "coordinates": [-155.3, 19.4, 1.2] }
            }
        ]
    }"#;

    #[test]
    fn test_usgs_collection() {
        let geojson = GeoJson::from_str(USGS_SAMPLE).unwrap();
        assert_eq!(geojson.feature_count(), 2);
        let metadata = geojson.metadata().unwrap();
        assert_eq!(metadata.title.as_deref(), Some("USGS All Earthquakes, Past Week"));
        assert_eq!(metadata.count, Some(2));

        let features: Vec<GeoJsonFeature> = geojson
            .into_features()
            .into_iter()
            .collect::<crate::Result<_>>()
            .unwrap();
        // explicit nulls read as absent
        assert!(features[0].property("mag").is_none());
        assert_eq!(
            features[1].property("place").and_then(|v| v.as_str()),
            Some("Volcano, Hawaii")
        );
    }

    #[test]
    fn test_malformed_member_does_not_fail_document() {
        let geojson = GeoJson::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    { "type": "Feature", "properties": {},
                      "geometry": { "type": "Point", "coordinates": [20.0, 10.0] } },
                    { "type": "Feature", "properties": {},
                      "geometry": { "type": "Point", "coordinates": [null, 10.0] } },
                    { "type": "Feature", "properties": [],
                      "geometry": { "type": "Point", "coordinates": [1.0, 1.0] } }
                ]
            }"#,
        )
        .unwrap();

        let features = geojson.into_features();
        assert_eq!(features.len(), 3);
        assert!(features[0].is_ok());
        assert!(matches!(features[1], Err(crate::Error::InvalidFeature(_))));
        assert!(matches!(features[2], Err(crate::Error::InvalidFeature(_))));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let err = GeoJson::from_str(r#"{"type": "Topology"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::ParseError(_)));
        assert!(GeoJson::from_str("").is_err());
    }
}
