use crate::core::{constants::MAPBOX_URL_TEMPLATE, geo::TileCoord};

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync + std::fmt::Debug {
    /// URL template in Leaflet placeholder syntax
    fn url_template(&self) -> String;

    /// Values substituted for the non-coordinate placeholders of the template
    fn template_params(&self) -> Vec<(&'static str, String)>;

    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String {
        self.template_params().into_iter().fold(
            self.url_template()
                .replace("{z}", &coord.z.to_string())
                .replace("{x}", &coord.x.to_string())
                .replace("{y}", &coord.y.to_string()),
            |url, (key, value)| url.replace(&format!("{{{}}}", key), &value),
        )
    }
}

/// One Mapbox style served as raster tiles, authenticated by an access token
#[derive(Clone)]
pub struct MapboxStyleSource {
    style_id: String,
    access_token: String,
}

impl MapboxStyleSource {
    pub fn new(style_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            style_id: style_id.into(),
            access_token: access_token.into(),
        }
    }
}

impl std::fmt::Debug for MapboxStyleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxStyleSource")
            .field("style_id", &self.style_id)
            .finish_non_exhaustive()
    }
}

impl TileSource for MapboxStyleSource {
    fn url_template(&self) -> String {
        MAPBOX_URL_TEMPLATE.to_string()
    }

    fn template_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.style_id.clone()),
            ("accessToken", self.access_token.clone()),
        ]
    }
}
