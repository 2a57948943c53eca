use url::Url;
use walkers::{
    sources::{Attribution, TileSource},
    TileId,
};

/// MapTiler raster tiles for the map a style URL points at.
///
/// `https://api.maptiler.com/maps/<slug>/style.json?key=K` renders from
/// `https://api.maptiler.com/maps/<slug>/256/{z}/{x}/{y}.png?key=K`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapTilerRaster {
    base: String,
    key: String,
}

impl MapTilerRaster {
    /// Derives the raster source from a style URL, or `None` if the URL does not
    /// end in `style.json` or carries no key.
    pub fn from_style_url(style_url: &Url) -> Option<Self> {
        let segments: Vec<&str> = style_url.path_segments()?.collect();
        let (last, map_path) = segments.split_last()?;
        if *last != "style.json" || map_path.is_empty() {
            return None;
        }

        let key = style_url
            .query_pairs()
            .find(|(name, _)| name == "key")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())?;

        let host = style_url.host_str()?;
        let base = format!("{}://{}/{}", style_url.scheme(), host, map_path.join("/"));

        Some(Self { base, key })
    }
}

impl TileSource for MapTilerRaster {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "{}/256/{}/{}/{}.png?key={}",
            self.base, tile_id.zoom, tile_id.x, tile_id.y, self.key
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© MapTiler © OpenStreetMap contributors",
            url: "https://www.maptiler.com/copyright/",
            logo_light: None,
            logo_dark: None,
        }
    }
}
