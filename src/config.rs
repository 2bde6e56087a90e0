//! Startup configuration: map defaults, tile source, gallery geometry and the
//! markers shown on the map. Parsed from `assets/config.json`, which is
//! embedded at compile time.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Coordinate, DEFAULT_CENTER, Marker, MarkerId};
use crate::state::gesture::DEFAULT_SLIDE_WIDTH;
use crate::util::cwarn;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

/// Zoom levels beyond this overflow the tile grid arithmetic.
pub const ZOOM_LIMIT: u8 = 22;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("json deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("zoom {zoom} outside configured range {min}..={max}")]
    ZoomOutOfRange { zoom: u8, min: u8, max: u8 },
    #[error("max zoom {0} exceeds {limit}", limit = ZOOM_LIMIT)]
    ZoomTooDeep(u8),
    #[error("slide width must be positive, got {0}")]
    SlideWidth(f64),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub label: String,
    pub url: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            label: "CARTO".into(),
            url: "https://carto.com/".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TileSource {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: Attribution,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".into(),
            subdomains: ["a", "b", "c", "d"].into_iter().map(String::from).collect(),
            attribution: Attribution::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub slide_width: f64,
    pub slide_height: f64,
    pub popup_min_width: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: 160.0,
            popup_min_width: 270.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarkerConfig {
    pub position: Coordinate,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub button_label: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl MarkerConfig {
    pub fn into_marker(self, id: MarkerId) -> Marker {
        Marker {
            id,
            position: self.position,
            title: self.title,
            description: self.description,
            images: self.images,
            button_label: self.button_label,
            link: self.link,
        }
    }
}

fn default_here_marker() -> MarkerConfig {
    MarkerConfig {
        position: DEFAULT_CENTER,
        title: Some("Sei qui".into()),
        description: Some("Questa è la tua posizione attuale.".into()),
        images: Vec::new(),
        button_label: Some("OK".into()),
        link: None,
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_center: Coordinate,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub tiles: TileSource,
    pub gallery: GalleryConfig,
    /// Texts for the marker that follows the device; its position is ignored.
    pub current_position: MarkerConfig,
    pub points_of_interest: Vec<MarkerConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            zoom: 13,
            min_zoom: 2,
            max_zoom: 20,
            tiles: TileSource::default(),
            gallery: GalleryConfig::default(),
            current_position: default_here_marker(),
            points_of_interest: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_zoom > ZOOM_LIMIT {
            return Err(ConfigError::ZoomTooDeep(self.max_zoom));
        }
        if self.min_zoom > self.max_zoom || !(self.min_zoom..=self.max_zoom).contains(&self.zoom) {
            return Err(ConfigError::ZoomOutOfRange {
                zoom: self.zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.gallery.slide_width > 0.0) {
            return Err(ConfigError::SlideWidth(self.gallery.slide_width));
        }
        Ok(())
    }

    /// The bundled configuration, or the built-in defaults if it is broken.
    pub fn load_embedded() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(cfg) => cfg,
            Err(e) => {
                cwarn(&format!("config: {e}; using built-in defaults"));
                Self::default()
            }
        }
    }

    pub fn here_marker(&self) -> Marker {
        self.current_position.clone().into_marker(MarkerId::Here)
    }

    pub fn poi_markers(&self) -> Vec<Marker> {
        self.points_of_interest
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, m)| m.into_marker(MarkerId::Poi(i)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn embedded_config_parses() {
        let cfg = AppConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(cfg.default_center, DEFAULT_CENTER);
        assert_eq!(cfg.zoom, 13);
        assert_eq!(cfg.gallery, GalleryConfig::default());
        let milano = &cfg.points_of_interest[0];
        assert_eq!(milano.title.as_deref(), Some("Milano"));
        assert_eq!(milano.images.len(), 2);
        assert_eq!(milano.button_label.as_deref(), Some("Scopri di più"));
    }

    #[test]
    fn embedded_gallery_images_ship_with_the_app() {
        let cfg = AppConfig::from_json(EMBEDDED_CONFIG).unwrap();
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let local = cfg
            .points_of_interest
            .iter()
            .chain(std::iter::once(&cfg.current_position))
            .flat_map(|m| m.images.iter())
            .filter(|src| !src.contains("://"));
        for src in local {
            assert!(root.join(src).is_file(), "missing gallery image {src}");
        }
    }

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn marker_optional_fields_default_to_absent() {
        let cfg = AppConfig::from_json(r#"{"points_of_interest":[{"position":[1.0,2.0]}]}"#).unwrap();
        let m = cfg.poi_markers().remove(0);
        assert_eq!(m.id, MarkerId::Poi(0));
        assert_eq!((m.title, m.description, m.button_label), (None, None, None));
        assert!(m.images.is_empty());
    }

    #[test]
    fn here_marker_has_fixed_id() {
        let m = AppConfig::default().here_marker();
        assert_eq!(m.id, MarkerId::Here);
        assert_eq!(m.title.as_deref(), Some("Sei qui"));
        assert!(m.images.is_empty());
    }

    #[rstest]
    #[case(r#"{"zoom": 1}"#)]
    #[case(r#"{"min_zoom": 10, "max_zoom": 5, "zoom": 7}"#)]
    #[case(r#"{"max_zoom": 30}"#)]
    #[case(r#"{"gallery": {"slide_width": 0}}"#)]
    #[case(r#"{"default_center": [95.0, 0.0]}"#)]
    #[case(r#"{"zoom": "far"}"#)]
    fn rejects_invalid(#[case] raw: &str) {
        assert!(AppConfig::from_json(raw).is_err());
    }
}
