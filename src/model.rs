//! Core data models for the marker map.
//! Coordinates, markers and the scene that owns them.

use serde::Deserialize;
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

use crate::location::LocationError;

/// Largest latitude representable in Web Mercator.
pub const MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
}

/// A (latitude, longitude) pair in degrees. Deserializes from `[lat, lon]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "[f64; 2]")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Device fixes are trusted but may carry float noise past the poles.
    pub fn clamped(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: lon.clamp(-180.0, 180.0),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = CoordinateError;

    fn try_from([lat, lon]: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::new(lat, lon)
    }
}

/// Verona, used until the device reports a position.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 45.4384,
    lon: 10.9916,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerId {
    /// The marker following the device position.
    Here,
    /// Index into the configured points of interest.
    Poi(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Coordinate,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Image URLs, shown in order in the popup gallery.
    pub images: Vec<String>,
    pub button_label: Option<String>,
    /// Destination path for the popup button.
    pub link: Option<String>,
}

/// Pixel geometry of the marker pin, matching Leaflet's stock marker assets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerIcon {
    pub icon_url: &'static str,
    pub icon_size: (f64, f64),
    pub icon_anchor: (f64, f64),
    pub popup_anchor: (f64, f64),
    pub shadow_url: &'static str,
    pub shadow_size: (f64, f64),
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            icon_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png",
            icon_size: (25.0, 41.0),
            icon_anchor: (12.0, 41.0),
            popup_anchor: (1.0, -34.0),
            shadow_url: "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png",
            shadow_size: (41.0, 41.0),
        }
    }
}

impl MarkerIcon {
    /// Shadow shares the icon's anchor when none is configured.
    pub fn shadow_anchor(&self) -> (f64, f64) {
        self.icon_anchor
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum LocationStatus {
    /// No fix received yet.
    #[default]
    Waiting,
    Tracking,
    /// The feed failed; the scene keeps the last known coordinate.
    Unavailable(LocationError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapScene {
    pub position: Coordinate,
    pub location_status: LocationStatus,
    /// Current-position marker; its `position` mirrors `self.position`.
    pub here: Marker,
    pub points_of_interest: Vec<Marker>,
}

impl MapScene {
    pub fn new(position: Coordinate, mut here: Marker, points_of_interest: Vec<Marker>) -> Self {
        here.id = MarkerId::Here;
        here.position = position;
        Self {
            position,
            location_status: LocationStatus::default(),
            here,
            points_of_interest,
        }
    }

    /// Current-position marker first, then the points of interest.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        std::iter::once(&self.here).chain(self.points_of_interest.iter())
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum SceneAction {
    PositionUpdated(Coordinate),
    LocationUnavailable(LocationError),
}

impl Reducible for MapScene {
    type Action = SceneAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SceneAction::*;
        let mut new = (*self).clone();
        match action {
            PositionUpdated(coord) => {
                if coord == new.position && new.location_status == LocationStatus::Tracking {
                    return self;
                }
                new.position = coord;
                new.here.position = coord;
                new.location_status = LocationStatus::Tracking;
            }
            LocationUnavailable(err) => {
                new.location_status = LocationStatus::Unavailable(err);
            }
        }
        Rc::new(new)
    }
}
