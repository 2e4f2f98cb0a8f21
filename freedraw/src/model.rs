use serde::{Deserialize, Serialize};

use crate::mode::Mode;

pub type PolygonId = u32;
pub type MarkerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng, alt: None }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite() && self.alt.map_or(true, f64::is_finite)
    }
}

/// Container-relative pixel position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Create,
    Remove,
    Clear,
    Edit,
    Append,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Create => "create",
            EventType::Remove => "remove",
            EventType::Clear => "clear",
            EventType::Edit => "edit",
            EventType::Append => "append",
        }
    }
}

/// Notifications delivered to the host through `MapAdapter::fire`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Mode {
        mode: Mode,
    },
    Markers {
        #[serde(rename = "latLngs")]
        lat_lngs: Vec<Vec<LatLng>>,
        #[serde(rename = "eventType")]
        event_type: EventType,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Mode { .. } => "mode",
            Event::Markers { .. } => "markers",
        }
    }
}
