use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FreeDrawError;
use crate::mode::Mode;

/// Host mapping library the adapter is expected to speak to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flavor {
    #[default]
    Leaflet,
    Google,
}

impl Flavor {
    /// Only `"google"` is recognised; everything else is the default profile.
    pub fn from_name(name: &str) -> Flavor {
        if name.eq_ignore_ascii_case("google") {
            Flavor::Google
        } else {
            Flavor::Leaflet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Leaflet => "leaflet",
            Flavor::Google => "google",
        }
    }
}

impl Serialize for Flavor {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Flavor {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let name = String::deserialize(d)?;
        Ok(Flavor::from_name(&name))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub mode: Mode,
    pub smooth_factor: f64,
    /// Pixel distance from the nearest edge beyond which a click deletes rather than appends.
    pub elbow_distance: f64,
    pub simplify_factor: f64,
    pub merge_polygons: bool,
    pub concave_polygon: bool,
    #[serde(deserialize_with = "de_maximum")]
    pub maximum_polygons: Option<usize>,
    pub notify_after_edit_exit: bool,
    pub leave_mode_after_create: bool,
    pub stroke_width: f64,
    pub flavor: Flavor,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            mode: Mode::ALL,
            smooth_factor: 0.3,
            elbow_distance: 10.0,
            simplify_factor: 1.1,
            merge_polygons: true,
            concave_polygon: true,
            maximum_polygons: None,
            notify_after_edit_exit: false,
            leave_mode_after_create: false,
            stroke_width: 2.0,
            flavor: Flavor::Leaflet,
        }
    }
}

// JS hosts pass `Infinity` (or omit the key) for "no cap".
fn de_maximum<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
    let v = Option::<f64>::deserialize(d)?;
    Ok(v.filter(|n| n.is_finite() && *n >= 0.0).map(|n| n as usize))
}

impl Options {
    pub fn from_json_str(s: &str) -> Result<Options, FreeDrawError> {
        let options: Options = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), FreeDrawError> {
        for (name, v) in [
            ("smoothFactor", self.smooth_factor),
            ("elbowDistance", self.elbow_distance),
            ("simplifyFactor", self.simplify_factor),
            ("strokeWidth", self.stroke_width),
        ] {
            if !v.is_finite() {
                return Err(FreeDrawError::InvalidOption { name, reason: "must be finite" });
            }
            if v < 0.0 {
                return Err(FreeDrawError::InvalidOption { name, reason: "must not be negative" });
            }
        }
        Ok(())
    }
}
