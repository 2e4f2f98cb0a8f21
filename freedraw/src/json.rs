use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FreeDrawError, Result};
use crate::mode::Mode;
use crate::model::LatLng;
use crate::registry::Registry;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    mode: Option<Mode>,
    polygons: Vec<Vec<LatLng>>,
}

pub fn to_json_impl(registry: &Registry, mode: Mode) -> Value {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        mode: Some(mode),
        polygons: crate::notify::rings(registry),
    };
    serde_json::to_value(snapshot).unwrap_or(Value::Null)
}

/// Validated open rings from a snapshot, plus the stored mode if there was one.
pub fn from_json_impl(v: Value) -> Result<(Vec<Vec<LatLng>>, Option<Mode>)> {
    let snapshot: Snapshot = serde_json::from_value(v)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(FreeDrawError::Snapshot(format!("unsupported version {}", snapshot.version)));
    }
    let mut rings = Vec::with_capacity(snapshot.polygons.len());
    for (i, mut ring) in snapshot.polygons.into_iter().enumerate() {
        if !ring.iter().all(LatLng::is_finite) {
            return Err(FreeDrawError::Snapshot(format!("polygon {i} has non-finite coordinates")));
        }
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(FreeDrawError::Snapshot(format!("polygon {i} has fewer than 3 points")));
        }
        rings.push(ring);
    }
    Ok((rings, snapshot.mode))
}
