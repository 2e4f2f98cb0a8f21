use log::trace;

use crate::adapter::MapAdapter;
use crate::model::{Event, EventType, LatLng};
use crate::registry::Registry;

/// Closed rings of every registered polygon, in creation order.
pub fn rings(registry: &Registry) -> Vec<Vec<LatLng>> {
    registry.iter().map(|(_, polygon)| polygon.ring()).collect()
}

/// Fires `markers` with the full polygon set; no diffing, polygon counts stay small.
pub fn update_for<A: MapAdapter + ?Sized>(registry: &Registry, adapter: &mut A, event_type: EventType) {
    let lat_lngs = rings(registry);
    trace!("markers: {} ring(s) on {}", lat_lngs.len(), event_type.as_str());
    adapter.fire(&Event::Markers { lat_lngs, event_type });
}
