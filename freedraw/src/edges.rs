use log::{debug, trace};

use crate::adapter::MapAdapter;
use crate::merge::{fill_polygon, merge_polygons};
use crate::mode::Mode;
use crate::model::{EventType, MarkerId, Point, PolygonId};
use crate::notify::update_for;
use crate::options::Options;
use crate::state::MapState;

/// One vertex handle being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeDrag {
    pub marker: MarkerId,
    pub polygon: PolygonId,
}

/// Creates one marker per vertex; markers are enabled only while editing.
pub fn create_edges<A: MapAdapter + ?Sized>(state: &mut MapState, adapter: &mut A, id: PolygonId) {
    let Some(lat_lngs) = state.registry.get(id).map(|p| p.lat_lngs.clone()) else {
        return;
    };
    let enabled = state.mode.contains(Mode::EDIT);
    let edges = lat_lngs
        .into_iter()
        .enumerate()
        .map(|(index, lat_lng)| {
            let marker = state.registry.add_marker(id, index, lat_lng);
            adapter.add_marker(marker, lat_lng, enabled);
            marker
        })
        .collect();
    if let Some(polygon) = state.registry.get_mut(id) {
        polygon.edges = edges;
    }
}

pub fn remove_edges<A: MapAdapter + ?Sized>(state: &mut MapState, adapter: &mut A, id: PolygonId) {
    let edges = match state.registry.get_mut(id) {
        Some(polygon) => std::mem::take(&mut polygon.edges),
        None => return,
    };
    for marker in edges {
        if state.registry.remove_marker(marker).is_some() {
            adapter.remove_marker(marker);
        }
    }
}

/// Mouse-down on a marker. Ignored (and `None`) when edit mode is no longer active, which
/// covers handlers still attached after a mode change.
pub fn start_drag<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    marker: MarkerId,
) -> Option<EdgeDrag> {
    if !state.mode.contains(Mode::EDIT) {
        debug!("marker {marker}: mousedown outside edit mode ignored");
        return None;
    }
    let polygon = state.registry.marker(marker)?.polygon;
    adapter.set_dragging(false);
    Some(EdgeDrag { marker, polygon })
}

/// Moves the dragged marker and the polygon vertex it stands for.
pub fn drag_to<A: MapAdapter + ?Sized>(state: &mut MapState, adapter: &mut A, drag: &EdgeDrag, point: Point) {
    let lat_lng = adapter.container_point_to_lat_lng(point);
    let index = match state.registry.marker_mut(drag.marker) {
        Some(marker) => {
            marker.lat_lng = lat_lng;
            marker.index
        }
        None => return,
    };
    adapter.move_marker(drag.marker, lat_lng);

    let Some(polygon) = state.registry.get_mut(drag.polygon) else {
        return;
    };
    let Some(vertex) = polygon.lat_lngs.get_mut(index) else {
        return;
    };
    *vertex = lat_lng;
    trace!("marker {} (vertex {index}) -> ({:.6}, {:.6})", drag.marker, lat_lng.lat, lat_lng.lng);
    adapter.set_polygon_lat_lngs(drag.polygon, &polygon.lat_lngs);
}

/// Mouse-up after a drag: clean up voids, merge, then notify now or on edit exit.
pub fn end_drag<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    drag: &EdgeDrag,
    options: &Options,
) {
    if !state.mode.contains(Mode::CREATE) {
        adapter.set_dragging(true);
    }

    fill_polygon(state, adapter, drag.polygon, options);

    if options.merge_polygons {
        // A single pass can leave results that still intersect pairwise.
        merge_polygons(state, adapter, options);
        merge_polygons(state, adapter, options);
    }

    if options.notify_after_edit_exit {
        state.deferred_edit = true;
    } else {
        update_for(&state.registry, adapter, EventType::Edit);
    }
}
