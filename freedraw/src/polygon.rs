use log::debug;

use crate::adapter::{to_pixels, MapAdapter};
use crate::edges::{create_edges, remove_edges};
use crate::geometry::math::nearest_segment;
use crate::merge::{concave_polygon, merge_polygons, simplify_polygon};
use crate::mode::Mode;
use crate::model::{EventType, LatLng, Point, PolygonId};
use crate::notify::update_for;
use crate::options::Options;
use crate::state::MapState;

/// Turns `lat_lngs` into registered polygons.
///
/// Returns the polygons this call added that are still registered, followed by any the merge
/// pass created from them. With `prevent_mutations` the concave hull and the merge pass are
/// skipped; the ring is still simplified. Nothing is added once `maximum_polygons` is reached,
/// although one self-intersecting stroke may split into several polygons at once.
pub fn create_for<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    lat_lngs: &[LatLng],
    options: &Options,
    prevent_mutations: bool,
) -> Vec<PolygonId> {
    if options.maximum_polygons.is_some_and(|max| state.registry.len() >= max) {
        debug!("maximum of {} polygon(s) reached", state.registry.len());
        return Vec::new();
    }

    let hull;
    let points = if !prevent_mutations && options.concave_polygon {
        hull = concave_polygon(adapter, lat_lngs);
        &hull[..]
    } else {
        lat_lngs
    };

    let mut added = Vec::new();
    for ring in simplify_polygon(adapter, points, options) {
        let id = state.registry.insert(ring);
        if let Some(polygon) = state.registry.get(id) {
            adapter.add_polygon(id, &polygon.lat_lngs, options.smooth_factor);
        }
        adapter.set_polygon_mode(id, state.mode);
        create_edges(state, adapter, id);
        added.push(id);
    }

    if prevent_mutations || state.registry.len() <= 1 || !options.merge_polygons {
        return added;
    }
    match merge_polygons(state, adapter, options) {
        None => added,
        Some(merged) => added
            .into_iter()
            .filter(|&id| state.registry.contains(id))
            .chain(merged)
            .collect(),
    }
}

/// Removes the polygon and its edges. Unknown ids are ignored.
pub fn remove_for<A: MapAdapter + ?Sized>(state: &mut MapState, adapter: &mut A, id: PolygonId) -> bool {
    if !state.registry.contains(id) {
        return false;
    }
    adapter.remove_polygon(id);
    remove_edges(state, adapter, id);
    state.registry.remove(id).is_some()
}

pub fn clear_for<A: MapAdapter + ?Sized>(state: &mut MapState, adapter: &mut A) {
    for id in state.registry.ids() {
        remove_for(state, adapter, id);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClickAction {
    Remove,
    Append,
}

/// Deletes the polygon or inserts a vertex on its nearest edge, depending on the mode and
/// how far `point` is from that edge. Returns the notification that was fired.
pub fn polygon_click<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    id: PolygonId,
    point: Point,
    options: &Options,
) -> Option<EventType> {
    let parts = to_pixels(adapter, &state.registry.get(id)?.lat_lngs);
    let (segment, distance) = nearest_segment(&parts, point)?;

    let delete = state.mode.contains(Mode::DELETE);
    let append = state.mode.contains(Mode::APPEND);
    let action = match (delete, append) {
        (true, true) if distance > options.elbow_distance => ClickAction::Remove,
        (true, true) | (false, true) => ClickAction::Append,
        (true, false) => ClickAction::Remove,
        (false, false) => return None,
    };

    let event_type = match action {
        ClickAction::Remove => {
            remove_for(state, adapter, id);
            EventType::Remove
        }
        ClickAction::Append => {
            append_edge_for(state, adapter, id, segment, point);
            EventType::Append
        }
    };
    debug!("polygon {id} click: {} ({distance:.2}px from edge {segment})", event_type.as_str());
    update_for(&state.registry, adapter, event_type);
    Some(event_type)
}

/// Inserts `point` after vertex `segment` and rebuilds the polygon's edges.
pub fn append_edge_for<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    id: PolygonId,
    segment: usize,
    point: Point,
) {
    let lat_lng = adapter.container_point_to_lat_lng(point);
    let Some(polygon) = state.registry.get_mut(id) else {
        return;
    };
    let at = (segment + 1).min(polygon.lat_lngs.len());
    polygon.lat_lngs.insert(at, lat_lng);
    adapter.set_polygon_lat_lngs(id, &polygon.lat_lngs);
    remove_edges(state, adapter, id);
    create_edges(state, adapter, id);
}
