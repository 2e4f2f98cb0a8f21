//! Geometry glue between the registry and `geo`.
//!
//! Everything here works in container pixels: rings are projected through the adapter,
//! processed, and converted back to geographic coordinates.

use geo::{BooleanOps, ConcaveHull, Coord, Intersects, LineString, MultiPoint, MultiPolygon};
use log::debug;

use crate::adapter::{to_lat_lngs, to_pixels, MapAdapter};
use crate::geometry::intersect::ring_is_simple;
use crate::geometry::simplify::clean_ring;
use crate::model::{LatLng, Point, PolygonId};
use crate::options::Options;
use crate::polygon::{create_for, remove_for};
use crate::state::MapState;

/// Concavity passed to the hull; lower values hug the stroke more tightly.
pub const CONCAVITY: f64 = 2.0;

pub(crate) fn to_geo_polygon(ring: &[Point]) -> geo::Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    geo::Polygon::new(LineString::from(coords), Vec::new())
}

/// Exterior ring without the closing coordinate.
pub(crate) fn exterior_points(polygon: &geo::Polygon<f64>) -> Vec<Point> {
    let mut pts: Vec<Point> = polygon.exterior().coords().map(|c| Point::new(c.x, c.y)).collect();
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }
    pts
}

pub fn concave_polygon<A: MapAdapter + ?Sized>(adapter: &A, lat_lngs: &[LatLng]) -> Vec<LatLng> {
    if lat_lngs.len() < 3 {
        return lat_lngs.to_vec();
    }
    let points: MultiPoint<f64> = to_pixels(adapter, lat_lngs)
        .into_iter()
        .map(|p| geo::Point::new(p.x, p.y))
        .collect::<Vec<_>>()
        .into();
    let hull = points.concave_hull(CONCAVITY);
    to_lat_lngs(adapter, &exterior_points(&hull))
}

/// Cleans a freehand ring and splits it into void-free simple rings.
///
/// A ring that is already simple comes back with its vertex order intact; a self-intersecting
/// one is resolved by a boolean union and yields one ring per resulting exterior.
pub fn simplify_polygon<A: MapAdapter + ?Sized>(
    adapter: &A,
    lat_lngs: &[LatLng],
    options: &Options,
) -> Vec<Vec<LatLng>> {
    let ring = clean_ring(&to_pixels(adapter, lat_lngs), options.simplify_factor);
    if ring.len() < 3 {
        return Vec::new();
    }
    if ring_is_simple(&ring) {
        return vec![to_lat_lngs(adapter, &ring)];
    }
    let resolved = MultiPolygon::new(vec![to_geo_polygon(&ring)]).union(&MultiPolygon::new(Vec::new()));
    resolved
        .0
        .iter()
        .map(exterior_points)
        .filter(|ring| ring.len() >= 3)
        .map(|ring| to_lat_lngs(adapter, &ring))
        .collect()
}

/// Re-simplifies one polygon so a drag that folded it over itself leaves no voids.
pub fn fill_polygon<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    id: PolygonId,
    options: &Options,
) -> Vec<PolygonId> {
    let Some(lat_lngs) = state.registry.get(id).map(|p| p.lat_lngs.clone()) else {
        return Vec::new();
    };
    remove_for(state, adapter, id);
    create_for(state, adapter, &lat_lngs, options, true)
}

/// Unions every registered polygon that intersects another one.
///
/// Returns `None` when nothing intersects; otherwise the ids of the polygons created from
/// the union.
pub fn merge_polygons<A: MapAdapter + ?Sized>(
    state: &mut MapState,
    adapter: &mut A,
    options: &Options,
) -> Option<Vec<PolygonId>> {
    let shapes: Vec<(PolygonId, geo::Polygon<f64>)> = state
        .registry
        .iter()
        .map(|(id, p)| (id, to_geo_polygon(&to_pixels(adapter, &p.lat_lngs))))
        .collect();

    let intersecting: Vec<usize> = (0..shapes.len())
        .filter(|&i| {
            shapes
                .iter()
                .enumerate()
                .any(|(j, (_, other))| i != j && shapes[i].1.intersects(other))
        })
        .collect();
    if intersecting.is_empty() {
        return None;
    }

    let union = intersecting.iter().fold(MultiPolygon::new(Vec::new()), |acc, &i| {
        acc.union(&MultiPolygon::new(vec![shapes[i].1.clone()]))
    });
    for &i in &intersecting {
        remove_for(state, adapter, shapes[i].0);
    }

    let mut created = Vec::new();
    for polygon in &union.0 {
        let lat_lngs = to_lat_lngs(adapter, &exterior_points(polygon));
        created.extend(create_for(state, adapter, &lat_lngs, options, true));
    }
    debug!("merged {} polygon(s) into {}", intersecting.len(), created.len());
    Some(created)
}
