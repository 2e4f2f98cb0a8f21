use crate::model::{LatLng, MarkerId, PolygonId};

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonRecord {
    /// Open ring; the closing vertex is implied.
    pub lat_lngs: Vec<LatLng>,
    pub edges: Vec<MarkerId>,
}

impl PolygonRecord {
    /// Closed ring with the first vertex repeated at the end.
    pub fn ring(&self) -> Vec<LatLng> {
        let mut ring = self.lat_lngs.clone();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub polygon: PolygonId,
    pub index: usize,
    pub lat_lng: LatLng,
}

/// Polygons and their edge markers for one map. Ids are slot indices and are never reused.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    polygons: Vec<Option<PolygonRecord>>, // id is index
    markers: Vec<Option<Marker>>,         // id is index
    live: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lat_lngs: Vec<LatLng>) -> PolygonId {
        let id = self.polygons.len() as PolygonId;
        self.polygons.push(Some(PolygonRecord { lat_lngs, edges: Vec::new() }));
        self.live += 1;
        id
    }

    pub fn get(&self, id: PolygonId) -> Option<&PolygonRecord> {
        self.polygons.get(id as usize).and_then(|p| p.as_ref())
    }

    pub fn get_mut(&mut self, id: PolygonId) -> Option<&mut PolygonRecord> {
        self.polygons.get_mut(id as usize).and_then(|p| p.as_mut())
    }

    pub fn contains(&self, id: PolygonId) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: PolygonId) -> Option<PolygonRecord> {
        let removed = self.polygons.get_mut(id as usize).and_then(Option::take);
        if removed.is_some() {
            self.live -= 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.live
    }

    /// Live polygons in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PolygonId, &PolygonRecord)> {
        self.polygons
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_ref().map(|p| (i as PolygonId, p)))
    }

    pub fn ids(&self) -> Vec<PolygonId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn add_marker(&mut self, polygon: PolygonId, index: usize, lat_lng: LatLng) -> MarkerId {
        let id = self.markers.len() as MarkerId;
        self.markers.push(Some(Marker { polygon, index, lat_lng }));
        id
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id as usize).and_then(|m| m.as_ref())
    }

    pub fn marker_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.get_mut(id as usize).and_then(|m| m.as_mut())
    }

    pub fn remove_marker(&mut self, id: MarkerId) -> Option<Marker> {
        self.markers.get_mut(id as usize).and_then(Option::take)
    }
}
