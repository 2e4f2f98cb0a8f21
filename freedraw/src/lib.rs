pub mod adapter;
pub mod draw;
pub mod edges;
pub mod error;
pub mod headless;
pub mod merge;
pub mod mode;
pub mod model;
pub mod notify;
pub mod options;
pub mod polygon;
pub mod projection;
pub mod registry;
pub mod state;
pub mod geometry {
    pub mod curve;
    pub mod intersect;
    pub mod math;
    pub mod simplify;
    pub mod tolerance;
}
mod json;

pub use adapter::MapAdapter;
pub use error::{FreeDrawError, Result};
pub use headless::HeadlessMap;
pub use mode::Mode;
pub use model::{Event, EventType, LatLng, MarkerId, Point, PolygonId};
pub use options::{Flavor, Options};
pub use projection::Projection;

use draw::DrawSession;
use edges::EdgeDrag;
use log::debug;
use registry::PolygonRecord;
use state::MapState;

/// What the pointer is currently doing on the map.
#[derive(Clone, Debug, Default)]
enum Interaction {
    #[default]
    Idle,
    Drawing(DrawSession),
    DraggingEdge(EdgeDrag),
}

/// Freehand polygon drawing attached to one map.
pub struct FreeDraw<A: MapAdapter> {
    adapter: A,
    options: Options,
    state: MapState,
    interaction: Interaction,
}

impl<A: MapAdapter> FreeDraw<A> {
    /// Attaches to the map: creates the stroke layer and applies `options.mode`.
    pub fn new(adapter: A, options: Options) -> Self {
        let mut fd = FreeDraw { adapter, options, state: MapState::new(), interaction: Interaction::Idle };
        fd.adapter.create_stroke_layer();
        let mode = fd.options.mode;
        mode::mode_for(&mut fd.state, &mut fd.adapter, mode, &fd.options);
        fd
    }

    /// Detaches from the map and hands the adapter back.
    pub fn detach(mut self) -> A {
        self.cancel();
        polygon::clear_for(&mut self.state, &mut self.adapter);
        self.adapter.remove_stroke_layer();
        self.adapter
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    // Polygons

    pub fn create(&mut self, lat_lngs: &[LatLng]) -> Result<Vec<PolygonId>> {
        let options = self.options.clone();
        self.create_with(lat_lngs, &options)
    }

    pub fn create_with(&mut self, lat_lngs: &[LatLng], options: &Options) -> Result<Vec<PolygonId>> {
        if !lat_lngs.iter().all(LatLng::is_finite) {
            return Err(FreeDrawError::NonFinite { param: "lat_lngs" });
        }
        options.validate()?;
        let ids = polygon::create_for(&mut self.state, &mut self.adapter, lat_lngs, options, false);
        notify::update_for(&self.state.registry, &mut self.adapter, EventType::Create);
        Ok(ids)
    }

    pub fn remove(&mut self, id: PolygonId) -> bool {
        let removed = polygon::remove_for(&mut self.state, &mut self.adapter, id);
        notify::update_for(&self.state.registry, &mut self.adapter, EventType::Remove);
        removed
    }

    pub fn clear(&mut self) {
        polygon::clear_for(&mut self.state, &mut self.adapter);
        notify::update_for(&self.state.registry, &mut self.adapter, EventType::Clear);
    }

    pub fn size(&self) -> usize {
        self.state.registry.len()
    }

    pub fn all(&self) -> Vec<PolygonId> {
        self.state.registry.ids()
    }

    pub fn polygon(&self, id: PolygonId) -> Option<&PolygonRecord> {
        self.state.registry.get(id)
    }

    /// Closed rings of every polygon, as carried by the `markers` event.
    pub fn rings(&self) -> Vec<Vec<LatLng>> {
        notify::rings(&self.state.registry)
    }

    // Mode

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn set_mode(&mut self, mode: Mode) -> Mode {
        mode::mode_for(&mut self.state, &mut self.adapter, mode, &self.options)
    }

    // Pointer input

    pub fn is_drawing(&self) -> bool {
        matches!(self.interaction, Interaction::Drawing(_))
    }

    /// Starts a stroke when creating is allowed and nothing else is in progress.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !self.state.mode.contains(Mode::CREATE) {
            return false;
        }
        if !matches!(self.interaction, Interaction::Idle) {
            debug!("pointer down ignored: gesture already active");
            return false;
        }
        let mut session = DrawSession::new();
        session.feed(point, self.adapter.container_point_to_lat_lng(point));
        self.interaction = Interaction::Drawing(session);
        debug!("stroke started at ({}, {})", point.x, point.y);
        true
    }

    pub fn pointer_move(&mut self, point: Point) {
        match &mut self.interaction {
            Interaction::Idle => {}
            Interaction::Drawing(session) => {
                let lat_lng = self.adapter.container_point_to_lat_lng(point);
                if let Some(d) = session.feed(point, lat_lng) {
                    self.adapter.draw_stroke(&d, self.options.stroke_width);
                }
            }
            Interaction::DraggingEdge(drag) => {
                let drag = *drag;
                edges::drag_to(&mut self.state, &mut self.adapter, &drag, point);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::Drawing(session) => self.finish_stroke(session, true),
            Interaction::DraggingEdge(drag) => {
                edges::end_drag(&mut self.state, &mut self.adapter, &drag, &self.options);
            }
        }
    }

    /// The pointer left the document; finishes whatever was in progress like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Abandons an in-progress stroke without creating a polygon.
    pub fn cancel(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Drawing(session) => self.finish_stroke(session, false),
            other => self.interaction = other,
        }
    }

    pub fn polygon_click(&mut self, id: PolygonId, point: Point) -> Option<EventType> {
        polygon::polygon_click(&mut self.state, &mut self.adapter, id, point, &self.options)
    }

    pub fn edge_mouse_down(&mut self, marker: MarkerId) -> bool {
        if !matches!(self.interaction, Interaction::Idle) {
            return false;
        }
        match edges::start_drag(&mut self.state, &mut self.adapter, marker) {
            Some(drag) => {
                self.interaction = Interaction::DraggingEdge(drag);
                true
            }
            None => false,
        }
    }

    fn finish_stroke(&mut self, mut session: DrawSession, create: bool) {
        self.adapter.clear_stroke();
        let Some(points) = session.finish(create) else {
            debug!("stroke discarded");
            return;
        };
        let ids = polygon::create_for(&mut self.state, &mut self.adapter, &points, &self.options, false);
        debug!("stroke of {} point(s) produced {} polygon(s)", points.len(), ids.len());
        notify::update_for(&self.state.registry, &mut self.adapter, EventType::Create);
        if self.options.leave_mode_after_create {
            let mode = self.state.mode ^ Mode::CREATE;
            self.set_mode(mode);
        }
    }

    // Snapshot

    pub fn to_json(&self) -> serde_json::Value {
        json::to_json_impl(&self.state.registry, self.state.mode)
    }

    /// Restores polygons from `to_json` output; they are added as-is, without hull or merge.
    pub fn load_json(&mut self, v: serde_json::Value) -> Result<usize> {
        let (rings, _) = json::from_json_impl(v)?;
        let mut count = 0;
        for ring in &rings {
            count += polygon::create_for(&mut self.state, &mut self.adapter, ring, &self.options, true).len();
        }
        notify::update_for(&self.state.registry, &mut self.adapter, EventType::Create);
        Ok(count)
    }
}
