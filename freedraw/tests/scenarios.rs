//! End-to-end interaction scenarios driven through the pointer API.

use freedraw::{Event, EventType, FreeDraw, HeadlessMap, LatLng, Mode, Options, Point};

/// Planar map: pixel (x, y) is lat/lng (-y, x).
fn ll(x: f64, y: f64) -> LatLng {
    LatLng::new(-y, x)
}

fn square(x: f64, y: f64, size: f64) -> Vec<LatLng> {
    vec![ll(x, y), ll(x + size, y), ll(x + size, y + size), ll(x, y + size)]
}

fn options(mode: Mode) -> Options {
    Options { mode, concave_polygon: false, merge_polygons: false, ..Options::default() }
}

fn marker_events(map: &HeadlessMap) -> Vec<EventType> {
    map.events()
        .iter()
        .filter_map(|e| match e {
            Event::Markers { event_type, .. } => Some(*event_type),
            _ => None,
        })
        .collect()
}

#[test]
fn freehand_stroke_creates_one_polygon() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::CREATE));
    assert!(fd.pointer_down(Point::new(0.0, 0.0)));
    fd.pointer_move(Point::new(10.0, 0.0));
    fd.pointer_move(Point::new(10.0, 10.0));
    fd.pointer_move(Point::new(0.0, 10.0));
    assert_eq!(fd.adapter().stroke().len(), 3);
    fd.pointer_up();

    assert_eq!(fd.size(), 1);
    let rings = fd.rings();
    assert_eq!(rings[0].len(), 5);
    assert_eq!(rings[0][0], rings[0][4]);
    assert_eq!(&rings[0][..4], &square(0.0, 0.0, 10.0)[..]);
    assert!(fd.adapter().stroke().is_empty());
    assert_eq!(marker_events(fd.adapter()), vec![EventType::Create]);
    assert!(!fd.is_drawing());
}

#[test]
fn dragging_a_vertex_into_a_neighbour_merges_them() {
    let opts = Options { merge_polygons: true, ..options(Mode::ALL) };
    let mut fd = FreeDraw::new(HeadlessMap::planar(), opts);
    let a = fd.create(&square(0.0, 0.0, 100.0)).unwrap();
    fd.create(&square(150.0, 0.0, 100.0)).unwrap();
    assert_eq!(fd.size(), 2);

    // Vertex 2 of `a` is its bottom-right corner at (100, 100).
    let marker = fd.polygon(a[0]).unwrap().edges[2];
    assert!(fd.edge_mouse_down(marker));
    assert!(!fd.adapter().is_dragging());
    fd.pointer_move(Point::new(200.0, 50.0));
    assert_eq!(fd.polygon(a[0]).unwrap().lat_lngs[2], ll(200.0, 50.0));
    fd.pointer_up();

    assert_eq!(fd.size(), 1);
    assert_eq!(marker_events(fd.adapter()).last(), Some(&EventType::Edit));
    // CREATE is active, so the map stays locked after the drag.
    assert!(!fd.adapter().is_dragging());
}

#[test]
fn delete_mode_removes_on_any_click() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::DELETE));
    let a = fd.create(&square(0.0, 0.0, 100.0)).unwrap()[0];
    let b = fd.create(&square(200.0, 0.0, 100.0)).unwrap()[0];

    assert_eq!(fd.polygon_click(a, Point::new(50.0, 50.0)), Some(EventType::Remove));
    assert_eq!(fd.size(), 1);
    // Right on the edge still deletes when APPEND is off.
    assert_eq!(fd.polygon_click(b, Point::new(250.0, 1.0)), Some(EventType::Remove));
    assert_eq!(fd.size(), 0);
    assert_eq!(marker_events(fd.adapter()).last(), Some(&EventType::Remove));
    assert_eq!(fd.adapter().polygon_count(), 0);
    assert_eq!(fd.adapter().marker_count(), 0);
}

#[test]
fn edit_notification_waits_for_edit_exit() {
    let opts = Options { notify_after_edit_exit: true, ..options(Mode::EDIT) };
    let mut fd = FreeDraw::new(HeadlessMap::planar(), opts);
    let id = fd.create(&square(0.0, 0.0, 100.0)).unwrap()[0];
    fd.adapter_mut().take_events();

    let marker = fd.polygon(id).unwrap().edges[0];
    assert!(fd.edge_mouse_down(marker));
    fd.pointer_move(Point::new(-20.0, -20.0));
    fd.pointer_up();
    assert!(marker_events(fd.adapter()).is_empty());

    let mode = fd.mode() ^ Mode::EDIT;
    assert_eq!(fd.set_mode(mode), Mode::NONE);
    assert_eq!(marker_events(fd.adapter()), vec![EventType::Edit]);

    fd.set_mode(Mode::EDIT);
    fd.set_mode(Mode::NONE);
    assert_eq!(marker_events(fd.adapter()), vec![EventType::Edit]);
}

#[test]
fn pending_edit_fires_on_any_mode_change() {
    let opts = Options { notify_after_edit_exit: true, ..options(Mode::EDIT) };
    let mut fd = FreeDraw::new(HeadlessMap::planar(), opts);
    let id = fd.create(&square(0.0, 0.0, 100.0)).unwrap()[0];
    fd.adapter_mut().take_events();

    let marker = fd.polygon(id).unwrap().edges[0];
    assert!(fd.edge_mouse_down(marker));
    fd.pointer_move(Point::new(-20.0, -20.0));
    fd.pointer_up();
    assert!(marker_events(fd.adapter()).is_empty());

    fd.set_mode(Mode::EDIT | Mode::DELETE);
    assert_eq!(marker_events(fd.adapter()), vec![EventType::Edit]);
    fd.set_mode(Mode::EDIT);
    assert_eq!(marker_events(fd.adapter()), vec![EventType::Edit]);
}

#[test]
fn cancel_discards_the_stroke() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::CREATE));
    fd.pointer_down(Point::new(0.0, 0.0));
    fd.pointer_move(Point::new(10.0, 0.0));
    fd.pointer_move(Point::new(10.0, 10.0));
    assert!(!fd.adapter().stroke().is_empty());

    fd.cancel();
    assert!(fd.adapter().stroke().is_empty());
    assert!(!fd.is_drawing());
    fd.pointer_up();
    assert_eq!(fd.size(), 0);
    assert!(marker_events(fd.adapter()).is_empty());

    // Outside a gesture it does nothing.
    fd.cancel();
    assert_eq!(fd.size(), 0);
}

#[test]
fn pointer_leave_finishes_like_release() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::CREATE));
    fd.pointer_down(Point::new(0.0, 0.0));
    for p in [(40.0, 0.0), (40.0, 40.0), (0.0, 40.0)] {
        fd.pointer_move(Point::new(p.0, p.1));
    }
    fd.pointer_leave();
    assert_eq!(fd.size(), 1);
}

#[test]
fn second_pointer_down_is_ignored_while_drawing() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::CREATE));
    assert!(fd.pointer_down(Point::new(0.0, 0.0)));
    assert!(!fd.pointer_down(Point::new(5.0, 5.0)));
    fd.pointer_move(Point::new(20.0, 0.0));
    fd.pointer_move(Point::new(20.0, 20.0));
    fd.pointer_up();
    assert_eq!(fd.size(), 1);
    assert_eq!(fd.polygon(fd.all()[0]).unwrap().lat_lngs[0], ll(0.0, 0.0));
}

#[test]
fn pointer_down_needs_create_mode() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::EDIT));
    assert!(!fd.pointer_down(Point::new(0.0, 0.0)));
    fd.pointer_move(Point::new(10.0, 0.0));
    fd.pointer_up();
    assert_eq!(fd.size(), 0);
    assert!(fd.adapter().stroke().is_empty());
}

#[test]
fn leave_mode_after_create_drops_create_bit() {
    let opts = Options { leave_mode_after_create: true, ..options(Mode::ALL) };
    let mut fd = FreeDraw::new(HeadlessMap::planar(), opts);
    fd.pointer_down(Point::new(0.0, 0.0));
    for p in [(30.0, 0.0), (30.0, 30.0), (0.0, 30.0)] {
        fd.pointer_move(Point::new(p.0, p.1));
    }
    fd.pointer_up();
    assert_eq!(fd.mode(), Mode::EDIT | Mode::DELETE | Mode::APPEND);
    assert!(fd.adapter().is_dragging());
}

#[test]
fn stroke_at_capacity_is_dropped() {
    let opts = Options { maximum_polygons: Some(1), ..options(Mode::CREATE) };
    let mut fd = FreeDraw::new(HeadlessMap::planar(), opts);
    fd.create(&square(0.0, 0.0, 10.0)).unwrap();
    fd.pointer_down(Point::new(100.0, 100.0));
    for p in [(130.0, 100.0), (130.0, 130.0), (100.0, 130.0)] {
        fd.pointer_move(Point::new(p.0, p.1));
    }
    fd.pointer_up();
    assert_eq!(fd.size(), 1);
}

#[test]
fn stale_marker_mousedown_is_ignored() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::EDIT));
    let id = fd.create(&square(0.0, 0.0, 100.0)).unwrap()[0];
    let marker = fd.polygon(id).unwrap().edges[1];
    fd.set_mode(Mode::DELETE);
    assert!(!fd.adapter().marker(marker).unwrap().enabled);
    assert!(!fd.edge_mouse_down(marker));
    fd.pointer_move(Point::new(500.0, 500.0));
    fd.pointer_up();
    assert_eq!(fd.polygon(id).unwrap().lat_lngs[1], ll(100.0, 0.0));
}

#[test]
fn drag_release_restores_map_dragging_outside_create() {
    let mut fd = FreeDraw::new(HeadlessMap::planar(), options(Mode::EDIT));
    let id = fd.create(&square(0.0, 0.0, 100.0)).unwrap()[0];
    let marker = fd.polygon(id).unwrap().edges[3];
    fd.edge_mouse_down(marker);
    assert!(!fd.adapter().is_dragging());
    fd.pointer_move(Point::new(-10.0, 120.0));
    fd.pointer_up();
    assert!(fd.adapter().is_dragging());
    assert_eq!(fd.size(), 1);
    let ring = &fd.rings()[0];
    assert!(ring.contains(&ll(-10.0, 120.0)));
    assert_eq!(marker_events(fd.adapter()).last(), Some(&EventType::Edit));
}
