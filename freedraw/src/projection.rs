use std::f64::consts::PI;

use crate::model::{LatLng, Point};

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Maps between geographic coordinates and container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Spherical Web Mercator at a fixed zoom, offset by the container's top-left pixel.
    WebMercator { zoom: f64, origin: Point },
    /// `lng = x / scale`, `lat = -y / scale`. Exact for unit scale.
    Planar { scale: f64 },
}

impl Projection {
    pub fn web_mercator(center: LatLng, zoom: f64, width: f64, height: f64) -> Projection {
        let c = mercator_world(center, zoom);
        Projection::WebMercator {
            zoom,
            origin: Point::new(c.x - width / 2.0, c.y - height / 2.0),
        }
    }

    pub fn planar() -> Projection {
        Projection::Planar { scale: 1.0 }
    }

    pub fn project(&self, ll: LatLng) -> Point {
        match *self {
            Projection::WebMercator { zoom, origin } => {
                let w = mercator_world(ll, zoom);
                Point::new(w.x - origin.x, w.y - origin.y)
            }
            Projection::Planar { scale } => Point::new(ll.lng * scale, -ll.lat * scale),
        }
    }

    pub fn unproject(&self, p: Point) -> LatLng {
        match *self {
            Projection::WebMercator { zoom, origin } => {
                let s = TILE_SIZE * zoom.exp2();
                let (x, y) = (p.x + origin.x, p.y + origin.y);
                let lng = x / s * 360.0 - 180.0;
                let n = PI - 2.0 * PI * y / s;
                LatLng::new(n.sinh().atan().to_degrees(), lng)
            }
            Projection::Planar { scale } => LatLng::new(-p.y / scale, p.x / scale),
        }
    }
}

fn mercator_world(ll: LatLng, zoom: f64) -> Point {
    let s = TILE_SIZE * zoom.exp2();
    let lat = ll.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (ll.lng + 180.0) / 360.0 * s;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * s;
    Point::new(x, y)
}
