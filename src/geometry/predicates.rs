//! Geometric primitives shared by the sweep engine: the orientation
//! predicate and the segment/segment intersection routine (§4.1).

use super::{Bbox, Segment, Vertex};

/// `(p0.x - p2.x)(p1.y - p2.y) - (p1.x - p2.x)(p0.y - p2.y)`.
///
/// Sign encodes the orientation of the triangle `p0, p1, p2`: positive for
/// counter-clockwise, negative for clockwise, zero iff collinear.
pub fn signed_area(p0: Vertex, p1: Vertex, p2: Vertex) -> f64 {
    (p0.x - p2.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p0.y - p2.y)
}

/// Outcome of [`find_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The segments do not meet.
    None,
    /// The segments meet at a single point.
    Point(Vertex),
    /// The segments overlap collinearly between the two given endpoints.
    Overlap(Vertex, Vertex),
}

impl Intersection {
    pub fn count(&self) -> usize {
        match self {
            Intersection::None => 0,
            Intersection::Point(_) => 1,
            Intersection::Overlap(_, _) => 2,
        }
    }
}

/// Snap tolerance for treating a near-endpoint intersection as exactly that
/// endpoint. Kept tiny: the reference relies on exact endpoint equality
/// after bbox-clamping, and only resorts to a tolerance to absorb the last
/// bit of floating-point drift from the parametric solve below.
const SNAP_EPS: f64 = 1e-12;

fn nearly_eq(a: Vertex, b: Vertex) -> bool {
    (a.x - b.x).abs() <= SNAP_EPS && (a.y - b.y).abs() <= SNAP_EPS
}

/// Intersect two segments (§4.1).
///
/// Returns `None` if they don't meet, `Point` for a single intersection
/// point (snapped to a shared endpoint when the geometry says they touch
/// there), or `Overlap` for a collinear overlap. All returned points are
/// clamped to the intersection rectangle of the two segments' bounding
/// boxes to bound numerical drift.
pub fn find_intersection(a: &Segment, b: &Segment) -> Intersection {
    let bbox_a = segment_bbox(a);
    let bbox_b = segment_bbox(b);
    let rect = bbox_a.intersection(&bbox_b);
    if rect.is_empty() {
        return Intersection::None;
    }

    let d_a = a.target - a.source;
    let d_b = b.target - b.source;
    let denom = d_a.cross(d_b);

    if denom != 0.0 {
        // Non-parallel: solve for the parameter along `a` and `b`.
        let diff = b.source - a.source;
        let t_a = diff.cross(d_b) / denom;
        let t_b = diff.cross(d_a) / denom;
        if !(0.0..=1.0).contains(&t_a) || !(0.0..=1.0).contains(&t_b) {
            return Intersection::None;
        }
        let raw = Vertex::new(
            a.source.x + t_a * d_a.x,
            a.source.y + t_a * d_a.y,
        );
        let p = rect.clamp(raw);
        return Intersection::Point(snap_to_endpoint(p, a, b));
    }

    // Parallel. Collinear iff the connecting vector is also parallel to the
    // segments' direction.
    let connecting = b.source - a.source;
    if d_a.cross(connecting) != 0.0 {
        return Intersection::None;
    }

    // Collinear: project both segments onto `a`'s direction and intersect
    // the two resulting intervals.
    let len2 = d_a.dot(d_a);
    if len2 == 0.0 {
        return Intersection::None;
    }
    let proj = |v: Vertex| (v - a.source).dot(d_a) / len2;
    let (a0, a1) = (0.0_f64, 1.0_f64);
    let (mut b0, mut b1) = (proj(b.source), proj(b.target));
    if b0 > b1 {
        std::mem::swap(&mut b0, &mut b1);
    }
    let lo = a0.max(b0).clamp(0.0, 1.0);
    let hi = a1.min(b1).clamp(0.0, 1.0);
    if lo > hi {
        return Intersection::None;
    }
    let p0 = rect.clamp(Vertex::new(
        a.source.x + lo * d_a.x,
        a.source.y + lo * d_a.y,
    ));
    let p1 = rect.clamp(Vertex::new(
        a.source.x + hi * d_a.x,
        a.source.y + hi * d_a.y,
    ));
    if nearly_eq(p0, p1) {
        Intersection::Point(snap_to_endpoint(p0, a, b))
    } else {
        Intersection::Overlap(p0, p1)
    }
}

fn segment_bbox(s: &Segment) -> Bbox {
    let mut bb = Bbox::from_vertex(s.source);
    bb.extend(s.target);
    bb
}

fn snap_to_endpoint(p: Vertex, a: &Segment, b: &Segment) -> Vertex {
    for endpoint in [a.source, a.target, b.source, b.target] {
        if nearly_eq(p, endpoint) {
            return endpoint;
        }
    }
    p
}
