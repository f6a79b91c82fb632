//! The event queue's total order (§4.3).

use std::cmp::Ordering;

use crate::geometry::signed_area;

use super::event::{EventKey, PolygonSide, SweepEvent};

/// Compare two events for priority-queue order: `Less` means `a` is
/// processed before `b`.
pub fn compare_events(a: &SweepEvent, b: &SweepEvent) -> Ordering {
    compare_keys(&a.key(), &b.key())
}

/// Same as [`compare_events`] but over the lightweight [`EventKey`]
/// snapshot, so the event queue can order its entries without an arena
/// lookup.
pub fn compare_keys(a: &EventKey, b: &EventKey) -> Ordering {
    a.point
        .x
        .partial_cmp(&b.point.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.point
                .y
                .partial_cmp(&b.point.y)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            // Right endpoint (`left = false`) first.
            b.left.cmp(&a.left)
        })
        .then_with(|| {
            let area = signed_area(a.point, a.other_point, b.other_point);
            if area > 0.0 {
                Ordering::Less
            } else if area < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| side_order(a.polygon_side).cmp(&side_order(b.polygon_side)))
        .then_with(|| a.seq.cmp(&b.seq))
}

fn side_order(side: PolygonSide) -> u8 {
    match side {
        PolygonSide::Subject => 0,
        PolygonSide::Clipping => 1,
    }
}
