//! The status line's total order over currently-active left events (§4.4).

use std::cmp::Ordering;

use crate::geometry::signed_area;

use super::event::{EventKey, PolygonSide};
use super::event_cmp::compare_keys;

/// Compare two *left* events, by key, by the position their segments
/// occupy in the status line: `Less` means `x`'s segment lies below `y`'s.
pub fn compare_segments(x: &EventKey, y: &EventKey) -> Ordering {
    debug_assert!(x.left && y.left, "segment comparator only orders left events");

    let area_y_point = signed_area(x.point, x.other_point, y.point);
    let area_y_other = signed_area(x.point, x.other_point, y.other_point);
    let collinear = area_y_point == 0.0 && area_y_other == 0.0;

    if !collinear {
        if x.point == y.point {
            return if area_y_other > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if x.point.x == y.point.x {
            return x
                .point
                .y
                .partial_cmp(&y.point.y)
                .unwrap_or(Ordering::Equal);
        }
        // Neither shares a left point nor an x-coordinate: defer to
        // whichever segment entered the sweep earlier, then check that
        // earlier segment's side relative to the later segment's left
        // endpoint.
        return if compare_keys(x, y) == Ordering::Less {
            // `x` is earlier.
            let area = signed_area(x.point, x.other_point, y.point);
            if area > 0.0 {
                Ordering::Less
            } else if area < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        } else {
            // `y` is earlier.
            let area = signed_area(y.point, y.other_point, x.point);
            if area > 0.0 {
                Ordering::Greater
            } else if area < 0.0 {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        };
    }

    // Collinear branch.
    if x.polygon_side != y.polygon_side {
        return side_order(x.polygon_side).cmp(&side_order(y.polygon_side));
    }
    if x.point == y.point && x.other_point != y.other_point {
        return x.contour_id.cmp(&y.contour_id);
    }
    // Equivalent for status-line purposes; break the tie deterministically.
    x.seq.cmp(&y.seq)
}

fn side_order(side: PolygonSide) -> u8 {
    match side {
        PolygonSide::Subject => 0,
        PolygonSide::Clipping => 1,
    }
}
