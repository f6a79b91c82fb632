//! `ConnectEdges` — contour reconstruction from labelled events (§4.8).
//!
//! Grounded on `connect_edges.rs` in the Martinez-Rueda Rust port carried in
//! this pack (`happydpc-rust-geo-booleanop`), which implements the same
//! `order_events`/`next_pos`/hole-context walk this module does. The
//! reference holds `Rc<SweepEvent>` and mutates shared `other_pos`/
//! `output_contour_id` fields in place; this arena-of-events crate only
//! borrows the event slice immutably here; `pos` and `output_contour_id`
//! bookkeeping is kept in local vectors scoped to the `result_events` slice
//! instead of written back onto `SweepEvent`.

use std::collections::HashMap;

use crate::geometry::{Contour, Polygon};

use super::event::{EventId, SweepEvent};
use super::event_cmp::compare_events;

/// Step 1 + 2 of `ConnectEdges`: keep every event that contributes to the
/// result, then stably re-sort by the event comparator. A stable re-sort is
/// required because subdivisions can append events to `sorted_events` out
/// of comparator order (§4.8 step 2); `sort_by` is a stable merge sort, so
/// it satisfies that without the reference's repeated bubble-sort pass.
fn order_events(events: &[SweepEvent], sorted_events: &[EventId]) -> Vec<EventId> {
    let mut result_events: Vec<EventId> = sorted_events
        .iter()
        .copied()
        .filter(|&id| {
            let e = &events[id.0];
            if e.left {
                e.in_result
            } else {
                events[e.other.0].in_result
            }
        })
        .collect();
    result_events.sort_by(|&a, &b| compare_events(&events[a.0], &events[b.0]));
    result_events
}

/// Step 3: for every position in `result_events`, the position of its
/// partner. Built by giving every event its own index, then letting every
/// *left* event swap its slot with its partner's — equivalent to the
/// reference's "set_other_pos(pos), then swap" dance, but computed directly
/// since both positions are known up front here.
struct PartnerIndex {
    pos_of: HashMap<EventId, usize>,
    partner_pos: Vec<usize>,
}

impl PartnerIndex {
    fn build(events: &[SweepEvent], result_events: &[EventId]) -> Self {
        let mut pos_of = HashMap::with_capacity(result_events.len());
        for (i, &id) in result_events.iter().enumerate() {
            pos_of.insert(id, i);
        }
        let mut partner_pos: Vec<usize> = (0..result_events.len()).collect();
        for (i, &id) in result_events.iter().enumerate() {
            let e = &events[id.0];
            if e.left {
                if let Some(&j) = pos_of.get(&e.other) {
                    partner_pos[i] = j;
                    partner_pos[j] = i;
                }
            }
        }
        PartnerIndex { pos_of, partner_pos }
    }
}

/// `NextPos` (§4.8): scan forward over events sharing `result_events[pos]`'s
/// point for the first unprocessed one; failing that, scan backward from
/// `pos - 1` down to (at most) `orig_pos` for an unprocessed index.
///
/// Every position this walk ever visits for a contour started at `orig_pos`
/// is `>= orig_pos` (positions below it belong to contours already fully
/// consumed by earlier iterations of the outer loop), so the backward scan
/// never needs to look below `orig_pos` and the subtraction below can't
/// underflow.
fn next_pos(
    result_events: &[EventId],
    events: &[SweepEvent],
    processed: &[bool],
    pos: usize,
    orig_pos: usize,
) -> usize {
    let point = events[result_events[pos].0].point;

    let mut fwd = pos + 1;
    while fwd < result_events.len() && events[result_events[fwd].0].point == point {
        if !processed[fwd] {
            return fwd;
        }
        fwd += 1;
    }

    let mut back = pos;
    while back > orig_pos {
        back -= 1;
        if !processed[back] {
            return back;
        }
    }
    back
}

/// Figure-4-of-the-Martinez-paper hole/depth attribution: derive the new
/// contour's `(hole_of, depth)` from its `prev_in_result` event, and, if
/// it's a hole, register it on its parent's hole list.
fn contour_context(
    events: &[SweepEvent],
    result_events: &[EventId],
    partners: &PartnerIndex,
    output_contour_id: &[Option<usize>],
    polygon: &mut Polygon,
    start_pos: usize,
    new_contour_id: usize,
) -> (Option<usize>, u32) {
    let start_event = &events[result_events[start_pos].0];
    let Some(prev_id) = start_event.prev_in_result else {
        return (None, 0);
    };

    let prev_event = &events[prev_id.0];
    let lower_pos = *partners
        .pos_of
        .get(&prev_id)
        .expect("prev_in_result is always a result event");
    let lower_contour_id = output_contour_id[lower_pos]
        .expect("prev_in_result was assigned an output contour in an earlier iteration");

    if prev_event.result_transition.is_contributing() {
        // We are inside the lower contour: attach as a hole, either to that
        // contour's own parent (if it's itself a hole) or to it directly.
        let lower_contour = polygon.contour(lower_contour_id);
        if let Some(parent_id) = lower_contour.hole_of() {
            let depth = polygon.contour(lower_contour_id).depth();
            polygon.contour_mut(parent_id).push_hole(new_contour_id);
            (Some(parent_id), depth)
        } else {
            let depth = lower_contour.depth() + 1;
            polygon
                .contour_mut(lower_contour_id)
                .push_hole(new_contour_id);
            (Some(lower_contour_id), depth)
        }
    } else {
        // The lower segment's transition is "outside": we remain an
        // external contour at the same depth.
        (None, polygon.contour(lower_contour_id).depth())
    }
}

/// `ConnectEdges` (§4.8): assemble the labelled events into a [`Polygon`]
/// with hole/depth attribution, then enforce the winding invariant (§3).
pub(super) fn connect_edges(events: &[SweepEvent], sorted_events: &[EventId]) -> Polygon {
    let result_events = order_events(events, sorted_events);
    let partners = PartnerIndex::build(events, &result_events);

    let mut processed = vec![false; result_events.len()];
    let mut output_contour_id: Vec<Option<usize>> = vec![None; result_events.len()];
    let mut polygon = Polygon::new();

    for start in 0..result_events.len() {
        if processed[start] {
            continue;
        }

        let contour_id = polygon.contour_count();
        let (hole_of, depth) = contour_context(
            events,
            &result_events,
            &partners,
            &output_contour_id,
            &mut polygon,
            start,
            contour_id,
        );

        let mut contour = Contour::new();
        contour.set_hole_of(hole_of);
        contour.set_depth(depth);
        contour.push_vertex(events[result_events[start].0].point);

        let mut pos = start;
        loop {
            processed[pos] = true;
            output_contour_id[pos] = Some(contour_id);

            pos = partners.partner_pos[pos];

            processed[pos] = true;
            output_contour_id[pos] = Some(contour_id);
            contour.push_vertex(events[result_events[pos].0].point);

            pos = next_pos(&result_events, events, &processed, pos, start);
            if pos == start {
                break;
            }
        }

        polygon.push(contour);
    }

    // Final orientation pass (§4.8, §3): the walk above is only guaranteed
    // to wind consistently for even-depth contours; odd-depth ones come out
    // backwards and are flipped here.
    for i in 0..polygon.contour_count() {
        if polygon.contour(i).depth() % 2 == 1 {
            polygon.contour_mut(i).reverse();
        }
    }

    polygon
}
