//! The sweep engine proper (§4.7): ingestion, the main loop,
//! `ComputeFields`, `PossibleIntersection` and `DivideSegment`.

use log::{debug, trace, warn};

use crate::geometry::{find_intersection, Bbox, Contour, Intersection as GeomIntersection, Polygon, Segment, Vertex};
use crate::Operation;

use super::connect::connect_edges;
use super::event::{EdgeType, EventId, PolygonSide, ResultTransition, SweepEvent};
use super::event_queue::EventQueue;
use super::status_line::StatusLine;

/// Top-level entry point: trivial pre-checks (§4.7) plus the full sweep.
pub(crate) fn compute(subject: &Polygon, clip: &Polygon, operation: Operation) -> Polygon {
    if subject.is_empty() || clip.is_empty() {
        return match operation {
            Operation::Intersection => Polygon::new(),
            Operation::Difference => subject.clone(),
            Operation::Union | Operation::Xor => {
                if subject.is_empty() && clip.is_empty() {
                    Polygon::new()
                } else if subject.is_empty() {
                    clip.clone()
                } else {
                    subject.clone()
                }
            }
        };
    }

    let subject_bbox = subject.bounding_box();
    let clip_bbox = clip.bounding_box();
    if !subject_bbox.intersects(&clip_bbox) {
        return match operation {
            Operation::Intersection => Polygon::new(),
            Operation::Difference => subject.clone(),
            Operation::Union | Operation::Xor => {
                let mut joined = subject.clone();
                joined.join(clip);
                joined
            }
        };
    }

    let mut engine = Engine::new();
    engine.ingest_polygon(subject, PolygonSide::Subject);
    engine.ingest_polygon(clip, PolygonSide::Clipping);
    engine.sweep(operation, subject_bbox, clip_bbox)
}

pub(super) struct Engine {
    events: Vec<SweepEvent>,
    queue: EventQueue,
    status: StatusLine,
    next_seq: u64,
    next_contour_id: u32,
}

impl Engine {
    fn new() -> Self {
        Engine {
            events: Vec::new(),
            queue: EventQueue::new(),
            status: StatusLine::new(),
            next_seq: 0,
            next_contour_id: 0,
        }
    }

    fn alloc_seq(&mut self) -> u64 {
        let s = self.next_seq;
        self.next_seq += 1;
        s
    }

    fn event(&self, id: EventId) -> &SweepEvent {
        &self.events[id.0]
    }

    fn event_mut(&mut self, id: EventId) -> &mut SweepEvent {
        &mut self.events[id.0]
    }

    // -- Ingestion ---------------------------------------------------

    fn ingest_polygon(&mut self, polygon: &Polygon, side: PolygonSide) {
        for contour in polygon.contours() {
            self.ingest_contour(contour, side);
        }
    }

    fn ingest_contour(&mut self, contour: &Contour, side: PolygonSide) {
        let contour_id = self.next_contour_id;
        self.next_contour_id += 1;
        for i in 0..contour.edge_count() {
            let edge = contour.edge(i);
            if edge.is_degenerate() {
                continue;
            }
            self.add_segment(edge, side, contour_id);
        }
    }

    fn add_segment(&mut self, seg: Segment, side: PolygonSide, contour_id: u32) {
        let p1_is_left = (seg.source.x, seg.source.y) < (seg.target.x, seg.target.y);
        let (left_point, right_point) = if p1_is_left {
            (seg.source, seg.target)
        } else {
            (seg.target, seg.source)
        };

        let left_id = EventId(self.events.len());
        let right_id = EventId(self.events.len() + 1);

        let left_seq = self.alloc_seq();
        let right_seq = self.alloc_seq();

        self.events.push(SweepEvent {
            point: left_point,
            left: true,
            other: right_id,
            other_point: right_point,
            polygon_side: side,
            contour_id,
            seq: left_seq,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            pos_sl: None,
            prev_in_result: None,
            in_result: false,
            result_transition: ResultTransition::Neutral,
        });
        self.events.push(SweepEvent {
            point: right_point,
            left: false,
            other: left_id,
            other_point: left_point,
            polygon_side: side,
            contour_id,
            seq: right_seq,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            pos_sl: None,
            prev_in_result: None,
            in_result: false,
            result_transition: ResultTransition::Neutral,
        });

        self.queue.push(left_id, &self.events[left_id.0]);
        self.queue.push(right_id, &self.events[right_id.0]);
    }

    // -- Main loop -----------------------------------------------------

    fn sweep(&mut self, operation: Operation, subject_bbox: Bbox, clip_bbox: Bbox) -> Polygon {
        let mut sorted_events: Vec<EventId> = Vec::new();

        while let Some(id) = self.queue.pop() {
            let point = self.event(id).point;

            match operation {
                Operation::Intersection
                    if point.x > subject_bbox.x_max.min(clip_bbox.x_max) =>
                {
                    break;
                }
                Operation::Difference if point.x > subject_bbox.x_max => break,
                _ => {}
            }

            sorted_events.push(id);

            if self.event(id).left {
                self.handle_left_event(id, operation);
            } else {
                self.handle_right_event(id);
            }
        }

        connect_edges(&self.events, &sorted_events)
    }

    fn handle_left_event(&mut self, id: EventId, operation: Operation) {
        let key = self.event(id).key();
        let idx = self.status.insert(id, key);
        self.sync_positions(idx);
        debug!("insert_active[{idx}]: {point:?}", point = self.event(id).point);

        let prev = self.status.prev(idx).map(|i| self.status.id_at(i));
        self.compute_fields(id, prev, operation);

        if let Some(next_idx) = self.status.next(idx) {
            let next_id = self.status.id_at(next_idx);
            if self.possible_intersection(id, next_id) == 2 {
                let prev_again = self.status.prev(idx).map(|i| self.status.id_at(i));
                self.compute_fields(id, prev_again, operation);
                let prev_of_next = self.status.prev(next_idx).map(|i| self.status.id_at(i));
                self.compute_fields(next_id, prev_of_next, operation);
            }
        }

        // Re-read `idx`: a prior subdivision may have removed/reinserted
        // `id` at a different position (§9, "comparator depending on
        // mutating geometry").
        let idx = self.event(id).pos_sl.expect("event just inserted");
        if let Some(prev_idx) = self.status.prev(idx) {
            let prev_id = self.status.id_at(prev_idx);
            if self.possible_intersection(prev_id, id) == 2 {
                let prev_prev = self
                    .status
                    .prev(prev_idx)
                    .map(|i| self.status.id_at(i));
                self.compute_fields(prev_id, prev_prev, operation);
                let idx_now = self.event(id).pos_sl.expect("still active");
                let prev_now = self.status.prev(idx_now).map(|i| self.status.id_at(i));
                self.compute_fields(id, prev_now, operation);
            }
        }
    }

    fn handle_right_event(&mut self, id: EventId) {
        let left_id = self.event(id).other;
        let idx = self.event(left_id).pos_sl.expect("right event's partner must be active");
        let prev = self.status.prev(idx).map(|i| self.status.id_at(i));
        let next = self.status.next(idx).map(|i| self.status.id_at(i));

        debug!("remove_active[{idx}]: {point:?}", point = self.event(left_id).point);
        self.status.remove(idx);
        self.event_mut(left_id).pos_sl = None;
        self.sync_positions(idx);

        if let (Some(prev_id), Some(next_id)) = (prev, next) {
            self.possible_intersection(prev_id, next_id);
        }
    }

    /// Refresh `pos_sl` for every status-line entry at or after `from`
    /// (insertion/removal shifts every later index by one).
    fn sync_positions(&mut self, from: usize) {
        let updates: Vec<(EventId, usize)> = self.status.ids_from(from).collect();
        for (idx, id) in updates {
            self.event_mut(id).pos_sl = Some(idx);
        }
    }

    // -- Labelling -------------------------------------------------------

    fn compute_fields(&mut self, id: EventId, prev: Option<EventId>, operation: Operation) {
        let (in_out, other_in_out) = match prev {
            None => (false, true),
            Some(prev_id) => {
                let prev_side = self.event(prev_id).polygon_side;
                let e_side = self.event(id).polygon_side;
                if e_side == prev_side {
                    (!self.event(prev_id).in_out, self.event(prev_id).other_in_out)
                } else if self.event(prev_id).is_vertical() {
                    (!self.event(prev_id).other_in_out, !self.event(prev_id).in_out)
                } else {
                    (!self.event(prev_id).other_in_out, self.event(prev_id).in_out)
                }
            }
        };

        let prev_in_result = match prev {
            None => None,
            Some(prev_id) => {
                let prev_is_result = self.event(prev_id).in_result;
                let prev_is_vertical = self.event(prev_id).is_vertical();
                if !prev_is_result || prev_is_vertical {
                    self.event(prev_id).prev_in_result
                } else {
                    Some(prev_id)
                }
            }
        };

        {
            let e = self.event_mut(id);
            e.in_out = in_out;
            e.other_in_out = other_in_out;
            e.prev_in_result = prev_in_result;
        }

        let in_result = self.in_result(id, operation);
        let result_transition = if in_result {
            if self.inside_predicate(id, operation) {
                ResultTransition::Contributing
            } else {
                ResultTransition::NonContributing
            }
        } else {
            ResultTransition::Neutral
        };

        let e = self.event_mut(id);
        e.in_result = in_result;
        e.result_transition = result_transition;
        trace!(
            "compute_fields: {point:?} in_out={in_out} other_in_out={other_in_out} in_result={in_result}",
            point = e.point
        );
    }

    fn in_result(&self, id: EventId, operation: Operation) -> bool {
        let e = self.event(id);
        match e.edge_type {
            EdgeType::NonContributing => false,
            EdgeType::SameTransition => matches!(operation, Operation::Intersection | Operation::Union),
            EdgeType::DifferentTransition => matches!(operation, Operation::Difference),
            EdgeType::Normal => match operation {
                Operation::Intersection => !e.other_in_out,
                Operation::Union => e.other_in_out,
                Operation::Difference => {
                    if e.polygon_side == PolygonSide::Subject {
                        e.other_in_out
                    } else {
                        !e.other_in_out
                    }
                }
                Operation::Xor => true,
            },
        }
    }

    fn inside_predicate(&self, id: EventId, operation: Operation) -> bool {
        let e = self.event(id);
        match operation {
            Operation::Intersection => !e.in_out && !e.other_in_out,
            Operation::Union => !e.in_out || !e.other_in_out,
            Operation::Xor => (!e.in_out) != (!e.other_in_out),
            Operation::Difference => {
                if e.polygon_side == PolygonSide::Subject {
                    !e.in_out && e.other_in_out
                } else {
                    !e.other_in_out && e.in_out
                }
            }
        }
    }

    // -- Intersection handling -------------------------------------------

    /// `PossibleIntersection` (§4.7). `le1`/`le2` must be left events, and
    /// `le1` must be below `le2` in status-line order (i.e. adjacent, with
    /// `le1` the predecessor).
    fn possible_intersection(&mut self, le1: EventId, le2: EventId) -> u8 {
        let seg1 = self.event(le1).segment();
        let seg2 = self.event(le2).segment();
        let result = find_intersection(&seg1, &seg2);

        match result {
            GeomIntersection::None => 0,
            GeomIntersection::Point(p) => {
                let is_shared_endpoint = (p == seg1.source || p == seg1.target)
                    && (p == seg2.source || p == seg2.target);
                if is_shared_endpoint {
                    return 0;
                }
                trace!("possible_intersection: point {p:?}");
                if p != seg1.source && p != seg1.target {
                    self.divide_segment(le1, p);
                }
                if p != seg2.source && p != seg2.target {
                    self.divide_segment(le2, p);
                }
                1
            }
            GeomIntersection::Overlap(p0, p1) => {
                if self.event(le1).polygon_side == self.event(le2).polygon_side {
                    // Self-overlap within one polygon: tolerated silently (§9).
                    return 0;
                }
                self.handle_overlap(le1, le2, p0, p1)
            }
        }
    }

    fn handle_overlap(&mut self, le1: EventId, le2: EventId, p0: Vertex, p1: Vertex) -> u8 {
        let l1 = self.event(le1).point;
        let l2 = self.event(le2).point;
        let r1 = self.event(le1).other_point;
        let r2 = self.event(le2).other_point;

        let shared_left = l1 == l2;
        let shared_right = r1 == r2;

        if shared_left {
            // `le2` becomes non-contributing; `le1` records whether the
            // two inputs agree on direction through this shared edge.
            let same_direction = self.event(le1).in_out == self.event(le2).in_out;
            self.event_mut(le2).edge_type = EdgeType::NonContributing;
            self.event_mut(le1).edge_type = if same_direction {
                EdgeType::SameTransition
            } else {
                EdgeType::DifferentTransition
            };
            if !shared_right {
                let (longer, shorter_right) = if r1.distance(l1) > r2.distance(l2) {
                    (le1, r2)
                } else {
                    (le2, r1)
                };
                self.divide_segment(longer, shorter_right);
            }
            return 2;
        }

        if shared_right {
            // Shared right endpoint only: subdivide the earlier-starting
            // left event at the later one's left point.
            let earlier = if super::event_cmp::compare_events(self.event(le1), self.event(le2))
                == std::cmp::Ordering::Less
            {
                le1
            } else {
                le2
            };
            let later_left_point = if earlier == le1 { l2 } else { l1 };
            self.divide_segment(earlier, later_left_point);
            return 3;
        }

        // No shared endpoint: either one contains the other, or partial
        // overlap. Order the four endpoints to tell the two cases apart.
        let contains_1_in_2 = is_between(l2, r2, l1) && is_between(l2, r2, r1);
        let contains_2_in_1 = is_between(l1, r1, l2) && is_between(l1, r1, r2);

        if contains_2_in_1 {
            // `le1`'s segment contains `le2`'s: split the container twice.
            self.divide_segment(le1, l2);
            self.divide_segment(le1, r2);
        } else if contains_1_in_2 {
            self.divide_segment(le2, l1);
            self.divide_segment(le2, r1);
        } else {
            // Partial overlap: the shared range is `[p0, p1]`. Exactly one
            // of its ends falls strictly inside `le1`'s segment and the
            // other strictly inside `le2`'s; split each at that point.
            for p in [p0, p1] {
                if p != l1 && p != r1 {
                    self.divide_segment(le1, p);
                }
                if p != l2 && p != r2 {
                    self.divide_segment(le2, p);
                }
            }
        }
        3
    }

    /// `DivideSegment` (§4.7).
    fn divide_segment(&mut self, le: EventId, p: Vertex) -> EventId {
        let re = self.event(le).other;
        let le_point = self.event(le).point;
        let re_point = self.event(re).point;
        let side = self.event(le).polygon_side;
        let contour_id = self.event(le).contour_id;

        let r_id = EventId(self.events.len());
        let l_id = EventId(self.events.len() + 1);

        let r_seq = self.alloc_seq();
        let l_seq = self.alloc_seq();

        self.events.push(SweepEvent {
            point: p,
            left: false,
            other: le,
            other_point: le_point,
            polygon_side: side,
            contour_id,
            seq: r_seq,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            pos_sl: None,
            prev_in_result: None,
            in_result: false,
            result_transition: ResultTransition::Neutral,
        });
        self.events.push(SweepEvent {
            point: p,
            left: true,
            other: re,
            other_point: re_point,
            polygon_side: side,
            contour_id,
            seq: l_seq,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            pos_sl: None,
            prev_in_result: None,
            in_result: false,
            result_transition: ResultTransition::Neutral,
        });

        // Rounding-error fix-up (§4.7, §9): if the queue order disagrees
        // with which of {l, re} should be "left", swap the flags rather
        // than the points.
        if super::event_cmp::compare_events(self.event(l_id), self.event(re)) == std::cmp::Ordering::Greater {
            warn!("subdivision produced an out-of-order left/right pair at {p:?}; swapping flags");
            self.event_mut(re).left = true;
            self.event_mut(l_id).left = false;
        }

        let was_active = self.event(le).pos_sl;

        self.event_mut(le).other = r_id;
        self.event_mut(le).other_point = p;
        self.event_mut(re).other = l_id;
        self.event_mut(re).other_point = p;

        if let Some(idx) = was_active {
            self.status.remove(idx);
            self.event_mut(le).pos_sl = None;
            self.sync_positions(idx);
            let key = self.event(le).key();
            let new_idx = self.status.insert(le, key);
            self.sync_positions(new_idx);
        }

        self.queue.push(r_id, &self.events[r_id.0]);
        self.queue.push(l_id, &self.events[l_id.0]);

        l_id
    }
}

/// Whether `v` lies on the segment `[a, b]` (inclusive), assuming `a`, `b`
/// and `v` are collinear.
fn is_between(a: Vertex, b: Vertex, v: Vertex) -> bool {
    let (lo, hi) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
    (lo.x, lo.y) <= (v.x, v.y) && (v.x, v.y) <= (hi.x, hi.y)
}

