use crate::geometry::Vertex;

/// Which input polygon an event's segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PolygonSide {
    Subject,
    Clipping,
}

/// Classification of a segment for the Boolean labelling (§3, §4.7).
///
/// Transitions are monotone: every segment starts `Normal` and may be
/// mutated at most once, by overlap handling in `PossibleIntersection`,
/// into one of the other three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeType {
    Normal,
    NonContributing,
    SameTransition,
    DifferentTransition,
}

/// Per-event outcome used by `ConnectEdges` to determine hole/depth
/// attribution (§3, §4.8). `Contributing` compares greater than the other
/// two variants so that `prev.result_transition > Neutral` (equivalently,
/// `> 0`) reads the same way the reference's integer encoding does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResultTransition {
    NonContributing,
    Neutral,
    Contributing,
}

impl ResultTransition {
    pub fn is_contributing(self) -> bool {
        self == ResultTransition::Contributing
    }
}

/// A stable index into the sweep's event arena (`sweep::engine::Engine`'s
/// `Vec<SweepEvent>`). Used everywhere the reference would hold a raw
/// pointer or reference between events (`other`, `prev_in_result`): a plain
/// `usize` index is the idiomatic Rust substitute for the cyclic
/// event-to-event references described in §9, since the arena is never
/// reallocated-with-move mid-sweep (it only grows by `push`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub usize);

/// The central mutable record of the sweep (§3).
///
/// `point`/`other_point`/`left`/`polygon_side`/`contour_id`/`seq` are fixed
/// once the event is constructed (subdivision always builds *new* events
/// rather than mutating these fields in place, see
/// `sweep::engine::Engine::divide_segment`); every other field is filled in
/// over the course of the sweep as noted in its own doc comment.
///
/// §3's `pos`/`outputContourId`/`resultInOut` fields aren't carried here:
/// `ConnectEdges` (`sweep::connect`) only borrows the event arena
/// immutably, so it keeps that bookkeeping in its own vectors indexed by
/// position in the result-event list rather than writing back onto
/// `SweepEvent`.
#[derive(Debug, Clone)]
pub struct SweepEvent {
    /// This event's endpoint.
    pub point: Vertex,
    /// Whether `point` is the left end of the segment `(point, other_point)`.
    pub left: bool,
    /// The partner event of the same segment.
    pub other: EventId,
    /// Denormalized copy of `other`'s point, kept in sync whenever `other`
    /// is rewired. Lets the event and segment comparators (§4.3, §4.4) read
    /// both endpoints of a segment without an arena lookup.
    pub other_point: Vertex,
    pub polygon_side: PolygonSide,
    /// Identifier of the original input contour this segment came from.
    pub contour_id: u32,
    /// Monotonically increasing construction-order id, used only as the
    /// last-resort tiebreaker that makes the event and segment comparators
    /// total (§4.3 point 5, §4.4 point 3, §9 "stable priority queue").
    pub seq: u64,

    pub edge_type: EdgeType,

    /// Does the segment, seen by a vertical ray from below, cross into the
    /// polygon it belongs to? Only meaningful on left events, set by
    /// `ComputeFields`.
    pub in_out: bool,
    /// `in_out` of the segment from the *other* polygon immediately below
    /// this one in the status line, set by `ComputeFields`.
    pub other_in_out: bool,

    /// Index of this event in the status line at the time it was inserted.
    /// Valid only while the event's segment is active (between its left and
    /// right event being processed).
    pub pos_sl: Option<usize>,

    /// Nearest lower left-event in the status line that is in the result
    /// and non-vertical, set by `ComputeFields`.
    pub prev_in_result: Option<EventId>,

    /// Whether this segment contributes to the result, set by
    /// `ComputeFields`/`InResult`.
    pub in_result: bool,

    /// Set by `ComputeFields`; consulted by `ConnectEdges` for hole/depth
    /// attribution.
    pub result_transition: ResultTransition,
}

impl SweepEvent {
    pub fn is_vertical(&self) -> bool {
        self.point.x == self.other_point.x
    }

    pub fn segment(&self) -> crate::geometry::Segment {
        crate::geometry::Segment::new(self.point, self.other_point)
    }

    /// A self-contained snapshot of the fields the event and segment
    /// comparators need (§4.3, §4.4). Letting the comparators work off this
    /// copyable key, rather than `&SweepEvent` directly, is what lets the
    /// event queue (`sweep::event_queue`) order its entries without holding
    /// a borrow into the event arena.
    pub fn key(&self) -> EventKey {
        EventKey {
            point: self.point,
            other_point: self.other_point,
            left: self.left,
            polygon_side: self.polygon_side,
            contour_id: self.contour_id,
            seq: self.seq,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventKey {
    pub point: Vertex,
    pub other_point: Vertex,
    pub left: bool,
    pub polygon_side: PolygonSide,
    pub contour_id: u32,
    pub seq: u64,
}
