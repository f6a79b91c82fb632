use super::{Bbox, Contour};

/// An ordered list of [`Contour`]s: the output (and, for the sweep, one of
/// the two inputs) of a Boolean operation.
///
/// Unlike the exterior/interiors model common to other polygon libraries,
/// contours here are a flat list; hole relationships are expressed purely
/// through each contour's `hole_of`/`holes` bookkeeping (§3), because
/// `ConnectEdges` discovers nesting incrementally during contour
/// reconstruction rather than as a pre-existing exterior/interior split.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    contours: Vec<Contour>,
}

impl Polygon {
    pub fn new() -> Self {
        Polygon {
            contours: Vec::new(),
        }
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn contour(&self, i: usize) -> &Contour {
        &self.contours[i]
    }

    pub fn contour_mut(&mut self, i: usize) -> &mut Contour {
        &mut self.contours[i]
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    pub fn pop(&mut self) -> Option<Contour> {
        self.contours.pop()
    }

    /// Total vertex count across all contours.
    pub fn vertex_count(&self) -> usize {
        self.contours.iter().map(Contour::vertex_count).sum()
    }

    pub fn bounding_box(&self) -> Bbox {
        self.contours
            .iter()
            .fold(Bbox::empty(), |bb, c| bb.join(c.bounding_box()))
    }

    /// Append every contour of `other`, rewriting hole-index references
    /// (both the moved contours' own `holes` lists and their `hole_of`
    /// parent pointers) so they remain valid in the concatenated polygon.
    pub fn join(&mut self, other: &Polygon) {
        let offset = self.contours.len();
        for contour in &other.contours {
            let mut c = contour.clone();
            c.remap_holes(|h| h + offset);
            if let Some(parent) = c.hole_of() {
                c.set_hole_of(Some(parent + offset));
            }
            self.contours.push(c);
        }
    }
}

impl FromIterator<Contour> for Polygon {
    fn from_iter<I: IntoIterator<Item = Contour>>(iter: I) -> Self {
        Polygon {
            contours: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vertex;

    fn square_contour(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
        [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
            .into_iter()
            .map(Vertex::from)
            .collect()
    }

    #[test]
    fn bounding_box_is_union_of_contours() {
        let mut p = Polygon::new();
        p.push(square_contour(0.0, 0.0, 1.0, 1.0));
        p.push(square_contour(5.0, 5.0, 6.0, 6.0));
        let bb = p.bounding_box();
        assert_eq!(bb.x_min, 0.0);
        assert_eq!(bb.y_max, 6.0);
    }

    #[test]
    fn empty_polygon_has_empty_bbox() {
        assert!(Polygon::new().bounding_box().is_empty());
    }

    #[test]
    fn join_offsets_hole_indices() {
        let mut a = Polygon::new();
        let mut outer = square_contour(0.0, 0.0, 10.0, 10.0);
        outer.push_hole(1);
        a.push(outer);
        let mut hole = square_contour(2.0, 2.0, 3.0, 3.0);
        hole.set_hole_of(Some(0));
        a.push(hole);

        let mut b = Polygon::new();
        b.push(square_contour(20.0, 20.0, 21.0, 21.0));

        let mut joined = a.clone();
        joined.join(&b);
        assert_eq!(joined.contour_count(), 3);
        // original indices from `a` stay the same
        assert_eq!(joined.contour(0).holes(), &[1]);
        assert_eq!(joined.contour(1).hole_of(), Some(0));
    }
}
