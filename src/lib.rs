//! `geom-bool` computes Boolean operations on 2D polygons using the
//! Martinez-Rueda-Ogayar-Jimenez sweep-line algorithm.
//!
//! Given two polygons (each possibly multi-contour, possibly with holes,
//! possibly self-touching at isolated points), [`intersection`], [`union`],
//! [`difference`] and [`xor`] each compute a new [`Polygon`] whose contours
//! carry depth and hole-nesting information.
//!
//! # Scope
//!
//! This crate is the sweep-line clipping *engine*: event queue, status
//! line, intersection and segment-subdivision logic, in/out labelling,
//! result-inclusion rules, and contour reconstruction. Polygon file I/O, a
//! command-line driver, rendering, a step-by-step debugging harness and
//! benchmarking are all out of scope; the crate exposes only the
//! computational core.
//!
//! Coordinates are `f64`. There is no exact/arbitrary-precision arithmetic:
//! double precision is accepted to have robustness limits on
//! near-degenerate input, matching the reference algorithm this crate
//! implements.

mod error;
pub mod geometry;
mod ops;
mod sweep;

pub use error::OpError;
pub use geometry::{Bbox, Contour, Polygon, Segment, Vertex};
pub use ops::{boolean_op, difference, intersection, union, xor, Operation};
