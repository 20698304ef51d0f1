//! Fixed adjacency between faces.
//!
//! The layout is the usual unfolded cube:
//!
//! ```text
//!       U
//!     L F R B
//!       D
//! ```
//!
//! L, F, R and B have their top rows against U and their bottom rows against
//! D. U is viewed from above with B at its top edge; D is viewed from below
//! with F at its top edge.
//!
//! For every face the table lists, for its top, right, bottom and left edges
//! in that order, the strip of the neighbouring face that touches the edge.
//! All four strips of a ring are read in one shared direction around the
//! turning face, fixed by the top strip's natural index order. A strip whose
//! row or column index runs against that direction is marked `reversed`.
//! With that convention a quarter turn is a plain index-preserving copy from
//! each strip to the next.
//!
//! The entries come from placing every sticker in 3-D and rotating it a
//! quarter turn about the face's axis.

use crate::core::{Color, Face, FaceGrid, Side};

/// Whether a strip is a row or a column of its face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Row,
    Column,
}

/// Which end of the axis the strip sits at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Edge {
    First,
    Last,
}

/// A row or column of one face, touching an edge of another face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Strip {
    pub face: Face,
    pub axis: Axis,
    pub edge: Edge,
    pub reversed: bool,
}

const fn strip(face: Face, axis: Axis, edge: Edge, reversed: bool) -> Strip {
    Strip {
        face,
        axis,
        edge,
        reversed,
    }
}

use Axis::{Column, Row};
use Edge::{First, Last};

const FRONT_RING: [Strip; 4] = [
    strip(Face::Up, Row, Last, false),
    strip(Face::Right, Column, First, false),
    strip(Face::Down, Row, First, true),
    strip(Face::Left, Column, Last, true),
];

const BACK_RING: [Strip; 4] = [
    strip(Face::Up, Row, First, false),
    strip(Face::Left, Column, First, true),
    strip(Face::Down, Row, Last, true),
    strip(Face::Right, Column, Last, false),
];

const UP_RING: [Strip; 4] = [
    strip(Face::Back, Row, First, false),
    strip(Face::Right, Row, First, false),
    strip(Face::Front, Row, First, false),
    strip(Face::Left, Row, First, false),
];

const DOWN_RING: [Strip; 4] = [
    strip(Face::Front, Row, Last, false),
    strip(Face::Right, Row, Last, false),
    strip(Face::Back, Row, Last, false),
    strip(Face::Left, Row, Last, false),
];

const LEFT_RING: [Strip; 4] = [
    strip(Face::Up, Column, First, false),
    strip(Face::Front, Column, First, false),
    strip(Face::Down, Column, First, false),
    strip(Face::Back, Column, Last, true),
];

const RIGHT_RING: [Strip; 4] = [
    strip(Face::Up, Column, Last, false),
    strip(Face::Back, Column, First, true),
    strip(Face::Down, Column, Last, false),
    strip(Face::Front, Column, Last, false),
];

/// The four strips around `face`, ordered top, right, bottom, left.
///
/// A clockwise turn carries each strip's stickers to the next entry.
pub fn ring(face: Face) -> &'static [Strip; 4] {
    match face {
        Face::Front => &FRONT_RING,
        Face::Back => &BACK_RING,
        Face::Up => &UP_RING,
        Face::Down => &DOWN_RING,
        Face::Left => &LEFT_RING,
        Face::Right => &RIGHT_RING,
    }
}

/// The face touching the given edge of `face`.
pub fn neighbor(face: Face, side: Side) -> Face {
    ring(face)[side.index()].face
}

impl Strip {
    /// Grid coordinates of the strip `depth` layers in from its edge, in
    /// canonical order.
    pub fn cells(&self, size: usize, depth: usize) -> impl Iterator<Item = (usize, usize)> {
        let line = match self.edge {
            Edge::First => depth,
            Edge::Last => size - 1 - depth,
        };
        let axis = self.axis;
        let reversed = self.reversed;
        (0..size).map(move |i| {
            let along = if reversed { size - 1 - i } else { i };
            match axis {
                Axis::Row => (line, along),
                Axis::Column => (along, line),
            }
        })
    }

    pub(crate) fn read(&self, grid: &FaceGrid, depth: usize) -> Vec<Color> {
        self.cells(grid.size(), depth)
            .map(|(row, col)| grid.at(row, col))
            .collect()
    }

    pub(crate) fn write(&self, grid: &mut FaceGrid, depth: usize, colors: &[Color]) {
        let size = grid.size();
        for ((row, col), &color) in self.cells(size, depth).zip(colors) {
            grid.set(row, col, color);
        }
    }
}
