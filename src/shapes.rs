//! Fixed 2-D shape catalog.
//!
//! This module defines the [`Vertex`] type and the [`ShapeId`] selector over
//! the four polygons the demo can display. The vertex lists are compile-time
//! constants in fan order: the first vertex is the hub the remaining vertices
//! fan out from.

use glam::Vec2;

/// A single 2-D vertex in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

const TRIANGLE: [Vertex; 3] = [
    Vertex::new(-0.5, -0.5),
    Vertex::new(0.0, 0.5),
    Vertex::new(0.5, -0.5),
];

const SQUARE: [Vertex; 4] = [
    Vertex::new(-0.5, -0.5),
    Vertex::new(-0.5, 0.5),
    Vertex::new(0.5, 0.5),
    Vertex::new(0.5, -0.5),
];

const TRAPEZOID: [Vertex; 4] = [
    Vertex::new(-0.5, -0.5),
    Vertex::new(-0.3, 0.5),
    Vertex::new(0.3, 0.5),
    Vertex::new(0.5, -0.5),
];

// Regular pentagon of radius 0.5, apex up.
const PENTAGON: [Vertex; 5] = [
    Vertex::new(0.0, 0.5),
    Vertex::new(-0.4755, 0.1545),
    Vertex::new(-0.2939, -0.4045),
    Vertex::new(0.2939, -0.4045),
    Vertex::new(0.4755, 0.1545),
];

/// Selector over the fixed shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeId {
    Triangle,
    Square,
    Trapezoid,
    Pentagon,
}

impl ShapeId {
    /// Looks up a shape by its catalog index. Indices outside 0..=3 have no
    /// shape and return `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Triangle),
            1 => Some(Self::Square),
            2 => Some(Self::Trapezoid),
            3 => Some(Self::Pentagon),
            _ => None,
        }
    }

    /// The shape's vertex list in fan order.
    pub fn vertices(self) -> &'static [Vertex] {
        match self {
            Self::Triangle => &TRIANGLE,
            Self::Square => &SQUARE,
            Self::Trapezoid => &TRAPEZOID,
            Self::Pentagon => &PENTAGON,
        }
    }

    pub fn vertex_count(self) -> usize {
        self.vertices().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ShapeId; 4] = [
        ShapeId::Triangle,
        ShapeId::Square,
        ShapeId::Trapezoid,
        ShapeId::Pentagon,
    ];

    #[test]
    fn test_catalog_vertex_counts() {
        assert_eq!(ShapeId::Triangle.vertex_count(), 3);
        assert_eq!(ShapeId::Square.vertex_count(), 4);
        assert_eq!(ShapeId::Trapezoid.vertex_count(), 4);
        assert_eq!(ShapeId::Pentagon.vertex_count(), 5);
    }

    #[test]
    fn test_square_vertex_list() {
        let expected = [
            Vertex::new(-0.5, -0.5),
            Vertex::new(-0.5, 0.5),
            Vertex::new(0.5, 0.5),
            Vertex::new(0.5, -0.5),
        ];
        assert_eq!(ShapeId::Square.vertices(), &expected[..]);
    }

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(ShapeId::from_index(0), Some(ShapeId::Triangle));
        assert_eq!(ShapeId::from_index(1), Some(ShapeId::Square));
        assert_eq!(ShapeId::from_index(2), Some(ShapeId::Trapezoid));
        assert_eq!(ShapeId::from_index(3), Some(ShapeId::Pentagon));
        assert_eq!(ShapeId::from_index(4), None);
        assert_eq!(ShapeId::from_index(usize::MAX), None);
    }

    #[test]
    fn test_all_vertices_inside_ndc() {
        for shape in ALL {
            for vertex in shape.vertices() {
                assert!(vertex.position.x.abs() <= 1.0);
                assert!(vertex.position.y.abs() <= 1.0);
            }
        }
    }
}
