//! Visualized geometry: vertices and the polygons that index them.

use serde::Deserialize;

use crate::id::{Arena, Id};

/// Vertices and polygons of one variant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub vertices: Arena<Vertex>,
    pub polygons: Arena<Polygon>,
}

/// A point in model coordinates (metres).
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A planar polygon given by vertex ids in winding order.
///
/// The vertex order defines the face orientation and must be kept as is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Polygon {
    pub normal: [f64; 3],
    pub vertices: Vec<Id>,
}

impl Geometry {
    /// Registers a polygon made of freshly registered vertices.
    pub fn add_polygon(&mut self, normal: [f64; 3], points: &[Vertex]) -> Id {
        let vertices = points.iter().map(|p| self.vertices.push(*p)).collect();
        self.polygons.push(Polygon { normal, vertices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_polygon_assigns_vertex_ids_in_order() {
        let mut geometry = Geometry::default();
        let first = geometry.add_polygon(
            [0.0, 0.0, 1.0],
            &[
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
            ],
        );
        let second = geometry.add_polygon([0.0, 0.0, -1.0], &[Vertex::new(0.0, 0.0, 3.0)]);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);

        let ids: Vec<u32> = geometry
            .polygons
            .get(first)
            .unwrap()
            .vertices
            .iter()
            .map(|id| id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(geometry.polygons.get(second).unwrap().vertices[0].get(), 4);
    }
}
