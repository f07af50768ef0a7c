use crate::math::{Isometry, Point, Real};
use crate::shape::{Triangle, TriangleSource};
use alloc::vec::Vec;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that doesn’t exist.
    #[error("the triangle {triangle} references the vertex {vertex} but the mesh only has {num_vertices} vertices.")]
    VertexOutOfBounds {
        /// The triangle with the invalid index.
        triangle: u32,
        /// The invalid vertex index.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A triangle mesh, stored as a vertex buffer and an index buffer.
///
/// Degenerate triangles (with repeated or collinear vertices) are allowed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (i, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|v| **v as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::VertexOutOfBounds {
                    triangle: i as u32,
                    vertex: *vertex,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self { vertices, indices })
    }

    /// Creates a triangle mesh where each triangle has its own three vertices.
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self, TriMeshBuilderError> {
        let vertices = triangles.iter().flat_map(|t| t.vertices()).collect();
        let indices = (0..triangles.len() as u32)
            .map(|i| [i * 3, i * 3 + 1, i * 3 + 2])
            .collect();
        Self::new(vertices, indices)
    }

    /// Transforms in-place the vertices of this triangle mesh.
    pub fn transform_vertices(&mut self, transform: &Isometry<Real>) {
        self.vertices
            .iter_mut()
            .for_each(|pt| *pt = transform * *pt);
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the `i`-th triangle of this mesh.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }
}

impl TriangleSource for TriMesh {
    #[inline]
    fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    fn triangle(&self, id: u32) -> Triangle {
        TriMesh::triangle(self, id)
    }
}
