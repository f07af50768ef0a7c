use crate::shape::Triangle;
use alloc::vec::Vec;

/// Trait implemented by triangle collections that can be queried by primitive index.
///
/// This is the only access the proximity queries need to a mesh: given the primitive index
/// stored by a tree leaf, it returns a copy of the three vertices of that triangle, expressed in
/// the mesh’s local space.
pub trait TriangleSource {
    /// The number of triangles of this collection.
    ///
    /// Valid primitive indices are in `0..self.num_triangles()`.
    fn num_triangles(&self) -> usize;

    /// The triangle with the given primitive index.
    ///
    /// May panic if `id` is out of bounds.
    fn triangle(&self, id: u32) -> Triangle;

    /// Checks if `id` is a valid primitive index for this collection.
    #[inline]
    fn contains_primitive(&self, id: u32) -> bool {
        (id as usize) < self.num_triangles()
    }
}

impl TriangleSource for [Triangle] {
    #[inline]
    fn num_triangles(&self) -> usize {
        self.len()
    }

    #[inline]
    fn triangle(&self, id: u32) -> Triangle {
        self[id as usize]
    }
}

impl TriangleSource for Vec<Triangle> {
    #[inline]
    fn num_triangles(&self) -> usize {
        self.len()
    }

    #[inline]
    fn triangle(&self, id: u32) -> Triangle {
        self[id as usize]
    }
}
