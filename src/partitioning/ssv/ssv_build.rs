use super::{SsvNode, SsvNodeKind, SsvTree, SsvTreeFlags};
use crate::bounding_volume::{self, BoundingSphere};
use crate::math::{Point, Real};
use crate::shape::{Triangle, TriangleSource};
use crate::utils;
use alloc::vec::Vec;
use core::cmp::Ordering;

#[derive(Copy, Clone, Debug)]
struct SsvBuildLeaf {
    primitive: u32,
    centroid: Point<Real>,
    triangle: Triangle,
}

impl SsvTree {
    /// Builds a tree over all the triangles of `source`.
    ///
    /// The tree is built top-down: each set of triangles is split at the median of their
    /// centroids, along the axis where the centroids are the most spread out. Leaf spheres are
    /// the triangles’ bounding spheres. Internal spheres are centered on the box enclosing
    /// every vertex of their subtree, with a radius large enough to contain both child spheres.
    ///
    /// Returns an empty tree if `source` has no triangle.
    pub fn from_triangles<S: TriangleSource + ?Sized>(source: &S) -> Self {
        let num_triangles = source.num_triangles();

        if num_triangles == 0 {
            return Self::new();
        }

        let mut leaves: Vec<_> = (0..num_triangles as u32)
            .map(|primitive| {
                let triangle = source.triangle(primitive);
                SsvBuildLeaf {
                    primitive,
                    centroid: triangle.center(),
                    triangle,
                }
            })
            .collect();

        let mut nodes = Vec::with_capacity(2 * num_triangles - 1);
        let _ = build_recursive(&mut nodes, &mut leaves);

        Self {
            nodes,
            flags: SsvTreeFlags::LEAF_NODES,
        }
    }
}

// Pushes the subtree covering `leaves` and returns its root index and bounding sphere.
// Parents are always stored before their children.
fn build_recursive(nodes: &mut Vec<SsvNode>, leaves: &mut [SsvBuildLeaf]) -> (u32, BoundingSphere) {
    let id = nodes.len() as u32;

    if let [leaf] = leaves {
        let sphere = leaf.triangle.local_bounding_sphere();
        nodes.push(SsvNode::leaf(&sphere, leaf.primitive));
        return (id, sphere);
    }

    // Placeholder, overwritten once both children are built.
    nodes.push(SsvNode::new(
        Point::origin(),
        0.0,
        SsvNodeKind::Leaf {
            primitive: u32::MAX,
        },
    ));

    let mut mins = leaves[0].centroid;
    let mut maxs = leaves[0].centroid;
    for leaf in &leaves[1..] {
        mins = mins.inf(&leaf.centroid);
        maxs = maxs.sup(&leaf.centroid);
    }
    let axis = (maxs - mins).imax();

    let mid = leaves.len() / 2;
    let _ = leaves.select_nth_unstable_by(mid, |a, b| {
        a.centroid[axis]
            .partial_cmp(&b.centroid[axis])
            .unwrap_or(Ordering::Equal)
    });

    let center = utils::aabb_center(leaves.iter().flat_map(|leaf| leaf.triangle.vertices()));
    let (neg_leaves, pos_leaves) = leaves.split_at_mut(mid);
    let (neg, neg_sphere) = build_recursive(nodes, neg_leaves);
    let (pos, pos_sphere) = build_recursive(nodes, pos_leaves);

    let sphere =
        bounding_volume::spheres_bounding_sphere_with_center([&neg_sphere, &pos_sphere], center);
    nodes[id as usize] = SsvNode::internal(&sphere, neg, pos);

    (id, sphere)
}
