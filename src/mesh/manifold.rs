use crate::float_types::{Real, tolerance};
use crate::mesh::MeshBuffers;

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashMap;

/// Topology report for an indexed triangle buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifoldAnalysis {
    /// Edges used by exactly one triangle (0 for a closed surface)
    pub boundary_edges: usize,
    /// Edges used by more than two triangles
    pub non_manifold_edges: usize,
    /// Indices pointing past the vertex buffer
    pub out_of_range_indices: usize,
    /// Triangles with (near) zero area
    pub degenerate_triangles: usize,
    /// Every directed edge appears at most once
    pub consistent_orientation: bool,
    /// V - E + F, 0 for a torus-like revolved shell
    pub euler_characteristic: i64,
}

impl ManifoldAnalysis {
    /// Closed, edge-manifold and consistently wound.
    pub const fn is_watertight(&self) -> bool {
        self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.out_of_range_indices == 0
            && self.consistent_orientation
    }
}

impl MeshBuffers {
    /// Count edge usage over all triangles.
    ///
    /// Edges are keyed by vertex index, not by position, so two slices that
    /// happen to share a position are still distinct vertices.
    pub fn analyze_manifold(&self) -> ManifoldAnalysis {
        let vertex_count = self.positions.len();
        let out_of_range_indices = self.indices.iter().filter(|&&i| i >= vertex_count).count();

        let mut undirected: HashMap<(usize, usize), u32> = HashMap::new();
        let mut directed: HashMap<(usize, usize), u32> = HashMap::new();
        let mut degenerate_triangles = 0;
        let area_eps: Real = tolerance() * tolerance();

        for tri in self.indices.chunks_exact(3) {
            if tri.iter().any(|&i| i >= vertex_count) {
                continue;
            }
            let (p0, p1, p2) = (
                self.positions[tri[0]],
                self.positions[tri[1]],
                self.positions[tri[2]],
            );
            if (p1 - p0).cross(&(p2 - p0)).norm() <= area_eps {
                degenerate_triangles += 1;
            }

            for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
                let (a, b) = (tri[i0], tri[i1]);
                *directed.entry((a, b)).or_insert(0) += 1;
                let key = if a < b { (a, b) } else { (b, a) };
                *undirected.entry(key).or_insert(0) += 1;
            }
        }

        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        for &count in undirected.values() {
            match count {
                1 => boundary_edges += 1,
                2 => {},
                _ => non_manifold_edges += 1,
            }
        }

        let consistent_orientation = directed.values().all(|&count| count == 1);

        let used_vertices = {
            let mut used = vec![false; vertex_count];
            for &i in self.indices.iter().filter(|&&i| i < vertex_count) {
                used[i] = true;
            }
            used.into_iter().filter(|&u| u).count()
        };
        let euler_characteristic = used_vertices as i64 - undirected.len() as i64
            + (self.indices.len() / 3) as i64;

        ManifoldAnalysis {
            boundary_edges,
            non_manifold_edges,
            out_of_range_indices,
            degenerate_triangles,
            consistent_orientation,
            euler_characteristic,
        }
    }

    /// Checks if the mesh is a closed, consistently wound surface
    ///
    /// ### Returns
    /// Returns `true` if every edge is shared by exactly two triangles that
    /// traverse it in opposite directions and every index is in range.
    pub fn is_watertight(&self) -> bool {
        self.analyze_manifold().is_watertight()
    }
}
