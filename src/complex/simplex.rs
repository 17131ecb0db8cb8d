//! Simplices of the Rips Filtration
//!
//! A k-simplex is stored as its sorted vertex-index list plus the
//! filtration value at which it appears. Simplices live in a flat arena
//! inside [`super::Filtration`] and are referred to by integer id; no
//! pointer-linked structure is ever built.

/// A simplex with its Rips filtration value.
///
/// The value is the maximum pairwise distance among the vertices, so it
/// is always at least the value of every face (the monotonicity a valid
/// filtration requires). Vertices appear at value 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSimplex {
    /// Vertex indices, strictly increasing.
    pub vertices: Vec<usize>,
    /// Filtration value at which the simplex enters the complex.
    pub value: f64,
}

impl FilteredSimplex {
    pub fn vertex(v: usize) -> Self {
        Self {
            vertices: vec![v],
            value: 0.0,
        }
    }

    /// Dimension k of a (k+1)-vertex simplex.
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The codimension-1 faces, each obtained by dropping one vertex.
    /// Empty for vertices.
    pub fn faces(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let arity = if self.vertices.len() > 1 {
            self.vertices.len()
        } else {
            0
        };
        (0..arity).map(move |skip| {
            self.vertices
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, &v)| v)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_of_triangle() {
        let s = FilteredSimplex {
            vertices: vec![0, 2, 5],
            value: 1.5,
        };
        let faces: Vec<Vec<usize>> = s.faces().collect();
        assert_eq!(faces, vec![vec![2, 5], vec![0, 5], vec![0, 2]]);
    }

    #[test]
    fn test_vertex_has_no_faces() {
        let s = FilteredSimplex::vertex(3);
        assert_eq!(s.dimension(), 0);
        assert_eq!(s.faces().count(), 0);
    }
}
