use rand::Rng;
use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;

use crate::errors::PathPlannerError;
use crate::geometry::{Point, euclidean};
use super::UndirectedGraph;


/// Graph embedded in the unit square
/// Edge weights are the euclidean length of each edge, so `distance`
/// is a consistent heuristic as long as weights are not lowered
pub struct GeometricGraph {
    pub graph: UndirectedGraph<usize, f64>,
    pub positions: Vec<Point>,
}

impl GeometricGraph {

    /// Straight line distance between two nodes
    pub fn distance(&self, u: &usize, v: &usize) -> f64 {
        self.positions[*u].distance(&self.positions[*v])
    }
}


/// Random geometric graph
/// Places `n` uniform points in the unit square and joins every pair closer than `radius`
pub fn random_geometric_graph<R: Rng>(n: usize, radius: f64, rng: &mut R) -> Result<GeometricGraph, PathPlannerError> {

    let mut graph = UndirectedGraph::new();
    let mut positions = Vec::with_capacity(n);
    let mut tree = KdTree::new(2);

    for node in 0..n {
        let point = Point { x: rng.random::<f64>(), y: rng.random::<f64>() };
        tree.add([point.x, point.y], node)?;
        positions.push(point);
        graph.add_node(node);
    }

    for (node, point) in positions.iter().enumerate() {

        // tree uses squared euclidean distances, so we need to square the radius
        let nearby = tree.within(&[point.x, point.y], radius.powi(2), &kt_squared_euclidean)?;

        for (_dist, &other) in nearby {
            // each pair is seen from both ends, keep one
            if other <= node {
                continue;
            }
            // recompute, kdtree distances are squared
            let other_point = &positions[other];
            let length = euclidean(point.x, point.y, other_point.x, other_point.y);
            graph.add_weighted_edge(node, other, length);
        }
    }

    Ok(GeometricGraph { graph, positions })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_edges_within_radius() {
        let mut rng = StdRng::seed_from_u64(11);
        let geo = random_geometric_graph(40, 0.3, &mut rng).unwrap();

        assert_eq!(geo.graph.node_count(), 40);
        assert_eq!(geo.positions.len(), 40);

        for u in 0..40 {
            for v in (u + 1)..40 {
                let d = geo.distance(&u, &v);
                match geo.graph.edge_weight(&u, &v, "weight") {
                    Some(w) => {
                        assert!(d <= 0.3 + 1e-12, "edge {u}-{v} longer than radius");
                        assert!((w - d).abs() < 1e-12);
                    }
                    None => assert!(d > 0.3 - 1e-12, "missing edge {u}-{v}"),
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_geometric_graph(25, 0.25, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_geometric_graph(25, 0.25, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(a.positions, b.positions);
        assert_eq!(a.graph.edge_count(), b.graph.edge_count());
    }

    #[test]
    fn test_no_self_loops() {
        let geo = random_geometric_graph(30, 0.5, &mut StdRng::seed_from_u64(5)).unwrap();

        for node in 0..30 {
            assert!(!geo.graph.contains_edge(&node, &node));
        }
    }
}
