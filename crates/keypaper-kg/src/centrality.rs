//! Degree and betweenness centrality over the pruned co-authorship graph.
//!
//! Both measures are unweighted and normalised to [0, 1]. Betweenness uses
//! Brandes' algorithm with BFS shortest paths over the whole graph, not per
//! connected component.

use std::collections::VecDeque;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::coauthor::CoauthorGraph;

/// Authors listed per metric.
pub const TOP_AUTHORS: usize = 5;

/// Top authors by degree and by betweenness, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityResult {
    pub degree: Vec<(String, f64)>,
    pub betweenness: Vec<(String, f64)>,
}

impl CentralityResult {
    /// Fewer than two connected authors.
    pub fn is_empty(&self) -> bool {
        self.degree.is_empty() && self.betweenness.is_empty()
    }
}

/// Prune isolated authors, then rank the rest. Returns an empty result when
/// fewer than two authors remain.
pub fn compute_centrality(graph: &CoauthorGraph, top_n: usize) -> CentralityResult {
    let pruned = graph.pruned();
    if pruned.node_count() < 2 {
        return CentralityResult::default();
    }

    let g = pruned.graph();
    CentralityResult {
        degree: top_scores(g, &degree_centrality(g), top_n),
        betweenness: top_scores(g, &betweenness_centrality(g), top_n),
    }
}

/// degree / (n − 1), indexed by node.
pub fn degree_centrality<N, E>(g: &UnGraph<N, E>) -> Vec<f64> {
    let n = g.node_count();
    if n < 2 {
        return vec![0.0; n];
    }
    let denom = (n - 1) as f64;
    g.node_indices()
        .map(|v| g.neighbors(v).count() as f64 / denom)
        .collect()
}

/// Brandes betweenness, normalised by 1 / ((n − 1)(n − 2)).
///
/// The undirected sweep visits every pair twice, so this single factor
/// gives the standard 2 / ((n − 1)(n − 2)) normalisation.
pub fn betweenness_centrality<N, E>(g: &UnGraph<N, E>) -> Vec<f64> {
    let n = g.node_count();
    let mut cb = vec![0.0f64; n];
    if n < 3 {
        return cb;
    }

    let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);
    let mut preds: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![-1i64; n];
    let mut delta = vec![0.0f64; n];
    let mut queue = VecDeque::with_capacity(n);

    for s in g.node_indices() {
        stack.clear();
        for v in 0..n {
            preds[v].clear();
            sigma[v] = 0.0;
            dist[v] = -1;
            delta[v] = 0.0;
        }
        sigma[s.index()] = 1.0;
        dist[s.index()] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for w in g.neighbors(v) {
                if dist[w.index()] < 0 {
                    dist[w.index()] = dist[v.index()] + 1;
                    queue.push_back(w);
                }
                if dist[w.index()] == dist[v.index()] + 1 {
                    sigma[w.index()] += sigma[v.index()];
                    preds[w.index()].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            let coeff = (1.0 + delta[w.index()]) / sigma[w.index()];
            for &v in &preds[w.index()] {
                delta[v.index()] += sigma[v.index()] * coeff;
            }
            if w != s {
                cb[w.index()] += delta[w.index()];
            }
        }
    }

    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    cb.iter().map(|c| (c * scale).clamp(0.0, 1.0)).collect()
}

/// Highest scores first; equal scores ordered by author name.
fn top_scores(g: &UnGraph<String, u32>, scores: &[f64], top_n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = g
        .node_indices()
        .map(|v| (g[v].clone(), scores[v.index()]))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(papers: &[&[&str]]) -> CoauthorGraph {
        let mut g = CoauthorGraph::new();
        for p in papers {
            let names: Vec<String> = p.iter().map(|s| s.to_string()).collect();
            g.add_paper(&names);
        }
        g
    }

    fn score(list: &[(String, f64)], name: &str) -> f64 {
        list.iter().find(|(n, _)| n == name).map(|(_, s)| *s).unwrap()
    }

    #[test]
    fn test_empty_and_single_node() {
        assert!(compute_centrality(&CoauthorGraph::new(), TOP_AUTHORS).is_empty());
        assert!(compute_centrality(&graph(&[&["Solo"]]), TOP_AUTHORS).is_empty());
    }

    #[test]
    fn test_pair() {
        let r = compute_centrality(&graph(&[&["A", "B"]]), TOP_AUTHORS);
        assert_eq!(r.degree, vec![("A".to_string(), 1.0), ("B".to_string(), 1.0)]);
        assert_eq!(score(&r.betweenness, "A"), 0.0);
    }

    #[test]
    fn test_path_graph() {
        // A - B - C
        let r = compute_centrality(&graph(&[&["A", "B"], &["B", "C"]]), TOP_AUTHORS);
        assert_eq!(r.degree[0], ("B".to_string(), 1.0));
        assert!((score(&r.degree, "A") - 0.5).abs() < 1e-12);
        assert_eq!(r.betweenness[0], ("B".to_string(), 1.0));
        assert_eq!(score(&r.betweenness, "C"), 0.0);
    }

    #[test]
    fn test_star_center() {
        let r = compute_centrality(
            &graph(&[&["Hub", "A"], &["Hub", "B"], &["Hub", "C"], &["Hub", "D"]]),
            TOP_AUTHORS,
        );
        assert_eq!(r.degree[0], ("Hub".to_string(), 1.0));
        assert_eq!(r.betweenness[0], ("Hub".to_string(), 1.0));
        assert!((score(&r.degree, "A") - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_path_of_four() {
        // A - B - C - D: networkx gives B = C = 2/3
        let r = compute_centrality(&graph(&[&["A", "B"], &["B", "C"], &["C", "D"]]), TOP_AUTHORS);
        assert!((score(&r.betweenness, "B") - 2.0 / 3.0).abs() < 1e-12);
        assert!((score(&r.betweenness, "C") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_disconnected_components_share_normalisation() {
        // A - B - C and D - E: n = 5
        let r = compute_centrality(&graph(&[&["A", "B"], &["B", "C"], &["D", "E"]]), TOP_AUTHORS);
        // B lies on the A–C path, counted in both directions: 2 / (4 * 3)
        assert!((score(&r.betweenness, "B") - 2.0 / 12.0).abs() < 1e-12);
        assert!((score(&r.degree, "B") - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scores_bounded_and_truncated() {
        let r = compute_centrality(
            &graph(&[&["A", "B", "C", "D", "E"], &["E", "F", "G"], &["G", "H"]]),
            TOP_AUTHORS,
        );
        assert_eq!(r.degree.len(), TOP_AUTHORS);
        assert_eq!(r.betweenness.len(), TOP_AUTHORS);
        for (_, s) in r.degree.iter().chain(&r.betweenness) {
            assert!((0.0..=1.0).contains(s));
        }
        assert!(r.degree.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(r.betweenness.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_ties_ordered_by_name() {
        let r = compute_centrality(&graph(&[&["Zed", "Amy", "Kim"]]), TOP_AUTHORS);
        let names: Vec<&str> = r.degree.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Kim", "Zed"]);
    }

    #[test]
    fn test_isolated_nodes_pruned_before_scoring() {
        // Without pruning, Solo would raise n to 3 and halve the pair's degree.
        let r = compute_centrality(&graph(&[&["Solo"], &["A", "B"]]), TOP_AUTHORS);
        assert_eq!(r.degree.len(), 2);
        assert_eq!(score(&r.degree, "A"), 1.0);
    }
}
