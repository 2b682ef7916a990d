//! Undirected co-authorship graph.
//!
//! Nodes are author display names, edge weight is the number of papers two
//! authors share. Only the first five authors of each paper take part.

use std::collections::HashMap;

use keypaper_ingestion::models::PaperRecord;
use keypaper_ingestion::normalise::DISPLAY_AUTHORS;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CoauthorGraph {
    graph: UnGraph<String, u32>,
    index: HashMap<String, NodeIndex>,
}

impl CoauthorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from every record's author list.
    pub fn from_records(records: &[PaperRecord]) -> Self {
        let mut g = Self::new();
        for r in records {
            g.add_paper(&r.author_list);
        }
        debug!(authors = g.node_count(), edges = g.edge_count(), "Co-authorship graph built");
        g
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add one paper: every author becomes a node and every unordered pair
    /// of distinct authors gains one unit of edge weight.
    pub fn add_paper(&mut self, authors: &[String]) {
        let mut nodes: Vec<NodeIndex> = Vec::with_capacity(DISPLAY_AUTHORS);
        for name in authors.iter().take(DISPLAY_AUTHORS) {
            let idx = self.node(name);
            if !nodes.contains(&idx) {
                nodes.push(idx);
            }
        }

        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                match self.graph.find_edge(a, b) {
                    Some(e) => self.graph[e] += 1,
                    None => {
                        self.graph.add_edge(a, b, 1);
                    }
                }
            }
        }
    }

    /// Copy of the graph without degree-0 nodes.
    pub fn pruned(&self) -> Self {
        let mut out = Self::new();
        for idx in self.graph.node_indices() {
            if self.graph.neighbors(idx).next().is_some() {
                out.node(&self.graph[idx]);
            }
        }
        for e in self.graph.edge_references() {
            let a = out.index[&self.graph[e.source()]];
            let b = out.index[&self.graph[e.target()]];
            out.graph.add_edge(a, b, *e.weight());
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Shared-paper count between two authors.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let (a, b) = (*self.index.get(a)?, *self.index.get(b)?);
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    pub(crate) fn graph(&self) -> &UnGraph<String, u32> {
        &self.graph
    }
}
