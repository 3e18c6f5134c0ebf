//! Graph statistics command
//!
//! Summarizes how well connected a dictionary is.

use crate::core::Word;
use crate::graph::WordGraph;

/// Connectivity summary of a word graph
pub struct GraphStats {
    pub words: usize,
    pub edges: usize,
    pub isolated: usize,
    pub components: usize,
    pub largest_component: usize,
    pub average_degree: f64,
    /// Word with the most neighbors (first alphabetically on ties)
    pub most_connected: Option<(Word, usize)>,
}

/// Compute statistics for a graph
#[must_use]
pub fn graph_stats(graph: &WordGraph) -> GraphStats {
    let words = graph.node_count();
    let edges = graph.edge_count();
    let components = graph.components();

    let isolated = components.iter().filter(|c| c.len() == 1).count();
    let largest_component = components.iter().map(|c| c.len()).max().unwrap_or(0);

    let average_degree = if words > 0 {
        2.0 * edges as f64 / words as f64
    } else {
        0.0
    };

    let most_connected = graph
        .nodes()
        .into_iter()
        .map(|word| (word, graph.degree(word)))
        .fold(None, |best: Option<(&Word, usize)>, (word, degree)| match best {
            Some((_, best_degree)) if best_degree >= degree => best,
            _ => Some((word, degree)),
        })
        .map(|(word, degree)| (word.clone(), degree));

    GraphStats {
        words,
        edges,
        isolated,
        components: components.len(),
        largest_component,
        average_degree,
        most_connected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn graph(list: &[&str]) -> WordGraph {
        let words: Vec<Word> = list.iter().map(|w| Word::new(w).unwrap()).collect();
        GraphBuilder::new().build_graph(&words)
    }

    #[test]
    fn stats_for_small_graph() {
        let stats = graph_stats(&graph(&["cat", "cot", "cog", "dog", "elk", "ivy"]));

        assert_eq!(stats.words, 6);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.isolated, 2);
        assert_eq!(stats.components, 3);
        assert_eq!(stats.largest_component, 4);
        assert!((stats.average_degree - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn most_connected_breaks_ties_alphabetically() {
        // COG and COT both have degree 2
        let stats = graph_stats(&graph(&["cat", "cot", "cog", "dog"]));
        let (word, degree) = stats.most_connected.unwrap();
        assert_eq!(word.text(), "COG");
        assert_eq!(degree, 2);
    }

    #[test]
    fn stats_for_empty_graph() {
        let stats = graph_stats(&WordGraph::new());
        assert_eq!(stats.words, 0);
        assert_eq!(stats.components, 0);
        assert!(stats.most_connected.is_none());
        assert!(stats.average_degree.abs() < f64::EPSILON);
    }
}
