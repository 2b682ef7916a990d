//! Network analysis over normalised search records.

use keypaper_ingestion::normalise::normalise_works;
use keypaper_ingestion::models::RawWork;
use keypaper_kg::{compute_centrality, CoauthorGraph, TOP_AUTHORS};
use serde_json::json;

fn work(authors: &[&str]) -> RawWork {
    let authorships: Vec<_> = authors
        .iter()
        .map(|a| json!({ "author": { "display_name": a } }))
        .collect();
    serde_json::from_value(json!({ "title": "t", "authorships": authorships })).unwrap()
}

#[test]
fn test_bridge_author_ranks_first() {
    let records = normalise_works(&[
        work(&["Ana", "Ben", "Cho"]),
        work(&["Ana", "Ben", "Cho"]),
        work(&["Cho", "Dev"]),
        work(&["Dev", "Eli", "Fay"]),
        work(&["Solo"]),
    ]);

    let graph = CoauthorGraph::from_records(&records);
    assert_eq!(graph.weight("Ana", "Ben"), Some(2));
    assert!(graph.contains("Solo"));

    let result = compute_centrality(&graph, TOP_AUTHORS);
    assert!(!result.is_empty());
    assert!(result.degree.iter().all(|(name, _)| name != "Solo"));

    let top_bridge = &result.betweenness[0].0;
    assert!(top_bridge == "Cho" || top_bridge == "Dev", "unexpected bridge {top_bridge}");
}

#[test]
fn test_all_solo_papers_insufficient() {
    let records = normalise_works(&[work(&["Ana"]), work(&["Ben"]), work(&[])]);
    let result = compute_centrality(&CoauthorGraph::from_records(&records), TOP_AUTHORS);
    assert!(result.is_empty());
}
