use rapid_deppath::validation::ErrorCode;
use rapid_deppath::{
    compute_shortest_path, compute_shortest_paths, DepPathError, ExistsSemantics, PathConfig,
    PathEngine, Sentence, SolverKind, TokenId,
};
use serde_json::json;

/// `T0 -nsubj-> T1 -dobj-> T2`, `T3` isolated
fn scenario() -> Sentence {
    Sentence::builder()
        .token("T0")
        .token("T1")
        .token("T2")
        .token("T3")
        .dependency(0, 1, "nsubj")
        .dependency(1, 2, "dobj")
        .build()
}

/// "Loss of BRCA1 function increases the risk of breast cancer", parsed
fn parsed_sentence() -> Sentence {
    let doc = json!({
        "tokens": [
            { "id": 0, "text": "Loss",
              "dependency_to": [{ "token": 3, "label": "prep" }],
              "dependency_from": { "token": 4, "label": "nsubj" } },
            { "id": 1, "text": "of",
              "dependency_from": { "token": 3, "label": "case" } },
            { "id": 2, "text": "BRCA1",
              "dependency_from": { "token": 3, "label": "compound" } },
            { "id": 3, "text": "function",
              "dependency_to": [
                  { "token": 1, "label": "case" },
                  { "token": 2, "label": "compound" }
              ],
              "dependency_from": { "token": 0, "label": "prep" } },
            { "id": 4, "text": "increases",
              "dependency_to": [
                  { "token": 0, "label": "nsubj" },
                  { "token": 6, "label": "dobj" }
              ] },
            { "id": 5, "text": "the",
              "dependency_from": { "token": 6, "label": "det" } },
            { "id": 6, "text": "risk",
              "dependency_to": [
                  { "token": 5, "label": "det" },
                  { "token": 9, "label": "nmod" }
              ],
              "dependency_from": { "token": 4, "label": "dobj" } },
            { "id": 7, "text": "of",
              "dependency_from": { "token": 9, "label": "case" } },
            { "id": 8, "text": "breast",
              "dependency_from": { "token": 9, "label": "compound" } },
            { "id": 9, "text": "cancer",
              "dependency_to": [
                  { "token": 7, "label": "case" },
                  { "token": 8, "label": "compound" }
              ],
              "dependency_from": { "token": 6, "label": "nmod" } }
        ]
    });
    serde_json::from_value(doc).unwrap()
}

fn all_pairs(n: usize) -> impl Iterator<Item = (TokenId, TokenId)> {
    let n = n as TokenId;
    (0..n).flat_map(move |u| (0..n).map(move |v| (u, v)))
}

#[test]
fn test_scenario_distances() {
    let sentence = scenario();
    let paths = compute_shortest_paths(&sentence).unwrap();

    assert_eq!(paths.distance(0, 2), 2.0);
    assert_eq!(paths.next_hop(0, 2), Some(1));
    assert!(paths.distance(0, 3).is_infinite());
    assert_eq!(paths.next_hop(0, 3), None);
}

#[test]
fn test_scenario_paths() {
    let sentence = scenario();

    let path = compute_shortest_path(&sentence, &sentence[0], &sentence[2]).unwrap();
    assert_eq!(path.token_ids(), vec![0, 1, 2]);
    let labels: Vec<_> = path.nodes().iter().map(|n| n.label).collect();
    assert_eq!(labels, vec!["nsubj", "dobj", ""]);
    assert_eq!(path.str_full(), "nsubj F ~ T1 dobj F");

    let reverse = compute_shortest_path(&sentence, &sentence[2], &sentence[0]).unwrap();
    assert_eq!(reverse.token_ids(), vec![2, 1, 0]);
    assert_eq!(reverse.str_directed_edge_only(), "dobj B ~ nsubj B");

    let none = compute_shortest_path(&sentence, &sentence[0], &sentence[3]).unwrap();
    assert!(none.is_empty());
    assert!(!none.exists());
}

#[test]
fn test_distance_matrix_properties() {
    let sentence = parsed_sentence();
    let paths = compute_shortest_paths(&sentence).unwrap();
    let n = sentence.len();

    for (u, v) in all_pairs(n) {
        assert_eq!(paths.distance(u, v), paths.distance(v, u), "symmetry ({u}, {v})");
        if u == v {
            assert_eq!(paths.distance(u, v), 0.0);
        }
        for w in 0..n as TokenId {
            assert!(
                paths.distance(u, v) <= paths.distance(u, w) + paths.distance(w, v) + 1e-9,
                "triangle inequality ({u}, {w}, {v})"
            );
        }
    }
}

#[test]
fn test_path_length_matches_distance() {
    let sentence = parsed_sentence();
    let paths = compute_shortest_paths(&sentence).unwrap();

    for (u, v) in all_pairs(sentence.len()) {
        let path = compute_shortest_path(&sentence, &sentence[u], &sentence[v]).unwrap();
        let dist = paths.distance(u, v);

        if dist.is_infinite() {
            assert!(path.is_empty());
            continue;
        }
        assert_eq!(path.len(), dist as usize + 1, "pair ({u}, {v})");
        assert_eq!(path.source().unwrap().id, u);
        assert_eq!(path.target().unwrap().id, v);
        if dist == 1.0 {
            assert_eq!(path.len(), 2);
        }
    }
}

#[test]
fn test_parsed_sentence_features() {
    let sentence = parsed_sentence();
    let prepared = PathEngine::default().prepare(&sentence).unwrap();

    // BRCA1 -> cancer
    let features = prepared.features(2, 9).unwrap();
    assert_eq!(features.distance, Some(5));
    assert!(features.exists);
    assert_eq!(features.token_only, "function ~ Loss ~ increases ~ risk");
    assert_eq!(
        features.directed_edges,
        "compound B ~ prep B ~ nsubj B ~ dobj F ~ nmod F"
    );
    assert_eq!(features.undirected_edges, "compound ~ prep ~ nsubj ~ dobj ~ nmod");
    assert_eq!(
        features.full,
        "compound B ~ function prep B ~ Loss nsubj B ~ increases dobj F ~ risk nmod F"
    );
}

#[test]
fn test_entry_points_reject_multi_parent_sentence() {
    // token 2 is claimed by both 0 and 1
    let mut builder = Sentence::builder().token("a").token("b").token("c");
    builder.add_dependency(0, 2, "x");
    builder.add_dependency(1, 2, "y");
    let sentence = builder.build();

    let is_multi_parent = |err: DepPathError| {
        matches!(err, DepPathError::InvalidSentence(ref d) if d.code == ErrorCode::MultipleParents)
    };

    assert!(is_multi_parent(compute_shortest_paths(&sentence).unwrap_err()));
    for (u, v) in [(0, 1), (2, 1), (1, 2)] {
        let err = compute_shortest_path(&sentence, &sentence[u], &sentence[v]).unwrap_err();
        assert!(is_multi_parent(err), "pair ({u}, {v})");
    }
}

#[test]
fn test_idempotent() {
    let sentence = parsed_sentence();
    assert_eq!(
        compute_shortest_paths(&sentence).unwrap(),
        compute_shortest_paths(&sentence).unwrap()
    );
}

#[test]
fn test_dijkstra_agrees_with_floyd_warshall() {
    let sentence = parsed_sentence();
    let fw = PathEngine::default();
    let dj = PathEngine::new(PathConfig::new().with_solver(SolverKind::Dijkstra));

    for (u, v) in all_pairs(sentence.len()) {
        assert_eq!(
            dj.shortest_path(&sentence, u, v).unwrap(),
            fw.shortest_path(&sentence, u, v).unwrap(),
            "pair ({u}, {v})"
        );
    }
}

#[test]
fn test_engine_from_json_config() {
    let sentence = scenario();
    let engine = PathEngine::from_json(
        r#"{
            "v": 1,
            "solver": "dijkstra",
            "exists": "legacy_head",
            "separator": " / ",
            "limits": { "max_tokens": 16 }
        }"#,
    )
    .unwrap();

    assert_eq!(engine.config().solver, SolverKind::Dijkstra);
    assert_eq!(engine.config().exists, ExistsSemantics::LegacyHead);

    let features = engine.features(&sentence, 0, 2).unwrap();
    assert_eq!(features.directed_edges, "nsubj F / dobj F");
    assert!(!features.exists);
}

#[test]
fn test_engine_rejects_bad_config() {
    assert!(PathEngine::from_json(r#"{ "v": 2 }"#).is_err());
    assert!(PathEngine::from_json(r#"{ "v": 1, "separator": "" }"#).is_err());
    assert!(PathEngine::from_json(r#"{ "v": 1, "strict": true, "colour": "red" }"#).is_err());
    assert!(PathEngine::from_json(r#"{ "v": 1, "colour": "red" }"#).is_ok());
}

#[test]
fn test_batch_processing() {
    let sentences = vec![scenario(), parsed_sentence(), scenario()];
    let results = PathEngine::default().prepare_batch(&sentences);

    assert_eq!(results.len(), 3);
    let sizes: Vec<_> = results
        .iter()
        .map(|r| r.as_ref().unwrap().sentence().len())
        .collect();
    assert_eq!(sizes, vec![4, 10, 4]);

    let path = results[1].as_ref().unwrap().path(5, 8).unwrap();
    assert_eq!(path.token_ids(), vec![5, 6, 9, 8]);
}
