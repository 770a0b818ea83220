use std::collections::BTreeSet;

use diagnosis_core::{DiagnosticSession, InferenceEngine, RuleId};
use process_catalog::Catalog;

fn tooling_rules() -> InferenceEngine {
    let mut engine = InferenceEngine::new();
    engine
        .register_rule(
            ["dimensional_variation", "tool_wear"],
            "possible_tooling_problem",
            0.7,
        )
        .unwrap();
    engine
        .register_rule(
            ["dimensional_variation", "tool_wear", "vibration"],
            "severe_tooling_issue",
            0.9,
        )
        .unwrap();
    engine
}

fn pairs(edges: &[(&str, &str)]) -> BTreeSet<(String, String)> {
    edges
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

// ── Tooling escalation ──────────────────────────────────────────────────

#[test]
fn tooling_problem_escalates_when_vibration_is_observed() {
    let mut engine = tooling_rules();
    engine.add_fact("dimensional_variation");
    engine.add_fact("tool_wear");

    let conclusions = engine.evaluate();
    assert_eq!(conclusions.len(), 1);
    assert_eq!(conclusions[0].conclusion, "possible_tooling_problem");
    assert!((conclusions[0].confidence - 0.7).abs() < f64::EPSILON);
    assert_eq!(conclusions[0].rule_id, RuleId(0));

    engine.add_fact("vibration");

    let conclusions = engine.evaluate();
    let ranked: Vec<_> = conclusions
        .iter()
        .map(|c| (c.conclusion.as_str(), c.confidence))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("severe_tooling_issue", 0.9),
            ("possible_tooling_problem", 0.7)
        ]
    );
}

#[test]
fn empty_fact_set_yields_nothing() {
    let engine = InferenceEngine::from_catalog(&Catalog::builtin()).unwrap();
    assert!(engine.evaluate().is_empty());
}

#[test]
fn graph_snapshot_mirrors_rules() {
    let snapshot = tooling_rules().graph_snapshot();

    let nodes: BTreeSet<String> = [
        "dimensional_variation",
        "tool_wear",
        "vibration",
        "possible_tooling_problem",
        "severe_tooling_issue",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(snapshot.nodes, nodes);

    assert_eq!(
        snapshot.edges,
        pairs(&[
            ("dimensional_variation", "possible_tooling_problem"),
            ("tool_wear", "possible_tooling_problem"),
            ("dimensional_variation", "severe_tooling_issue"),
            ("tool_wear", "severe_tooling_issue"),
            ("vibration", "severe_tooling_issue"),
        ])
    );
}

// ── Built-in catalog ────────────────────────────────────────────────────

#[test]
fn builtin_graph_covers_every_rule() {
    let engine = InferenceEngine::from_catalog(&Catalog::builtin()).unwrap();
    let graph = engine.graph();

    // 18 indicators and 12 conclusions, no label used as both
    assert_eq!(graph.node_count(), 30);
    // Two-condition and three-condition rule per family, six families
    assert_eq!(graph.edge_count(), 6 * (2 + 3));
    assert_eq!(
        graph.conclusions_of("vibration"),
        vec!["mechanical_problem", "serious_mechanical_issue", "severe_tooling_issue"]
    );
}

#[test]
fn shared_indicator_fires_across_families() {
    let mut session = DiagnosticSession::from_catalog(&Catalog::builtin()).unwrap();
    for label in [
        "dimensional_variation",
        "tool_wear",
        "vibration",
        "unusual_noise",
        "overheating",
    ] {
        session.add_indicator(label);
    }

    let report = session.analyze();
    let labels: Vec<_> = report
        .conclusions
        .iter()
        .map(|c| c.conclusion.as_str())
        .collect();

    // 0.9 ties keep registration order: tooling (id 1) before mechanical (id 4)
    assert_eq!(
        labels,
        vec![
            "severe_tooling_issue",
            "serious_mechanical_issue",
            "mechanical_problem",
            "possible_tooling_problem",
        ]
    );
}

#[test]
fn material_handling_ranks_highest_confidence_first() {
    let mut engine = InferenceEngine::from_catalog(&Catalog::builtin()).unwrap();
    for label in [
        "feed_rate_unstable",
        "material_buildup",
        "jamming",
        "power_fluctuation",
        "system_trips",
    ] {
        engine.add_fact(label);
    }

    let confidences: Vec<f64> = engine.evaluate().iter().map(|c| c.confidence).collect();
    assert_eq!(confidences, vec![0.95, 0.85, 0.8]);
}

#[test]
fn custom_indicator_is_logged_but_fires_nothing() {
    let mut session = DiagnosticSession::from_catalog(&Catalog::builtin()).unwrap();
    session.add_indicator("  Coolant Leak ");

    assert!(session.engine().current_facts().contains("coolant leak"));
    assert!(session.analyze().is_empty());
    assert_eq!(session.history(), ["Added indicator: coolant leak"]);
}

#[test]
fn history_records_every_action_in_order() {
    let mut session = DiagnosticSession::from_catalog(&Catalog::builtin()).unwrap();
    session.add_indicator("surface_defects");
    session.add_indicator("surface_defects");
    session.add_indicator("irregular_finish");
    session.analyze();
    session.clear_indicators();

    let history = session.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0], "Added indicator: surface_defects");
    assert_eq!(history[1], "Added indicator: surface_defects");
    assert_eq!(history[2], "Added indicator: irregular_finish");
    assert_eq!(
        history[3],
        "Analysis Results:\n- Quality Control Issue\n  Confidence: 80%\n"
    );
    assert_eq!(history[4], "Cleared all indicators");
}
