use std::collections::HashSet;

use diagnosis_core::InferenceEngine;
use proptest::prelude::*;

/// Up to eight rules over a small label alphabet so overlaps are common.
fn rule_defs() -> impl Strategy<Value = Vec<(Vec<String>, f64)>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-f]", 1..4),
            (1u32..=100).prop_map(|n| n as f64 / 100.0),
        ),
        0..8,
    )
}

fn fact_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-h]", 0..8)
}

fn build_engine(rules: &[(Vec<String>, f64)]) -> InferenceEngine {
    let mut engine = InferenceEngine::new();
    for (i, (conditions, confidence)) in rules.iter().enumerate() {
        engine
            .register_rule(conditions, &format!("c{}", i), *confidence)
            .unwrap();
    }
    engine
}

fn fired_ids(engine: &InferenceEngine) -> HashSet<u32> {
    engine.evaluate().iter().map(|c| c.rule_id.0).collect()
}

// ── Firing is exactly the subset test ─────────────────────────────────────

proptest! {
    #[test]
    fn rule_fires_iff_conditions_are_subset(rules in rule_defs(), facts in fact_set()) {
        let mut engine = build_engine(&rules);
        for fact in &facts {
            engine.add_fact(fact);
        }
        let fired = fired_ids(&engine);
        let observed: HashSet<&str> = facts.iter().map(String::as_str).collect();

        for (i, (conditions, _)) in rules.iter().enumerate() {
            let expected = conditions.iter().all(|c| observed.contains(c.as_str()));
            prop_assert_eq!(fired.contains(&(i as u32)), expected, "rule {}", i);
        }
    }

    #[test]
    fn unrelated_fact_never_changes_firing(rules in rule_defs(), facts in fact_set()) {
        let mut engine = build_engine(&rules);
        for fact in &facts {
            engine.add_fact(fact);
        }
        let before = fired_ids(&engine);

        // Rule conditions only use a-f
        engine.add_fact("z");
        prop_assert_eq!(before, fired_ids(&engine));
    }
}

// ── Mutation semantics ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn add_fact_is_idempotent_but_logged(label in "[a-z_]{1,12}") {
        let mut once = InferenceEngine::new();
        once.add_fact(&label);

        let mut twice = InferenceEngine::new();
        twice.add_fact(&label);
        twice.add_fact(&label);

        prop_assert_eq!(once.current_facts(), twice.current_facts());
        prop_assert_eq!(once.history().len(), 1);
        prop_assert_eq!(twice.history().len(), 2);
    }

    #[test]
    fn firing_is_monotonic(rules in rule_defs(), facts in fact_set(), extra in fact_set()) {
        let mut engine = build_engine(&rules);
        for fact in &facts {
            engine.add_fact(fact);
        }
        let before = fired_ids(&engine);

        for fact in &extra {
            engine.add_fact(fact);
        }
        let after = fired_ids(&engine);

        prop_assert!(before.is_subset(&after));
    }

    #[test]
    fn clear_then_evaluate_is_empty(rules in rule_defs(), facts in fact_set()) {
        let mut engine = build_engine(&rules);
        for fact in &facts {
            engine.add_fact(fact);
        }
        engine.clear_facts();

        prop_assert!(engine.evaluate().is_empty());
        prop_assert_eq!(engine.rule_count(), rules.len());
    }
}

// ── Ranking ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn conclusions_ranked_by_confidence_then_registration(
        rules in rule_defs(),
        facts in fact_set(),
    ) {
        let mut engine = build_engine(&rules);
        for fact in &facts {
            engine.add_fact(fact);
        }
        let conclusions = engine.evaluate();

        for pair in conclusions.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
            if pair[0].confidence == pair[1].confidence {
                prop_assert!(pair[0].rule_id < pair[1].rule_id);
            }
        }
    }
}
