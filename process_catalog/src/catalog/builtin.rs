//! The built-in manufacturing rule catalog.

use super::RuleSpec;

/// Rules of the built-in catalog, in registration order.
///
/// Each problem family comes as a pair: a milder diagnosis on two indicators
/// and a more severe one when a third indicator is also observed.
pub fn builtin_rules() -> Vec<RuleSpec> {
    vec![
        // Quality control
        RuleSpec::new(
            ["dimensional_variation", "tool_wear"],
            "possible_tooling_problem",
            0.7,
        ),
        RuleSpec::new(
            ["dimensional_variation", "tool_wear", "vibration"],
            "severe_tooling_issue",
            0.9,
        ),
        RuleSpec::new(
            ["surface_defects", "irregular_finish"],
            "quality_control_issue",
            0.8,
        ),
        // Machine maintenance
        RuleSpec::new(["unusual_noise", "vibration"], "mechanical_problem", 0.75),
        RuleSpec::new(
            ["unusual_noise", "vibration", "overheating"],
            "serious_mechanical_issue",
            0.9,
        ),
        RuleSpec::new(
            ["power_fluctuation", "system_trips"],
            "electrical_problem",
            0.85,
        ),
        // Process control
        RuleSpec::new(
            ["temperature_variation", "pressure_fluctuation"],
            "process_control_issue",
            0.7,
        ),
        RuleSpec::new(
            [
                "temperature_variation",
                "pressure_fluctuation",
                "flow_rate_unstable",
            ],
            "severe_process_control",
            0.9,
        ),
        // Material handling
        RuleSpec::new(
            ["feed_rate_unstable", "material_buildup"],
            "material_handling_problem",
            0.8,
        ),
        RuleSpec::new(
            ["feed_rate_unstable", "material_buildup", "jamming"],
            "severe_material_handling",
            0.95,
        ),
        // Production efficiency
        RuleSpec::new(
            ["cycle_time_increase", "output_decrease"],
            "efficiency_problem",
            0.75,
        ),
        RuleSpec::new(
            ["cycle_time_increase", "output_decrease", "high_reject_rate"],
            "serious_efficiency_issue",
            0.9,
        ),
    ]
}
