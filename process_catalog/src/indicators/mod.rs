//! Indicator categories offered to the operator.

use serde::{Deserialize, Serialize};

/// A named group of indicator labels, shown together in the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorCategory {
    pub name: String,
    pub indicators: Vec<String>,
}

impl IndicatorCategory {
    /// Create a new category from a name and its indicator labels.
    pub fn new<I, S>(name: impl Into<String>, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            indicators: indicators.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this category lists the given indicator label.
    pub fn contains(&self, label: &str) -> bool {
        self.indicators.iter().any(|i| i == label)
    }
}

/// The indicator categories of the built-in catalog, in display order.
pub fn builtin_categories() -> Vec<IndicatorCategory> {
    vec![
        IndicatorCategory::new(
            "Quality Control",
            [
                "dimensional_variation",
                "tool_wear",
                "surface_defects",
                "irregular_finish",
            ],
        ),
        IndicatorCategory::new(
            "Machine Status",
            [
                "vibration",
                "unusual_noise",
                "overheating",
                "power_fluctuation",
                "system_trips",
            ],
        ),
        IndicatorCategory::new(
            "Process Parameters",
            [
                "temperature_variation",
                "pressure_fluctuation",
                "flow_rate_unstable",
            ],
        ),
        IndicatorCategory::new(
            "Production Issues",
            [
                "feed_rate_unstable",
                "material_buildup",
                "jamming",
                "cycle_time_increase",
                "output_decrease",
                "high_reject_rate",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_order() {
        let names: Vec<_> = builtin_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Quality Control",
                "Machine Status",
                "Process Parameters",
                "Production Issues"
            ]
        );
    }

    #[test]
    fn test_category_contains() {
        let categories = builtin_categories();
        assert!(categories[1].contains("vibration"));
        assert!(!categories[0].contains("vibration"));
    }

    #[test]
    fn test_builtin_indicator_count() {
        let total: usize = builtin_categories().iter().map(|c| c.indicators.len()).sum();
        assert_eq!(total, 18);
    }
}
