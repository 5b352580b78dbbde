//! Composite-use decomposition
//!
//! A composite-use (16_i / 16_ro) building is additionally judged as if each
//! of its component uses were its own building — the Order § 9 deeming
//! provision. Component-use slices are accumulated across floors by use
//! code, a sub-context is synthesized per accumulated use, and the same
//! article module is re-run with `is_sub_evaluation` set. Every positive
//! sub-result is collected; sub-uses are independent triggers, so the pass
//! does not stop at the first match.
//!
//! Decomposition is one level deep: a component use that is itself a
//! composite code is judged as-is and never decomposed again, mirroring the
//! statute (the deeming provision does not nest).

use std::collections::BTreeMap;

use shared_types::{BuildingProfile, Floor, FloorKind, JudgementResult};

use crate::context::RuleContext;
use crate::module::ArticleModule;
use crate::usecode::UseDisplay;

/// Running totals for one component use, accumulated across floors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentTotals {
    pub total_area: f64,
    pub basement_area: f64,
    pub windowless_area: f64,
    /// Area on ground floors at level 4 or higher.
    pub upper_floors_area: f64,
    pub total_capacity: u32,
    pub basement_or_windowless_capacity: u32,
}

/// Accumulate component-use slices by use code.
///
/// Entries with an empty `use_code` or a non-positive `floor_area` are
/// silently skipped — deliberate lenience toward partially filled-in forms.
/// The per-kind buckets are keyed by the owning floor's kind, windowless
/// flag, and level. BTreeMap keeps the sub-evaluation order deterministic.
pub fn accumulate_component_uses(floors: &[Floor]) -> BTreeMap<String, ComponentTotals> {
    let mut totals: BTreeMap<String, ComponentTotals> = BTreeMap::new();

    for floor in floors {
        for component in &floor.component_uses {
            if component.use_code.is_empty() {
                continue;
            }
            let area = component.floor_area.unwrap_or(0.0);
            if area <= 0.0 {
                continue;
            }

            let entry = totals.entry(component.use_code.clone()).or_default();
            entry.total_area += area;
            match floor.kind {
                FloorKind::Basement => entry.basement_area += area,
                FloorKind::Ground if floor.level >= 4 => entry.upper_floors_area += area,
                FloorKind::Ground => {}
            }
            if floor.is_windowless {
                entry.windowless_area += area;
            }

            let capacity = component.capacity.unwrap_or(0);
            entry.total_capacity += capacity;
            if floor.kind == FloorKind::Basement || floor.is_windowless {
                entry.basement_or_windowless_capacity += capacity;
            }
        }
    }

    totals
}

/// Re-judge `module` once per accumulated component use and collect every
/// positive result, each prefixed with the tenant-use label.
pub fn judge_component_uses(
    module: &ArticleModule,
    profile: &BuildingProfile,
    display: &dyn UseDisplay,
) -> Vec<JudgementResult> {
    let totals = accumulate_component_uses(&profile.floors);
    let mut results = Vec::new();

    for (use_code, component_totals) in &totals {
        let ctx = RuleContext::sub(profile, use_code, component_totals, display);
        tracing::debug!(
            article = %module.article,
            component_use = use_code,
            area = component_totals.total_area,
            "judging component use"
        );

        if let Some(result) = module.judge(&ctx) {
            if result.required.is_positive() {
                results.push(JudgementResult {
                    message: format!(
                        "For the \"{}\" portion of the composite-use building: {}",
                        ctx.use_display, result.message
                    ),
                    ..result
                });
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use shared_types::ComponentUse;

    fn slice(code: &str, area: Option<f64>) -> ComponentUse {
        ComponentUse {
            use_code: code.to_string(),
            floor_area: area,
            capacity: None,
        }
    }

    #[test]
    fn sums_same_use_across_floors() {
        let mut first = Floor::ground(1, Some(600.0));
        first.component_uses = vec![slice("04", Some(300.0)), slice("15", Some(300.0))];
        let mut second = Floor::ground(2, Some(600.0));
        second.component_uses = vec![slice("04", Some(250.0))];

        let totals = accumulate_component_uses(&[first, second]);
        assert_eq!(totals["04"].total_area, 550.0);
        assert_eq!(totals["15"].total_area, 300.0);
    }

    #[test]
    fn buckets_by_owning_floor_kind() {
        let mut basement = Floor::basement(1, Some(400.0));
        basement.component_uses = vec![slice("04", Some(400.0))];
        let mut windowless = Floor::ground(2, Some(100.0));
        windowless.is_windowless = true;
        windowless.component_uses = vec![slice("04", Some(100.0))];
        let mut upper = Floor::ground(5, Some(200.0));
        upper.component_uses = vec![slice("04", Some(200.0))];

        let totals = accumulate_component_uses(&[basement, windowless, upper]);
        let entry = &totals["04"];
        assert_eq!(entry.total_area, 700.0);
        assert_eq!(entry.basement_area, 400.0);
        assert_eq!(entry.windowless_area, 100.0);
        assert_eq!(entry.upper_floors_area, 200.0);
    }

    #[test]
    fn accumulates_capacities() {
        let mut basement = Floor::basement(1, Some(300.0));
        basement.component_uses = vec![ComponentUse {
            use_code: "02_i".to_string(),
            floor_area: Some(300.0),
            capacity: Some(40),
        }];
        let mut ground = Floor::ground(1, Some(300.0));
        ground.component_uses = vec![ComponentUse {
            use_code: "02_i".to_string(),
            floor_area: Some(300.0),
            capacity: Some(60),
        }];

        let totals = accumulate_component_uses(&[basement, ground]);
        let entry = &totals["02_i"];
        assert_eq!(entry.total_capacity, 100);
        assert_eq!(entry.basement_or_windowless_capacity, 40);
    }

    #[test]
    fn skips_malformed_entries() {
        let mut floor = Floor::ground(1, Some(500.0));
        floor.component_uses = vec![
            slice("", Some(100.0)),
            slice("04", None),
            slice("04", Some(0.0)),
            slice("04", Some(-5.0)),
            slice("04", Some(120.0)),
        ];

        let totals = accumulate_component_uses(&[floor]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["04"].total_area, 120.0);
    }

    #[test]
    fn empty_component_lists_produce_no_totals() {
        let floors = vec![Floor::ground(1, Some(500.0)), Floor::basement(1, Some(200.0))];
        assert!(accumulate_component_uses(&floors).is_empty());
    }

    proptest! {
        /// Conservation: grouped totals equal an independently computed sum,
        /// with nothing double-counted or dropped.
        #[test]
        fn conservation_of_component_areas(
            layout in proptest::collection::vec(
                (0u8..4, proptest::collection::vec(
                    (0usize..3, 0.0f64..500.0), 0..5)),
                0..6)
        ) {
            let codes = ["04", "05_i", "15"];
            let mut floors = Vec::new();
            for (i, (kind, slices)) in layout.iter().enumerate() {
                let mut floor = match kind {
                    0 => Floor::basement(1, None),
                    1 => {
                        let mut f = Floor::ground(2, None);
                        f.is_windowless = true;
                        f
                    }
                    2 => Floor::ground(5, None),
                    _ => Floor::ground(1, None),
                };
                floor.level = floor.level.max(i as u32 + 1);
                if *kind == 2 {
                    floor.level = floor.level.max(4);
                }
                for (code_idx, area) in slices {
                    floor.component_uses.push(slice(codes[*code_idx], Some(*area)));
                }
                floors.push(floor);
            }

            let totals = accumulate_component_uses(&floors);

            // Reference aggregation: flat scan, grouped by code.
            for code in codes {
                let expected: f64 = floors
                    .iter()
                    .flat_map(|f| &f.component_uses)
                    .filter(|c| c.use_code == code)
                    .filter_map(|c| c.floor_area)
                    .filter(|a| *a > 0.0)
                    .sum();
                let actual = totals.get(code).map_or(0.0, |t| t.total_area);
                prop_assert!((actual - expected).abs() < 1e-9);
            }

            let grand_total: f64 = totals.values().map(|t| t.total_area).sum();
            let expected_total: f64 = floors
                .iter()
                .flat_map(|f| &f.component_uses)
                .filter(|c| !c.use_code.is_empty())
                .filter_map(|c| c.floor_area)
                .filter(|a| *a > 0.0)
                .sum();
            prop_assert!((grand_total - expected_total).abs() < 1e-9);
        }
    }
}
