//! Equipment-installation judgement engine for the Fire Service Act
//! Enforcement Order.
//!
//! Each implemented article is an ordered rule chain over a read-only
//! [`BuildingProfile`]. Composite-use buildings are additionally decomposed
//! into their component uses and re-judged per use under the Order § 9
//! deeming provision, and the partial results are aggregated into one
//! determination per article.

pub mod aggregate;
pub mod article;
pub mod articles;
pub mod context;
pub mod decompose;
pub mod module;
pub mod usecode;

pub use article::{ArticleId, ParseArticleError};
pub use context::RuleContext;
pub use module::{ArticleModule, Rule};
pub use usecode::{is_composite_use, AnnexedUseTable, UseDisplay};

use shared_types::{ArticleJudgement, BuildingProfile, JudgementReport, JudgementResult};

/// JudgementEngine entry point.
pub struct JudgementEngine {
    display: Box<dyn UseDisplay + Send + Sync>,
}

impl JudgementEngine {
    /// Engine with the built-in annexed-table use labels.
    pub fn new() -> Self {
        Self {
            display: Box::new(AnnexedUseTable),
        }
    }

    /// Engine with a caller-supplied label source (e.g. localized labels).
    pub fn with_display(display: Box<dyn UseDisplay + Send + Sync>) -> Self {
        Self { display }
    }

    /// Judge one article against a building profile.
    pub fn evaluate(&self, article: ArticleId, profile: &BuildingProfile) -> JudgementResult {
        let use_code = match profile.use_code() {
            Some(code) if !code.is_empty() => code,
            _ => {
                return JudgementResult::not_required("Select the building's use category.");
            }
        };

        let module = articles::module_for(article);
        tracing::debug!(article = %article, use_code, "evaluating article");

        let main_ctx = RuleContext::main(profile, use_code, self.display.as_ref());
        let main_result = module.judge(&main_ctx);

        let sub_results = if is_composite_use(use_code) {
            decompose::judge_component_uses(module, profile, self.display.as_ref())
        } else {
            Vec::new()
        };

        aggregate::combine(main_result, sub_results, module.fallback())
    }

    /// Judge every implemented article and assemble a report.
    pub fn check_building(&self, profile: &BuildingProfile) -> JudgementReport {
        let results = ArticleId::implemented_articles()
            .into_iter()
            .map(|article| ArticleJudgement {
                article: article.code().to_string(),
                equipment: article.equipment_name().to_string(),
                result: self.evaluate(article, profile),
            })
            .collect();

        JudgementReport {
            results,
            evaluated_at: chrono::Utc::now(),
        }
    }
}

impl Default for JudgementEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{ComponentUse, Floor, Requirement, NO_BASIS};

    fn engine() -> JudgementEngine {
        JudgementEngine::new()
    }

    #[test]
    fn missing_use_code_short_circuits_every_article() {
        let profile = BuildingProfile::default();
        for article in ArticleId::implemented_articles() {
            let result = engine().evaluate(article, &profile);
            assert_eq!(result.required, Requirement::NotRequired);
            assert!(result.message.contains("use category"), "{article}");
            assert_eq!(result.basis, NO_BASIS);
        }
    }

    #[test]
    fn assembly_hall_at_600m2_needs_a_hydrant_system() {
        let mut profile = BuildingProfile::new("01_i");
        profile.total_floor_area = Some(600.0);
        let result = engine().evaluate(ArticleId::Article11, &profile);
        assert_eq!(result.required, Requirement::Required);
        assert_eq!(result.basis, "Order § 11(1)(1)");
    }

    #[test]
    fn assembly_hall_at_400m2_does_not() {
        let mut profile = BuildingProfile::new("01_i");
        profile.total_floor_area = Some(400.0);
        let result = engine().evaluate(ArticleId::Article11, &profile);
        assert_eq!(result.required, Requirement::NotRequired);
        assert_eq!(result.basis, NO_BASIS);
    }

    /// Two slices of the same use on different floors must be summed before
    /// the threshold comparison: 300 + 250 crosses the 500 m² line even
    /// though neither slice does alone.
    #[test]
    fn composite_slices_accumulate_before_thresholds() {
        let mut profile = BuildingProfile::new("16_i");
        profile.total_floor_area = Some(550.0);
        let mut first = Floor::ground(1, Some(300.0));
        first.component_uses = vec![ComponentUse {
            use_code: "01_i".to_string(),
            floor_area: Some(300.0),
            capacity: None,
        }];
        let mut second = Floor::ground(2, Some(250.0));
        second.component_uses = vec![ComponentUse {
            use_code: "01_i".to_string(),
            floor_area: Some(250.0),
            capacity: None,
        }];
        profile.floors = vec![first, second];

        let result = engine().evaluate(ArticleId::Article11, &profile);
        assert_eq!(result.required, Requirement::Required);
        assert!(result.message.contains("portion of the composite-use building"));
        assert!(result.basis.contains("Order § 11(1)(1)"));
        assert!(result.basis.contains("deemed under Order § 9"));
    }

    #[test]
    fn composite_sub_results_merge_with_the_main_result() {
        // (16)(a) building: the main pass requires fire extinguishers
        // unconditionally for some component uses, and each qualifying
        // component contributes its own line.
        let mut profile = BuildingProfile::new("16_i");
        profile.total_floor_area = Some(400.0);
        let mut floor = Floor::ground(1, Some(400.0));
        floor.component_uses = vec![
            ComponentUse {
                use_code: "02_i".to_string(),
                floor_area: Some(200.0),
                capacity: None,
            },
            ComponentUse {
                use_code: "04".to_string(),
                floor_area: Some(150.0),
                capacity: None,
            },
        ];
        profile.floors = vec![floor];

        let result = engine().evaluate(ArticleId::Article10, &profile);
        assert_eq!(result.required, Requirement::Required);
        // Main (16_i is not unconditional for § 10) plus two sub-results.
        assert!(result.message.contains("- For the"));
        assert!(result.basis.contains("deemed under Order § 9"));
    }

    #[test]
    fn non_composite_buildings_are_never_decomposed() {
        // Component-use data on a single-use building is ignored.
        let mut profile = BuildingProfile::new("15");
        profile.total_floor_area = Some(100.0);
        let mut floor = Floor::ground(1, Some(100.0));
        floor.component_uses = vec![ComponentUse {
            use_code: "01_i".to_string(),
            floor_area: Some(100.0),
            capacity: None,
        }];
        profile.floors = vec![floor];

        let result = engine().evaluate(ArticleId::Article11, &profile);
        assert_eq!(result.required, Requirement::NotRequired);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut profile = BuildingProfile::new("16_i");
        profile.total_floor_area = Some(800.0);
        let mut floor = Floor::ground(1, Some(800.0));
        floor.component_uses = vec![
            ComponentUse {
                use_code: "04".to_string(),
                floor_area: Some(400.0),
                capacity: None,
            },
            ComponentUse {
                use_code: "01_i".to_string(),
                floor_area: Some(400.0),
                capacity: None,
            },
        ];
        profile.floors = vec![floor];

        let first = engine().evaluate(ArticleId::Article10, &profile);
        let second = engine().evaluate(ArticleId::Article10, &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn report_covers_every_implemented_article_in_order() {
        let mut profile = BuildingProfile::new("05_i");
        profile.total_floor_area = Some(200.0);
        profile.total_capacity = Some(30);

        let report = engine().check_building(&profile);
        let codes: Vec<&str> = report.results.iter().map(|r| r.article.as_str()).collect();
        assert_eq!(codes, vec!["10", "11", "13", "21", "22", "23", "24", "27"]);

        // Hotels: § 21 requires unconditionally, § 24(2)(1) at 20 occupants.
        let by_code = |code: &str| {
            &report
                .results
                .iter()
                .find(|r| r.article == code)
                .unwrap()
                .result
        };
        assert_eq!(by_code("21").required, Requirement::Required);
        assert_eq!(by_code("24").required, Requirement::Required);
        assert_eq!(by_code("27").required, Requirement::NotRequired);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut profile = BuildingProfile::new("01_i");
        profile.total_floor_area = Some(600.0);

        let report = engine().check_building(&profile);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][0]["article"], "10");
        assert_eq!(json["results"][0]["result"]["required"], "required");
        assert!(json["evaluated_at"].is_string());
    }

    #[test]
    fn article22_gate_survives_aggregation() {
        // The explicit structure-gate exclusion must come through as the
        // final result, not the generic fallback.
        let profile = BuildingProfile::new("17");
        let result = engine().evaluate(ArticleId::Article22, &profile);
        assert_eq!(result.required, Requirement::NotRequired);
        assert!(result.message.contains("combustible construction"));
    }
}
