//! Order § 22 — earth-leakage fire alarms
//!
//! Only applies to combustible lath-and-mortar style construction, so the
//! chain opens with a structure gate that short-circuits to an explicit
//! not-required result. Item 6 tallies the specific-use portions of a
//! category (16)(a) building from its component uses.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::RuleContext;
use crate::module::{ArticleModule, Rule};
use crate::usecode::use_code_matches;

const ITEM3_CODES: &[&str] = &["01", "02", "03", "04", "06", "12", "16_2"];

const ITEM4_CODES: &[&str] = &["07", "08", "10", "11"];

const ITEM7_CODES: &[&str] = &["01", "02", "03", "04", "05", "06", "15", "16"];

/// Item 6 tallies floor areas of these categories inside a (16)(a) building:
/// (1)-(4), (5)(a), (6), (9)(a), and (12).
const SPECIFIC_USE_CODES: &[&str] = &[
    "01", "02", "03", "04", "05_i", "06", "09_i", "12",
];

fn check_structure(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.has_special_combustible_structure {
        return Some(JudgementResult::not_required(
            "The building is not of the combustible construction covered by the \
             earth-leakage fire alarm requirement.",
        ));
    }
    None
}

fn check_item1(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["17"]) {
        return Some(JudgementResult::required(
            format!(
                "Combustible lath-and-mortar construction and the use ({}) require \
                 an earth-leakage fire alarm.",
                ctx.use_display
            ),
            format!("Order § 22(1)(1){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["05", "09"]) && ctx.total_area >= 150.0 {
        return Some(JudgementResult::required(
            format!(
                "Combustible construction, the use ({}), and a total floor area of \
                 150 m² or more require an earth-leakage fire alarm.",
                ctx.use_display
            ),
            format!("Order § 22(1)(2){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item3(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM3_CODES) && ctx.total_area >= 300.0 {
        return Some(JudgementResult::required(
            format!(
                "Combustible construction, the use ({}), and a total floor area of \
                 300 m² or more require an earth-leakage fire alarm.",
                ctx.use_display
            ),
            format!("Order § 22(1)(3){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item4(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM4_CODES) && ctx.total_area >= 500.0 {
        return Some(JudgementResult::required(
            format!(
                "Combustible construction, the use ({}), and a total floor area of \
                 500 m² or more require an earth-leakage fire alarm.",
                ctx.use_display
            ),
            format!("Order § 22(1)(4){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item5(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["14", "15"]) && ctx.total_area >= 1000.0 {
        return Some(JudgementResult::required(
            format!(
                "Combustible construction, the use ({}), and a total floor area of \
                 1000 m² or more require an earth-leakage fire alarm.",
                ctx.use_display
            ),
            format!("Order § 22(1)(5){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item7(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // no per-tenant contracted-current data
    }
    if ctx.matches(ITEM7_CODES) && ctx.contracted_current_capacity > 50.0 {
        return Some(JudgementResult::required(
            format!(
                "Combustible construction, the use ({}), and a contracted current \
                 capacity exceeding 50 A require an earth-leakage fire alarm.",
                ctx.use_display
            ),
            format!("Order § 22(1)(7){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item6(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // tallies the whole building's component uses
    }
    if !ctx.matches(&["16_i"]) || ctx.total_area < 500.0 {
        return None;
    }

    let specific_use_area: f64 = ctx
        .floors
        .iter()
        .flat_map(|floor| floor.component_uses.iter())
        .filter(|cu| {
            !cu.use_code.is_empty()
                && cu.floor_area.unwrap_or(0.0) > 0.0
                && use_code_matches(Some(&cu.use_code), SPECIFIC_USE_CODES)
        })
        .filter_map(|cu| cu.floor_area)
        .sum();

    if specific_use_area >= 300.0 {
        return Some(JudgementResult::required(
            format!(
                "Combustible construction: a category (16)(a) building of 500 m² or \
                 more whose specific-use portions total {specific_use_area:.0} m² \
                 (>= 300 m²) requires an earth-leakage fire alarm.",
            ),
            format!("Order § 22(1)(6){}", ctx.citation_suffix),
        ));
    }

    // No component-use data entered yet.
    if specific_use_area == 0.0 {
        return Some(JudgementResult::warning(
            "Combustible construction: a category (16)(a) building of 500 m² or \
             more must install an earth-leakage fire alarm if its specific-use \
             portions total 300 m² or more. Enter the component-use floor areas.",
            format!("Order § 22(1)(6){}", ctx.citation_suffix),
        ));
    }

    Some(JudgementResult::not_required(format!(
        "A category (16)(a) building of 500 m² or more, but the specific-use \
         portions total {specific_use_area:.0} m² (< 300 m²), so an earth-leakage \
         fire alarm is not required.",
    )))
}

static RULES: &[Rule] = &[
    check_structure,
    check_item1,
    check_item2,
    check_item3,
    check_item4,
    check_item5,
    check_item7,
    check_item6,
];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article22,
    rules: RULES,
    none_message: "An earth-leakage fire alarm is not required.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecode::AnnexedUseTable;
    use pretty_assertions::assert_eq;
    use shared_types::{BuildingProfile, ComponentUse, Floor, Requirement, NO_BASIS};

    fn judge(profile: &BuildingProfile) -> Option<JudgementResult> {
        let code = profile.use_code().unwrap();
        let ctx = RuleContext::main(profile, code, &AnnexedUseTable);
        MODULE.judge(&ctx)
    }

    fn combustible(code: &str) -> BuildingProfile {
        let mut profile = BuildingProfile::new(code);
        profile.has_special_combustible_structure = true;
        profile
    }

    #[test]
    fn non_combustible_structure_is_explicitly_not_required() {
        let profile = BuildingProfile::new("17");
        let result = judge(&profile).unwrap();
        assert_eq!(result.required, Requirement::NotRequired);
        assert_eq!(result.basis, NO_BASIS);
    }

    #[test]
    fn cultural_property_requires_regardless_of_area() {
        let profile = combustible("17");
        assert_eq!(judge(&profile).unwrap().basis, "Order § 22(1)(1)");
    }

    #[test]
    fn hotel_threshold_is_150() {
        let mut profile = combustible("05_i");
        profile.total_floor_area = Some(149.0);
        assert_eq!(judge(&profile), None);
        profile.total_floor_area = Some(150.0);
        assert_eq!(judge(&profile).unwrap().basis, "Order § 22(1)(2)");
    }

    #[test]
    fn area_tiers_for_items_3_through_5() {
        let mut theater = combustible("01_i");
        theater.total_floor_area = Some(300.0);
        assert_eq!(judge(&theater).unwrap().basis, "Order § 22(1)(3)");

        let mut school = combustible("07");
        school.total_floor_area = Some(500.0);
        assert_eq!(judge(&school).unwrap().basis, "Order § 22(1)(4)");

        let mut office = combustible("15");
        office.total_floor_area = Some(1000.0);
        assert_eq!(judge(&office).unwrap().basis, "Order § 22(1)(5)");
    }

    #[test]
    fn contracted_current_over_50a_is_strict() {
        let mut profile = combustible("03_i");
        profile.contracted_current_capacity = Some(50.0);
        assert_eq!(judge(&profile), None);
        profile.contracted_current_capacity = Some(50.1);
        assert_eq!(judge(&profile).unwrap().basis, "Order § 22(1)(7)");
    }

    #[test]
    fn composite_specific_use_tally_crosses_300() {
        let mut profile = combustible("16_i");
        profile.total_floor_area = Some(500.0);
        let mut first = Floor::ground(1, Some(300.0));
        first.component_uses = vec![ComponentUse {
            use_code: "03_ro".to_string(),
            floor_area: Some(200.0),
            capacity: None,
        }];
        let mut second = Floor::ground(2, Some(200.0));
        second.component_uses = vec![ComponentUse {
            use_code: "04".to_string(),
            floor_area: Some(100.0),
            capacity: None,
        }];
        profile.floors = vec![first, second];

        let result = judge(&profile).unwrap();
        assert_eq!(result.required, Requirement::Required);
        assert_eq!(result.basis, "Order § 22(1)(6)");
        assert!(result.message.contains("300 m²"));
    }

    #[test]
    fn composite_without_component_data_warns() {
        let mut profile = combustible("16_i");
        profile.total_floor_area = Some(600.0);
        let result = judge(&profile).unwrap();
        assert_eq!(result.required, Requirement::Warning);
        assert_eq!(result.basis, "Order § 22(1)(6)");
    }

    #[test]
    fn composite_below_tally_threshold_is_explicitly_not_required() {
        let mut profile = combustible("16_i");
        profile.total_floor_area = Some(600.0);
        let mut floor = Floor::ground(1, Some(600.0));
        floor.component_uses = vec![ComponentUse {
            use_code: "01_i".to_string(),
            floor_area: Some(100.0),
            capacity: None,
        }];
        profile.floors = vec![floor];

        let result = judge(&profile).unwrap();
        assert_eq!(result.required, Requirement::NotRequired);
        assert_eq!(result.basis, NO_BASIS);
        assert!(result.message.contains("< 300 m²"));
    }

    #[test]
    fn office_only_component_uses_still_warn() {
        let mut profile = combustible("16_i");
        profile.total_floor_area = Some(600.0);
        let mut floor = Floor::ground(1, Some(600.0));
        floor.component_uses = vec![ComponentUse {
            use_code: "15".to_string(),
            floor_area: Some(500.0),
            capacity: None,
        }];
        profile.floors = vec![floor];
        // A zero tally is indistinguishable from missing data, so the
        // judgement stays a warning rather than clearing the building.
        let result = judge(&profile).unwrap();
        assert_eq!(result.required, Requirement::Warning);
    }
}
