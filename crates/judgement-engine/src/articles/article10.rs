//! Order § 10 — fire extinguishers
//!
//! Tiered by use category: unconditional categories, 150 m² categories,
//! 300 m² categories, hazardous-materials storage, and a per-floor rule for
//! small basement/windowless/upper floors.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::{floor_label, RuleContext};
use crate::module::{ArticleModule, Rule};

/// Item 1(a): categories required regardless of size.
const ITEM1_A_CODES: &[&str] = &[
    "01_i", "02", "06_i_1", "06_i_2", "06_i_3", "06_ro", "16_2", "17", "20",
];

/// Item 2(a): categories required at 150 m² or more.
const ITEM2_A_CODES: &[&str] = &[
    "01_ro", "04", "05", "06_i_4", "06_ha", "06_ni", "09", "12", "13", "14",
];

/// Item 3: categories required at 300 m² or more.
const ITEM3_CODES: &[&str] = &["07", "08", "10", "11", "15"];

fn check_item1_a(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM1_A_CODES) {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) requires fire extinguishers regardless of floor area.",
                ctx.use_display
            ),
            format!("Order § 10(1)(1)(a){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item1_b(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["03"]) && ctx.uses_fire_equipment {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) has open-flame cooking or heating equipment, so fire \
                 extinguishers are required.",
                ctx.use_display
            ),
            format!("Order § 10(1)(1)(b){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item2_a(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.total_area >= 150.0 && ctx.matches(ITEM2_A_CODES) {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of {:.2} m² (>= 150 m²) and the use ({}) require \
                 fire extinguishers.",
                ctx.total_area, ctx.use_display
            ),
            format!("Order § 10(1)(2)(a){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item2_b(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.total_area >= 150.0 && ctx.matches(&["03"]) && !ctx.uses_fire_equipment {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of {:.2} m² (>= 150 m²) in a category (3) property \
                 without fire equipment requires fire extinguishers.",
                ctx.total_area
            ),
            format!("Order § 10(1)(2)(b){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item3(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.total_area >= 300.0 && ctx.matches(ITEM3_CODES) {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of {:.2} m² (>= 300 m²) and the use ({}) require \
                 fire extinguishers.",
                ctx.total_area, ctx.use_display
            ),
            format!("Order § 10(1)(3){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item4(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // no per-tenant storage data
    }
    let minor_hazmat = ctx.stores_minor_hazardous_materials;
    let combustibles = ctx.stores_designated_combustibles_over(1.0);
    if minor_hazmat || combustibles {
        let stored = match (minor_hazmat, combustibles) {
            (true, true) => "small-quantity hazardous materials and designated combustibles",
            (true, false) => "small-quantity hazardous materials",
            _ => "designated combustibles",
        };
        return Some(JudgementResult::required(
            format!("Storage or handling of {stored} requires fire extinguishers."),
            format!("Order § 10(1)(4){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item5(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // per-floor scan is not decomposable per tenant slice
    }
    let applicable: Vec<String> = ctx
        .floors
        .iter()
        .filter(|floor| {
            let area = floor.floor_area.unwrap_or(0.0);
            if area < 50.0 {
                return false;
            }
            floor.kind == shared_types::FloorKind::Basement
                || floor.is_windowless
                || (floor.kind == shared_types::FloorKind::Ground && floor.level >= 3)
        })
        .map(|floor| floor_label(floor))
        .collect();

    if applicable.is_empty() {
        return None;
    }
    Some(JudgementResult::required(
        format!(
            "Basement, windowless, or third-or-higher floors of 50 m² or more ({}) \
             require fire extinguishers.",
            applicable.join(", ")
        ),
        format!("Order § 10(1)(5){}", ctx.citation_suffix),
    ))
}

static RULES: &[Rule] = &[
    check_item1_a,
    check_item1_b,
    check_item2_a,
    check_item2_b,
    check_item3,
    check_item4,
    check_item5,
];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article10,
    rules: RULES,
    none_message: "Fire extinguishers are not required.",
};
