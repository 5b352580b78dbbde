//! Order § 11 — indoor fire hydrant systems
//!
//! Area-tiered by use category, with thresholds scaled by the
//! structure/finish area multiplier. This article is fully decomposable:
//! the per-kind floor-area rule (item 6) runs against accumulated
//! component-use areas during sub-evaluation.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::RuleContext;
use crate::module::{ArticleModule, Rule};

/// Item 2 categories (700 m² base threshold).
const ITEM2_CODES: &[&str] = &[
    "02", "03", "04", "05", "06", "07", "08", "09", "10", "12", "14",
];

/// Item 2 categories whose multiplied threshold is capped at 1000 m².
const ITEM2_CAPPED_CODES: &[&str] = &["06_i_1", "06_i_2", "06_ro"];

fn check_item1(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.matches(&["01"]) {
        return None;
    }
    let required_area = 500.0 * ctx.area_multiplier;
    if ctx.total_area >= required_area {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) falls under category (1) and the total floor area is \
                 {:.2} m² (>= {:.0} m²), so an indoor fire hydrant system is required.{}",
                ctx.use_display, ctx.total_area, required_area, ctx.multiplier_note
            ),
            format!("Order § 11(1)(1){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.matches(ITEM2_CODES) {
        return None;
    }
    let multiplied = 700.0 * ctx.area_multiplier;
    let (required_area, basis) = if ctx.matches(ITEM2_CAPPED_CODES) {
        // Lesser of the multiplied threshold and 1000 m² for the bedded
        // care categories.
        (
            multiplied.min(1000.0),
            format!(
                "Order § 11(1)(2){} (threshold capped at 1000 m² per § 12(1)(1))",
                ctx.citation_suffix
            ),
        )
    } else {
        (multiplied, format!("Order § 11(1)(2){}", ctx.citation_suffix))
    };

    if ctx.total_area >= required_area {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) falls under categories (2) through (10), (12), or (14) \
                 and the total floor area is {:.2} m² (>= {:.0} m²), so an indoor fire \
                 hydrant system is required.{}",
                ctx.use_display, ctx.total_area, required_area, ctx.multiplier_note
            ),
            basis,
        ));
    }
    None
}

fn check_item3(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.matches(&["11", "15"]) {
        return None;
    }
    let required_area = 1000.0 * ctx.area_multiplier;
    if ctx.total_area >= required_area {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) falls under category (11) or (15) and the total floor \
                 area is {:.2} m² (>= {:.0} m²), so an indoor fire hydrant system is \
                 required.{}",
                ctx.use_display, ctx.total_area, required_area, ctx.multiplier_note
            ),
            format!("Order § 11(1)(3){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item4(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.matches(&["16_2"]) {
        return None;
    }
    let required_area = 150.0 * ctx.area_multiplier;
    if ctx.total_area >= required_area {
        return Some(JudgementResult::required(
            format!(
                "An underground mall with a total floor area of {:.2} m² \
                 (>= {:.0} m²) requires an indoor fire hydrant system.{}",
                ctx.total_area, required_area, ctx.multiplier_note
            ),
            format!("Order § 11(1)(4){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item5(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // no per-tenant storage data
    }
    if ctx.stores_designated_combustibles_over(750.0) {
        return Some(JudgementResult::required(
            "Designated combustibles are stored or handled at 750 or more times the \
             statutory base quantity, so an indoor fire hydrant system is required."
                .to_string(),
            format!("Order § 11(1)(5){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item6(ctx: &RuleContext) -> Option<JudgementResult> {
    let base = if ctx.matches(&["01"]) {
        100.0
    } else if ctx.matches(ITEM2_CODES) {
        150.0
    } else if ctx.matches(&["11", "15"]) {
        200.0
    } else {
        return None;
    };
    let required_area = base * ctx.area_multiplier;

    let buckets = [
        (ctx.basement_area, "basement floors"),
        (ctx.windowless_area, "windowless floors"),
        (ctx.upper_floors_area, "floors at the 4th level or higher"),
    ];
    for (area, label) in buckets {
        if area > 0.0 && area >= required_area {
            return Some(JudgementResult::required(
                format!(
                    "The combined floor area of {label} is {area:.2} m² \
                     (>= {required_area:.0} m²), so an indoor fire hydrant system is \
                     required.{}",
                    ctx.multiplier_note
                ),
                format!("Order § 11(1)(6){}", ctx.citation_suffix),
            ));
        }
    }
    None
}

static RULES: &[Rule] = &[
    check_item1,
    check_item2,
    check_item3,
    check_item4,
    check_item5,
    check_item6,
];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article11,
    rules: RULES,
    none_message: "An indoor fire hydrant system is not required.",
};
