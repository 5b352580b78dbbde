//! Order § 23 — fire alarm equipment reporting to the fire department
//!
//! Three use-category tiers. For most categories the duty can be discharged
//! by a telephone with a standing connection to the fire department
//! (paragraph 3), which demotes the judgement to a warning; a short list of
//! high-risk care categories has no such alternative.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::RuleContext;
use crate::module::{ArticleModule, Rule};

const ITEM1_CODES: &[&str] = &[
    "06_i_1", "06_i_2", "06_i_3", "06_ro", "16_2", "16_3",
];

const ITEM2_CODES: &[&str] = &[
    "01", "02", "04", "05_i", "06_i_4", "06_ha", "06_ni", "12", "17",
];

const ITEM3_CODES: &[&str] = &[
    "03", "05_ro", "07", "08", "09", "10", "11", "13", "14", "15",
];

/// Categories whose occupants cannot be relied on to place a call, so the
/// paragraph 3 telephone alternative does not apply.
const NON_ALTERNATIVE_CODES: &[&str] = &[
    "06_i_1", "06_i_2", "06_i_3", "06_ro", "05_i", "06_i_4", "06_ha",
];

fn item_result(ctx: &RuleContext, item: u32, threshold: Option<f64>) -> JudgementResult {
    if ctx.matches(NON_ALTERNATIVE_CODES) {
        return JudgementResult::required(
            format!(
                "The use ({}) requires fire alarm equipment reporting to the fire \
                 department.",
                ctx.use_display
            ),
            format!("Order § 23(1)({item}){}", ctx.citation_suffix),
        );
    }

    let reason = match threshold {
        Some(t) => format!(
            "The use ({}) with a total floor area of {t:.0} m² or more",
            ctx.use_display
        ),
        None => format!("The use ({})", ctx.use_display),
    };
    JudgementResult::warning(
        format!(
            "{reason} requires fire alarm equipment reporting to the fire \
             department, but the duty may be discharged by a telephone capable of \
             reporting to the fire department at all times."
        ),
        format!("Order § 23(1)({item}){}; § 23(3)", ctx.citation_suffix),
    )
}

fn check_item1(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // whole-building use category judgement
    }
    if ctx.matches(ITEM1_CODES) {
        return Some(item_result(ctx, 1, None));
    }
    None
}

fn check_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM2_CODES) && ctx.total_area >= 500.0 {
        return Some(item_result(ctx, 2, Some(500.0)));
    }
    None
}

fn check_item3(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM3_CODES) && ctx.total_area >= 1000.0 {
        return Some(item_result(ctx, 3, Some(1000.0)));
    }
    None
}

static RULES: &[Rule] = &[check_item1, check_item2, check_item3];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article23,
    rules: RULES,
    none_message: "Fire alarm equipment reporting to the fire department is not required.",
};
