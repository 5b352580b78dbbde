//! Order § 27 — firefighting water supply
//!
//! Two items: a high-rise rule on building height and total floor area, and
//! a large-site rule comparing the first- and second-floor area against a
//! structure-dependent base area. Everything here is a property of the
//! whole building, so no rule participates in composite decomposition.

use shared_types::{FloorKind, JudgementResult, StructureType};

use crate::article::ArticleId;
use crate::context::RuleContext;
use crate::module::{ArticleModule, Rule};

fn check_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None;
    }
    if ctx.building_height > 31.0 && ctx.total_area >= 25000.0 {
        return Some(JudgementResult::required(
            "The building height exceeds 31 m and the total floor area is 25,000 m² \
             or more, so a firefighting water supply is required.",
            "Order § 27(2)",
        ));
    }
    None
}

fn check_item1(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None;
    }
    // Composite-use buildings are outside item 1.
    if ctx.matches(&["16"]) {
        return Some(JudgementResult::not_required(
            "This use category is outside the scope of Order § 27(1).",
        ));
    }
    if ctx.site_area < 20000.0 {
        return Some(JudgementResult::not_required(
            "The site area is under 20,000 m², so Order § 27(1) does not apply.",
        ));
    }

    let structure = match ctx.structure_type {
        Some(structure) => structure,
        None => {
            return Some(JudgementResult::warning(
                "Select the building's fire-resistance classification to complete \
                 the firefighting water supply judgement.",
                "Order § 27(1)",
            ));
        }
    };

    // Single-storey buildings count the 1st floor; otherwise 1st plus 2nd.
    let floor_area_at = |level: u32| -> f64 {
        ctx.floors
            .iter()
            .find(|floor| floor.kind == FloorKind::Ground && floor.level == level)
            .and_then(|floor| floor.floor_area)
            .unwrap_or(0.0)
    };
    let target_area = if ctx.ground_floors == 1 {
        floor_area_at(1)
    } else {
        floor_area_at(1) + floor_area_at(2)
    };

    if target_area == 0.0 {
        return Some(JudgementResult::warning(
            "Enter the 1st (and 2nd) floor areas to complete the firefighting \
             water supply judgement.",
            "Order § 27(1)",
        ));
    }

    let (threshold, label) = match structure {
        StructureType::FireResistant => (15000.0, "fire-resistant"),
        StructureType::QuasiFireResistant => (10000.0, "quasi-fire-resistant"),
        StructureType::Other => (5000.0, "other"),
    };

    if target_area >= threshold {
        return Some(JudgementResult::required(
            format!(
                "The site area is 20,000 m² or more and the 1st/2nd floor area of \
                 {target_area:.2} m² reaches the {threshold:.0} m² base area for \
                 {label} construction, so a firefighting water supply is required.",
            ),
            "Order § 27(1)",
        ));
    }
    None
}

static RULES: &[Rule] = &[check_item2, check_item1];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article27,
    rules: RULES,
    none_message: "A firefighting water supply is not required.",
};
