//! Order § 21 — automatic fire alarm systems
//!
//! The widest rule chain of the set: unconditional categories, four area
//! tiers, manual-review cases for underground malls and composite
//! buildings, per-floor scans, and road/parking/telecom attributes.

use shared_types::{FloorKind, JudgementResult};

use crate::article::ArticleId;
use crate::context::{floor_label, RuleContext};
use crate::module::{ArticleModule, Rule};

const ITEM1_A_CODES: &[&str] = &[
    "02_ni", "05_i", "06_i_1", "06_i_2", "06_i_3", "06_ro", "13_ro", "17",
];

const ITEM3_A_CODES: &[&str] = &[
    "01", "02_i", "02_ro", "02_ha", "03", "04", "06_i_4", "06_ni", "16_i", "16_2",
];

const ITEM4_CODES: &[&str] = &[
    "05_ro", "07", "08", "09_ro", "10", "12", "13_i", "14",
];

const ITEM7_CODES: &[&str] = &["01", "02", "03", "04", "05_i", "06", "09_i", "16_i"];

const ITEM10_CODES: &[&str] = &["02_i", "02_ro", "02_ha", "03"];

fn check_item1_a(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM1_A_CODES) {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) requires an automatic fire alarm system regardless of \
                 floor area.",
                ctx.use_display
            ),
            format!("Order § 21(1)(1)(a){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item1_b(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["06_ha"]) && ctx.has_lodging {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) provides lodging, so an automatic fire alarm system is \
                 required.",
                ctx.use_display
            ),
            format!("Order § 21(1)(1)(b){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["09_i"]) && ctx.total_area >= 200.0 {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) with a total floor area of 200 m² or more requires an \
                 automatic fire alarm system.",
                ctx.use_display
            ),
            format!("Order § 21(1)(2){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item3_a(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.total_area >= 300.0 && ctx.matches(ITEM3_A_CODES) {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of 300 m² or more and the use ({}) require an \
                 automatic fire alarm system.",
                ctx.use_display
            ),
            format!("Order § 21(1)(3)(a){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item3_b(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.total_area >= 300.0 && ctx.matches(&["06_ha"]) && !ctx.has_lodging {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of 300 m² or more and the use ({}) without lodging \
                 require an automatic fire alarm system.",
                ctx.use_display
            ),
            format!("Order § 21(1)(3)(b){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item4(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM4_CODES) && ctx.total_area >= 500.0 {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of 500 m² or more and the use ({}) require an \
                 automatic fire alarm system.",
                ctx.use_display
            ),
            format!("Order § 21(1)(4){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item5(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["16_3"]) && ctx.total_area >= 500.0 {
        return Some(JudgementResult::warning(
            "A category (16-3) property of 500 m² or more: if the parts used for \
             categories (1) through (4), (5)(a), (6), or (9)(a) total 300 m² or \
             more, an automatic fire alarm system is required.",
            format!("Order § 21(1)(5){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item6(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["11", "15"]) && ctx.total_area >= 1000.0 {
        return Some(JudgementResult::required(
            format!(
                "Total floor area of 1000 m² or more and the use ({}) require an \
                 automatic fire alarm system.",
                ctx.use_display
            ),
            format!("Order § 21(1)(6){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item7(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(ITEM7_CODES) && ctx.is_specified_one_staircase {
        return Some(JudgementResult::required(
            "A specified single-staircase property requires an automatic fire alarm \
             system.",
            format!("Order § 21(1)(7){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item8(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // no per-tenant storage data
    }
    if ctx.stores_designated_combustibles_over(500.0) {
        return Some(JudgementResult::required(
            "Designated combustibles are stored or handled at 500 or more times the \
             statutory base quantity, so an automatic fire alarm system is required.",
            format!("Order § 21(1)(8){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item9(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["16_2"]) {
        return Some(JudgementResult::warning(
            "In an underground mall, the parts used for categories (2)(d), (5)(a), \
             (6)(a)(1)-(3), (6)(b), and (6)(c) with residents or lodgers require an \
             automatic fire alarm system.",
            format!("Order § 21(1)(9){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item10(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // per-floor scan
    }
    let applicable = ctx.floors.iter().find(|floor| {
        floor.floor_area.unwrap_or(0.0) >= 100.0
            && (floor.kind == FloorKind::Basement || floor.is_windowless)
    })?;

    if ctx.matches(ITEM10_CODES) {
        let reason = if applicable.is_windowless {
            "windowless"
        } else {
            "a basement"
        };
        return Some(JudgementResult::required(
            format!(
                "Floor {} ({reason}) has a floor area of 100 m² or more, so an \
                 automatic fire alarm system is required.",
                floor_label(applicable)
            ),
            format!("Order § 21(1)(10){}", ctx.citation_suffix),
        ));
    }
    if ctx.matches(&["16_i"]) {
        return Some(JudgementResult::warning(
            "If the basement or windowless floor areas used for categories (2) or \
             (3) total 100 m² or more, an automatic fire alarm system is required.",
            format!("Order § 21(1)(10){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item11(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // per-floor scan
    }
    let applicable = ctx.floors.iter().find(|floor| {
        floor.floor_area.unwrap_or(0.0) >= 300.0
            && (floor.kind == FloorKind::Basement
                || floor.is_windowless
                || (floor.kind == FloorKind::Ground && floor.level >= 3))
    })?;

    let reason = if applicable.is_windowless {
        "windowless"
    } else {
        "a basement or the 3rd floor or higher"
    };
    Some(JudgementResult::required(
        format!(
            "Floor {} ({reason}) has a floor area of 300 m² or more, so an automatic \
             fire alarm system is required.",
            floor_label(applicable)
        ),
        format!("Order § 21(1)(11){}", ctx.citation_suffix),
    ))
}

fn check_item12(ctx: &RuleContext) -> Option<JudgementResult> {
    let road = ctx.road_part?;
    if road.rooftop_area.unwrap_or(0.0) >= 600.0 || road.other_area.unwrap_or(0.0) >= 400.0 {
        return Some(JudgementResult::required(
            "The road-use part reaches 600 m² (rooftop) or 400 m² (other), so an \
             automatic fire alarm system is required.",
            format!("Order § 21(1)(12){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item13(ctx: &RuleContext) -> Option<JudgementResult> {
    let parking = ctx.parking?;
    if !parking.exists {
        return None;
    }
    // Basement or 2nd-floor-and-above parking only; floors from which every
    // vehicle can exit simultaneously are exempt.
    if parking.basement_or_upper_area.unwrap_or(0.0) >= 200.0
        && !parking.can_all_vehicles_exit_simultaneously
    {
        return Some(JudgementResult::required(
            "A basement or upper-floor parking part of 200 m² or more from which \
             vehicles cannot all exit simultaneously requires an automatic fire \
             alarm system.",
            format!("Order § 21(1)(13){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item14(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // whole-building floor configuration
    }
    if ctx
        .floors
        .iter()
        .any(|floor| floor.kind == FloorKind::Ground && floor.level >= 11)
    {
        return Some(JudgementResult::required(
            "The building has floors at the 11th level or higher, so an automatic \
             fire alarm system is required.",
            format!("Order § 21(1)(14){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_item15(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.has_telecom_room_over_500 {
        return Some(JudgementResult::required(
            "A telecommunications equipment room of 500 m² or more requires an \
             automatic fire alarm system.",
            format!("Order § 21(1)(15){}", ctx.citation_suffix),
        ));
    }
    None
}

static RULES: &[Rule] = &[
    check_item1_a,
    check_item1_b,
    check_item2,
    check_item3_a,
    check_item3_b,
    check_item4,
    check_item5,
    check_item6,
    check_item7,
    check_item8,
    check_item9,
    check_item10,
    check_item11,
    check_item12,
    check_item13,
    check_item14,
    check_item15,
];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article21,
    rules: RULES,
    none_message: "An automatic fire alarm system is not required.",
};
