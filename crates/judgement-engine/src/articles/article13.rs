//! Order § 13 — water-spray and equivalent suppression systems
//!
//! Mostly whole-building hazard attributes (hangars, heliports, road and
//! parking parts, electrical rooms, combustible stores). Area fields that
//! are present-but-unmeasured degrade to a Warning rather than a silent
//! pass.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::RuleContext;
use crate::module::{ArticleModule, Rule};

fn check_hangar(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["13_ro"]) {
        return Some(JudgementResult::required(
            "An aircraft or rotorcraft hangar requires a foam or dry-chemical \
             suppression system.",
            format!("Order § 13(1)(1){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_heliport(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.has_helicopter_landing_zone {
        return Some(JudgementResult::required(
            "A rooftop helicopter landing zone requires a foam or dry-chemical \
             suppression system.",
            format!("Order § 13(1)(2){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_road_part(ctx: &RuleContext) -> Option<JudgementResult> {
    let road = ctx.road_part?;
    let basis = format!("Order § 13(1)(3){}", ctx.citation_suffix);

    if road.rooftop_area.is_none() && road.other_area.is_none() {
        return Some(JudgementResult::warning(
            "The building has a road-use part. If its rooftop portion is 600 m² or \
             more, or any other portion is 400 m² or more, a water-spray, foam, \
             inert-gas, or dry-chemical suppression system is required. Enter the \
             areas to confirm.",
            basis,
        ));
    }

    let rooftop = road.rooftop_area.unwrap_or(0.0);
    let other = road.other_area.unwrap_or(0.0);
    if rooftop >= 600.0 || other >= 400.0 {
        return Some(JudgementResult::required(
            "The road-use part reaches 600 m² (rooftop) or 400 m² (other), so a \
             water-spray, foam, inert-gas, or dry-chemical suppression system is \
             required.",
            basis,
        ));
    }
    // Measured and below threshold: authoritatively no obligation from this
    // item.
    Some(JudgementResult::not_required(
        "The road-use part is below the area thresholds, so no suppression system \
         is required for it.",
    ))
}

fn check_car_repair(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.has_car_repair_area {
        return None;
    }
    let basis = format!("Order § 13(1)(4){}", ctx.citation_suffix);

    if ctx.car_repair_basement_or_upper_area.is_none() && ctx.car_repair_first_floor_area.is_none()
    {
        return Some(JudgementResult::warning(
            "The building has a car repair or maintenance area. If it is 200 m² or \
             more in a basement or on the 2nd floor or higher, or 500 m² or more on \
             the 1st floor, a foam, inert-gas, halide, or dry-chemical suppression \
             system is required. Enter the areas to confirm.",
            basis,
        ));
    }

    let basement_or_upper = ctx.car_repair_basement_or_upper_area.unwrap_or(0.0);
    let first_floor = ctx.car_repair_first_floor_area.unwrap_or(0.0);
    if basement_or_upper >= 200.0 || first_floor >= 500.0 {
        return Some(JudgementResult::required(
            "The car repair or maintenance area reaches 200 m² (basement or 2nd \
             floor and above) or 500 m² (1st floor), so a foam, inert-gas, halide, \
             or dry-chemical suppression system is required.",
            basis,
        ));
    }
    Some(JudgementResult::not_required(
        "The car repair or maintenance area is below the area thresholds, so no \
         suppression system is required for it.",
    ))
}

fn check_parking_floors(ctx: &RuleContext) -> Option<JudgementResult> {
    let parking = ctx.parking?;
    if !parking.exists {
        return None;
    }
    let basis = format!("Order § 13(1)(5)(a){}", ctx.citation_suffix);

    // Floors where every vehicle can exit simultaneously are exempt.
    if !parking.can_all_vehicles_exit_simultaneously {
        let rooftop = parking.rooftop_area.unwrap_or(0.0);
        let basement_or_upper = parking.basement_or_upper_area.unwrap_or(0.0);
        let first_floor = parking.first_floor_area.unwrap_or(0.0);
        if rooftop >= 300.0 || basement_or_upper >= 200.0 || first_floor >= 500.0 {
            return Some(JudgementResult::required(
                "A parking part reaches 300 m² (rooftop), 200 m² (basement or 2nd \
                 floor and above), or 500 m² (1st floor), so a water-spray, foam, \
                 inert-gas, halide, or dry-chemical suppression system is required.",
                basis,
            ));
        }
    }
    Some(JudgementResult::warning(
        "The building has parking floors. Depending on their level, structure, and \
         area, a water-spray, foam, inert-gas, halide, or dry-chemical suppression \
         system may be required. Review the parking details.",
        basis,
    ))
}

fn check_mechanical_parking(ctx: &RuleContext) -> Option<JudgementResult> {
    let parking = ctx.parking?;
    if !parking.mechanical_present {
        return None;
    }
    let basis = format!("Order § 13(1)(5)(b){}", ctx.citation_suffix);

    if parking.mechanical_capacity.unwrap_or(0) >= 10 {
        return Some(JudgementResult::required(
            "A mechanical parking installation holding 10 or more vehicles requires \
             a water-spray, foam, inert-gas, halide, or dry-chemical suppression \
             system.",
            basis,
        ));
    }
    Some(JudgementResult::warning(
        "The building has a mechanical parking installation. If it holds 10 or more \
         vehicles, a water-spray, foam, inert-gas, halide, or dry-chemical \
         suppression system is required. Confirm the capacity.",
        basis,
    ))
}

fn check_electrical_equipment(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.has_electrical_equipment_over_200 {
        return Some(JudgementResult::required(
            "A room of 200 m² or more housing generators, transformers, or similar \
             electrical equipment requires an inert-gas, halide, or dry-chemical \
             suppression system.",
            format!("Order § 13(1)(6){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_high_fire_usage(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.has_high_fire_usage_area_over_200 {
        return Some(JudgementResult::required(
            "A forge, boiler room, drying room, or similar high fire-usage area of \
             200 m² or more requires an inert-gas, halide, or dry-chemical \
             suppression system.",
            format!("Order § 13(1)(7){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_telecom_room(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.has_telecom_room_over_500 {
        return Some(JudgementResult::warning(
            "A telecommunications equipment room of 500 m² or more requires an \
             inert-gas, halide, or dry-chemical suppression system. Confirm the \
             room's configuration.",
            format!("Order § 13(1)(8){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_designated_combustibles(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // no per-tenant storage data
    }
    if ctx.stores_designated_combustibles_over(1000.0) {
        return Some(JudgementResult::warning(
            "Designated combustibles are stored or handled at 1000 or more times the \
             statutory base quantity; a suppression system matched to the combustible \
             type is required. A sprinkler installation may exempt this.",
            format!("Order § 13(1)(9); § 13(2){}", ctx.citation_suffix),
        ));
    }
    None
}

static RULES: &[Rule] = &[
    check_hangar,
    check_heliport,
    check_road_part,
    check_car_repair,
    check_parking_floors,
    check_mechanical_parking,
    check_electrical_equipment,
    check_high_fire_usage,
    check_telecom_room,
    check_designated_combustibles,
];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article13,
    rules: RULES,
    none_message: "A water-spray or equivalent suppression system is not required.",
};
