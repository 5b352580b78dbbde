//! Order § 24 — emergency alarm appliances and equipment
//!
//! Evaluated strictest paragraph first: paragraph 3 (bell and broadcast, or
//! automatic siren and broadcast), then paragraph 2 (bell, siren, or
//! broadcast), then paragraph 1 (alarm appliances). Paragraphs 1 and 2 carry
//! exemption notes for buildings that already have an automatic fire alarm
//! system.

use shared_types::JudgementResult;

use crate::article::ArticleId;
use crate::context::RuleContext;
use crate::module::{ArticleModule, Rule};

const PARA3_ITEM4_GROUP_A: &[&str] = &[
    "01", "02", "03", "04", "05_i", "06", "09_i",
];

const PARA3_ITEM4_GROUP_B: &[&str] = &["05_ro", "07", "08"];

const PARA2_ITEM1_CODES: &[&str] = &["05_i", "06_i", "09_i"];

const PARA2_ITEM2_CODES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13",
    "14", "15", "16", "17",
];

const PARA1_CODES: &[&str] = &["04", "06_ro", "06_ha", "06_ni", "09_ro", "12"];

const EXEMPTION_FIRE_ALARM_OR_EMERGENCY: &str = "Exempt if an automatic fire alarm \
     system or emergency alarm equipment is installed.";
const EXEMPTION_FIRE_ALARM: &str =
    "Exempt if an automatic fire alarm system is installed.";

fn check_para3_item1(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["16_2", "16_3"]) {
        return Some(JudgementResult::required(
            "An underground mall or connected underground building requires an \
             emergency bell and broadcast equipment, or an automatic siren and \
             broadcast equipment.",
            format!("Order § 24(3)(1){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_para3_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.is_sub_evaluation {
        return None; // whole-building floor configuration
    }
    if ctx.ground_floors >= 11 || ctx.basement_floors >= 3 {
        return Some(JudgementResult::required(
            "Eleven or more above-ground storeys, or three or more basement \
             storeys, require an emergency bell and broadcast equipment, or an \
             automatic siren and broadcast equipment.",
            format!("Order § 24(3)(2){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_para3_item3(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(&["16_i"]) && ctx.total_capacity >= 500 {
        return Some(JudgementResult::required(
            "A category (16)(a) building with an occupant capacity of 500 or more \
             requires an emergency bell and broadcast equipment, or an automatic \
             siren and broadcast equipment.",
            format!("Order § 24(3)(3){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_para3_item4(ctx: &RuleContext) -> Option<JudgementResult> {
    let threshold = if ctx.matches(PARA3_ITEM4_GROUP_A) {
        300
    } else if ctx.matches(PARA3_ITEM4_GROUP_B) {
        800
    } else {
        return None;
    };
    if ctx.total_capacity >= threshold {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) with an occupant capacity of {threshold} or more \
                 requires an emergency bell and broadcast equipment, or an automatic \
                 siren and broadcast equipment.",
                ctx.use_display
            ),
            format!("Order § 24(3)(4){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_para2_item1(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(PARA2_ITEM1_CODES) && ctx.total_capacity >= 20 {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) with an occupant capacity of 20 or more requires an \
                 emergency bell, automatic siren, or broadcast equipment. \
                 {EXEMPTION_FIRE_ALARM}",
                ctx.use_display
            ),
            format!("Order § 24(2)(1){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_para2_item2(ctx: &RuleContext) -> Option<JudgementResult> {
    if !ctx.matches(PARA2_ITEM2_CODES) || ctx.matches(PARA2_ITEM1_CODES) {
        return None;
    }
    if ctx.total_capacity >= 50 || ctx.basement_or_windowless_capacity >= 20 {
        return Some(JudgementResult::required(
            format!(
                "An occupant capacity of 50 or more, or a basement or windowless \
                 floor capacity of 20 or more, requires an emergency bell, automatic \
                 siren, or broadcast equipment. {EXEMPTION_FIRE_ALARM}"
            ),
            format!("Order § 24(2)(2){}", ctx.citation_suffix),
        ));
    }
    None
}

fn check_para1(ctx: &RuleContext) -> Option<JudgementResult> {
    if ctx.matches(PARA1_CODES) && ctx.total_capacity >= 20 && ctx.total_capacity < 50 {
        return Some(JudgementResult::required(
            format!(
                "The use ({}) with an occupant capacity of 20 or more but under 50 \
                 requires emergency alarm appliances. \
                 {EXEMPTION_FIRE_ALARM_OR_EMERGENCY}",
                ctx.use_display
            ),
            format!("Order § 24(1){}", ctx.citation_suffix),
        ));
    }
    None
}

static RULES: &[Rule] = &[
    check_para3_item1,
    check_para3_item2,
    check_para3_item3,
    check_para3_item4,
    check_para2_item1,
    check_para2_item2,
    check_para1,
];

pub static MODULE: ArticleModule = ArticleModule {
    article: ArticleId::Article24,
    rules: RULES,
    none_message: "Emergency alarm appliances and equipment are not required.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecode::AnnexedUseTable;
    use pretty_assertions::assert_eq;
    use shared_types::{BuildingProfile, Floor, Requirement};

    fn judge(profile: &BuildingProfile) -> Option<JudgementResult> {
        let code = profile.use_code().unwrap();
        let ctx = RuleContext::main(profile, code, &AnnexedUseTable);
        MODULE.judge(&ctx)
    }

    #[test]
    fn underground_mall_is_para3_item1() {
        let profile = BuildingProfile::new("16_2");
        assert_eq!(judge(&profile).unwrap().basis, "Order § 24(3)(1)");
    }

    #[test]
    fn high_rise_and_deep_basement_are_para3_item2() {
        let mut profile = BuildingProfile::new("15");
        profile.ground_floors = 11;
        assert_eq!(judge(&profile).unwrap().basis, "Order § 24(3)(2)");

        let mut deep = BuildingProfile::new("15");
        deep.ground_floors = 2;
        deep.basement_floors = 3;
        assert_eq!(judge(&deep).unwrap().basis, "Order § 24(3)(2)");
    }

    #[test]
    fn composite_capacity_500_is_para3_item3() {
        let mut profile = BuildingProfile::new("16_i");
        profile.total_capacity = Some(500);
        assert_eq!(judge(&profile).unwrap().basis, "Order § 24(3)(3)");

        profile.total_capacity = Some(499);
        assert_eq!(judge(&profile), None);
    }

    #[test]
    fn para3_item4_thresholds_differ_by_group() {
        let mut theater = BuildingProfile::new("01_i");
        theater.total_capacity = Some(300);
        assert_eq!(judge(&theater).unwrap().basis, "Order § 24(3)(4)");

        let mut school = BuildingProfile::new("07");
        school.total_capacity = Some(300);
        // Schools need 800, so the chain falls through to paragraph 2.
        assert_eq!(judge(&school).unwrap().basis, "Order § 24(2)(2)");
        school.total_capacity = Some(800);
        assert_eq!(judge(&school).unwrap().basis, "Order § 24(3)(4)");
    }

    #[test]
    fn hotels_at_capacity_20_are_para2_item1() {
        let mut profile = BuildingProfile::new("05_i");
        profile.total_capacity = Some(20);
        let result = judge(&profile).unwrap();
        assert_eq!(result.basis, "Order § 24(2)(1)");
        assert!(result.message.contains("Exempt"));

        profile.total_capacity = Some(19);
        assert_eq!(judge(&profile), None);
    }

    #[test]
    fn general_uses_need_capacity_50_or_basement_20() {
        let mut profile = BuildingProfile::new("15");
        profile.total_capacity = Some(50);
        assert_eq!(judge(&profile).unwrap().basis, "Order § 24(2)(2)");

        let mut basement = BuildingProfile::new("15");
        basement.total_capacity = Some(30);
        let mut floor = Floor::basement(1, Some(100.0));
        floor.capacity = Some(20);
        basement.floors = vec![floor];
        assert_eq!(judge(&basement).unwrap().basis, "Order § 24(2)(2)");
    }

    #[test]
    fn para1_applies_between_20_and_49() {
        let mut profile = BuildingProfile::new("09_ro");
        profile.total_capacity = Some(20);
        let result = judge(&profile).unwrap();
        assert_eq!(result.required, Requirement::Required);
        assert_eq!(result.basis, "Order § 24(1)");

        // At 50 the paragraph 2 rule takes over.
        profile.total_capacity = Some(50);
        assert_eq!(judge(&profile).unwrap().basis, "Order § 24(2)(2)");
    }
}
