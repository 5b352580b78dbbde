//! Rule evaluation context
//!
//! A [`RuleContext`] is the read-only view a rule function sees: derived
//! areas and capacities, the shared structural attributes, the whole-building
//! hazard indicators, and the two control fields (`is_sub_evaluation`,
//! `citation_suffix`). It is built once per judgement pass — from the main
//! profile, or from the accumulated totals of one component use during
//! composite decomposition.

use shared_types::{BuildingProfile, FinishType, Floor, FloorKind, Parking, RoadPart, StructureType};

use crate::decompose::ComponentTotals;
use crate::usecode::{use_code_matches, UseDisplay};

/// Citation suffix applied to every sub-evaluation result.
pub const DEEMING_SUFFIX: &str = " (deemed under Order § 9)";

/// Area-threshold multiplier from the structure/finish combination.
///
/// 3x for a fire-resistant principal structure with flame-retardant finish,
/// 2x for fire-resistant with other finish or quasi-fire-resistant with
/// flame-retardant finish, 1x otherwise. The note is carried into messages
/// but never into the `basis` citation.
pub fn area_multiplier(
    structure: Option<StructureType>,
    finish: Option<FinishType>,
) -> (f64, &'static str) {
    match (structure, finish) {
        (Some(StructureType::FireResistant), Some(FinishType::FlameRetardant)) => (
            3.0,
            " (area thresholds tripled: fire-resistant principal structure with \
             flame-retardant interior finish)",
        ),
        (Some(StructureType::FireResistant), _)
        | (Some(StructureType::QuasiFireResistant), Some(FinishType::FlameRetardant)) => (
            2.0,
            " (area thresholds doubled by the structure/finish combination)",
        ),
        _ => (1.0, ""),
    }
}

/// Everything a rule function may read.
#[derive(Debug)]
pub struct RuleContext<'a> {
    pub use_code: &'a str,
    /// Display label for `use_code`, for message text only.
    pub use_display: String,

    pub total_area: f64,
    pub basement_area: f64,
    pub windowless_area: f64,
    /// Combined area of ground floors at level 4 or higher.
    pub upper_floors_area: f64,
    pub total_capacity: u32,
    pub basement_or_windowless_capacity: u32,
    pub ground_floors: u32,
    pub basement_floors: u32,
    pub site_area: f64,
    pub building_height: f64,

    pub structure_type: Option<StructureType>,
    pub finish_type: Option<FinishType>,
    pub area_multiplier: f64,
    pub multiplier_note: &'static str,

    /// Per-floor records. Empty for sub-evaluations — floor-scan rules must
    /// guard on `is_sub_evaluation`.
    pub floors: &'a [Floor],

    // Hazard indicators. Zeroed for sub-evaluations: they describe the
    // building as a whole and no per-tenant data exists (a known
    // information gap, not inferred).
    pub uses_fire_equipment: bool,
    pub stores_minor_hazardous_materials: bool,
    pub designated_combustibles_ratio: f64,
    pub has_lodging: bool,
    pub is_specified_one_staircase: bool,
    pub has_special_combustible_structure: bool,
    pub contracted_current_capacity: f64,
    pub has_car_repair_area: bool,
    pub car_repair_basement_or_upper_area: Option<f64>,
    pub car_repair_first_floor_area: Option<f64>,
    pub has_helicopter_landing_zone: bool,
    pub has_high_fire_usage_area_over_200: bool,
    pub has_electrical_equipment_over_200: bool,
    pub has_telecom_room_over_500: bool,
    pub parking: Option<&'a Parking>,
    pub road_part: Option<&'a RoadPart>,

    /// True while re-judging a synthesized component-use view. Rules that
    /// are inherently whole-building return `None` when set.
    pub is_sub_evaluation: bool,
    /// Appended to every citation this pass produces ("" for the main pass).
    pub citation_suffix: &'static str,
}

impl<'a> RuleContext<'a> {
    /// Context for the main building.
    pub fn main(
        profile: &'a BuildingProfile,
        use_code: &'a str,
        display: &dyn UseDisplay,
    ) -> Self {
        let (multiplier, note) = area_multiplier(profile.structure_type, profile.finish_type);

        let mut basement_area = 0.0;
        let mut windowless_area = 0.0;
        let mut upper_floors_area = 0.0;
        let mut basement_or_windowless_capacity = 0;
        for floor in &profile.floors {
            let floor_area = floor.floor_area.unwrap_or(0.0);
            match floor.kind {
                FloorKind::Basement => basement_area += floor_area,
                FloorKind::Ground if floor.level >= 4 => upper_floors_area += floor_area,
                FloorKind::Ground => {}
            }
            if floor.is_windowless {
                windowless_area += floor_area;
            }
            if floor.kind == FloorKind::Basement || floor.is_windowless {
                basement_or_windowless_capacity += floor.capacity.unwrap_or(0);
            }
        }

        Self {
            use_code,
            use_display: display.display_name(use_code),
            total_area: profile.total_floor_area(),
            basement_area,
            windowless_area,
            upper_floors_area,
            total_capacity: profile.total_capacity(),
            basement_or_windowless_capacity,
            ground_floors: profile.ground_floors,
            basement_floors: profile.basement_floors,
            site_area: profile.site_area.unwrap_or(0.0),
            building_height: profile.building_height.unwrap_or(0.0),
            structure_type: profile.structure_type,
            finish_type: profile.finish_type,
            area_multiplier: multiplier,
            multiplier_note: note,
            floors: &profile.floors,
            uses_fire_equipment: profile.uses_fire_equipment,
            stores_minor_hazardous_materials: profile.stores_minor_hazardous_materials,
            designated_combustibles_ratio: profile.designated_combustibles_ratio,
            has_lodging: profile.has_lodging,
            is_specified_one_staircase: profile.is_specified_one_staircase,
            has_special_combustible_structure: profile.has_special_combustible_structure,
            contracted_current_capacity: profile.contracted_current_capacity.unwrap_or(0.0),
            has_car_repair_area: profile.has_car_repair_area,
            car_repair_basement_or_upper_area: profile.car_repair_basement_or_upper_area,
            car_repair_first_floor_area: profile.car_repair_first_floor_area,
            has_helicopter_landing_zone: profile.has_helicopter_landing_zone,
            has_high_fire_usage_area_over_200: profile.has_high_fire_usage_area_over_200,
            has_electrical_equipment_over_200: profile.has_electrical_equipment_over_200,
            has_telecom_room_over_500: profile.has_telecom_room_over_500,
            parking: profile.parking.as_ref(),
            road_part: profile.road_part.as_ref(),
            is_sub_evaluation: false,
            citation_suffix: "",
        }
    }

    /// Context for one component use of a composite building.
    ///
    /// Structure, finish, and the lath-and-mortar gate are physically shared
    /// with the whole building and carried over; everything tenant-specific
    /// that the profile cannot attribute per slice is zeroed.
    pub fn sub(
        profile: &'a BuildingProfile,
        use_code: &'a str,
        totals: &ComponentTotals,
        display: &dyn UseDisplay,
    ) -> Self {
        let (multiplier, note) = area_multiplier(profile.structure_type, profile.finish_type);

        Self {
            use_code,
            use_display: display.display_name(use_code),
            total_area: totals.total_area,
            basement_area: totals.basement_area,
            windowless_area: totals.windowless_area,
            upper_floors_area: totals.upper_floors_area,
            total_capacity: totals.total_capacity,
            basement_or_windowless_capacity: totals.basement_or_windowless_capacity,
            ground_floors: profile.ground_floors,
            basement_floors: profile.basement_floors,
            site_area: 0.0,
            building_height: 0.0,
            structure_type: profile.structure_type,
            finish_type: profile.finish_type,
            area_multiplier: multiplier,
            multiplier_note: note,
            floors: &[],
            uses_fire_equipment: false,
            stores_minor_hazardous_materials: false,
            designated_combustibles_ratio: 0.0,
            has_lodging: false,
            is_specified_one_staircase: false,
            has_special_combustible_structure: profile.has_special_combustible_structure,
            contracted_current_capacity: 0.0,
            has_car_repair_area: false,
            car_repair_basement_or_upper_area: None,
            car_repair_first_floor_area: None,
            has_helicopter_landing_zone: false,
            has_high_fire_usage_area_over_200: false,
            has_electrical_equipment_over_200: false,
            has_telecom_room_over_500: false,
            parking: None,
            road_part: None,
            is_sub_evaluation: true,
            citation_suffix: DEEMING_SUFFIX,
        }
    }

    /// Prefix-match this context's use code.
    pub fn matches(&self, prefixes: &[&str]) -> bool {
        use_code_matches(Some(self.use_code), prefixes)
    }

    pub fn stores_designated_combustibles_over(&self, multiple: f64) -> bool {
        self.designated_combustibles_ratio >= multiple
    }
}

/// Human-readable floor label, e.g. "3F" or "B1F".
pub fn floor_label(floor: &Floor) -> String {
    match floor.kind {
        FloorKind::Ground => format!("{}F", floor.level),
        FloorKind::Basement => format!("B{}F", floor.level),
    }
}
