//! Building profile and judgement result types
//!
//! A `BuildingProfile` is assembled once from collected form input and is
//! read-only for the duration of an evaluation. The profile builder is
//! expected to have range-validated the input already; the engine only
//! null-coalesces missing numeric fields to zero.

/// Outcome level of a single judgement.
///
/// `Warning` means "the rule may apply but the given data is insufficient to
/// be certain" — a first-class, user-visible outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Warning,
    NotRequired,
}

impl Requirement {
    /// Required or Warning — anything that should surface to the user.
    pub fn is_positive(&self) -> bool {
        matches!(self, Requirement::Required | Requirement::Warning)
    }
}

/// Neutral placeholder used as `basis` whenever a result is not-required.
pub const NO_BASIS: &str = "-";

/// One determination for one article.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JudgementResult {
    pub required: Requirement,
    pub message: String,
    /// Statutory citation, e.g. "Order § 11(1)(2)". Possibly compound after
    /// aggregation. Always `"-"` when `required` is `NotRequired`.
    pub basis: String,
}

impl JudgementResult {
    pub fn required(message: impl Into<String>, basis: impl Into<String>) -> Self {
        Self {
            required: Requirement::Required,
            message: message.into(),
            basis: basis.into(),
        }
    }

    pub fn warning(message: impl Into<String>, basis: impl Into<String>) -> Self {
        Self {
            required: Requirement::Warning,
            message: message.into(),
            basis: basis.into(),
        }
    }

    /// Not-required result with the neutral placeholder basis.
    pub fn not_required(message: impl Into<String>) -> Self {
        Self {
            required: Requirement::NotRequired,
            message: message.into(),
            basis: NO_BASIS.to_string(),
        }
    }
}

/// Structural fire-resistance class of the building.
///
/// One canonical scheme; drives both the Article 11 area multiplier and the
/// Article 27 floor-area thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureType {
    FireResistant,
    QuasiFireResistant,
    Other,
}

/// Interior finish class (flame-retardant materials or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinishType {
    FlameRetardant,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorKind {
    Ground,
    Basement,
}

/// One tenant-use slice of one floor. Present only on floors of a
/// composite-use (16_i / 16_ro) building.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComponentUse {
    pub use_code: String,
    pub floor_area: Option<f64>,
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Floor {
    /// 1-based level within its kind (ground 1F.. / basement B1..).
    pub level: u32,
    pub kind: FloorKind,
    pub floor_area: Option<f64>,
    pub capacity: Option<u32>,
    pub is_windowless: bool,
    #[serde(default)]
    pub component_uses: Vec<ComponentUse>,
}

impl Floor {
    pub fn ground(level: u32, floor_area: Option<f64>) -> Self {
        Self {
            level,
            kind: FloorKind::Ground,
            floor_area,
            capacity: None,
            is_windowless: false,
            component_uses: Vec::new(),
        }
    }

    pub fn basement(level: u32, floor_area: Option<f64>) -> Self {
        Self {
            level,
            kind: FloorKind::Basement,
            floor_area,
            capacity: None,
            is_windowless: false,
            component_uses: Vec::new(),
        }
    }
}

/// Parking areas by location within the building. `None` area fields mean
/// "present but unmeasured", which the rules degrade to a Warning.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parking {
    /// Whether drive-in parking floors exist (mechanical parking is tracked
    /// separately below).
    pub exists: bool,
    pub rooftop_area: Option<f64>,
    pub basement_or_upper_area: Option<f64>,
    pub first_floor_area: Option<f64>,
    /// Floors where every parked vehicle can exit simultaneously are exempt.
    pub can_all_vehicles_exit_simultaneously: bool,
    pub mechanical_present: bool,
    pub mechanical_capacity: Option<u32>,
}

/// Part of the building in use as a road.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoadPart {
    pub rooftop_area: Option<f64>,
    pub other_area: Option<f64>,
}

/// Immutable description of the building under evaluation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BuildingProfile {
    /// Canonical annexed-table use code, e.g. "06_i_2". Absence
    /// short-circuits every article to a "selection required" result.
    pub use_code: Option<String>,

    pub total_floor_area: Option<f64>,
    pub site_area: Option<f64>,
    pub building_height: Option<f64>,
    pub ground_floors: u32,
    pub basement_floors: u32,
    /// Site-wide occupant capacity.
    pub total_capacity: Option<u32>,
    pub floors: Vec<Floor>,

    pub structure_type: Option<StructureType>,
    pub finish_type: Option<FinishType>,

    // Hazard indicators. These describe the building as a whole and are not
    // decomposable per tenant slice.
    pub uses_fire_equipment: bool,
    pub stores_minor_hazardous_materials: bool,
    /// Stored designated combustibles as a multiple of the statutory base
    /// quantity (0.0 when none are stored).
    pub designated_combustibles_ratio: f64,
    pub has_lodging: bool,
    pub is_specified_one_staircase: bool,
    /// Lath-and-mortar construction concealing combustible members
    /// (the Article 22 gate).
    pub has_special_combustible_structure: bool,
    pub contracted_current_capacity: Option<f64>,
    pub has_car_repair_area: bool,
    pub car_repair_basement_or_upper_area: Option<f64>,
    pub car_repair_first_floor_area: Option<f64>,
    pub has_helicopter_landing_zone: bool,
    pub has_high_fire_usage_area_over_200: bool,
    pub has_electrical_equipment_over_200: bool,
    pub has_telecom_room_over_500: bool,
    pub parking: Option<Parking>,
    pub road_part: Option<RoadPart>,
}

impl BuildingProfile {
    pub fn new(use_code: impl Into<String>) -> Self {
        Self {
            use_code: Some(use_code.into()),
            ..Default::default()
        }
    }

    pub fn use_code(&self) -> Option<&str> {
        self.use_code.as_deref()
    }

    pub fn total_floor_area(&self) -> f64 {
        self.total_floor_area.unwrap_or(0.0)
    }

    pub fn total_capacity(&self) -> u32 {
        self.total_capacity.unwrap_or(0)
    }

    /// Whether designated combustibles are stored or handled at `multiple`
    /// or more times the statutory base quantity.
    pub fn stores_designated_combustibles_over(&self, multiple: f64) -> bool {
        self.designated_combustibles_ratio >= multiple
    }
}

/// One article's determination within a whole-building report.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArticleJudgement {
    /// Article code, e.g. "21".
    pub article: String,
    /// Equipment the article mandates, e.g. "automatic fire alarm system".
    pub equipment: String,
    pub result: JudgementResult,
}

/// Determinations for every implemented article, in article order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JudgementReport {
    pub results: Vec<ArticleJudgement>,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}
