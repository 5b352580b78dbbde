pub mod types;

pub use types::{
    ArticleJudgement, BuildingProfile, ComponentUse, FinishType, Floor, FloorKind,
    JudgementReport, JudgementResult, Parking, Requirement, RoadPart, StructureType, NO_BASIS,
};
