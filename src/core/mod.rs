pub mod catalog;
pub mod engine;
pub mod gap;
pub mod report;
pub mod tabular;

pub use crate::domain::model::{
    MultiplierTable, SectionDefinition, SectionReport, SkillCatalog, SkillGapEntry, SkillReport,
};
pub use crate::domain::ports::{ReportSettings, SourceReader};
pub use crate::utils::error::Result;
