pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FetchingSource;
pub use config::{OutputFormat, ReportConfig, SectionConfig};
pub use core::engine::ReportEngine;
pub use domain::model::{
    MultiplierTable, Roster, SectionDefinition, SectionReport, SkillCatalog, SkillGapEntry,
    SkillReport,
};
pub use utils::error::{Result, SkillGapError};
