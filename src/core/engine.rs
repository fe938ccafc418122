use crate::core::catalog::{catalog_from_text, multipliers_from_text, roster};
use crate::core::report::build_report;
use crate::core::{ReportSettings, SourceReader};
use crate::domain::model::{MultiplierTable, Roster, SkillCatalog, SkillLevels, SkillReport};
use crate::utils::error::{Result, SkillGapError};

/// 每次請求都重新讀取兩份資料來源並重建查表，不做快取
pub struct ReportEngine<R: SourceReader, C: ReportSettings> {
    reader: R,
    settings: C,
}

impl<R: SourceReader, C: ReportSettings> ReportEngine<R, C> {
    pub fn new(reader: R, settings: C) -> Self {
        Self { reader, settings }
    }

    pub async fn load_catalog(&self) -> Result<SkillCatalog> {
        let text = self
            .reader
            .read_text("skills", self.settings.skills_location())
            .await?;
        Ok(catalog_from_text(&text))
    }

    pub async fn load_multipliers(&self) -> Result<MultiplierTable> {
        let text = self
            .reader
            .read_text("multipliers", self.settings.multipliers_location())
            .await?;
        Ok(multipliers_from_text(&text))
    }

    pub async fn roster(&self) -> Result<Roster> {
        let catalog = self.load_catalog().await?;
        Ok(roster(&catalog))
    }

    pub async fn run(&self, main: &str, alt: &str) -> Result<SkillReport> {
        let main = main.trim();
        let alt = alt.trim();
        tracing::info!("📋 Building skill report for {} (main: {})", alt, main);

        let catalog = self.load_catalog().await?;
        let multipliers = self.load_multipliers().await?;

        let empty = SkillLevels::new();
        let char_skills = match catalog.skills_for(main, alt) {
            Some(skills) => skills,
            None if self.settings.strict() => {
                return Err(SkillGapError::UnknownCharacter {
                    main: main.to_string(),
                    alt: alt.to_string(),
                });
            }
            None => {
                tracing::warn!(
                    "No skill records for {} (main: {}), treating every skill as untrained",
                    alt,
                    main
                );
                &empty
            }
        };

        let sections = self.settings.section_definitions();
        let report = build_report(&sections, char_skills, &multipliers);
        tracing::info!(
            "✅ {} of {} sections have training gaps",
            report.len(),
            sections.len()
        );

        Ok(SkillReport {
            main: main.to_string(),
            alt: alt.to_string(),
            sections: report,
        })
    }
}
