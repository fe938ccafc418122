pub mod defaults;
pub mod toml_config;

pub use toml_config::{ReportConfig, SectionConfig};

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "skill-gap")]
#[command(about = "Compare a character's trained skills against per-section reference levels")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Skills CSV path or URL (Main;Alt;Skill;Level), overrides the config file
    #[arg(long)]
    pub skills: Option<String>,

    /// Multipliers CSV path or URL (Skill;Multiplier), overrides the config file
    #[arg(long)]
    pub multipliers: Option<String>,

    #[arg(long, required_unless_present_any = ["list", "add_section", "remove_section"])]
    pub main: Option<String>,

    #[arg(long, required_unless_present_any = ["list", "add_section", "remove_section"])]
    pub alt: Option<String>,

    /// List main characters and their alts instead of building a report
    #[arg(long)]
    pub list: bool,

    /// Add a section to the --config file and exit
    #[arg(long, requires = "config", conflicts_with = "list")]
    pub add_section: Option<String>,

    /// Reference level of the section added with --add-section
    #[arg(long, default_value = "4", requires = "add_section")]
    pub ref_level: i64,

    /// Skills of the section added with --add-section
    #[arg(long, value_delimiter = ',', requires = "add_section")]
    pub section_skills: Vec<String>,

    /// Remove the section with this key from the --config file and exit
    #[arg(long, requires = "config", conflicts_with = "list")]
    pub remove_section: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail when the selected character has no skill records
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 將命令列參數覆蓋到設定檔內容
    pub fn apply_overrides(&self, config: &mut ReportConfig) {
        if let Some(skills) = &self.skills {
            config.sources.skills = skills.clone();
        }
        if let Some(multipliers) = &self.multipliers {
            config.sources.multipliers = multipliers.clone();
        }
        if self.strict {
            config.report.strict = true;
        }
    }

    pub fn edits_sections(&self) -> bool {
        self.add_section.is_some() || self.remove_section.is_some()
    }

    /// 套用 `--remove-section` / `--add-section`，回傳設定是否有變更
    pub fn apply_section_edits(&self, config: &mut ReportConfig) -> bool {
        let mut changed = false;

        if let Some(key) = &self.remove_section {
            if config.remove_section(key.trim()) {
                tracing::info!("🗑️ Removed section '{}'", key.trim());
                changed = true;
            } else {
                tracing::warn!("No section with key '{}'", key.trim());
            }
        }

        if let Some(name) = &self.add_section {
            let skills = self
                .section_skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            if config.add_section(SectionConfig::new(name, self.ref_level, &skills)) {
                tracing::info!("➕ Added section '{}'", name.trim());
                changed = true;
            }
        }

        changed
    }
}
