use crate::config::defaults::default_sections;
use crate::core::ReportSettings;
use crate::domain::model::SectionDefinition;
use crate::utils::error::{Result, SkillGapError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub report: ReportOptions,
    /// `None` falls back to the built-in section set; an explicit empty list
    /// means no sections at all.
    pub sections: Option<Vec<SectionConfig>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// `Main;Alt;Skill;Level`
    #[serde(default)]
    pub skills: String,
    /// `Skill;Multiplier`
    #[serde(default)]
    pub multipliers: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportOptions {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub key: Option<String>,
    pub name: String,
    pub ref_level: i64,
    /// 每行一個技能名稱
    #[serde(default)]
    pub skills: String,
}

impl SectionConfig {
    pub fn new(name: &str, ref_level: i64, skills: &str) -> Self {
        Self {
            key: None,
            name: name.trim().to_string(),
            ref_level,
            skills: skills.to_string(),
        }
    }

    pub fn resolved_key(&self) -> String {
        match &self.key {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => section_key_from_name(&self.name),
        }
    }

    pub fn to_definition(&self) -> SectionDefinition {
        SectionDefinition::new(&self.resolved_key(), &self.name, self.ref_level, &self.skills)
    }
}

/// 由名稱產生分組 key：轉小寫、空白換成底線、只保留 `[a-z0-9_-]`
pub fn section_key_from_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

impl ReportConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SkillGapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SKILLS_CSV_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SkillGapError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SkillGapError::ConfigValidationError {
            field: "toml_serialization".to_string(),
            message: e.to_string(),
        })
    }

    /// 寫回 TOML 檔案（`--add-section` / `--remove-section` 使用）
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 設定的分組；未設定時使用預設分組
    pub fn sections(&self) -> Vec<SectionConfig> {
        self.sections.clone().unwrap_or_else(default_sections)
    }

    /// Appends a section unless one with the same key already exists.
    /// Returns whether the section was added.
    pub fn add_section(&mut self, section: SectionConfig) -> bool {
        if section.name.trim().is_empty() {
            return false;
        }

        let key = section.resolved_key();
        let sections = self.sections.get_or_insert_with(default_sections);
        if sections.iter().any(|s| s.resolved_key() == key) {
            tracing::warn!("Section '{}' already exists, not adding", key);
            return false;
        }

        sections.push(SectionConfig {
            key: Some(key),
            ..section
        });
        true
    }

    pub fn remove_section(&mut self, key: &str) -> bool {
        let sections = self.sections.get_or_insert_with(default_sections);
        let before = sections.len();
        sections.retain(|s| s.resolved_key() != key);
        sections.len() != before
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_source_location("sources.skills", &self.sources.skills)?;
        validation::validate_source_location("sources.multipliers", &self.sources.multipliers)?;
        self.validate_sections()
    }

    /// 角色清單只會讀取 skills 來源
    pub fn validate_for_listing(&self) -> Result<()> {
        validation::validate_source_location("sources.skills", &self.sources.skills)
    }

    pub fn validate_sections(&self) -> Result<()> {
        let sections = self.sections();
        for (index, section) in sections.iter().enumerate() {
            validation::validate_non_empty_string(&format!("sections[{}].name", index), &section.name)?;
            validation::validate_range(
                &format!("sections[{}].ref_level", index),
                section.ref_level,
                1,
                5,
            )?;
        }

        let keys: Vec<String> = sections.iter().map(SectionConfig::resolved_key).collect();
        validation::validate_unique_keys("sections", keys.iter().map(String::as_str))?;

        Ok(())
    }
}

impl ReportSettings for ReportConfig {
    fn skills_location(&self) -> &str {
        &self.sources.skills
    }

    fn multipliers_location(&self) -> &str {
        &self.sources.multipliers
    }

    fn section_definitions(&self) -> Vec<SectionDefinition> {
        self.sections().iter().map(SectionConfig::to_definition).collect()
    }

    fn strict(&self) -> bool {
        self.report.strict
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
