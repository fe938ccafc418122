use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// skill key (小寫) → 等級
pub type SkillLevels = HashMap<String, i64>;

/// 技能名稱正規化：去除前後空白並轉小寫，作為查表用的 key
pub fn skill_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// main → alt → skill key → level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    characters: HashMap<String, HashMap<String, SkillLevels>>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous level when the (main, alt, skill) key was already present.
    pub fn insert(&mut self, main: &str, alt: &str, skill_name: &str, level: i64) -> Option<i64> {
        self.characters
            .entry(main.to_string())
            .or_default()
            .entry(alt.to_string())
            .or_default()
            .insert(skill_key(skill_name), level)
    }

    pub fn skills_for(&self, main: &str, alt: &str) -> Option<&SkillLevels> {
        self.characters.get(main).and_then(|alts| alts.get(alt))
    }

    pub fn level(&self, main: &str, alt: &str, skill_name: &str) -> Option<i64> {
        self.skills_for(main, alt)
            .and_then(|skills| skills.get(&skill_key(skill_name)).copied())
    }

    pub fn mains(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }

    pub fn alts_of(&self, main: &str) -> impl Iterator<Item = &str> {
        self.characters
            .get(main)
            .into_iter()
            .flat_map(|alts| alts.keys().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.characters.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// skill key → 訓練倍率，查不到時視為 1
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTable {
    entries: HashMap<String, i64>,
}

impl MultiplierTable {
    pub const DEFAULT_MULTIPLIER: i64 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill_name: &str, multiplier: i64) -> Option<i64> {
        self.entries.insert(skill_key(skill_name), multiplier)
    }

    pub fn multiplier_for(&self, skill_name: &str) -> i64 {
        self.entries
            .get(&skill_key(skill_name))
            .copied()
            .unwrap_or(Self::DEFAULT_MULTIPLIER)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub key: String,
    pub name: String,
    pub reference_level: i64,
    pub skill_names: Vec<String>,
}

impl SectionDefinition {
    /// `raw_skills` is the one-name-per-line text kept in the settings file.
    pub fn new(key: &str, name: &str, reference_level: i64, raw_skills: &str) -> Self {
        let skill_names = crate::core::tabular::split_lines(raw_skills)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            key: key.to_string(),
            name: name.to_string(),
            reference_level,
            skill_names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapEntry {
    pub skill_name: String,
    pub current_level: i64,
    pub days_to_train: f64,
}

impl SkillGapEntry {
    /// 不需再訓練（含等級已超過參考值的情況）
    pub fn is_complete(&self) -> bool {
        self.days_to_train <= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub key: String,
    pub name: String,
    pub reference_level: i64,
    pub entries: Vec<SkillGapEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillReport {
    pub main: String,
    pub alt: String,
    pub sections: Vec<SectionReport>,
}

impl SkillReport {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCharacter {
    pub name: String,
    pub alts: Vec<String>,
}

/// 角色清單，main 與 alt 皆依字母排序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub mains: Vec<MainCharacter>,
}

impl Roster {
    pub fn contains(&self, main: &str, alt: &str) -> bool {
        self.mains
            .iter()
            .any(|m| m.name == main && m.alts.iter().any(|a| a == alt))
    }
}
