use crate::domain::model::{skill_key, MultiplierTable, SectionDefinition, SkillGapEntry, SkillLevels};

/// 各等級累積所需的技能點數（index = level）
pub const SKILL_POINTS: [f64; 6] = [0.0, 250.0, 1414.0, 8000.0, 45255.0, 256000.0];

pub const MAX_SKILL_LEVEL: i64 = 5;

/// 每天可訓練的技能點數（每分鐘 25.5 點）
pub const TRAINING_RATE_PER_DAY: f64 = 25.5 * 60.0 * 24.0;

/// Cumulative skill points for `level`; 0 for anything outside the table.
pub fn skill_points_for(level: i64) -> f64 {
    usize::try_from(level)
        .ok()
        .and_then(|index| SKILL_POINTS.get(index))
        .copied()
        .unwrap_or(0.0)
}

/// Negative when `current_level` is already above `reference_level`.
pub fn days_to_train(current_level: i64, reference_level: i64, multiplier: i64) -> f64 {
    let multiplier = multiplier as f64;
    let target_sp = skill_points_for(reference_level) * multiplier;
    let current_sp = skill_points_for(current_level) * multiplier;
    (target_sp - current_sp) / TRAINING_RATE_PER_DAY
}

/// 技能未達上限且不高於參考等級時才列入報表
pub fn is_training_gap(current_level: i64, reference_level: i64) -> bool {
    current_level <= reference_level && current_level < MAX_SKILL_LEVEL
}

pub fn compute_section_gaps(
    section: &SectionDefinition,
    char_skills: &SkillLevels,
    multipliers: &MultiplierTable,
) -> Vec<SkillGapEntry> {
    section
        .skill_names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let current_level = char_skills.get(&skill_key(name)).copied().unwrap_or(0);
            if !is_training_gap(current_level, section.reference_level) {
                return None;
            }

            let multiplier = multipliers.multiplier_for(name);
            Some(SkillGapEntry {
                skill_name: name.to_string(),
                current_level,
                days_to_train: days_to_train(current_level, section.reference_level, multiplier),
            })
        })
        .collect()
}
