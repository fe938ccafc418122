use crate::core::tabular::{lenient_int, parse_rows};
use crate::domain::model::{MainCharacter, MultiplierTable, Roster, SkillCatalog};

pub const SKILL_COLUMNS: usize = 4;
pub const MULTIPLIER_COLUMNS: usize = 2;

/// Rows are `main;alt;skill;level`. Later rows overwrite earlier ones for the
/// same (main, alt, skill).
pub fn build_catalog(rows: &[Vec<String>]) -> SkillCatalog {
    let mut catalog = SkillCatalog::new();
    let mut overwritten = 0usize;

    for row in rows {
        let [main, alt, skill, level] = row.as_slice() else {
            continue;
        };

        let level = lenient_int(level);
        if !(0..=5).contains(&level) {
            tracing::warn!(
                "Level {} for '{}' on {}/{} is outside 0-5",
                level,
                skill.trim(),
                main.trim(),
                alt.trim()
            );
        }

        if catalog
            .insert(main.trim(), alt.trim(), skill, level)
            .is_some()
        {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        tracing::warn!(
            "{} duplicate skill rows overwritten by later rows",
            overwritten
        );
    }

    tracing::debug!("Built skill catalog with {} characters", catalog.len());
    catalog
}

/// Rows are `skill;multiplier`. Later rows win.
pub fn build_multipliers(rows: &[Vec<String>]) -> MultiplierTable {
    let mut table = MultiplierTable::new();
    let mut overwritten = 0usize;

    for row in rows {
        let [skill, multiplier] = row.as_slice() else {
            continue;
        };

        if table.insert(skill, lenient_int(multiplier)).is_some() {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        tracing::warn!(
            "{} duplicate multiplier rows overwritten by later rows",
            overwritten
        );
    }

    tracing::debug!("Built multiplier table with {} skills", table.len());
    table
}

pub fn catalog_from_text(text: &str) -> SkillCatalog {
    build_catalog(&parse_rows(text, SKILL_COLUMNS))
}

pub fn multipliers_from_text(text: &str) -> MultiplierTable {
    build_multipliers(&parse_rows(text, MULTIPLIER_COLUMNS))
}

/// 產生排序後的角色清單（供選單或 `--list` 使用）
pub fn roster(catalog: &SkillCatalog) -> Roster {
    let mut names: Vec<&str> = catalog.mains().collect();
    names.sort_unstable();

    let mains = names
        .into_iter()
        .map(|main| {
            let mut alts: Vec<String> = catalog.alts_of(main).map(str::to_string).collect();
            alts.sort();
            MainCharacter {
                name: main.to_string(),
                alts,
            }
        })
        .collect();

    Roster { mains }
}
