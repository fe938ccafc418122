use crate::core::gap::compute_section_gaps;
use crate::domain::model::{MultiplierTable, SectionDefinition, SectionReport, SkillLevels};

/// Sections keep their configured order; sections with no gaps are left out.
pub fn build_report(
    sections: &[SectionDefinition],
    char_skills: &SkillLevels,
    multipliers: &MultiplierTable,
) -> Vec<SectionReport> {
    sections
        .iter()
        .filter_map(|section| {
            let entries = compute_section_gaps(section, char_skills, multipliers);
            tracing::debug!("Section '{}': {} entries", section.key, entries.len());

            if entries.is_empty() {
                return None;
            }

            Some(SectionReport {
                key: section.key.clone(),
                name: section.name.clone(),
                reference_level: section.reference_level,
                entries,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::skill_key;

    fn sections() -> Vec<SectionDefinition> {
        vec![
            SectionDefinition::new("tanking", "Tanking", 4, "Hull Upgrades\nArmor Rigging"),
            SectionDefinition::new("missiles", "Missiles", 4, "Rockets\nTorpedoes"),
            SectionDefinition::new("navigation", "Navigation", 3, "Acceleration Control"),
        ]
    }

    fn skills(pairs: &[(&str, i64)]) -> SkillLevels {
        pairs.iter().map(|(n, l)| (skill_key(n), *l)).collect()
    }

    #[test]
    fn test_sections_in_configured_order() {
        let report = build_report(&sections(), &SkillLevels::new(), &MultiplierTable::new());

        let keys: Vec<&str> = report.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["tanking", "missiles", "navigation"]);
        assert_eq!(report[2].reference_level, 3);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let char_skills = skills(&[("Rockets", 5), ("Torpedoes", 5)]);
        let report = build_report(&sections(), &char_skills, &MultiplierTable::new());

        let keys: Vec<&str> = report.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["tanking", "navigation"]);
    }

    #[test]
    fn test_fully_trained_character_yields_empty_report() {
        let char_skills = skills(&[
            ("Hull Upgrades", 5),
            ("Armor Rigging", 5),
            ("Rockets", 5),
            ("Torpedoes", 5),
            ("Acceleration Control", 5),
        ]);
        let report = build_report(&sections(), &char_skills, &MultiplierTable::new());
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_is_idempotent() {
        let char_skills = skills(&[("Hull Upgrades", 2), ("Rockets", 4)]);
        let mut multipliers = MultiplierTable::new();
        multipliers.insert("Torpedoes", 3);

        let first = build_report(&sections(), &char_skills, &multipliers);
        let second = build_report(&sections(), &char_skills, &multipliers);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_sections() {
        assert!(build_report(&[], &SkillLevels::new(), &MultiplierTable::new()).is_empty());
    }
}
