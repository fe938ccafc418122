use skill_gap::core::catalog::{build_catalog, build_multipliers, catalog_from_text, multipliers_from_text};
use skill_gap::core::gap::{compute_section_gaps, TRAINING_RATE_PER_DAY};
use skill_gap::core::report::build_report;
use skill_gap::core::tabular::parse_rows;
use skill_gap::domain::model::SkillLevels;
use skill_gap::{MultiplierTable, SectionDefinition};

fn hull_section() -> SectionDefinition {
    SectionDefinition::new("tanking", "Tanking", 4, "Hull Upgrades")
}

fn skills_of(csv: &str, main: &str, alt: &str) -> SkillLevels {
    catalog_from_text(csv)
        .skills_for(main, alt)
        .cloned()
        .unwrap_or_default()
}

#[test]
fn test_single_level_short_of_reference() {
    let char_skills = skills_of("Alice;Bob;Hull Upgrades;3", "Alice", "Bob");
    let gaps = compute_section_gaps(&hull_section(), &char_skills, &MultiplierTable::new());

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].skill_name, "Hull Upgrades");
    assert_eq!(gaps[0].current_level, 3);
    assert!((gaps[0].days_to_train - (45255.0 - 8000.0) / TRAINING_RATE_PER_DAY).abs() < 1e-9);
}

#[test]
fn test_multiplier_doubles_training_time() {
    let char_skills = skills_of("Alice;Bob;Hull Upgrades;3", "Alice", "Bob");
    let multipliers = multipliers_from_text("hull upgrades;2");

    let gaps = compute_section_gaps(&hull_section(), &char_skills, &multipliers);
    assert!((gaps[0].days_to_train - 2.0 * 37255.0 / 36720.0).abs() < 1e-9);
}

#[test]
fn test_unrecorded_skill_is_level_zero() {
    let char_skills = skills_of("Alice;Bob;Rockets;3", "Alice", "Bob");
    let gaps = compute_section_gaps(&hull_section(), &char_skills, &MultiplierTable::new());

    assert_eq!(gaps[0].current_level, 0);
    assert!((gaps[0].days_to_train - 45255.0 / 36720.0).abs() < 1e-9);
}

#[test]
fn test_malformed_lines_are_ignored() {
    let catalog = catalog_from_text("OnlyTwo;Fields\nA;B;C;D;E;F\n");
    assert!(catalog.is_empty());

    let text = "Alice;Bob;Rockets;3\nbad line\nAlice;Bob;Torpedoes\nAlice;Bob;Light Missiles;2\n";
    assert_eq!(parse_rows(text, 4).len(), 2);
    assert_eq!(build_catalog(&parse_rows(text, 4)).level("Alice", "Bob", "light missiles"), Some(2));
}

#[test]
fn test_maxed_section_is_omitted() {
    let char_skills = skills_of(
        "Alice;Bob;Rockets;5\nAlice;Bob;Torpedoes;5\nAlice;Bob;Hull Upgrades;1",
        "Alice",
        "Bob",
    );
    let sections = vec![
        SectionDefinition::new("missiles", "Missiles", 5, "Rockets\nTorpedoes"),
        hull_section(),
    ];

    let report = build_report(&sections, &char_skills, &MultiplierTable::new());
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].key, "tanking");
}

#[test]
fn test_catalog_lookup_ignores_skill_casing() {
    for spelling in ["Hull Upgrades", "HULL UPGRADES", "hull upgrades", "hUlL uPgRaDeS"] {
        let catalog = catalog_from_text(&format!("Alice;Bob;{};4", spelling));
        assert_eq!(catalog.level("Alice", "Bob", "Hull Upgrades"), Some(4));
    }
}

#[test]
fn test_multipliers_last_row_wins() {
    let table = build_multipliers(&parse_rows("Rockets;2\r\nROCKETS;6\r\n", 2));
    assert_eq!(table.multiplier_for("rockets"), 6);
}
