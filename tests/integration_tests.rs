use httpmock::prelude::*;
use skill_gap::app::render::{render_text, NOTHING_TO_DISPLAY};
use skill_gap::{FetchingSource, ReportConfig, ReportEngine, SkillGapError};
use tempfile::TempDir;

const SKILLS_CSV: &str = "\
Alice;Bob;Hull Upgrades;3\r\n\
Alice;Bob;Armor Rigging;4\r\n\
Alice;Bob;Rockets;5\r\n\
OnlyTwo;Fields\r\n\
Alice;Carol;Hull Upgrades;5\r\n\
Zed;Yan;Rockets;1\r\n";

const MULTIPLIERS_CSV: &str = "Hull Upgrades;2\nArmor Rigging;3\n";

fn config_toml(skills: &str, multipliers: &str) -> String {
    format!(
        r#"
[sources]
skills = "{}"
multipliers = "{}"

[[sections]]
key = "tanking"
name = "Tanking"
ref_level = 4
skills = """
Hull Upgrades
Armor Rigging
"""

[[sections]]
key = "missiles"
name = "Missiles"
ref_level = 4
skills = "Rockets"
"#,
        skills, multipliers
    )
}

#[tokio::test]
async fn test_end_to_end_report_from_http_sources() {
    let server = MockServer::start();

    let skills_mock = server.mock(|when, then| {
        when.method(GET).path("/skills.csv");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(SKILLS_CSV);
    });
    let multipliers_mock = server.mock(|when, then| {
        when.method(GET).path("/multipliers.csv");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(MULTIPLIERS_CSV);
    });

    let config = ReportConfig::from_toml_str(&config_toml(
        &server.url("/skills.csv"),
        &server.url("/multipliers.csv"),
    ))
    .unwrap();

    let engine = ReportEngine::new(FetchingSource::new(), config);
    let report = engine.run("Alice", "Bob").await.unwrap();

    skills_mock.assert();
    multipliers_mock.assert();

    // Rockets 已滿級，Missiles 整段不顯示
    assert_eq!(report.sections.len(), 1);
    let tanking = &report.sections[0];
    assert_eq!(tanking.name, "Tanking");
    assert_eq!(tanking.entries.len(), 2);

    assert_eq!(tanking.entries[0].skill_name, "Hull Upgrades");
    assert!((tanking.entries[0].days_to_train - 2.0291).abs() < 1e-4);

    assert_eq!(tanking.entries[1].skill_name, "Armor Rigging");
    assert_eq!(tanking.entries[1].current_level, 4);
    assert!(tanking.entries[1].is_complete());

    let text = render_text(&report);
    assert!(text.contains("Tanking (Ref: 4)"));
    assert!(text.contains("2.03d"));
    assert!(text.contains("Done"));
    assert!(!text.contains("Missiles"));
}

#[tokio::test]
async fn test_end_to_end_report_from_local_files() {
    let temp_dir = TempDir::new().unwrap();
    let skills_path = temp_dir.path().join("skills.csv");
    let multipliers_path = temp_dir.path().join("multipliers.csv");
    std::fs::write(&skills_path, SKILLS_CSV).unwrap();
    std::fs::write(&multipliers_path, MULTIPLIERS_CSV).unwrap();

    let config_path = temp_dir.path().join("skill-gap.toml");
    let normalized = |p: &std::path::Path| p.to_str().unwrap().replace('\\', "/");
    std::fs::write(
        &config_path,
        config_toml(&normalized(&skills_path), &normalized(&multipliers_path)),
    )
    .unwrap();

    let config = ReportConfig::from_file(&config_path).unwrap();
    let engine = ReportEngine::new(FetchingSource::new(), config);

    let report = engine.run("Alice", "Carol").await.unwrap();

    // Carol 的 Hull Upgrades 已滿級，其餘技能視為 0 級
    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.sections[0].entries.len(), 1);
    assert_eq!(report.sections[0].entries[0].skill_name, "Armor Rigging");
    assert_eq!(report.sections[0].entries[0].current_level, 0);
    assert_eq!(report.sections[1].entries[0].skill_name, "Rockets");
}

#[tokio::test]
async fn test_fully_trained_character_renders_notice() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.csv");
        then.status(200).body(
            "Mia;Max;Hull Upgrades;5\nMia;Max;Armor Rigging;5\nMia;Max;Rockets;5\n",
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/multipliers.csv");
        then.status(200).body("");
    });

    let config = ReportConfig::from_toml_str(&config_toml(
        &server.url("/skills.csv"),
        &server.url("/multipliers.csv"),
    ))
    .unwrap();

    let engine = ReportEngine::new(FetchingSource::new(), config);
    let report = engine.run("Mia", "Max").await.unwrap();

    assert!(report.is_empty());
    assert!(render_text(&report).contains(NOTHING_TO_DISPLAY));
}

#[tokio::test]
async fn test_unreachable_multipliers_source_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.csv");
        then.status(200).body(SKILLS_CSV);
    });
    let multipliers_mock = server.mock(|when, then| {
        when.method(GET).path("/multipliers.csv");
        then.status(500);
    });

    let config = ReportConfig::from_toml_str(&config_toml(
        &server.url("/skills.csv"),
        &server.url("/multipliers.csv"),
    ))
    .unwrap();

    let engine = ReportEngine::new(FetchingSource::new(), config);
    let err = engine.run("Alice", "Bob").await.unwrap_err();

    multipliers_mock.assert();
    assert!(matches!(err, SkillGapError::SourceUnavailable { .. }));
    assert_eq!(
        err.user_friendly_message(),
        "A required CSV file could not be read (multipliers data)."
    );
}

#[tokio::test]
async fn test_roster_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/skills.csv");
        then.status(200).body(SKILLS_CSV);
    });

    let config = ReportConfig::from_toml_str(&config_toml(
        &server.url("/skills.csv"),
        &server.url("/multipliers.csv"),
    ))
    .unwrap();

    let engine = ReportEngine::new(FetchingSource::new(), config);
    let roster = engine.roster().await.unwrap();

    let mains: Vec<&str> = roster.mains.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(mains, vec!["Alice", "Zed"]);
    assert_eq!(roster.mains[0].alts, vec!["Bob", "Carol"]);
    assert!(!roster.contains("OnlyTwo", "Fields"));
}
