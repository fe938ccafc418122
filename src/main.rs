use anyhow::Context;
use clap::Parser;
use skill_gap::app::render;
use skill_gap::domain::model::Roster;
use skill_gap::utils::{logger, validation::Validate};
use skill_gap::{CliConfig, FetchingSource, ReportConfig, ReportEngine, SkillGapError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting skill-gap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            ReportConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => {
            tracing::info!("📁 No config file given, using built-in sections");
            ReportConfig::default()
        }
    };
    if cli.edits_sections() {
        // clap 已確保有 --config
        let path = cli.config.as_deref().unwrap_or_default();
        if cli.apply_section_edits(&mut config) {
            if let Err(e) = config.validate_sections() {
                fail(&e);
            }
            config
                .save_to_file(path)
                .with_context(|| format!("Failed to write config file '{}'", path))?;
            println!("✅ Sections saved to {}", path);
        } else {
            println!("No section changes to save");
        }
        return Ok(());
    }
    cli.apply_overrides(&mut config);

    // 驗證配置；角色清單只需要 skills 來源
    let validation = if cli.list {
        config.validate_for_listing()
    } else {
        config.validate()
    };
    if let Err(e) = validation {
        fail(&e);
    }

    let reader = match config.sources.timeout_seconds {
        Some(timeout) => FetchingSource::with_timeout(timeout)?,
        None => FetchingSource::new(),
    };
    let engine = ReportEngine::new(reader, config);

    if cli.list {
        match engine.roster().await {
            Ok(roster) => print!("{}", format_roster(&roster)),
            Err(e) => fail(&e),
        }
        return Ok(());
    }

    let main_char = cli.main.as_deref().unwrap_or_default();
    let alt_char = cli.alt.as_deref().unwrap_or_default();

    match engine.run(main_char, alt_char).await {
        Ok(report) => {
            let output = render::render(&report, cli.format)?;
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &SkillGapError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn format_roster(roster: &Roster) -> String {
    if roster.mains.is_empty() {
        return "No characters found in the skills data.\n".to_string();
    }

    let mut out = String::new();
    for main in &roster.mains {
        out.push_str(&main.name);
        out.push('\n');
        for alt in &main.alts {
            out.push_str("  - ");
            out.push_str(alt);
            out.push('\n');
        }
    }
    out
}
