use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// `RUST_LOG` 優先，否則依 verbose 決定預設層級
pub fn default_filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "skill_gap=debug,info"
    } else {
        "skill_gap=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(verbose)))
}

/// 日誌一律寫到 stderr，stdout 只留給報表內容
pub fn init_logger(format: LogFormat, verbose: bool) {
    let base = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(build_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(base.compact()).init(),
        LogFormat::Json => registry.with(base.json()).init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose);
}

/// 以 JSON 格式輸出日誌，方便交給外部的日誌收集器
pub fn init_json_logger(verbose: bool) {
    init_logger(LogFormat::Json, verbose);
}
