use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "planner",
    "planner_calendar",
    "planner_layout",
    "planner_svg",
];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing from the `-v` count.
///
/// 0 is warn, `-v` info, `-vv` debug, `-vvv` and above trace. `RUST_LOG`
/// takes precedence when set. Logs go to stderr; stdout is reserved for
/// command output such as `planner params` JSON.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
