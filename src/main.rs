use std::ffi::OsString;
use std::{env, io, process};

use argecho::cli::{execute_command, parse_cli, program_name};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    setup_logging();

    let argv: Vec<OsString> = env::args_os().collect();
    let program = program_name(argv.first().map(OsString::as_os_str));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = parse_cli(argv, &program, &mut out)
        .and_then(|cli| execute_command(&cli, &program, &mut out));
    if let Err(e) = result {
        tracing::debug!("{}", e);
        process::exit(e.exit_code());
    }
}

/// Warnings and up unless `RUST_LOG` says otherwise; stdout is reserved for output.
fn setup_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
