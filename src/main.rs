use std::io;
use std::process;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use umlgen::cli::commands::execute;
use umlgen::cli::{output, Cli, CliError, CliResult};
use umlgen::config::{Settings, LOG_ENV};
use umlgen::infrastructure::di::ServiceContainer;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            let code = e.exit_code();
            match &e {
                // clap formats its own help, version and usage messages
                CliError::Usage(usage) if usage.use_stderr() => {
                    output::clap_message(usage, &mut io::stderr(), code)
                }
                CliError::Usage(usage) => output::clap_message(usage, &mut io::stdout(), code),
                _ => {
                    output::error_chain(&e);
                    code
                }
            }
        }
    };
    process::exit(code);
}

fn run() -> CliResult<i32> {
    Cli::try_parse_args(std::env::args_os())?;

    setup_logging();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "settings loaded");

    let container = ServiceContainer::new(settings);
    execute(&container)
}

fn setup_logging() {
    // warn by default: a normal run adds nothing to the generator's output
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
