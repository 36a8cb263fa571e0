use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{ENV_API_URL, ENV_CONTRACT, ENV_TIMEOUT_SECS, parse_timeout_secs};
use services::{AuthService, ConfigError, ContractRevision, PortalConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, AppContext};

const LOG_ENV: &str = "PORTAL_LOG";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--contract <current|legacy>] [--timeout-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url      the deployed portal script");
    eprintln!("  --contract     current");
    eprintln!("  --timeout-secs 30");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORTAL_API_URL, PORTAL_API_CONTRACT, PORTAL_API_TIMEOUT_SECS, {LOG_ENV}");
}

enum Parsed {
    Run(PortalConfig),
    Help,
}

/// Flags override the environment, which overrides the built-in defaults.
///
/// An environment variable shadowed by a flag is never read.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Parsed, ArgsError> {
    let mut flags: HashMap<&'static str, String> = HashMap::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let raw = require_value(args, "--api-url")?;
                PortalConfig::new(&raw)?;
                flags.insert(ENV_API_URL, raw);
            }
            "--contract" => {
                let raw = require_value(args, "--contract")?;
                raw.parse::<ContractRevision>()?;
                flags.insert(ENV_CONTRACT, raw);
            }
            "--timeout-secs" => {
                let raw = require_value(args, "--timeout-secs")?;
                parse_timeout_secs(&raw)?;
                flags.insert(ENV_TIMEOUT_SECS, raw);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    let config = PortalConfig::from_lookup(|key| flags.get(key).cloned().or_else(|| env(key)))?;
    Ok(Parsed::Run(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Parsed::Run(config)) => config,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();
    tracing::info!(
        api_host = config.api_url().host_str().unwrap_or(""),
        contract = %config.contract(),
        timeout_secs = config.timeout().as_secs(),
        "starting portal"
    );

    let context = AppContext::new(Arc::new(AuthService::from_config(config)?));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EduPortal")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
