use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use odyssey_core::model::{Catalog, CourseRecord, TrackName, WidgetConfig, WidgetConfigOverride};
use services::{
    GraphqlProgressClient, ProgressClientConfig, ProgressFetchError, ProgressSource,
    WidgetServices,
};
use storage::Storage;
use tracing::info;
use ui::{WIDGET_ELEMENT_ID, WidgetStyles, render_session};

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownTrack { raw: String },
    InvalidConfig { reason: String },
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownTrack { raw } => write!(f, "unknown track: {raw}"),
            ArgsError::InvalidConfig { reason } => write!(f, "invalid --config value: {reason}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  odyssey-preview render [--select <track>] [--config <json>] [--prefs <path>]");
    eprintln!("                         [--cookie <header>] [--endpoint <url>] [--offline]");
    eprintln!("  odyssey-preview tracks [--prefs <path>]");
    eprintln!();
    eprintln!("render prints the widget markup for the signed-in user (default command).");
    eprintln!("tracks lists the selectable tracks; the active one is marked with '*'.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ODYSSEY_COOKIE  session cookie sent with the progress query");
    eprintln!("  ODYSSEY_PREFS   file holding the persisted track selection");
    eprintln!("  RUST_LOG        log filter (default: warn)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Render,
    Tracks,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "render" => Some(Self::Render),
            "tracks" => Some(Self::Tracks),
            _ => None,
        }
    }
}

/// Preview settings taken from the environment; flags override them.
#[derive(Debug, Default, Clone)]
struct PreviewEnv {
    cookie: Option<String>,
    prefs: Option<PathBuf>,
}

impl PreviewEnv {
    fn from_process() -> Self {
        let var = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            cookie: var("ODYSSEY_COOKIE"),
            prefs: var("ODYSSEY_PREFS").map(PathBuf::from),
        }
    }
}

#[derive(Debug)]
struct Args {
    select: Option<TrackName>,
    config: WidgetConfig,
    prefs: Option<PathBuf>,
    client: ProgressClientConfig,
    offline: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: PreviewEnv,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            select: None,
            config: WidgetConfig::default(),
            prefs: env.prefs,
            client: ProgressClientConfig {
                session_cookie: env.cookie,
                ..ProgressClientConfig::default()
            },
            offline: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--select" => {
                    let value = require_value(args, "--select")?;
                    let track = value.trim();
                    if !Catalog::odyssey().has_track(track) {
                        return Err(ArgsError::UnknownTrack { raw: value });
                    }
                    parsed.select = Some(TrackName::new(track));
                }
                "--config" => {
                    let value = require_value(args, "--config")?;
                    let overrides = WidgetConfigOverride::from_json(&value)
                        .map_err(|err| ArgsError::InvalidConfig {
                            reason: err.to_string(),
                        })?;
                    parsed.config = overrides.resolve();
                }
                "--prefs" => {
                    parsed.prefs = Some(PathBuf::from(require_value(args, "--prefs")?));
                }
                "--cookie" => {
                    parsed.client.session_cookie = Some(require_value(args, "--cookie")?);
                }
                "--endpoint" => {
                    parsed.client.endpoint = require_value(args, "--endpoint")?;
                }
                "--offline" => parsed.offline = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn storage(&self) -> Storage {
        match &self.prefs {
            Some(path) => Storage::json_file(path),
            None => Storage::in_memory(),
        }
    }

    fn progress_source(&self) -> Arc<dyn ProgressSource> {
        if self.offline {
            Arc::new(NoProgress)
        } else {
            Arc::new(GraphqlProgressClient::new(self.client.clone()))
        }
    }
}

/// Stands in for the API with `--offline`: a signed-in user with no courses.
struct NoProgress;

#[async_trait(?Send)]
impl ProgressSource for NoProgress {
    async fn fetch_progress(&self) -> Result<Vec<CourseRecord>, ProgressFetchError> {
        Ok(Vec::new())
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Render,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Render,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let env = PreviewEnv::from_process();
    let parsed = Args::parse(&mut argv.into_iter(), env).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let services = WidgetServices::new(
        Arc::new(Catalog::odyssey().clone()),
        &parsed.storage(),
        parsed.progress_source(),
    );

    match cmd {
        Command::Tracks => {
            let active = services.track_selection().initial_track();
            for track in services.track_selection().tracks() {
                let marker = if track == active { '*' } else { ' ' };
                println!("{marker} {track}");
            }
        }
        Command::Render => {
            let mut session = services.start_session();
            session.load().await;
            if let Some(track) = parsed.select.clone() {
                session.select_track(track);
            }
            info!(track = %session.state().selected_track(), "rendering preview");

            let styles = WidgetStyles::from_config(&parsed.config);
            let markup = render_session(&session, &parsed.config);
            println!(
                "<div id=\"{WIDGET_ELEMENT_ID}\" style=\"{}\">{markup}</div>",
                styles.widget
            );
        }
    }

    Ok(())
}
