mod fixtures;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use deploy_core::model::{Job, JobId, User};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, PageReloader, UiApp, WebviewReloader, build_app_context};

const APP_NAME: &str = "Deploy Console";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--jobs <file.json>] [--user <file.json>] [--offline]");
    eprintln!("  cargo run -p app -- status [--jobs <file.json>]");
    eprintln!();
    eprintln!("Files:");
    eprintln!("  --jobs   JSON array of jobs: {{id, steps, completed_steps, ...}}");
    eprintln!("  --user   JSON object with username/first_name/last_name/email");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DEPLOY_JOBS_FILE, DEPLOY_USER_FILE, DEPLOY_OFFLINE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    jobs_file: Option<PathBuf>,
    user_file: Option<PathBuf>,
    offline: bool,
    help: bool,
}

impl Args {
    /// Environment first, flags override.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut parsed = Self {
            jobs_file: non_empty("DEPLOY_JOBS_FILE").map(PathBuf::from),
            user_file: non_empty("DEPLOY_USER_FILE").map(PathBuf::from),
            offline: non_empty("DEPLOY_OFFLINE").is_some_and(|value| parse_flag(&value)),
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--jobs" => parsed.jobs_file = Some(require_path(args, "--jobs")?),
                "--user" => parsed.user_file = Some(require_path(args, "--user")?),
                "--offline" => parsed.offline = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn split_command(mut argv: Vec<String>) -> Result<(Command, Vec<String>), ArgsError> {
    // Launching the UI is the default when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.to_owned()))?
        }
    };

    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }
    Ok((cmd, argv))
}

struct DesktopApp {
    jobs: Vec<Job>,
    user: User,
    offline: bool,
    reloader: Arc<WebviewReloader>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    fn job(&self, id: &JobId) -> Option<Job> {
        self.jobs.iter().find(|job| &job.id == id).cloned()
    }

    fn initial_user(&self) -> User {
        self.user.clone()
    }

    fn starts_offline(&self) -> bool {
        self.offline
    }

    fn page_reloader(&self) -> Arc<dyn PageReloader> {
        self.reloader.clone()
    }
}

fn load_jobs(args: &Args) -> Result<Vec<Job>, fixtures::LoadError> {
    match args.jobs_file.as_deref() {
        Some(path) => fixtures::load_jobs(path),
        None => Ok(Vec::new()),
    }
}

fn status_lines(jobs: &[Job]) -> Vec<String> {
    jobs.iter()
        .map(|job| format!("{}\t{}\t{}", job.id, job.progress(), job.status.label()))
        .collect()
}

const DEFAULT_LOG_FILTER: &str = "info";

/// `RUST_LOG` when it parses, otherwise the default level.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (cmd, argv) = split_command(argv).inspect_err(|_| print_usage())?;

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let jobs = load_jobs(&parsed)?;

    match cmd {
        Command::Status => {
            for line in status_lines(&jobs) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Ui => {
            let user = match parsed.user_file.as_deref() {
                Some(path) => fixtures::load_user(path)?,
                None => User::empty(),
            };
            tracing::info!(
                jobs = jobs.len(),
                logged_in = user.is_logged_in(),
                offline = parsed.offline,
                "launching desktop ui"
            );

            let app = DesktopApp {
                jobs,
                user,
                offline: parsed.offline,
                reloader: Arc::new(WebviewReloader),
            };
            let context = build_app_context(Arc::new(app));

            // Some window managers default to always-on-top in dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        tracing::error!(%err, "exiting");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
