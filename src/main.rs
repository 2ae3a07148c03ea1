use colored::{ColoredString, Colorize};
use faas_cli::config::{self, RemoveConfig, Settings};
use faas_cli::gateway::GatewayClient;
use faas_cli::resolver::ResolveError;
use faas_cli::{remove, stack};
use log::debug;
use std::path::PathBuf;
use structopt::StructOpt;

const GIT_COMMIT: &str = match option_env!("GIT_COMMIT") {
    Some(commit) => commit,
    None => "dev",
};

const BANNER: &str = r#"  ___                   _____           ____
 / _ \ _ __   ___ _ __ |  ___|_ _  __ _/ ___|
| | | | '_ \ / _ \ '_ \| |_ / _` |/ _` \___ \
| |_| | |_) |  __/ | | |  _| (_| | (_| |___) |
 \___/| .__/ \___|_| |_|_|  \__,_|\__,_|____/
      |_|
"#;

#[derive(Debug, StructOpt)]
#[structopt(name = "faas-cli", about = "Manage functions on an OpenFaaS gateway")]
struct Opt {
    /// TOML settings file providing a default gateway and network
    #[structopt(long, global = true, parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Remove deployed OpenFaaS functions, either every function in a stack
    /// file or a single function given by name
    #[structopt(name = "remove", visible_alias = "rm")]
    Remove {
        /// Name of the deployed function
        #[structopt(long)]
        name: Option<String>,

        /// Gateway URI [default: http://localhost:8080]
        #[structopt(long)]
        gateway: Option<String>,

        /// Path or URL of a stack file; its functions take priority over FUNCTION_NAME
        #[structopt(short = "f", long = "yaml")]
        yaml: Option<String>,

        #[structopt(name = "FUNCTION_NAME")]
        function: Option<String>,
    },

    /// Display the client's version information
    Version {
        /// Just print the git SHA
        #[structopt(long)]
        short_version: bool,
    },
}

/// Colours for status lines.
trait Status {
    fn failure(&self) -> ColoredString;
    fn label(&self) -> ColoredString;
}

impl Status for str {
    fn failure(&self) -> ColoredString {
        self.red().bold()
    }

    fn label(&self) -> ColoredString {
        self.cyan()
    }
}

fn missing_target_message() -> String {
    ResolveError::MissingTarget.to_string()
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    match path {
        Some(path) => match config::load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!(
                    "{} {}: {}",
                    "Invalid settings file".failure(),
                    path.to_string_lossy(),
                    e
                );
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    }
}

fn run_remove(config: RemoveConfig, function: Option<String>) {
    debug!("remove with {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match remove::run_with(
        stack::parse_stack_file,
        &config,
        function.as_deref(),
        &GatewayClient::new(),
        &mut out,
    ) {
        Ok(count) => debug!("attempted {} deletion(s)", count),
        Err(ResolveError::MissingTarget) => {
            // A usage mistake, not a failure: exit status stays 0.
            println!("{}", missing_target_message());
        }
        Err(e) => {
            eprintln!("{}", e.to_string().failure());
            std::process::exit(1);
        }
    }
}

fn run_version(short_version: bool) {
    if short_version {
        println!("{}", GIT_COMMIT);
    } else {
        print!("{}", BANNER);
        println!("{} {}", "Git Commit:".label(), GIT_COMMIT);
    }
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    let settings = load_settings(opt.config.as_ref());

    match opt.cmd {
        Command::Remove {
            name,
            gateway,
            yaml,
            function,
        } => run_remove(RemoveConfig::new(&settings, gateway, name, yaml), function),
        Command::Version { short_version } => run_version(short_version),
    }
}
