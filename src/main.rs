use clap::{Parser, Subcommand};
use dialoguer::Input;
use wrapcfg::{AppError, InitOptions};

#[derive(Parser)]
#[command(name = "wrapcfg")]
#[command(version)]
#[command(
    about = "Author and validate wrap.config build settings",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a wrap.config file in the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// Reverse-domain application identifier (e.g. com.example.app)
        #[arg(long)]
        app_id: Option<String>,
        /// Human-readable application name
        #[arg(long)]
        app_name: Option<String>,
        /// Directory with compiled web assets (default: dist)
        #[arg(long)]
        web_dir: Option<String>,
        /// Bundle a web-view runtime into the native package
        #[arg(long)]
        bundled_web_runtime: bool,
        /// Write wrap.config.json instead of wrap.config.toml
        #[arg(long)]
        json: bool,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Validate the wrap.config file
    #[clap(visible_alias = "c")]
    Check,
    /// Print the resolved configuration as JSON
    Show,
    /// Update one configuration key in place
    Set {
        /// Key: appId, appName, webDir, or bundledWebRuntime
        key: String,
        /// New value for the key
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { app_id, app_name, web_dir, bundled_web_runtime, json, force } => {
            run_init(app_id, app_name, web_dir, bundled_web_runtime, json, force)
        }
        Commands::Check => wrapcfg::check().map(|_| ()),
        Commands::Show => wrapcfg::show().map(|json| println!("{}", json)),
        Commands::Set { key, value } => wrapcfg::set(&key, &value),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(
    app_id: Option<String>,
    app_name: Option<String>,
    web_dir: Option<String>,
    bundled_web_runtime: bool,
    json: bool,
    force: bool,
) -> Result<(), AppError> {
    let app_id = match app_id {
        Some(id) => id,
        None => prompt("Application identifier (e.g. com.example.app)")?,
    };
    let app_name = match app_name {
        Some(name) => name,
        None => prompt("Application name")?,
    };

    let options = InitOptions { app_id, app_name, web_dir, bundled_web_runtime, json, force };
    wrapcfg::init(&options).map(|_| ())
}

fn prompt(label: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read {}: {}", label, err)))
}
