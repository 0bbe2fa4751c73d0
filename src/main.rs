use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use explaincode::config::Config;
use explaincode::explain::{ExplainClient, Language};
use explaincode::logging::init_tracing;
use explaincode::ui;
use explaincode::ui::session::SessionStore;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "explaincode",
    version,
    about = "Get natural-language explanations of Python and JavaScript code"
)]
struct Cli {
    /// Config file (default: ~/.config/explaincode/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the explain service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Language of the code
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Read the code from a file (stdin for `explain` when omitted)
    #[arg(short, long, value_name = "PATH", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Explain the code once and print the result instead of opening the UI
    Explain,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        tracing::error!(error = %format!("{:#}", err), "Exiting with error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
        config.validate()?;
    }
    if let Some(language) = cli.language {
        config.defaults.language = language;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = ExplainClient::new(&config.service).context("Failed to build HTTP client")?;

    match cli.command {
        Some(Command::Explain) => {
            let code = match cli.file.as_deref() {
                Some(path) => read_code_file(path)?,
                None => read_stdin()?,
            };
            let explanation = runtime.block_on(explain_once(&config, &client, code))?;
            println!("{}", explanation);
            Ok(())
        }
        None => {
            let code = cli.file.as_deref().map(read_code_file).transpose()?;
            ui::runtime::run(&config, client, code, runtime.handle())
                .context("Terminal UI failed")?;
            Ok(())
        }
    }
}

/// Explicit paths must exist; the default path falls back to defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' not found", path.display());
            }
            Ok(Config::load_from(path)?)
        }
        None => Ok(Config::load()?),
    }
}

async fn explain_once(
    config: &Config,
    client: &ExplainClient,
    code: String,
) -> anyhow::Result<String> {
    let language: Language = config.defaults.language;
    let mut session = SessionStore::new(language, config.defaults.response_policy);
    session.set_code(code.clone());
    session.explain_code(client, code, language).await;

    let state = session.state();
    if let Some(error) = state.error() {
        bail!("{}", error);
    }
    Ok(state.explanation().to_string())
}

fn read_code_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read code file '{}'", path.display()))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut code = String::new();
    std::io::stdin()
        .read_to_string(&mut code)
        .context("Failed to read code from stdin")?;
    Ok(code)
}
