use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use sqlhint::app::CompletionSession;
use sqlhint::app::ports::SchemaProvider;
use sqlhint::domain::{ConnectionId, SchemaState};
use sqlhint::error;
use sqlhint::infra::adapters::{FileSchemaProvider, InMemorySchemaProvider};
use sqlhint::infra::config::{AppConfig, CONFIG_ENV_VAR};
use sqlhint::logging;
use sqlhint::output::{self, OutputFormat};

/// Print completion suggestions for a cursor position in a SQL file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: <config_dir>/sqlhint/config.toml, or $SQLHINT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Schema document, overrides [schema].file
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Connection id inside the schema document
    #[arg(long)]
    connection: Option<String>,

    /// Current database
    #[arg(long)]
    database: Option<String>,

    /// 1-based cursor line
    #[arg(long)]
    line: usize,

    /// 1-based cursor column
    #[arg(long)]
    column: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// SQL file, or `-` for stdin
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;
    logging::init()?;

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let buffer = read_input(&args.input)?;

    let schema_file = args.schema.or_else(|| config.schema.file.clone());
    let provider: Arc<dyn SchemaProvider> = match schema_file {
        Some(path) => Arc::new(
            FileSchemaProvider::new(path).with_timeout_secs(config.schema.fetch_timeout_secs),
        ),
        None => {
            info!("no schema file configured, completing keywords and functions only");
            Arc::new(InMemorySchemaProvider::default())
        }
    };

    let session = CompletionSession::with_options(provider, config.session_options());
    let connection = args
        .connection
        .map(ConnectionId::from_string)
        .or_else(|| config.connection_id());
    let database = args.database.or_else(|| config.connection.database.clone());

    session.on_connection_changed(connection);
    if let Some(handle) = session.on_database_changed(database) {
        handle.await.wrap_err("schema refresh task failed")?;
    }
    // A failed spawned refresh has already been logged by the cache
    if session.schema_state() == SchemaState::NotLoaded && session.cache().key().is_bound() {
        if let Err(e) = session.refresh().await {
            warn!(error = %e, "schema unavailable, completing keywords and functions only");
        }
    }

    let suggestions = session.complete(&buffer, args.line, args.column);
    let range = session.replace_range(&buffer, args.line, args.column);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render(&mut out, args.format, &suggestions, range)?;

    Ok(())
}

/// An explicitly named config must exist; the default location is optional.
fn load_config(flag: Option<&Path>) -> Result<AppConfig> {
    let explicit = flag
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    let config = match explicit {
        Some(path) => AppConfig::load(&path)?,
        None => match AppConfig::default_path() {
            Some(path) => AppConfig::load_or_default(&path)?,
            None => AppConfig::default(),
        },
    };
    Ok(config)
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("Failed to read SQL from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(input).wrap_err_with(|| format!("Failed to read {}", input.display()))
}
