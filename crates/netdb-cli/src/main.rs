use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use glob::glob;
use log::{LevelFilter, debug};
use netdb_core::{
    Database, DatabaseConfig, EtherTypeIndex, EtherTypeRecord, ProtocolIndex, ProtocolRecord,
    ServiceIndex, ServiceRecord,
};
use serde::Serialize;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("NETDB_BUILD_COMMIT"),
    " ",
    env!("NETDB_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = concat!(
    "Examples:\n",
    "  netdb service domain --proto udp\n",
    "  netdb protocol 17\n",
    "  netdb ethertype 0x86dd --json\n",
    "  netdb --system service 8080\n",
    "  netdb --no-builtin --protocols /etc/protocols list protocols",
);

#[derive(Parser, Debug)]
#[command(name = "netdb")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Look up network protocols, services and EtherTypes in builtin tables or /etc files.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(flatten)]
    sources: SourceArgs,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON database configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Layer the /etc/protocols, /etc/services and /etc/ethertypes files that exist
    #[arg(long, global = true, conflicts_with = "config")]
    system: bool,

    /// protocols(5) file layered over the builtin table
    #[arg(long, global = true)]
    protocols: Option<PathBuf>,

    /// services(5) file layered over the builtin table
    #[arg(long, global = true)]
    services: Option<PathBuf>,

    /// ethertypes file layered over the builtin table
    #[arg(long, global = true)]
    ethertypes: Option<PathBuf>,

    /// Ignore the builtin tables and use only the given files
    #[arg(long, global = true)]
    no_builtin: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a protocol by name, alias or decimal number.
    Protocol { query: String },
    /// Look up a service by name, alias or port.
    Service {
        query: String,

        /// Protocol the service runs on (e.g. tcp, udp); any protocol if omitted
        #[arg(short, long, default_value = "")]
        proto: String,
    },
    /// Look up an EtherType by name, alias or hex number (0x prefix optional).
    #[command(alias = "ether")]
    Ethertype { query: String },
    /// List every record of a table.
    List {
        #[arg(value_enum)]
        table: Table,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Table {
    Protocols,
    Services,
    Ethertypes,
}

#[derive(Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
    PrettyJson,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(err.code)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
    code: u8,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
            code: 2,
        }
    }

    fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint.into()),
            code: 1,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = build_config(&cli.sources)?;
    debug!("database configuration: {:?}", config);
    let db = Database::load(&config).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("fix the file or omit the option to use the builtin table".to_string()),
        )
    })?;
    let format = if cli.pretty {
        OutputFormat::PrettyJson
    } else if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Commands::Protocol { query } => {
            let record = find_protocol(&db.protocols, &query).ok_or_else(|| {
                CliError::not_found(
                    format!("no protocol matches '{}'", query),
                    "names are case-sensitive; numbers are decimal (0-255)",
                )
            })?;
            print_record(record.as_ref(), format)
        }
        Commands::Service { query, proto } => {
            let record = find_service(&db.services, &query, &proto).ok_or_else(|| {
                let hint = if proto.is_empty() {
                    "names are case-sensitive; ports are decimal (0-65535)".to_string()
                } else {
                    format!("no '{}' service with this name or port; try without --proto", proto)
                };
                CliError::not_found(format!("no service matches '{}'", query), hint)
            })?;
            print_record(record.as_ref(), format)
        }
        Commands::Ethertype { query } => {
            let record = find_ethertype(&db.ethertypes, &query).ok_or_else(|| {
                CliError::not_found(
                    format!("no EtherType matches '{}'", query),
                    "numbers are hexadecimal, e.g. 0800 or 0x0800",
                )
            })?;
            print_record(record.as_ref(), format)
        }
        Commands::List { table } => list(&db, table, format),
    }
}

fn build_config(sources: &SourceArgs) -> Result<DatabaseConfig, CliError> {
    let mut config = match &sources.config {
        Some(path) => {
            let path = resolve_input_path(path)?;
            DatabaseConfig::from_json_file(&path).map_err(|err| {
                let hint = "expected a JSON object with protocols, services, ethertypes, builtin";
                CliError::new(err.to_string(), Some(hint.to_string()))
            })?
        }
        None if sources.system => DatabaseConfig::system().existing_only(),
        None => DatabaseConfig::default(),
    };
    if let Some(path) = &sources.protocols {
        config.protocols = Some(resolve_input_path(path)?);
    }
    if let Some(path) = &sources.services {
        config.services = Some(resolve_input_path(path)?);
    }
    if let Some(path) = &sources.ethertypes {
        config.ethertypes = Some(resolve_input_path(path)?);
    }
    if sources.no_builtin {
        config.builtin = false;
    }
    Ok(config)
}

fn find_protocol<'a>(index: &'a ProtocolIndex, query: &str) -> Option<&'a Arc<ProtocolRecord>> {
    index
        .by_name(query)
        .or_else(|| query.parse::<u8>().ok().and_then(|number| index.by_number(number)))
}

fn find_service<'a>(
    index: &'a ServiceIndex,
    query: &str,
    proto: &str,
) -> Option<&'a Arc<ServiceRecord>> {
    index
        .by_name(query, proto)
        .or_else(|| query.parse::<u16>().ok().and_then(|port| index.by_port(port, proto)))
}

fn find_ethertype<'a>(
    index: &'a EtherTypeIndex,
    query: &str,
) -> Option<&'a Arc<EtherTypeRecord>> {
    let digits = query
        .strip_prefix("0x")
        .or_else(|| query.strip_prefix("0X"))
        .unwrap_or(query);
    index.by_name(query).or_else(|| {
        u16::from_str_radix(digits, 16)
            .ok()
            .and_then(|number| index.by_number(number))
    })
}

fn print_record<T: Display + Serialize>(record: &T, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => println!("{}", record),
        OutputFormat::Json | OutputFormat::PrettyJson => println!("{}", to_json(record, format)?),
    }
    Ok(())
}

fn print_records<T: Display + Serialize>(
    records: &[&T],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for record in records {
                println!("{}", record);
            }
        }
        OutputFormat::Json | OutputFormat::PrettyJson => println!("{}", to_json(&records, format)?),
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    let json = match format {
        OutputFormat::PrettyJson => serde_json::to_string_pretty(value),
        _ => serde_json::to_string(value),
    };
    json.context("JSON serialization failed").map_err(Into::into)
}

fn list(db: &Database, table: Table, format: OutputFormat) -> Result<(), CliError> {
    match table {
        Table::Protocols => {
            let mut records: Vec<_> = db.protocols.records().map(|r| r.as_ref()).collect();
            records.sort_by_key(|r| r.number);
            print_records(&records, format)
        }
        Table::Services => {
            let mut records: Vec<_> = db.services.records().map(|r| r.as_ref()).collect();
            records.sort_by(|a, b| {
                a.port
                    .cmp(&b.port)
                    .then_with(|| a.protocol_name.cmp(&b.protocol_name))
            });
            print_records(&records, format)
        }
        Table::Ethertypes => {
            let mut records: Vec<_> = db.ethertypes.records().map(|r| r.as_ref()).collect();
            records.sort_by_key(|r| r.number);
            print_records(&records, format)
        }
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("check the path or omit the option to use the builtin table".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a protocols, services, ethertypes or JSON config file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        validate_input_file(input)?;
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single file per table".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
