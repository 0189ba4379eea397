use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use sfpinfo_core::{
    AnalysisError, DEFAULT_GENERATED_AT, DumpFileSource, DumpFormat, LengthStatus,
    LengthSummary, MapSize, Report, SourceError, fetch_a0_map, format_hex_dump,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("SFPINFO_BUILD_COMMIT"),
    ", built ",
    env!("SFPINFO_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  sfpinfo a0 decode module.bin -o report.json\n  sfpinfo a0 decode module.hex --text\n  sfpinfo a0 hexdump module.bin --map-size 128";

#[derive(Parser, Debug)]
#[command(name = "sfpinfo")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for SFF-8472 SFP/SFP+ module EEPROM dumps (A0h serial ID).",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on the A0h serial ID map.
    A0 {
        #[command(subcommand)]
        command: A0Commands,
    },
}

#[derive(Subcommand, Debug)]
enum A0Commands {
    /// Decode a dump and generate a versioned JSON report.
    #[command(alias = "parse")]
    #[command(after_help = EXAMPLES)]
    Decode {
        /// Path to a .bin/.eeprom (raw) or .hex/.txt (hex text) dump
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present_any = ["stdout", "text"])]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Print a human-readable interpretation instead of JSON
        #[arg(long, conflicts_with_all = ["report", "stdout"])]
        text: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code unless the module is SFP/SFP+
        #[arg(long)]
        strict: bool,

        /// Number of A0h bytes to read (64, 128 or 256)
        #[arg(long, default_value_t = 64)]
        map_size: usize,
    },
    /// Print the A0h bytes as a hex dump.
    Hexdump {
        /// Path to a .bin/.eeprom (raw) or .hex/.txt (hex text) dump
        input: PathBuf,

        /// Number of A0h bytes to read (64, 128 or 256)
        #[arg(long, default_value_t = 64)]
        map_size: usize,
    },
}

struct DecodeOptions {
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    text: bool,
    pretty: bool,
    quiet: bool,
    strict: bool,
    map_size: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = matches!(
        &cli.command,
        Commands::A0 {
            command: A0Commands::Decode { quiet: true, .. }
        }
    );
    init_logging(cli.verbose, quiet);

    let result = match cli.command {
        Commands::A0 { command } => match command {
            A0Commands::Decode {
                input,
                report,
                stdout,
                text,
                pretty,
                compact: _,
                quiet,
                strict,
                map_size,
            } => cmd_a0_decode(DecodeOptions {
                input,
                report,
                stdout,
                text,
                pretty,
                quiet,
                strict,
                map_size,
            }),
            A0Commands::Hexdump { input, map_size } => cmd_a0_hexdump(input, map_size),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
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

fn cmd_a0_decode(opts: DecodeOptions) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&opts.input)?;
    validate_input_file(&resolved_input)?;
    let map_size = parse_map_size(opts.map_size)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    let report = if opts.stdout || opts.text {
        None
    } else {
        Some(opts.report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report, --stdout or --text".to_string()),
            )
        })?)
    };

    if let Some(report_path) = report.as_ref() {
        let report_abs = report_path
            .parent()
            .map(|parent| {
                if parent.as_os_str().is_empty() {
                    fs::canonicalize(".")
                } else {
                    fs::canonicalize(parent)
                }
            })
            .transpose()
            .with_context(|| format!("Failed to resolve output path: {}", report_path.display()))?;
        if let Some(report_dir) = report_abs {
            let report_target = report_dir.join(
                report_path
                    .file_name()
                    .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
            );
            if report_target == input_abs {
                return Err(CliError::new(
                    format!(
                        "report path must differ from input: {}",
                        report_path.display()
                    ),
                    Some("choose a different output path".to_string()),
                ));
            }
        }
    }

    log::debug!(
        "decoding {} ({} A0h bytes)",
        resolved_input.display(),
        map_size.bytes()
    );
    let mut rep = sfpinfo_core::analyze_dump_file(&resolved_input, map_size)
        .map_err(|err| analysis_error(err, map_size))?;
    rep.generated_at = now_rfc3339();

    if opts.text {
        print!("{}", render_text(&rep));
        return check_strict(&rep, opts.strict);
    }

    let json = serialize_report(&rep, opts.pretty)?;
    match report {
        None => print!("{}", json),
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report, json)
                .with_context(|| format!("Failed to write report: {}", report.display()))?;
            if !opts.quiet {
                eprintln!("OK: report written -> {}", report.display());
            }
        }
    }
    check_strict(&rep, opts.strict)
}

fn cmd_a0_hexdump(input: PathBuf, map_size: usize) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let map_size = parse_map_size(map_size)?;

    let mut source = DumpFileSource::open(&resolved_input)
        .map_err(|err| analysis_error(AnalysisError::Source(err), map_size))?;
    let map = fetch_a0_map(&mut source, map_size)
        .map_err(|err| analysis_error(AnalysisError::Source(err), map_size))?;
    print!("{}", format_hex_dump(map.as_bytes()));
    Ok(())
}

fn analysis_error(err: AnalysisError, map_size: MapSize) -> CliError {
    let hint = match &err {
        AnalysisError::Source(SourceError::ShortTransfer { transferred, .. }) => Some(format!(
            "dump holds {} A0h bytes; use a complete dump or a --map-size below {}",
            transferred,
            map_size.bytes()
        )),
        AnalysisError::Source(SourceError::Dump(_)) => {
            Some("check the dump contents; hex dumps take two-digit bytes per token".to_string())
        }
        _ => None,
    };
    CliError::new(format!("EEPROM dump decoding failed: {}", err), hint)
}

fn check_strict(rep: &Report, strict: bool) -> Result<(), CliError> {
    let supported = rep
        .module
        .as_ref()
        .is_some_and(|module| module.identifier.supported);
    if strict && !supported {
        let name = rep
            .module
            .as_ref()
            .map(|module| format!("{} (0x{:02X})", module.identifier.name, module.identifier.code))
            .unwrap_or_else(|| "no module".to_string());
        return Err(CliError::new(
            format!("module is not SFP/SFP+: {}", name),
            Some("drop --strict to decode other module types".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string())
}

fn render_text(rep: &Report) -> String {
    let Some(module) = rep.module.as_ref() else {
        return "No module data decoded\n".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!(
        "Byte 0 - Identifier: 0x{:02X} ({})\n",
        module.identifier.code, module.identifier.name
    ));
    if module.identifier.supported {
        out.push_str("SFP/SFP+ module identified\n");
    } else {
        out.push_str("Module not supported or invalid\n");
    }
    out.push_str(&format!("Medium: {}\n", module.medium));

    for entry in &module.lengths {
        out.push('\n');
        out.push_str(&format!("Byte {} - {}\n", entry.offset, length_label(entry)));
        out.push_str(&length_line(entry));
        out.push('\n');
    }
    out
}

fn length_label(entry: &LengthSummary) -> &'static str {
    match entry.field.as_str() {
        "smf" => "Length single-mode fiber",
        "om2" => "Length OM2 (50 um)",
        "om1" => "Length OM1 (62.5 um)",
        "om4" => "Length OM4 (50 um)",
        "copper" => "Length copper cable",
        _ => "Length",
    }
}

fn length_line(entry: &LengthSummary) -> String {
    match entry.status {
        LengthStatus::Valid => format!("Length: {} m", entry.meters),
        LengthStatus::Extended => format!("Length: more than {} m", entry.meters),
        LengthStatus::NotSpecified => "Length not specified".to_string(),
    }
}

fn parse_map_size(bytes: usize) -> Result<MapSize, CliError> {
    MapSize::from_bytes(bytes).ok_or_else(|| {
        CliError::new(
            format!("unsupported map size: {}", bytes),
            Some("use 64, 128 or 256".to_string()),
        )
    })
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .bin, .eeprom, .hex or .txt dump".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .bin, .eeprom, .hex or .txt dump".to_string()),
        ));
    }
    if DumpFormat::from_path(input).is_none() {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .bin, .eeprom, .hex or .txt dump".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
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
            Some("pass a single dump file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
