use clap::{Parser, Subcommand};
use env_logger::Env;
use scopeunit::config::Config;
use scopeunit::unit::{ScaledValue, Scaling, Unit, UnitError, UnitKind};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scopeunit")]
#[command(about = "Format and parse measurement values with SI prefixes", long_about = None)]
struct Cli {
    /// Config file (default: scopeunit.toml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format raw values for display (e.g. 1500 volts -> "1.500 kV")
    Format {
        /// Raw values in the unit's base representation
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Unit kind name (e.g. "volts", "ps") or numeric code
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Print JSON instead of one line per value
        #[arg(long)]
        json: bool,

        /// Fail on an unknown unit instead of printing "Invalid unit"
        #[arg(long)]
        strict: bool,
    },

    /// Parse typed values back to raw values (e.g. "2.5n" picoseconds -> 2500)
    Parse {
        /// Text with an optional prefix letter (G, M, K, m, u, n, p)
        #[arg(required = true, allow_hyphen_values = true)]
        texts: Vec<String>,

        /// Unit kind name (e.g. "volts", "ps") or numeric code
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Print JSON instead of one line per value
        #[arg(long)]
        json: bool,

        /// Fail on text without a number instead of returning 0
        #[arg(long)]
        strict: bool,
    },

    /// List the known unit kinds
    Kinds {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct FormatRecord {
    value: f64,
    text: String,
    scaled: Option<ScaledValue>,
}

#[derive(Serialize)]
struct ParseRecord<'a> {
    text: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct KindRecord {
    code: u32,
    name: UnitKind,
    suffix: &'static str,
    scaling: Scaling,
    decimals: usize,
}

fn main() {
    let cli = Cli::parse();

    // Default level depends on --debug, RUST_LOG overrides it
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Format {
            values,
            unit,
            json,
            strict,
        } => {
            let unit = resolve_unit(unit, &config)?;
            format_values(unit, &values, json || config.json, strict || config.strict)
        }
        Commands::Parse {
            texts,
            unit,
            json,
            strict,
        } => {
            let unit = resolve_unit(unit, &config)?;
            parse_texts(unit, &texts, json || config.json, strict || config.strict)
        }
        Commands::Kinds { json } => list_kinds(json || config.json),
    }
}

/// Flag first, then config, otherwise there is nothing to format with
fn resolve_unit(flag: Option<Unit>, config: &Config) -> Result<Unit, UnitError> {
    flag.or_else(|| config.unit.map(Unit::new)).ok_or_else(|| {
        UnitError::Config("no unit kind given, pass --unit or set `unit` in the config".into())
    })
}

fn format_values(
    unit: Unit,
    values: &[f64],
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = Vec::with_capacity(values.len());
    for &value in values {
        let text = if strict {
            unit.try_pretty_print(value)?
        } else {
            unit.pretty_print(value)
        };
        records.push(FormatRecord {
            value,
            text,
            scaled: unit.scale(value).ok(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", record.text);
        }
    }

    Ok(())
}

fn parse_texts(
    unit: Unit,
    texts: &[String],
    json: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = Vec::with_capacity(texts.len());
    for text in texts {
        let value = if strict {
            unit.try_parse(text)?
        } else {
            unit.parse_string(text)
        };
        records.push(ParseRecord { text, value });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", record.value);
        }
    }

    Ok(())
}

fn list_kinds(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<KindRecord> = UnitKind::ALL
        .iter()
        .map(|&kind| KindRecord {
            code: kind.code(),
            name: kind,
            suffix: kind.suffix(),
            scaling: kind.scaling(),
            decimals: kind.decimals(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("Unit kinds ({}):", records.len());
    for record in &records {
        println!(
            "  {:>2}  {:<12} {:<4} {:?}",
            record.code,
            record.name.name(),
            record.suffix,
            record.scaling
        );
    }

    Ok(())
}
