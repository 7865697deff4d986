//! CLI for the persona variant filter.
//!
//! Pipeline: load records -> filter by variant + criteria -> render or sink.

use clap::{Parser, Subcommand};
use persona_core::{AdminCriteria, FieldMap, Person, PersonaResult, UserCriteria};
use persona_dataset::{JsonFileSource, PersonSource, SampleSource};
use persona_filter::reporter::{self, FilterReport};
use persona_filter::sink::json_stream::JsonStreamSink;
use persona_filter::Filtered;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "persona",
    version,
    about = "Filter tagged person records by variant and exact field values"
)]
struct Cli {
    /// Dataset file, a JSON array or NDJSON. Defaults to the built-in sample.
    #[arg(short, long, global = true, env = "PERSONA_DATASET")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Select records of one variant whose fields equal the given values.
    Filter {
        /// Variant to select: "user" or "admin".
        variant: String,

        /// Exact-match constraint, repeatable. VALUE is read as JSON when it
        /// parses (`age=23`), otherwise as a string (`role=World saver`).
        #[arg(
            short = 'w',
            long = "where",
            value_name = "FIELD=VALUE",
            value_parser = parse_constraint
        )]
        constraints: Vec<(String, Value)>,

        #[arg(long, default_value_t = false)]
        json: bool,

        /// Print the summary box above the matches.
        #[arg(long, default_value_t = false)]
        report: bool,

        /// Sink output: "ndjson" writes NDJSON to stdout,
        /// "ndjson:/path/to/file" writes to file.
        #[arg(long)]
        sink: Option<String>,
    },

    /// Print every record in the dataset.
    List,

    /// Show users and admins of age 23.
    Demo,
}

fn parse_constraint(raw: &str) -> Result<(String, Value), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {raw:?}"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("empty field name in {raw:?}"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((field.to_string(), value))
}

fn load_persons(input: Option<&Path>) -> PersonaResult<(Vec<Person>, String)> {
    let source: Box<dyn PersonSource> = match input {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource),
    };
    let persons = source.load()?;
    Ok((persons, source.describe()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (persons, source) = load_persons(cli.input.as_deref())?;

    match cli.command {
        Commands::Filter {
            variant,
            constraints,
            json,
            report,
            sink,
        } => {
            let t0 = Instant::now();
            let fields: FieldMap = constraints.into_iter().collect();

            tracing::info!(
                source = %source,
                variant = %variant,
                criteria = %reporter::describe_criteria(&fields),
                "filtering"
            );

            // 1. Filter. Bad variant or criteria keys fail here, before any output.
            let filtered = persona_filter::filter_dynamic(&persons, &variant, &fields)?;
            let summary =
                FilterReport::build(source, &fields, persons.len(), &filtered, t0.elapsed());

            tracing::info!(
                scanned = summary.scanned,
                matched = summary.matched,
                elapsed_us = summary.elapsed.as_micros() as u64,
                "filter complete"
            );

            // 2. Output.
            if let Some(ref sink_spec) = sink {
                let row = summary.to_summary_row();
                if sink_spec == "ndjson" {
                    let mut s = JsonStreamSink::stdout();
                    s.write_summary(&row)?;
                    s.write_persons(&filtered.clone().into_persons())?;
                    let n = s.finish()?;
                    tracing::info!(rows = n, "ndjson sink: wrote to stdout");
                } else if let Some(path) = sink_spec.strip_prefix("ndjson:") {
                    let file = std::fs::File::create(path)?;
                    let mut s = JsonStreamSink::new(file);
                    s.write_summary(&row)?;
                    s.write_persons(&filtered.clone().into_persons())?;
                    let n = s.finish()?;
                    tracing::info!(rows = n, path, "ndjson sink: wrote to file");
                } else {
                    return Err(format!(
                        "Unknown sink: {sink_spec}. Use 'ndjson' or 'ndjson:/path'"
                    )
                    .into());
                }

                // Still print the report to stderr so it's visible.
                eprint!("{}", summary.render(&filtered));
            } else if json {
                println!("{}", serde_json::to_string_pretty(&filtered.into_persons())?);
            } else if report {
                print!("{}", summary.render(&filtered));
            } else {
                let title = summary.title();
                let out = match &filtered {
                    Filtered::Users(users) => reporter::render_list(&title, users),
                    Filtered::Admins(admins) => reporter::render_list(&title, admins),
                };
                print!("{out}");
            }
        }

        Commands::List => {
            tracing::info!(source = %source, records = persons.len(), "listing");
            print!("{}", reporter::render_list("Persons:", &persons));
        }

        Commands::Demo => {
            let users = persona_filter::filter_users(&persons, &UserCriteria::new().with_age(23));
            print!("{}", reporter::render_list("Users of age 23:", &users));
            println!();
            let admins =
                persona_filter::filter_admins(&persons, &AdminCriteria::new().with_age(23));
            print!("{}", reporter::render_list("Admins of age 23:", &admins));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_values_parse_as_json_then_string() {
        assert_eq!(
            parse_constraint("age=23").unwrap(),
            ("age".to_string(), Value::from(23))
        );
        assert_eq!(
            parse_constraint("role=World saver").unwrap(),
            ("role".to_string(), Value::from("World saver"))
        );
        assert_eq!(
            parse_constraint("name=\"42\"").unwrap(),
            ("name".to_string(), Value::from("42"))
        );
    }

    #[test]
    fn constraint_requires_field_and_equals() {
        assert!(parse_constraint("age").is_err());
        assert!(parse_constraint("=23").is_err());
    }

    #[test]
    fn cli_parses_repeated_constraints() {
        let cli = Cli::try_parse_from([
            "persona", "filter", "admin", "-w", "age=23", "--where", "role=Anti-virus engineer",
        ])
        .unwrap();
        match cli.command {
            Commands::Filter {
                variant,
                constraints,
                ..
            } => {
                assert_eq!(variant, "admin");
                assert_eq!(constraints.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn default_source_is_sample() {
        let (persons, source) = load_persons(None).unwrap();
        assert_eq!(persons.len(), 6);
        assert_eq!(source, "built-in sample");
    }
}
