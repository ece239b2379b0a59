mod output;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use command_options_core::{OptionSchema, OptionSpec, all_options, report_diagnostics};
use tracing_subscriber::EnvFilter;

use crate::output::{OutputFormat, format_demo_lines, format_resolution};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "OPTRESOLVE_LOG";

#[derive(Debug, Parser)]
#[command(name = "optresolve")]
#[command(about = "Resolve named command-line options against an option schema")]
#[command(version)]
struct Cli {
    /// Log resolution details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve arguments given after `--` against a schema file.
    Resolve(ResolveArgs),
    /// Validate a schema file.
    Check(CheckArgs),
    /// Resolve arguments against the built-in sample schema.
    Demo(DemoArgs),
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Schema file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    schema: PathBuf,
    /// Output format for resolved values.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
    /// Exit with an error status if any diagnostic is reported.
    #[arg(long)]
    strict: bool,
    /// Arguments to resolve.
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Schema file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    schema: PathBuf,
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Arguments to resolve.
    #[arg(last = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Resolve(args) => run_resolve(args),
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "command_options_core=debug,optresolve=debug"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn load_schema(path: &Path) -> Result<OptionSchema, String> {
    OptionSchema::load(path)
        .map_err(|err| format!("Failed to load schema '{}': {err}", path.display()))
}

fn run_resolve(args: ResolveArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    tracing::debug!(options = schema.len(), args = args.args.len(), "resolving");

    let resolution = all_options(&schema, args.args.as_slice());
    print!("{}", format_resolution(&schema, &resolution, args.format)?);

    report_diagnostics(&resolution.diagnostics, std::io::stderr().lock())
        .map_err(|err| format!("Failed to write diagnostics: {err}"))?;

    if args.strict && !resolution.is_clean() {
        return Err(format!(
            "{} diagnostic(s) reported in strict mode",
            resolution.diagnostics.len()
        ));
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let schema = load_schema(&args.schema)?;
    println!(
        "Schema '{}' is valid: {} option(s) ({}).",
        args.schema.display(),
        schema.len(),
        schema.long_names().join(", ")
    );
    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<(), String> {
    let schema = demo_schema();
    let resolution = all_options(&schema, args.args.as_slice());
    print!("{}", format_demo_lines(&schema, &resolution));

    report_diagnostics(&resolution.diagnostics, std::io::stderr().lock())
        .map_err(|err| format!("Failed to write diagnostics: {err}"))
}

fn demo_schema() -> OptionSchema {
    OptionSchema::from_specs(vec![
        OptionSpec::new("file", Some('f'), Some("foo.txt")).with_help("the file to blazblarg"),
        OptionSpec::new("name", Some('n'), Some("ibarland")).with_help("the primary blazlbarger"),
        OptionSpec::new("size", Some('s'), Some("98"))
            .with_help("how many blazzes to blarg (in dozens)"),
        OptionSpec::long_only("stuff", None).with_help("what to call your stuff"),
        OptionSpec::new("otherStuff", Some('o'), Some("blarg"))
            .with_help("the help info for other stuff"),
    ])
}
