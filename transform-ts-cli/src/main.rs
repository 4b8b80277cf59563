use anyhow::Context;
use clap::Parser;
use std::fs;
use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use transform_ts::Collection;
use transform_ts::ReplaceMissingSymbolsStep;
use transform_ts::ResolveOptions;
use transform_ts::Step;

#[derive(Parser)]
#[command(
  name = "transform-ts",
  version,
  about = "Resolve missing symbol placeholders in transformed TypeScript types"
)]
struct Cli {
  /// JSON array of transformed types; omit for stdin.
  #[arg(short, long)]
  input: Option<PathBuf>,

  /// Output destination; omit for stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// JSON file with resolve options (`unknownType`, `parallel`).
  #[arg(long)]
  config: Option<PathBuf>,

  /// Replacement for symbols that no type declares.
  #[arg(long, value_name = "TYPE")]
  unknown_type: Option<String>,

  /// Resolve types in parallel.
  #[arg(long)]
  parallel: bool,

  /// Pretty-print the output JSON.
  #[arg(long)]
  pretty: bool,

  /// Emit tracing spans (JSON) on stderr.
  #[arg(long)]
  trace: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.trace);
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> anyhow::Result<()> {
  let options = load_options(&cli)?;

  let input_name = cli
    .input
    .as_ref()
    .map(|p| p.display().to_string())
    .unwrap_or_else(|| "<stdin>".to_string());
  let mut source = String::new();
  match cli.input.as_ref() {
    Some(p) => File::open(p)
      .and_then(|mut f| f.read_to_string(&mut source))
      .with_context(|| format!("failed to read {input_name}"))?,
    None => stdin()
      .read_to_string(&mut source)
      .context("failed to read <stdin>")?,
  };
  let collection: Collection =
    serde_json::from_str(&source).with_context(|| format!("invalid types in {input_name}"))?;

  let resolved = ReplaceMissingSymbolsStep::new(options).execute(collection);

  let mut output = if cli.pretty {
    serde_json::to_vec_pretty(&resolved)?
  } else {
    serde_json::to_vec(&resolved)?
  };
  output.push(b'\n');
  match cli.output.as_ref() {
    Some(p) => fs::write(p, &output).with_context(|| format!("failed to write {}", p.display()))?,
    None => stdout()
      .write_all(&output)
      .context("failed to write <stdout>")?,
  };
  Ok(())
}

fn load_options(cli: &Cli) -> anyhow::Result<ResolveOptions> {
  let mut options = match cli.config.as_ref() {
    Some(p) => {
      let raw = fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))?;
      ResolveOptions::from_json_str(&raw).with_context(|| format!("invalid config {}", p.display()))?
    }
    None => ResolveOptions::default(),
  };
  if let Some(unknown_type) = cli.unknown_type.clone() {
    options = options.with_unknown_type(unknown_type);
  }
  if cli.parallel {
    options = options.with_parallel(true);
  }
  options.validate().context("invalid options")?;
  Ok(options)
}

fn init_tracing(enabled: bool) {
  if !enabled {
    return;
  }
  let _ = tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_span_events(FmtSpan::CLOSE)
    .with_max_level(Level::DEBUG)
    .json()
    .with_ansi(false)
    .try_init();
}
