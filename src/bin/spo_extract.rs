use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spo_extract::{ExtractorConfig, JsonDocParser, Result, TripleAssembler};

const DEMO_DOC: &str = include_str!("../../demos/reference.json");

#[derive(Debug, Parser)]
#[command(
    name = "spo-extract",
    about = "Extract subject-predicate-object triples from a dependency parse"
)]
struct Cli {
    /// Parse document (JSON). Use "-" for stdin. Defaults to a bundled demo.
    #[arg(long)]
    doc: Option<PathBuf>,

    /// Extractor configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print triples as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // a global subscriber may already be installed; keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("spo-extract: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let doc_json = match cli.doc.as_deref() {
        None => DEMO_DOC.to_string(),
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    let config = match cli.config.as_deref() {
        Some(path) => ExtractorConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ExtractorConfig::default(),
    };

    let mut parser = JsonDocParser::new();
    let text = parser.insert_json(&doc_json)?;
    let triples = TripleAssembler::with_config(config).extract(&parser, &text)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&triples)?);
        return Ok(());
    }

    println!("Extracting triples from:\n {text}");
    println!("Extracted SPO-triples:");
    for (i, triple) in triples.iter().enumerate() {
        println!("{}: {triple}", i + 1);
    }
    Ok(())
}
