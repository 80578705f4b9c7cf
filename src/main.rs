use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use jnlpgen::Bundle;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a JNLP descriptor from a JSON bundle description", long_about = None)]
struct Cli {
    /// JSON bundle description
    #[arg(value_name = "BUNDLE_JSON")]
    bundle_file: Utf8PathBuf,

    /// Where to write the JNLP descriptor
    #[arg(short, long, value_name = "FILE")]
    out: Utf8PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = std::fs::read_to_string(&cli.bundle_file)
        .with_context(|| format!("Open {}", cli.bundle_file))?;
    let bundle: Bundle = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse bundle description {}", cli.bundle_file))?;
    bundle
        .write_to_file(&cli.out)
        .with_context(|| format!("Failed to write {}", cli.out))?;
    Ok(())
}
