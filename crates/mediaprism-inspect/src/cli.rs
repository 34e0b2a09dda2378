use clap::Parser;

/// Decode media envelope files and print one report line per file.
#[derive(Parser, Debug)]
#[command(name = "mediaprism-inspect")]
pub struct Cli {
    /// YAML config (decoder limits, output format); defaults apply when absent.
    #[arg(long)]
    pub config: Option<String>,
    /// Envelope files to decode.
    #[arg(required = true)]
    pub files: Vec<String>,
}
