use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use logomotion::scan::{detect_pattern, RngDraw};
use logomotion::{
    normalize, Config, DirSink, Identity, MockCompiler, NullSink, OffsetMode, Sink, SourceMap,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Strategy {
    /// Flag random tokens
    Stochastic,
    /// Flag tokens starting with an uppercase character
    Pattern,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Offsets {
    Concatenated,
    TextAware,
}

#[derive(Parser, Debug)]
#[command(name = "logomotion")]
#[command(about = "Report diagnostic spans of a source file as editor and flat coordinates")]
#[command(version)]
struct Args {
    /// Source file to check
    file: PathBuf,

    #[arg(long, value_enum, default_value = "pattern")]
    strategy: Strategy,

    /// Seed for the stochastic strategy; draws from entropy if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Flag a token when a draw from 1..=10 exceeds this
    #[arg(long, default_value_t = logomotion_config::DEFAULT_FLAG_THRESHOLD)]
    threshold: u8,

    #[arg(long, value_enum, default_value = "text-aware")]
    offsets: Offsets,

    /// Lines are separated by `\r\n`; detected from the file if absent
    #[arg(long)]
    crlf: bool,

    /// User the artifact is stored for
    #[arg(long)]
    user: Option<String>,

    /// Directory to store artifacts in; nothing is stored if absent
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Artifact file name
    #[arg(long, default_value = "Main.java")]
    output_file: String,

    /// Log as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn config(&self, code: &str) -> Config {
        let mut config = if self.crlf {
            Config::crlf()
        } else {
            Config::for_source(code)
        };
        config.flag_threshold = self.threshold;
        config.offsets = match self.offsets {
            Offsets::Concatenated => OffsetMode::Concatenated,
            Offsets::TextAware => OffsetMode::TextAware,
        };
        config
    }
}

fn init_logging(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);
    info!(?args, "parsed CLI arguments");

    let code = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let config = args.config(&code);
    info!(terminator = ?config.line_terminator, "line terminator");

    let report = match args.strategy {
        Strategy::Stochastic => {
            let draw = match args.seed {
                Some(seed) => RngDraw::seeded(seed),
                None => RngDraw::from_entropy(),
            };
            let sink: Box<dyn Sink> = match &args.out_dir {
                Some(dir) => Box::new(DirSink::new(dir)),
                None => Box::new(NullSink),
            };
            let identity = Identity::from_optional(args.user.as_deref());

            MockCompiler::new(config, draw, sink).compile(&code, &args.output_file, &identity)?
        }
        Strategy::Pattern => {
            let spans = detect_pattern(&code, &config);
            normalize(&spans, &SourceMap::new(&code, config.line_terminator))?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
