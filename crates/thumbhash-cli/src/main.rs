use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use std::path::PathBuf;
use thumbhash_core::{
    discovery::discover_images, format_hash, logging, processing, Config, LogLevel, OutputFormat,
};

#[derive(Parser)]
#[command(name = "thumbhash")]
#[command(about = "Compute ThumbHash placeholders for images")]
#[command(version)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to a rotating file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Hex,
    Base64,
    Array,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Hex => OutputFormat::Hex,
            Format::Base64 => OutputFormat::Base64,
            Format::Array => OutputFormat::Array,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Hash image files, or every image found under directories
    Hash {
        /// Files or directories to hash
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// How to print each hash
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Reject images over 100px instead of shrinking them
        #[arg(long)]
        no_fit: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(long)]
        threads: Option<usize>,

        /// Maximum directory depth for scanning
        #[arg(long)]
        max_depth: Option<usize>,

        /// Show a progress bar on stderr
        #[arg(long)]
        progress: bool,
    },

    /// Time repeated encodes of one image
    Bench {
        /// Image to encode
        file: PathBuf,

        /// Number of encodes to average over
        #[arg(short, long, default_value_t = 100)]
        repeats: usize,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "thumbhash.json")]
        path: PathBuf,
    },
}

fn init_logging(
    verbose: u8,
    log_dir: Option<&PathBuf>,
    config_level: LogLevel,
) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::from(config_level),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match log_dir {
        Some(dir) => logging::init_logger(dir, level)
            .map_err(|e| anyhow::anyhow!("Failed to initialize file logging: {}", e)),
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_env(logging::LOG_ENV_VAR)
                .init();
            Ok(())
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };

    init_logging(cli.verbose, cli.log_dir.as_ref(), config.log_level)?;

    match cli.command {
        Commands::Hash {
            paths,
            format,
            no_fit,
            threads,
            max_depth,
            progress,
        } => {
            // Override config with command line arguments
            if let Some(format) = format {
                config.output_format = format.into();
            }
            if no_fit {
                config.fit_to_max = false;
            }
            if let Some(threads) = threads {
                config.threads = threads;
            }
            if max_depth.is_some() {
                config.max_depth = max_depth;
            }
            config.show_progress |= progress;
            config.validate()?;

            let images = discover_images(&paths, &config)?;
            info!("Found {} images", images.len());

            let results = processing::hash_files(&images, &config);
            let mut failures = 0;
            for result in &results {
                match &result.hash {
                    Ok(hash) => println!(
                        "{}\t{}",
                        result.path.display(),
                        format_hash(hash, config.output_format)
                    ),
                    Err(e) => {
                        failures += 1;
                        eprintln!("{}: {}", result.path.display(), e);
                    }
                }
            }

            if failures > 0 {
                anyhow::bail!("{} of {} images failed to hash", failures, results.len());
            }
            Ok(())
        }

        Commands::Bench { file, repeats } => {
            config.validate()?;
            let report = processing::bench_file(&file, repeats, &config)
                .with_context(|| format!("Benchmark failed for {}", file.display()))?;
            println!(
                "{}x{}: {:.3} ms per encode over {} runs ({})",
                report.width,
                report.height,
                report.mean_ms(),
                report.repeats,
                report.hash
            );
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}
