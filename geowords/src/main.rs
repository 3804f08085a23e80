use anyhow::{bail, Context, Result};
use clap::Parser;
use geowords::config::{Command, Config};
use geowords::{FileWordSource, GeoCodec, WordFiles, WordTriple};
use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;

fn init_logging(config: &Config) -> Result<()> {
    let mut logger_builder = env_logger::Builder::from_default_env();
    logger_builder.filter_level(
        config
            .log_level
            .parse()
            .unwrap_or(log::LevelFilter::Warn),
    );

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        logger_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    logger_builder.init();
    Ok(())
}

fn build_codec(config: &Config) -> Result<GeoCodec> {
    let files = match &config.word_config {
        Some(path) => WordFiles::load(path)?,
        None => WordFiles::default(),
    };
    Ok(GeoCodec::new(Arc::new(FileWordSource::new(files))))
}

fn decode_args(words: &[String]) -> Result<WordTriple> {
    match words {
        [dotted] => WordTriple::parse_dotted(dotted)
            .with_context(|| format!("Expected three dot-separated words, got '{}'", dotted)),
        [w1, w2, w3] => Ok(WordTriple::new(w1.as_str(), w2.as_str(), w3.as_str())),
        _ => bail!("Expected three words or one dotted 'a.b.c' label"),
    }
}

fn run(config: &Config) -> Result<()> {
    let codec = build_codec(config)?;
    let mode = config.command.mode();
    codec
        .prepare(&[mode])
        .with_context(|| format!("Failed to prepare mode {}", mode))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::Encode { lat, lng, mode } => {
            let words = codec.encode(*lat, *lng, *mode)?;
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&words)?)?;
            } else {
                writeln!(out, "{}", words)?;
            }
        }
        Command::Decode { words, mode } => {
            let triple = decode_args(words)?;
            let coordinate = codec.decode_triple(&triple, *mode)?;
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&coordinate)?)?;
            } else {
                writeln!(out, "{}", coordinate)?;
            }
        }
        Command::Info { mode } => {
            let stats = codec.stats(*mode)?;
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(out, "mode:                 {}", stats.mode)?;
                writeln!(
                    out,
                    "grid:                 {} x {} ({} cells)",
                    stats.latitude_cells, stats.longitude_cells, stats.total_cells
                )?;
                writeln!(
                    out,
                    "cell size:            {:.8} x {:.8} deg",
                    stats.cell_height_deg, stats.cell_width_deg
                )?;
                writeln!(
                    out,
                    "vocabulary:           {} words ({} synthesized)",
                    stats.vocabulary_size, stats.synthesized_words
                )?;
                writeln!(out, "permutation capacity: {}", stats.permutation_capacity)?;
            }
        }
        Command::Vocab { mode } => {
            let vocab = codec.vocabulary(*mode)?;
            if config.json {
                writeln!(out, "{}", serde_json::to_string(vocab.words())?)?;
            } else {
                for word in vocab.words() {
                    writeln!(out, "{}", word)?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!("Configuration: {:?}", config);
    run(&config)
}
