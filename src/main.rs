use std::{
    fs::{self, File},
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use log::info;

use buttify::{random::FastRand, Buttifier, ButtifierConfig};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file path (ron format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replacement word
    #[arg(short, long)]
    word: Option<String>,

    /// Chance of replacing syllable, also share of sentence syllables to replace
    #[arg(short, long)]
    rate: Option<f64>,

    /// Chance of touching a sentence at all, only used with --gated
    #[arg(short, long)]
    probability: Option<f64>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Serialized en-US hyphenation dictionary. Embedded one is used if unset
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Skip lines according to --probability
    #[arg(short, long)]
    gated: bool,

    /// File to buttify. Reads from stdin if unset
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn read_config(args: &Args) -> Result<ButtifierConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let content =
                fs::read_to_string(path).map_err(|err| format!("reading config file: {err}"))?;

            ron::from_str::<ButtifierConfig>(&content)
                .map_err(|err| format!("parsing config: {err}"))?
        }
        None => ButtifierConfig::default(),
    };

    if let Some(word) = &args.word {
        config = config.with_butt_word(word).map_err(|err| err.to_string())?;
    }
    if let Some(rate) = args.rate {
        config = config.with_rate(rate).map_err(|err| err.to_string())?;
    }
    if let Some(probability) = args.probability {
        config = config
            .with_probability(probability)
            .map_err(|err| err.to_string())?;
    }

    Ok(config)
}

fn buttify_line(
    buttifier: &mut Buttifier,
    gated: bool,
    line: io::Result<String>,
) -> Result<(), String> {
    let line = line.map_err(|err| format!("reading line: {err}"))?;

    if gated {
        println!("{}", buttifier.buttify_sentence_gated(&line).0);
    } else {
        println!("{}", buttifier.buttify_sentence(&line));
    }

    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = read_config(&args)?;
    info!("using {config:?}");

    let buttifier = match &args.dictionary {
        Some(path) => Buttifier::from_dictionary_path(config, path),
        None => Buttifier::with_config(config),
    }
    .map_err(|err| format!("creating buttifier: {err}"))?;

    let mut buttifier = match args.seed {
        Some(seed) => buttifier.with_random_source(FastRand::with_seed(seed)),
        None => buttifier,
    };

    if let Some(filename) = &args.file {
        let file = File::open(filename).map_err(|err| format!("reading input file: {err}"))?;
        for line in io::BufReader::new(file).lines() {
            buttify_line(&mut buttifier, args.gated, line)?;
        }
    } else {
        for line in io::stdin().lines() {
            buttify_line(&mut buttifier, args.gated, line)?;
        }
    }

    Ok(())
}
