use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use atbat::config::SimulationConfig;
use atbat::file::{ReadJsonFile, WriteJsonFile};
use atbat::print::{tabulate_distribution, tabulate_rates};
use atbat::request::{simulate_at_bat, ErrorResponse, SimulationRequest};
use atbat::stats::{BattingLine, PitchingLine};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the full request (batter and pitcher) from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// file to source the batter's stat line from
    #[clap(short = 'b', long)]
    batter: Option<PathBuf>,

    /// file to source the pitcher's stat line from
    #[clap(short = 'p', long)]
    pitcher: Option<PathBuf>,

    /// simulation config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// number of trials
    #[clap(short = 't', long)]
    trials: Option<u64>,

    /// league batting average
    #[clap(short = 'l', long = "league-average")]
    league_average: Option<f64>,

    /// random seed
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// run trials in parallel shards of this size
    #[clap(long = "shard-trials")]
    shard_trials: Option<u64>,

    /// print the response as JSON
    #[clap(long)]
    json: bool,

    /// where to write the JSON response to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        let players = self.batter.is_some() || self.pitcher.is_some();
        if self.file.is_none() && !players || self.file.is_some() && players {
            bail!("either the -f flag or the -b and -p flags must be specified");
        }
        if players && (self.batter.is_none() || self.pitcher.is_none()) {
            bail!("the -b and -p flags must be specified together");
        }
        Ok(())
    }

    fn config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::read_json_file(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(league_average) = self.league_average {
            config.league_average = league_average;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(shard_trials) = self.shard_trials {
            config.shard_trials = Some(shard_trials);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = args.config()?;
    debug!("config: {config:?}");
    let request = read_request(&args)?;

    let response = match simulate_at_bat(&request, &config) {
        Ok(response) => response,
        Err(err) => {
            let body = ErrorResponse::from(&err);
            eprintln!("{}", serde_json::to_string_pretty(&body)?);
            return Err(err.into());
        }
    };

    if let Some(out) = &args.out {
        response.write_json_file(out)?;
        info!("wrote response to {}", out.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let batter = request.batter.as_ref().and_then(|batter| batter.name.as_deref());
        let pitcher = request.pitcher.as_ref().and_then(|pitcher| pitcher.name.as_deref());
        info!(
            "{} vs {}, {} trials",
            batter.unwrap_or("batter"),
            pitcher.unwrap_or("pitcher"),
            response.statistics.total_simulations
        );
        info!("\n{}", Console::default().render(&tabulate_distribution(&response)));
        info!("\n{}", Console::default().render(&tabulate_rates(&response)));
        info!("{}", response.text);
    }
    Ok(())
}

fn read_request(args: &Args) -> anyhow::Result<SimulationRequest> {
    if let Some(path) = args.file.as_ref() {
        return SimulationRequest::read_json_file(path);
    }
    if let (Some(batter), Some(pitcher)) = (args.batter.as_ref(), args.pitcher.as_ref()) {
        return Ok(SimulationRequest::new(
            BattingLine::read_json_file(batter)?,
            PitchingLine::read_json_file(pitcher)?,
        ));
    }
    unreachable!()
}
