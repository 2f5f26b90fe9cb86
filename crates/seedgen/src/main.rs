mod recipe;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedable_core::{SeedableRandom, Timestamp};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::recipe::{Recipe, Step};

#[derive(Parser, Debug)]
#[command(
    name = "seedgen",
    about = "Seed-reproducible sample generator emitting NDJSON"
)]
struct Args {
    /// Text seed. A fresh numeric seed is generated when omitted.
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Number of times to repeat the sampler (or the whole recipe).
    #[arg(long, global = true, default_value_t = 1)]
    count: usize,

    /// Write NDJSON to this path instead of stdout.
    #[arg(long, global = true, value_name = "PATH")]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Uniform number between `min` and `max`.
    Range {
        #[arg(long, allow_negative_numbers = true)]
        min: f64,
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },
    /// One item from a comma-separated list.
    One {
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<String>,
    },
    /// Between `min` and `max` items from a comma-separated list.
    Pick {
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<String>,
        #[arg(long, default_value_t = 1)]
        min: usize,
        #[arg(long, default_value_t = 1)]
        max: usize,
        /// Drop repeated picks.
        #[arg(long)]
        unique: bool,
    },
    /// Alphanumeric string of a fixed length.
    String {
        #[arg(long)]
        length: usize,
    },
    /// Lorem-ipsum text of `min` to `max` words.
    Lorem {
        #[arg(long)]
        min: usize,
        #[arg(long)]
        max: usize,
    },
    /// Timestamp (epoch milliseconds) between `start` and `end`.
    Date {
        #[arg(long, allow_negative_numbers = true)]
        start: i64,
        #[arg(long, allow_negative_numbers = true)]
        end: i64,
    },
    /// picsum.photos image URL.
    Image {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Run the steps of a JSON recipe file in order.
    Recipe {
        #[arg(value_name = "PATH")]
        file: PathBuf,
    },
}

impl Command {
    fn into_steps(self) -> Result<(Option<String>, Vec<Step>)> {
        let step = match self {
            Command::Range { min, max } => Step::Range { min, max },
            Command::One { items } => Step::One { items },
            Command::Pick {
                items,
                min,
                max,
                unique,
            } => Step::Pick {
                items,
                min,
                max,
                unique,
            },
            Command::String { length } => Step::Alphanumeric { length },
            Command::Lorem { min, max } => Step::Lorem { min, max },
            Command::Date { start, end } => Step::Date {
                start: Timestamp::from_millis(start),
                end: Timestamp::from_millis(end),
            },
            Command::Image { width, height } => Step::Image { width, height },
            Command::Recipe { file } => {
                let recipe = Recipe::load_from_path(&file)
                    .with_context(|| format!("failed to read recipe {:?}", file))?;
                return Ok((recipe.seed, recipe.steps));
            }
        };
        Ok((None, vec![step]))
    }
}

#[derive(Serialize)]
struct SampleLine<'a> {
    seed: &'a str,
    index: usize,
    kind: &'static str,
    value: Value,
}

fn run(args: Args, writer: &mut dyn Write) -> Result<()> {
    let (recipe_seed, steps) = args.command.into_steps()?;
    let seed = args.seed.or(recipe_seed);
    let mut rng = SeedableRandom::new(seed.as_deref());
    info!(seed = rng.seed(), steps = steps.len(), count = args.count, "generating");

    let mut index = 0;
    for _ in 0..args.count {
        for step in &steps {
            let value = step
                .run(&mut rng)
                .with_context(|| format!("step {} ({}) failed", index, step.kind()))?;
            let line = SampleLine {
                seed: rng.seed(),
                index,
                kind: step.kind(),
                value,
            };
            serde_json::to_writer(&mut *writer, &line)?;
            writer.write_all(b"\n")?;
            index += 1;
        }
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut writer: Box<dyn Write> = match &args.out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create {:?}", path))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    run(args, &mut writer)
}
