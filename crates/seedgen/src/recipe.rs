use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value};

use seedable_core::{SeedableRandom, Timestamp};

/// Ordered list of sampler steps run against a single generator.
#[derive(Clone, Debug, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub seed: Option<String>,
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Load a recipe JSON document from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open recipe file {:?}", path))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Deserialize a recipe document from an arbitrary reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("invalid recipe json")
    }
}

fn one() -> usize {
    1
}

/// A single sampler invocation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Range {
        min: f64,
        max: f64,
    },
    One {
        items: Vec<String>,
    },
    Pick {
        items: Vec<String>,
        #[serde(default = "one")]
        min: usize,
        #[serde(default = "one")]
        max: usize,
        #[serde(default)]
        unique: bool,
    },
    #[serde(rename = "string")]
    Alphanumeric {
        length: usize,
    },
    Words {
        words: Vec<String>,
        min: usize,
        max: usize,
    },
    Lorem {
        min: usize,
        max: usize,
    },
    Date {
        start: Timestamp,
        end: Timestamp,
    },
    Image {
        width: u32,
        height: u32,
    },
    Pool {
        length: usize,
        #[serde(default)]
        unique: bool,
        of: Box<Step>,
    },
}

impl Step {
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Range { .. } => "range",
            Step::One { .. } => "one",
            Step::Pick { .. } => "pick",
            Step::Alphanumeric { .. } => "string",
            Step::Words { .. } => "words",
            Step::Lorem { .. } => "lorem",
            Step::Date { .. } => "date",
            Step::Image { .. } => "image",
            Step::Pool { .. } => "pool",
        }
    }

    /// Draw this step's value from `rng`.
    pub fn run(&self, rng: &mut SeedableRandom) -> Result<Value> {
        let value = match self {
            Step::Range { min, max } => json!(rng.uniform(*min, *max)),
            Step::One { items } => json!(rng.pick_one(items)?),
            Step::Pick {
                items,
                min,
                max,
                unique,
            } => json!(rng.pick_many(items, *min, *max, !*unique)?),
            Step::Alphanumeric { length } => json!(rng.fixed_alphabet_string(*length)),
            Step::Words { words, min, max } => json!(rng.word_sequence(words, *min, *max)?),
            Step::Lorem { min, max } => json!(rng.lorem(*min, *max)),
            Step::Date { start, end } => json!(rng.interpolated_date(*start, *end)),
            Step::Image { width, height } => json!(rng.image_url(*width, *height)),
            Step::Pool { length, unique, of } => {
                let values = rng
                    .try_pool(|rng| of.run(rng), *length, *unique)
                    .context("pool step failed")?;
                Value::Array(values)
            }
        };
        Ok(value)
    }
}
