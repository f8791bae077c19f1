//! Tessera CLI
//!
//! Builds CSS selectors from the command line and converts rectangles to and
//! from JSON.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tessera_common::warning::warn_once;
use tessera_css::{Category, Combinator, SelectorBuilder, SelectorFactory};
use tessera_object::{Rectangle, Shape, deserialize, serialize};

#[derive(Parser, Debug)]
#[command(name = "tessera", version, about = "Build CSS selectors and shape JSON")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind=value` parts, e.g. `element=a class=nav`
    Selector {
        /// Parts in selector order; kinds are element, id, class, attr,
        /// pseudo-class and pseudo-element
        #[arg(required = true)]
        parts: Vec<Part>,
    },
    /// Join two selectors with a combinator, e.g. `"element=ul" ">" "element=li"`
    Combine {
        /// Whitespace-separated parts of the left selector
        left: String,
        /// Combinator token (`>`, `+`, `~`, `||`) or name (`child`, ...)
        combinator: String,
        /// Whitespace-separated parts of the right selector
        right: String,
    },
    /// Print a rectangle as JSON along with its area
    Rect {
        /// Width of the rectangle
        #[arg(allow_negative_numbers = true)]
        width: f64,
        /// Height of the rectangle
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },
    /// Read a rectangle from JSON and print its area
    Area {
        /// JSON object with `width` and `height`
        json: String,
    },
}

/// One `kind=value` selector part.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Part {
    category: Category,
    value: String,
}

impl FromStr for Part {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected kind=value, got '{raw}'"))?;
        let category = kind
            .parse::<Category>()
            .map_err(|_| format!("unknown selector part '{kind}'"))?;
        Ok(Self {
            category,
            value: value.to_string(),
        })
    }
}

fn parse_parts(list: &str) -> Result<Vec<Part>> {
    list.split_whitespace()
        .map(|raw| raw.parse::<Part>().map_err(anyhow::Error::msg))
        .collect()
}

fn build(parts: &[Part]) -> Result<SelectorBuilder> {
    let mut builder = SelectorBuilder::new();
    for part in parts {
        if part.value.is_empty() {
            warn_once("Selector", &format!("empty {} value in selector", part.category));
        }
        let _ = builder
            .append(part.category, &part.value)
            .with_context(|| format!("cannot append {} '{}'", part.category, part.value))?;
    }
    Ok(builder)
}

/// Join two selectors. Combinator names resolve to their token and unknown
/// tokens pass through with a warning. The descendant combinator is joined
/// with a single space instead of a padded whitespace token.
fn combine_selectors(left: &SelectorBuilder, raw: &str, right: &SelectorBuilder) -> String {
    match raw.parse::<Combinator>() {
        Ok(Combinator::Descendant) => format!("{left} {right}"),
        Ok(combinator) => SelectorFactory::combine(left, combinator.as_str(), right).render(),
        Err(_) => {
            warn_once(
                "Selector",
                &format!("unrecognized combinator '{raw}' written as given"),
            );
            SelectorFactory::combine(left, raw, right).render()
        }
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Selector { parts } => Ok(build(&parts)?.render()),
        Command::Combine {
            left,
            combinator,
            right,
        } => {
            let left = build(&parse_parts(&left).context("left selector")?)?;
            let right = build(&parse_parts(&right).context("right selector")?)?;
            Ok(combine_selectors(&left, &combinator, &right))
        }
        Command::Rect { width, height } => {
            if width < 0.0 || height < 0.0 {
                warn_once("CLI", "negative rectangle size, area will be negative");
            }
            let rect = Rectangle::new(width, height);
            Ok(format!("{}\narea: {}", serialize(&rect)?, rect.area()))
        }
        Command::Area { json } => {
            let rect: Rectangle<f64> = deserialize(&json).context("reading rectangle")?;
            Ok(Shape::area(&rect).to_string())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
