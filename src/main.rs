
//! Command line front end: evaluate an expression or sample it for a
//! graph.

use graphcalc::display::{format_result, DecimalSeparator};
use graphcalc::graphics::dataset::GraphSampleParams;
use graphcalc::graphics::plot::PlotDirective;
use graphcalc::parsing::number::parse_number;
use graphcalc::parsing::validation::is_complete_expression;
use graphcalc::state::CompiledExpressionCache;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;

use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Evaluate and plot expressions in one variable x")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Evaluate an expression, once per value of x
  Eval {
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Value of x; may be repeated. Either `.` or `,` is accepted as
    /// the decimal separator
    #[arg(short, long = "x", value_name = "VALUE", allow_hyphen_values = true, value_parser = parse_value)]
    x: Vec<f64>,

    /// Decimal separator used in the printed results
    #[arg(long, value_enum, default_value_t = SeparatorArg::Comma)]
    separator: SeparatorArg,
  },
  /// Sample an expression over a graph window and print the pixel
  /// offsets as JSON
  Plot {
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// JSON file with the graph parameters (camelCase keys). Replaces
    /// the individual window flags
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    #[arg(long, default_value = "-10", allow_hyphen_values = true, value_parser = parse_value)]
    x_min: f64,

    #[arg(long, default_value = "10", allow_hyphen_values = true, value_parser = parse_value)]
    x_max: f64,

    #[arg(long, default_value = "-10", allow_hyphen_values = true, value_parser = parse_value)]
    y_min: f64,

    #[arg(long, default_value = "10", allow_hyphen_values = true, value_parser = parse_value)]
    y_max: f64,

    /// Graph width in pixels
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Graph height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Samples per horizontal pixel
    #[arg(long, default_value_t = 1, conflicts_with = "auto_scale")]
    scale_factor: u32,

    /// Derive the scale factor from the width of the x range
    #[arg(long)]
    auto_scale: bool,

    /// Print plot points (x in pixels, y as pixel offset) instead of
    /// the bare samples
    #[arg(long)]
    points: bool,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeparatorArg {
  Comma,
  Dot,
}

impl From<SeparatorArg> for DecimalSeparator {
  fn from(arg: SeparatorArg) -> Self {
    match arg {
      SeparatorArg::Comma => DecimalSeparator::Comma,
      SeparatorArg::Dot => DecimalSeparator::Dot,
    }
  }
}

fn parse_value(s: &str) -> Result<f64, graphcalc::error::Error> {
  Ok(parse_number(s)?)
}

fn check_complete(expression: &str) -> anyhow::Result<()> {
  if !is_complete_expression(expression) {
    bail!("Incomplete expression {expression:?}");
  }
  Ok(())
}

fn main() -> anyhow::Result<()> {
  env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
  let cli = Cli::parse();

  let mut cache = CompiledExpressionCache::new();
  match cli.command {
    Command::Eval { expression, x, separator } => {
      check_complete(&expression)?;
      let xs = if x.is_empty() { vec![0.0] } else { x };
      for x in xs {
        let result = cache.get_result(&expression, x)
          .with_context(|| format!("Could not evaluate {expression:?}"))?;
        println!("{}", format_result(result, separator.into()));
      }
    }
    Command::Plot {
      expression, params, x_min, x_max, y_min, y_max, width, height, scale_factor, auto_scale, points,
    } => {
      check_complete(&expression)?;
      let params = match params {
        Some(path) => {
          let text = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
          serde_json::from_str(&text)
            .with_context(|| format!("Invalid graph parameters in {}", path.display()))?
        }
        None if auto_scale => GraphSampleParams::with_auto_scale_factor(x_min, x_max, y_min, y_max, width, height),
        None => GraphSampleParams::new(x_min, x_max, y_min, y_max, width, height, scale_factor)?,
      };
      info!("plotting with {params:?}");
      let samples = cache.get_sample_sequence(&expression, &params)
        .with_context(|| format!("Could not plot {expression:?}"))?;
      let output = if points {
        serde_json::to_string(&PlotDirective::from_samples(&samples, &params))?
      } else {
        serde_json::to_string(&samples)?
      };
      println!("{output}");
    }
  }
  Ok(())
}
