use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use dapp_types::{FormatAmountOptions, GasPriceRequest, GasSpeed, GasStationMetadata, DECIMALS, DIGITS};
use dapp_utils::{format_amount, parse_amount, recommend_gas_price};

mod logging;


/// Amount formatting and gas helpers for wallet front-ends
#[derive(Parser, Debug)]
#[command(name = "dapp", version)]
struct Cli {
    /// Trace every formatting step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format an atomic amount for display
    Format {
        /// Atomic amount, e.g. wei
        #[arg(allow_hyphen_values = true)]
        input: String,

        #[arg(long, default_value_t = DECIMALS)]
        decimals: u32,

        #[arg(long, default_value_t = DIGITS)]
        digits: u32,

        /// Group the integer part with thousands separators
        #[arg(long)]
        commas: bool,

        /// Show `<0.0001` for amounts below the display precision
        #[arg(long)]
        less_than_label: bool,

        /// Truncate to exactly `digits` decimals instead of showing the last non zero decimal
        #[arg(long)]
        fixed: bool,
    },

    /// Format every entry of a JSON array of format options
    FormatBatch {
        path: PathBuf,
    },

    /// Parse a human readable amount into atomic units
    Parse {
        #[arg(allow_hyphen_values = true)]
        amount: String,

        #[arg(long, default_value_t = DECIMALS)]
        decimals: u32,
    },

    /// Recommend a gas price
    Gas {
        #[arg(long)]
        gas_limit: u128,

        #[arg(long, default_value_t = 0)]
        data_len: u128,

        #[arg(long, value_enum, default_value_t = Speed::Standard)]
        speed: Speed,

        /// Price per unit of the fast tier
        #[arg(long, default_value_t = 0)]
        fast: u128,

        /// Price per unit of the faster tier
        #[arg(long, default_value_t = 0)]
        faster: u128,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Speed {
    Standard,
    Fast,
    Faster,
}

impl From<Speed> for GasSpeed {
    fn from(speed: Speed) -> Self {
        match speed {
            Speed::Standard => GasSpeed::Standard,
            Speed::Fast => GasSpeed::Fast,
            Speed::Faster => GasSpeed::Faster,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match cli.command {
        Command::Format { input, decimals, digits, commas, less_than_label, fixed } => {
            let options = FormatAmountOptions::new(input)
                .with_decimals(decimals)
                .with_digits(digits)
                .with_commas(commas)
                .with_less_than_label(less_than_label)
                .with_last_non_zero_decimal(!fixed);

            println!("{}", format_amount(&options)?);
        }

        Command::FormatBatch { path } => format_batch(&path)?,

        Command::Parse { amount, decimals } => {
            println!("{}", parse_amount(&amount, decimals)?);
        }

        Command::Gas { gas_limit, data_len, speed, fast, faster } => {
            let request = GasPriceRequest::new(gas_limit, data_len)
                .with_speed(speed.into(), GasStationMetadata { fast, faster });

            println!("{}", recommend_gas_price(&request)?);
        }
    }

    Ok(())
}

/// Load a list of [FormatAmountOptions] from `path` and print one formatted amount per line
fn format_batch(path: &Path) -> Result<(), anyhow::Error> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let batch: Vec<FormatAmountOptions> = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    info!("Formatting {} amounts from {}", batch.len(), path.display());

    let mut failed = 0;
    for options in &batch {
        match format_amount(options) {
            Ok(formatted) => println!("{}", formatted),
            Err(e) => {
                error!("Error formatting {:?}: {}", options.input, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} amounts could not be formatted", failed, batch.len()));
    }

    Ok(())
}
