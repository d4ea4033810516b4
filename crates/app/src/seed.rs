//! Launch arguments: the run seed and an optional settings file path.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchArgs {
    pub seed: SeedChoice,
    pub config_path: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn resolve_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchArgs, String> {
    let seed = match flag_value(args, "--seed")? {
        Some(raw) => SeedChoice::Cli(parse_seed_value(&raw)?),
        None => SeedChoice::Generated(generated_seed),
    };
    let config_path = flag_value(args, "--config")?.map(PathBuf::from);
    Ok(LaunchArgs { seed, config_path })
}

/// Finds `--flag value` or `--flag=value`; a flag given twice is rejected.
fn flag_value(args: &[String], flag: &str) -> Result<Option<String>, String> {
    let inline_prefix = format!("{flag}=");
    let mut selected = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        let value = if argument == flag {
            let Some(value) = args.get(index + 1) else {
                return Err(format!("missing value for {flag}"));
            };
            index += 1;
            Some(value.as_str())
        } else {
            argument.strip_prefix(inline_prefix.as_str())
        };

        if let Some(value) = value {
            if selected.is_some() {
                return Err(format!("{flag} provided more than once"));
            }
            selected = Some(value.to_string());
        }
        index += 1;
    }

    Ok(selected)
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
