use crate::config::{
    FilterConfig, NormalizationConfig, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_PHONE_NUMBER,
};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

/// Long options that may also be spelled with a single dash.
const LEGACY_LONG_FLAGS: &[&str] = &["input", "output", "phonenumber"];

pub fn build_command() -> Command {
    Command::new("sms-filter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep only the SMS exchanged with one phone number from a backup archive")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input archive path")
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output archive path")
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            Arg::new("phonenumber")
                .short('p')
                .long("phonenumber")
                .value_name("NUMBER")
                .help("Filter messages with this phone number")
                .default_value(DEFAULT_PHONE_NUMBER),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("YAML file with the country prefix table"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default country prefix table and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Rewrite `-input`, `-output` and `-phonenumber` (also in `-flag=value`
/// form) to their double-dash spelling. Everything after `--` is left as is.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let legacy = arg
                .strip_prefix('-')
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split('=').next().unwrap_or(rest))
                .is_some_and(|name| LEGACY_LONG_FLAGS.contains(&name));
            if legacy {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

/// Build the run configuration from parsed arguments and an already loaded
/// prefix table.
pub fn filter_config(matches: &ArgMatches, normalization: NormalizationConfig) -> FilterConfig {
    let get = |id: &str, default: &str| {
        matches
            .get_one::<String>(id)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    FilterConfig {
        input: PathBuf::from(get("input", DEFAULT_INPUT)),
        output: PathBuf::from(get("output", DEFAULT_OUTPUT)),
        phone_number: get("phonenumber", DEFAULT_PHONE_NUMBER),
        normalization,
    }
}
