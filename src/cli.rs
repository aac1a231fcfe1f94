use std::ffi::OsString;

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser,
};

use crate::config::{Config, Params, PRG_NAME};

const CONTROLS: &str = "\
Controls:
  Exit   ESC
  Pause  SPACE or PAUSE

  Left paddle:
    Up    W
    Down  S

  Right paddle:
    Up    UP ARROW
    Down  DOWN ARROW";

/// It's just a simple Pong clone. You win a point by hitting the opposite back wall.
#[derive(Debug, Parser)]
#[command(
    name = PRG_NAME,
    version = "0.1",
    disable_version_flag = true,
    after_help = CONTROLS
)]
pub struct Cli {
    /// The left paddle is controlled by the computer - difficulty level 1-4,
    /// where 1 is the easiest (slower AI reaction)
    #[arg(long, value_name = "LEVEL", num_args = 0..=1, default_missing_value = "")]
    ai: Option<String>,

    /// Disable sound
    #[arg(long)]
    nosound: bool,

    /// Set the height of the game window
    #[arg(long, value_name = "PIXELS", num_args = 0..=1, default_missing_value = "")]
    height: Option<String>,

    /// Set the width of the game window
    #[arg(long, value_name = "PIXELS", num_args = 0..=1, default_missing_value = "")]
    width: Option<String>,
}

/// Problems with the command line that the game recovers from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgWarning {
    #[error("ai difficulty was not set - using default level {default} of {max}")]
    AiLevel { default: u8, max: u8 },

    #[error("--{flag} was not followed by a number - using default {default}")]
    NotANumber { flag: &'static str, default: u16 },

    #[error("--{flag} must be at least {min} - using default {default}")]
    TooSmall {
        flag: &'static str,
        min: u16,
        default: u16,
    },

    #[error("unknown argument {0}")]
    Unknown(String),

    #[error("{0} - using defaults")]
    Rejected(String),
}

impl Cli {
    /// The derived command with `-v` as the short version flag.
    pub fn command_with_version() -> Command {
        Self::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Display program name and version number"),
        )
    }

    fn try_parse_args(args: &[OsString]) -> Result<Self, clap::Error> {
        let matches = Self::command_with_version().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Validate the parsed arguments. Bad values are replaced by defaults and
    /// reported as warnings.
    pub fn into_config(self) -> (Config, Vec<ArgWarning>) {
        let mut warnings = Vec::new();
        let defaults = Config::default();

        let ai_level = self.ai.map(|level| match level.trim().parse::<u8>() {
            Ok(level) => level,
            Err(_) => {
                warnings.push(ArgWarning::AiLevel {
                    default: Params::AI_LVL_DEF,
                    max: Params::AI_LVL_MAX,
                });
                Params::AI_LVL_DEF
            }
        });

        let height = dimension(
            "height",
            self.height,
            defaults.height,
            Params::MIN_HEIGHT,
            &mut warnings,
        );
        let width = dimension(
            "width",
            self.width,
            defaults.width,
            Params::MIN_WIDTH,
            &mut warnings,
        );

        let config = Config {
            width,
            height,
            ai_level,
            sound: !self.nosound,
        };
        (config, warnings)
    }
}

fn dimension(
    flag: &'static str,
    value: Option<String>,
    default: u16,
    min: u16,
    warnings: &mut Vec<ArgWarning>,
) -> u16 {
    let Some(value) = value else {
        return default;
    };

    match value.trim().parse::<u16>() {
        Ok(px) if px >= min => px,
        Ok(_) => {
            warnings.push(ArgWarning::TooSmall { flag, min, default });
            default
        }
        Err(_) => {
            warnings.push(ArgWarning::NotANumber { flag, default });
            default
        }
    }
}

/// Parse a full argument list, program name first.
///
/// Unknown arguments are dropped one at a time and reported. The only errors
/// returned are the help and version requests.
pub fn parse_from<I, T>(args: I) -> Result<(Config, Vec<ArgWarning>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let mut warnings = Vec::new();

    loop {
        let err = match Cli::try_parse_args(&args) {
            Ok(cli) => {
                let (config, more) = cli.into_config();
                warnings.extend(more);
                return Ok((config, warnings));
            }
            Err(err) if !err.use_stderr() => return Err(err),
            Err(err) => err,
        };

        match unknown_position(&err, &args) {
            Some(idx) if err.kind() == ErrorKind::UnknownArgument => {
                let arg = args.remove(idx);
                warnings.push(ArgWarning::Unknown(arg.to_string_lossy().into_owned()));
            }
            _ => {
                let reason = err.to_string();
                let reason = reason.lines().next().unwrap_or_default();
                let reason = reason.trim_start_matches("error: ").to_string();
                warnings.push(ArgWarning::Rejected(reason));
                return Ok((Config::default(), warnings));
            }
        }
    }
}

/// Index of the argument clap could not place, never the program name.
fn unknown_position(err: &clap::Error, args: &[OsString]) -> Option<usize> {
    let Some(ContextValue::String(invalid)) = err.get(ContextKind::InvalidArg) else {
        return None;
    };
    let with_value = format!("{invalid}=");

    args.iter()
        .skip(1)
        .position(|arg| {
            arg.to_str()
                .is_some_and(|arg| arg == invalid || arg.starts_with(&with_value))
        })
        .map(|idx| idx + 1)
}

/// Parse the process arguments, printing any warnings to stderr.
///
/// `--help` and `--version` print and exit.
pub fn parse_config() -> Config {
    let (config, warnings) = parse_from(std::env::args_os()).unwrap_or_else(|err| err.exit());
    for warning in &warnings {
        eprintln!("{PRG_NAME}: warning: {warning}");
        tracing::warn!("{warning}");
    }
    config
}
