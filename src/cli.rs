use std::str::FromStr;

use clap::Parser;
use reqwest::Url;

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub flick: FlickArgs,

    #[clap(flatten)]
    pub influx: InfluxArgs,

    /// Operating mode: `price`, `usage-simple`, or `usage-detailed`.
    #[clap(short, long, env = "FLICK_MODE")]
    pub mode: String,

    /// How many days from now to look back in the usage modes.
    #[clap(long = "look-back-days", env = "LOOK_BACK_DAYS")]
    pub look_back_days: Option<i64>,
}

impl Args {
    /// Resolve the operating mode from the raw `--mode` string.
    pub fn mode(&self) -> Result<Mode> {
        Mode::from_str(&self.mode)
    }

    /// Lookback window for the usage modes, validated before any network call.
    pub fn look_back_days(&self) -> Result<i64> {
        let days = self
            .look_back_days
            .context("`--look-back-days` is required for the usage modes")?;
        ensure!(days > 0, "`--look-back-days` must be positive (got {days})");
        Ok(days)
    }
}

#[derive(Parser)]
pub struct FlickArgs {
    /// Flick Electric account username.
    #[clap(short, long, env = "FLICK_USERNAME")]
    pub username: String,

    /// Flick Electric account password.
    #[clap(short, long, env = "FLICK_PASSWORD")]
    pub password: String,
}

#[derive(Parser)]
pub struct InfluxArgs {
    /// InfluxDB server endpoint.
    #[clap(long = "influx-uri", env = "INFLUX_URI")]
    pub uri: Url,

    /// Database to record the points in.
    #[clap(long = "influx-database", env = "INFLUX_DATABASE")]
    pub database: String,

    #[clap(id = "influx_username", long = "influx-username", env = "INFLUX_USERNAME")]
    pub username: Option<String>,

    #[clap(id = "influx_password", long = "influx-password", env = "INFLUX_PASSWORD")]
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Price,
    UsageSimple,
    UsageDetailed,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self> {
        if mode.eq_ignore_ascii_case("price") {
            Ok(Self::Price)
        } else if mode.eq_ignore_ascii_case("usage-simple") {
            Ok(Self::UsageSimple)
        } else if mode.eq_ignore_ascii_case("usage-detailed") {
            Ok(Self::UsageDetailed)
        } else {
            bail!(
                "unrecognized mode `{mode}`: expected `price`, `usage-simple`, or `usage-detailed`"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_matches_case_insensitively() -> Result {
        assert_eq!(Mode::from_str("price")?, Mode::Price);
        assert_eq!(Mode::from_str("PRICE")?, Mode::Price);
        assert_eq!(Mode::from_str("Usage-Simple")?, Mode::UsageSimple);
        assert_eq!(Mode::from_str("usage-detailed")?, Mode::UsageDetailed);
        Ok(())
    }

    #[test]
    fn unrecognized_mode_names_the_offender() {
        let error = Mode::from_str("usage").unwrap_err();
        assert!(error.to_string().contains("`usage`"));
    }

    #[test]
    fn look_back_days_must_be_present_and_positive() {
        let mut args = Args {
            flick: FlickArgs { username: "user".to_string(), password: "pass".to_string() },
            influx: InfluxArgs {
                uri: "http://localhost:8086".parse().unwrap(),
                database: "energy".to_string(),
                username: None,
                password: None,
            },
            mode: "usage-simple".to_string(),
            look_back_days: None,
        };
        assert!(args.look_back_days().is_err());

        args.look_back_days = Some(0);
        assert!(args.look_back_days().is_err());

        args.look_back_days = Some(-3);
        assert!(args.look_back_days().is_err());

        args.look_back_days = Some(7);
        assert_eq!(args.look_back_days().unwrap(), 7);
    }
}
