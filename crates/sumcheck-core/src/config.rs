//! Session settings. There is no config file; values come from the command
//! line and the environment.

use crate::algorithm::Algorithm;

/// Environment variable that disables colored output when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hash algorithm for this session.
    pub algorithm: Algorithm,
    /// Emit ANSI color sequences.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::DEFAULT,
            color: true,
        }
    }
}

impl Config {
    /// Defaults plus the `--no-color` flag and `NO_COLOR` from the environment.
    /// The algorithm is filled in once the command line has been resolved.
    pub fn from_env(no_color_flag: bool) -> Self {
        let no_color_env = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
        Self::with_color_switches(no_color_flag, no_color_env)
    }

    fn with_color_switches(no_color_flag: bool, no_color_env: bool) -> Self {
        Self {
            color: !(no_color_flag || no_color_env),
            ..Self::default()
        }
    }
}
