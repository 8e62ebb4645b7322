use std::time::Duration;

use crate::error::{UsageError, UsageResult};

pub const SYNOPSIS: &str = "usage: waitpath [-d] [-t timeout] path [path ...]";

pub const HELP: &str = "\
usage: waitpath [-d] [-t timeout] path [path ...]

Block until every path exists (or, with -d, until every path is gone),
checking again every 100ms.

  -d            wait for paths to be deleted instead of created
  -t timeout    give up after this many seconds; decimals are accepted,
                and 0 (or no value) means wait forever
  -h, --help    show this help and exit

exit status:
  0  every path reached the requested state
  1  the timeout elapsed first
  2  interrupted by a signal
  3  usage error
";

/// What to wait for, as settled on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// When set, a path's target state is "absent" rather than "present".
    pub wait_for_deletion: bool,

    /// Upper bound on the total wait; `None` means block indefinitely.
    pub timeout: Option<Duration>,

    /// Every path must reach the target state. Never empty.
    pub paths: Vec<String>,
}

/// Outcome of argument parsing.
///
/// Help is a distinguished result rather than an early `process::exit` so
/// the caller owns process termination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parsed {
    Config(Config),
    Help,
}

/// Parses the argument vector, program name excluded.
///
/// Flags and paths may be interleaved in any order. A token is a path
/// exactly when it does not start with `-`, so purely numeric names like
/// `123` are always paths.
///
/// `-t` takes its value by one-token lookahead: the following token is
/// consumed only when it is not itself flag-shaped. `-t -d` therefore means
/// "no time limit" *and* deletion mode, with `-d` handled on the next pass.
pub fn parse<I, S>(args: I) -> UsageResult<Parsed>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut wait_for_deletion = false;
    let mut timeout = None;
    let mut paths = Vec::new();

    let mut tokens = args.into_iter().map(Into::into).peekable();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "-d" => wait_for_deletion = true,
            "-t" => {
                timeout = match tokens.next_if(|next| !next.starts_with('-')) {
                    Some(value) => parse_timeout(&value)?,
                    // Missing or flag-shaped value: no limit, and the
                    // flag stays in the stream for the next pass.
                    None => None,
                };
            }
            flag if flag.starts_with('-') => return Err(UsageError::UnknownOption(token)),
            _ => paths.push(token),
        }
    }

    if paths.is_empty() {
        return Err(UsageError::MissingPaths);
    }
    if paths.iter().any(String::is_empty) {
        return Err(UsageError::EmptyPath);
    }

    Ok(Parsed::Config(Config {
        wait_for_deletion,
        timeout,
        paths,
    }))
}

/// Converts a `-t` value to an optional duration.
///
/// `0` means no limit. Values too large for a `Duration` (including `inf`)
/// are clamped to "no limit", never rejected or wrapped.
fn parse_timeout(value: &str) -> UsageResult<Option<Duration>> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| UsageError::InvalidTimeout(value.to_string()))?;

    if seconds.is_nan() || seconds < 0.0 {
        return Err(UsageError::InvalidTimeout(value.to_string()));
    }
    if seconds == 0.0 {
        return Ok(None);
    }

    Ok(Duration::try_from_secs_f64(seconds).ok())
}
