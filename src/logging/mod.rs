//! Console logging.

mod pretty_list;

use std::{fmt::Write as FmtWrite, sync::OnceLock};

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};
use regex::Regex;
use textwrap::{termwidth, Options};

pub use self::pretty_list::PrettyList;

/// Matches the final continuation line of a wrapped record.
static LAST_LINE_MATCHER: OnceLock<Regex> = OnceLock::new();

/// Setup console logging for this application.
///
/// The returned handle must be kept alive for as long as the program logs.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(multiline_format)
        .start()?;

    log::info!(
        "Adjust the log level by setting RUST_LOG. By default RUST_LOG=info"
    );

    Ok(handle)
}

/// A multiline log format for flexi_logger.
///
/// Logs are automatically wrapped at terminal width and prefixed with unicode
/// so it's easy to tell where a big log statement begins and ends.
pub fn multiline_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let size = termwidth().min(74);
    let wrap_options = Options::new(size)
        .initial_indent("┏ ")
        .subsequent_indent("┃ ");

    let mut full_line = String::new();
    let header = writeln!(
        full_line,
        "{} [{}] [{}:{}]",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
    );
    header
        .and_then(|_| write!(&mut full_line, "{}", &record.args()))
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    let wrapped = textwrap::fill(&full_line, wrap_options);
    writeln!(w, "{}", close_last_line(&wrapped))
}

/// Swap the prefix on the last wrapped line so the end of a record is
/// visible.
fn close_last_line(wrapped: &str) -> String {
    LAST_LINE_MATCHER
        .get_or_init(|| {
            Regex::new(r"(┃)(.*)$").expect("the line matcher is valid")
        })
        .replace(wrapped, "┗$2")
        .into_owned()
}
