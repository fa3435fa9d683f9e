//! Log record construction and line rendering

use super::log_level::LogLevel;
use super::timestamp::{self, format_timestamp};
use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};

/// Default size of the message buffer, including the terminating slot.
///
/// A rendered body holds at most `MAX_MESSAGE_BYTES - 1` bytes.
pub const MAX_MESSAGE_BYTES: usize = 512;

/// Body used when no template is supplied.
///
/// The logging macros also treat an empty literal template (`""`) as missing.
pub const MISSING_TEMPLATE: &str = "(NULL)";

/// A message body rendered into a fixed-capacity buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub text: String,
    pub truncated: bool,
}

/// `fmt::Write` sink that never grows past `limit` bytes.
///
/// Line breaks and tabs are escaped while writing so a record always occupies
/// exactly one output line.
struct BoundedBuffer {
    buf: String,
    limit: usize,
    truncated: bool,
}

impl BoundedBuffer {
    fn with_limit(limit: usize) -> Self {
        Self {
            buf: String::with_capacity(limit),
            limit,
            truncated: false,
        }
    }

    fn push_bounded(&mut self, piece: &str) -> fmt::Result {
        let room = self.limit - self.buf.len();
        if piece.len() <= room {
            self.buf.push_str(piece);
            return Ok(());
        }

        let mut end = room;
        while !piece.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&piece[..end]);
        self.truncated = true;
        Err(fmt::Error)
    }

    /// Escapes are all-or-nothing; half an escape would read as a stray `\`.
    fn push_escape(&mut self, escaped: &'static str) -> fmt::Result {
        if escaped.len() > self.limit - self.buf.len() {
            self.truncated = true;
            return Err(fmt::Error);
        }
        self.buf.push_str(escaped);
        Ok(())
    }
}

impl fmt::Write for BoundedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s;
        while !rest.is_empty() {
            let split = rest.find(['\n', '\r', '\t']).unwrap_or(rest.len());
            let (plain, tail) = rest.split_at(split);
            self.push_bounded(plain)?;

            let mut chars = tail.chars();
            rest = match chars.next() {
                Some(c) => {
                    self.push_escape(escape(c))?;
                    chars.as_str()
                }
                None => "",
            };
        }
        Ok(())
    }
}

fn escape(c: char) -> &'static str {
    match c {
        '\n' => "\\n",
        '\r' => "\\r",
        _ => "\\t",
    }
}

/// Render `template` into at most `buffer_size - 1` bytes.
///
/// `None` stands for a missing template and yields [`MISSING_TEMPLATE`]. Output
/// that does not fit is cut at the nearest char boundary.
#[must_use]
pub fn render_body(template: Option<fmt::Arguments<'_>>, buffer_size: usize) -> RenderedBody {
    let mut out = BoundedBuffer::with_limit(buffer_size.saturating_sub(1));

    // A full buffer aborts formatting with fmt::Error; that is the truncation path.
    let _ = match template {
        Some(args) => out.write_fmt(args),
        None => out.write_str(MISSING_TEMPLATE),
    };

    RenderedBody {
        text: out.buf,
        truncated: out.truncated,
    }
}

/// One log line in structured form.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub origin: String,
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub truncated: bool,
}

impl LogRecord {
    fn sanitize_origin(origin: &str) -> String {
        origin
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build a record stamped with the current local time.
    pub fn new(
        level: LogLevel,
        origin: &str,
        template: Option<fmt::Arguments<'_>>,
        buffer_size: usize,
    ) -> Self {
        let body = render_body(template, buffer_size);
        Self {
            level,
            origin: Self::sanitize_origin(origin),
            timestamp: timestamp::now(),
            message: body.text,
            truncated: body.truncated,
        }
    }

    /// Replace the timestamp, mainly for deterministic output.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `[YYYY-MM-DD HH:MM:SS] [LEVEL] [origin] message`, without a newline
    pub fn format_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] {}",
            format_timestamp(&self.timestamp),
            self.level,
            self.origin,
            self.message
        )
    }
}
