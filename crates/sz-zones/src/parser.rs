//! Line-oriented reader for safe-zone files.
//!
//! # Block grammar
//!
//! Inside a temporal graph block every line holds zero or more vertex blocks,
//! and every vertex block holds zero or more intervals:
//!
//! ```text
//! line    := ( "{" body "}" )*
//! body    := ( "[" digits "," digits "]" )*
//! ```
//!
//! Vertex blocks become consecutive `VertexIntervals` entries, so a file may
//! put one vertex per line or the whole graph on a single line.  The block
//! ends at a line that is exactly `Temporal graph end`, or at end of input.
//!
//! With [`Strictness::Lenient`] text that does not fit the grammar is skipped
//! without complaint.

use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use sz_core::{AgentGroupId, SafeInterval};

use crate::{GroupSafeZones, Strictness, VertexIntervals, ZoneError, ZoneResult};

// ── Markers ───────────────────────────────────────────────────────────────────

pub(crate) const BLOCK_START: &str = "Temporal graph start";
pub(crate) const BLOCK_END:   &str = "Temporal graph end";

static AGENT_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Safe zone for agent group ([0-9]+):$").expect("agent group pattern"));
static VERTEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("vertex block pattern"));
static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]+),([0-9]+)\]").expect("interval pattern"));

// ── LineReader ────────────────────────────────────────────────────────────────

/// One input line with its line ending removed.
#[derive(Copy, Clone, Debug)]
pub struct Line<'a> {
    /// 1-based line number in the source.
    pub number: usize,
    pub text:   &'a str,
}

/// Buffered line source that strips `\n` and a trailing `\r`, so CRLF files
/// read the same as LF files.
///
/// Bytes that are not valid UTF-8 become `U+FFFD` and are then handled like
/// any other text the grammar does not expect.
pub struct LineReader<R> {
    inner:   R,
    raw:     Vec<u8>,
    buf:     String,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, raw: Vec::new(), buf: String::new(), line_no: 0 }
    }

    /// The next line, or `None` at end of input.
    pub fn next_line(&mut self) -> ZoneResult<Option<Line<'_>>> {
        self.raw.clear();
        if self.inner.read_until(b'\n', &mut self.raw)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        self.buf.clear();
        self.buf.push_str(&String::from_utf8_lossy(&self.raw));
        let text = self.buf.strip_suffix('\n').unwrap_or(&self.buf);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Ok(Some(Line { number: self.line_no, text }))
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

// ── Line classification ───────────────────────────────────────────────────────

/// What a top-level (outside any block) line means to the index builder.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Marker {
    GroupHeader(AgentGroupId),
    BlockStart,
    Other,
}

pub(crate) fn classify(line: Line<'_>) -> ZoneResult<Marker> {
    if line.text == BLOCK_START {
        return Ok(Marker::BlockStart);
    }
    let Some(caps) = AGENT_GROUP.captures(line.text) else {
        return Ok(Marker::Other);
    };
    caps[1]
        .parse::<u32>()
        .map(|id| Marker::GroupHeader(AgentGroupId(id)))
        .map_err(|_| ZoneError::Format {
            line:    line.number,
            message: format!("agent group id {:?} does not fit in 32 bits", &caps[1]),
        })
}

// ── Temporal graph block ──────────────────────────────────────────────────────

/// Read one agent group's temporal graph block.
///
/// `lines` must be positioned just after the `Temporal graph start` line.
/// Consumes up to and including the end marker.  Vertex blocks are returned
/// in encounter order; the caller checks the count against the graph.
pub fn read_temporal_graph<R: BufRead>(
    lines: &mut LineReader<R>,
    strictness: Strictness,
) -> ZoneResult<GroupSafeZones> {
    let mut zones = GroupSafeZones::default();
    while let Some(line) = lines.next_line()? {
        if line.text == BLOCK_END {
            break;
        }
        parse_vertex_line(line, strictness, &mut zones)?;
    }
    Ok(zones)
}

/// Append every `{...}` block on `line` to `zones`.
fn parse_vertex_line(
    line: Line<'_>,
    strictness: Strictness,
    zones: &mut GroupSafeZones,
) -> ZoneResult<()> {
    let mut cursor = 0;
    for block in VERTEX.find_iter(line.text) {
        check_gap(&line.text[cursor..block.start()], line.number, strictness)?;
        cursor = block.end();

        // Strip the single-byte braces.
        let body = &line.text[block.start() + 1..block.end() - 1];
        zones.push(parse_vertex_body(body, line.number, strictness)?);
    }
    check_gap(&line.text[cursor..], line.number, strictness)
}

fn parse_vertex_body(body: &str, line: usize, strictness: Strictness) -> ZoneResult<VertexIntervals> {
    let mut intervals = VertexIntervals::empty();
    let mut cursor = 0;
    for caps in RANGE.captures_iter(body) {
        let whole = caps.get_match();
        check_gap(&body[cursor..whole.start()], line, strictness)?;
        cursor = whole.end();

        let bounds = caps[1].parse::<u64>().ok().zip(caps[2].parse::<u64>().ok());
        let Some((start, end)) = bounds else {
            reject(line, strictness, format!("interval {} overflows u64", whole.as_str()))?;
            continue;
        };
        match SafeInterval::new(start, end) {
            Ok(iv) => intervals.push(iv),
            Err(e) => reject(line, strictness, e.to_string())?,
        }
    }
    check_gap(&body[cursor..], line, strictness)?;
    Ok(intervals)
}

fn check_gap(gap: &str, line: usize, strictness: Strictness) -> ZoneResult<()> {
    if gap.trim().is_empty() {
        return Ok(());
    }
    reject(line, strictness, format!("unexpected text {gap:?}"))
}

/// Strict mode turns a malformed token into an error; lenient mode drops it.
fn reject(line: usize, strictness: Strictness, message: String) -> ZoneResult<()> {
    match strictness {
        Strictness::Strict => Err(ZoneError::Format { line, message }),
        Strictness::Lenient => {
            log::debug!("line {line}: skipping malformed safe zone token: {message}");
            Ok(())
        }
    }
}
