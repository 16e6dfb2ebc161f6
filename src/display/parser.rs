//! report parser - converts the display tool's text report into a DisplayMap
//!
//! understands the default `xrandr` report:
//! - `Screen N: ...` headers (skipped)
//! - output lines: `<name> connected|disconnected|unknown connection [primary] [WxH+X+Y] ...`
//! - indented mode lines: `WxH[i][suffix] <rate>[*][+] ...`, where a suffix
//!   comes from user-added modes such as `1920x1080_60.00`
//! - other indented lines under an output (property dumps) are skipped

use lazy_static::lazy_static;
use regex::Regex;

use super::{Display, DisplayMap, Mode};

lazy_static! {
    static ref SCREEN_RE: Regex = Regex::new(r"^Screen \d+:").expect("valid screen regex");
    static ref OUTPUT_RE: Regex =
        Regex::new(r"^(\S+)\s+(connected|disconnected|unknown connection)(?:\s+(.*))?$")
            .expect("valid output regex");
    static ref GEOMETRY_RE: Regex =
        Regex::new(r"(?:^|\s)(\d+)x(\d+)\+(-?\d+)\+(-?\d+)(?:\s|$)").expect("valid geometry regex");
    static ref MODE_RE: Regex =
        Regex::new(r"^\s+(\d+)x(\d+)(i?)(\S*)(?:\s+(.*))?$").expect("valid mode regex");
}

/// error type for report parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number in the report
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// parse a full report into displays, keeping report order
pub fn parse(report: &str) -> Result<DisplayMap, ParseError> {
    let mut map = DisplayMap::new();
    let mut current: Option<Display> = None;
    let mut index = 0;

    for (i, line) in report.lines().enumerate() {
        let line_no = i + 1;

        if line.trim().is_empty() || SCREEN_RE.is_match(line) {
            continue;
        }

        if let Some(caps) = OUTPUT_RE.captures(line) {
            if let Some(done) = current.take() {
                push_display(&mut map, done, line_no)?;
            }
            let rest = caps.get(3).map_or("", |m| m.as_str());
            current = Some(parse_output(&caps[1], &caps[2], rest, index, line_no)?);
            index += 1;
            continue;
        }

        if let Some(caps) = MODE_RE.captures(line) {
            let display = current
                .as_mut()
                .ok_or_else(|| ParseError::new(line_no, "mode listed before any output"))?;
            let rest = caps.get(5).map_or("", |m| m.as_str());
            let mut mode = parse_mode(&caps[1], &caps[2], !caps[3].is_empty(), rest, line_no)?;
            mode.suffix = caps[4].to_string();
            if mode.current {
                display.native = true;
            }
            display.modes.push(mode);
            continue;
        }

        if current.is_some() && line.starts_with(char::is_whitespace) {
            continue;
        }

        return Err(ParseError::new(
            line_no,
            format!("unrecognized line: '{}'", line.trim()),
        ));
    }

    if let Some(done) = current.take() {
        let line_no = report.lines().count();
        push_display(&mut map, done, line_no)?;
    }

    Ok(map)
}

fn push_display(map: &mut DisplayMap, display: Display, line_no: usize) -> Result<(), ParseError> {
    let id = display.id.clone();
    if !map.insert(display) {
        return Err(ParseError::new(
            line_no,
            format!("duplicate output '{}'", id),
        ));
    }
    Ok(())
}

fn parse_output(
    id: &str,
    state: &str,
    rest: &str,
    index: usize,
    line_no: usize,
) -> Result<Display, ParseError> {
    let mut display = Display::new(id, index);
    display.connected = state == "connected";
    display.primary = rest.split_whitespace().any(|token| token == "primary");

    if let Some(caps) = GEOMETRY_RE.captures(rest) {
        display.width = Some(parse_number(&caps[1], line_no)?);
        display.height = Some(parse_number(&caps[2], line_no)?);
        display.x = Some(parse_number(&caps[3], line_no)?);
        display.y = Some(parse_number(&caps[4], line_no)?);
    }

    Ok(display)
}

fn parse_mode(
    width: &str,
    height: &str,
    interlaced: bool,
    rest: &str,
    line_no: usize,
) -> Result<Mode, ParseError> {
    let mut mode = Mode::new(parse_number(width, line_no)?, parse_number(height, line_no)?);
    mode.interlaced = interlaced;

    // rates print as "%6.2f" followed by '*' (current) and '+' (preferred);
    // a lone "+" belongs to the rate before it
    for token in rest.split_whitespace() {
        let rate = token.trim_end_matches(['*', '+']);
        let markers = &token[rate.len()..];

        if markers.contains('*') {
            mode.current = true;
        }
        if markers.contains('+') {
            mode.preferred = true;
        }

        if rate.is_empty() {
            continue;
        }
        if rate.parse::<f64>().is_err() {
            return Err(ParseError::new(
                line_no,
                format!("invalid refresh rate '{}'", token),
            ));
        }
        mode.rates.push(rate.to_string());
    }

    Ok(mode)
}

fn parse_number<T: std::str::FromStr>(value: &str, line_no: usize) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::new(line_no, format!("number out of range: '{}'", value)))
}
