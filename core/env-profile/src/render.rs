// core/env-profile/src/render.rs
// Text renderings of a profile and the module parser

use crate::error::ProfileError;
use crate::key::EnvKey;
use crate::literal::QuotedLiteral;
use crate::profile::EnvProfile;

const USE_STRICT: &str = "'use strict'";
const MODULE_OPEN: &str = "module.exports = {";
const MODULE_CLOSE: &str = "}";
const INDENT: &str = "  ";

/// Output formats understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// `module.exports = {...}` with single-quoted, pre-quoted values
    Module,
    /// `KEY=value` lines with unquoted values
    Dotenv,
    /// Pretty JSON object of raw literals
    Json,
}

impl RenderFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Module => "module",
            RenderFormat::Dotenv => "dotenv",
            RenderFormat::Json => "json",
        }
    }
}

pub fn render(profile: &EnvProfile, format: RenderFormat) -> Result<String, ProfileError> {
    match format {
        RenderFormat::Module => Ok(render_module(profile)),
        RenderFormat::Dotenv => Ok(render_dotenv(profile)),
        RenderFormat::Json => profile.to_json().map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// Render the CommonJS module a bundler reads for textual substitution.
pub fn render_module(profile: &EnvProfile) -> String {
    let mut out = String::new();
    out.push_str(USE_STRICT);
    out.push('\n');
    out.push_str(MODULE_OPEN);
    out.push('\n');

    let last = EnvKey::ALL.len() - 1;
    for (i, (key, value)) in profile.entries().enumerate() {
        out.push_str(INDENT);
        out.push_str(key.as_str());
        out.push_str(": '");
        out.push_str(&escape_single_quoted(value.raw()));
        out.push('\'');
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str(MODULE_CLOSE);
    out.push('\n');
    out
}

/// Render `KEY=value` lines with the quotes stripped.
pub fn render_dotenv(profile: &EnvProfile) -> String {
    profile
        .entries()
        .map(|(key, value)| format!("{}={}\n", key, value.unquoted()))
        .collect()
}

/// `process.env.KEY -> raw literal` pairs, in record order, for define-style substitution.
pub fn define_entries(profile: &EnvProfile) -> Vec<(String, String)> {
    profile
        .entries()
        .map(|(key, value)| (format!("process.env.{}", key), value.raw().to_string()))
        .collect()
}

/// Parse module text produced by [`render_module`] (or written by hand in the same shape).
///
/// Blank lines and `//` comments are skipped and `'use strict'` is optional.
/// Every entry but the last needs a trailing comma; one after the last entry
/// is tolerated. Values are validated.
pub fn parse_module(text: &str) -> Result<EnvProfile, ProfileError> {
    let mut opened = false;
    let mut closed = false;
    let mut seen: [Option<usize>; 9] = [None; 9];
    let mut entries = Vec::with_capacity(EnvKey::ALL.len());
    // Line of the previous entry when it was written without a trailing comma.
    let mut missing_comma: Option<usize> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if closed {
            return Err(malformed(line_no, "content after the closing brace"));
        }

        if !opened {
            let statement = line.trim_end_matches(';');
            if statement == USE_STRICT || statement == "\"use strict\"" {
                continue;
            }
            if compact(line) != compact(MODULE_OPEN) {
                return Err(malformed(line_no, "expected `module.exports = {`"));
            }
            opened = true;
            continue;
        }

        if line.trim_end_matches(';') == MODULE_CLOSE {
            closed = true;
            continue;
        }

        if let Some(previous) = missing_comma {
            return Err(malformed(previous, "missing comma between entries"));
        }

        let (key, value, has_comma) = parse_entry(line, line_no)?;
        if !has_comma {
            missing_comma = Some(line_no);
        }
        if let Some(first) = seen[key.index()] {
            tracing::debug!(key = %key, first_line = first, "duplicate key in module");
            return Err(ProfileError::DuplicateKey { key, line: line_no });
        }
        seen[key.index()] = Some(line_no);
        entries.push((key, value));
    }

    if !opened {
        return Err(malformed(text.lines().count().max(1), "missing `module.exports = {`"));
    }
    if !closed {
        return Err(malformed(text.lines().count().max(1), "missing closing brace"));
    }

    let profile = EnvProfile::from_entries(entries)?;
    profile.validate()?;
    Ok(profile)
}

/// Parse a module and require it to match `expected` exactly.
pub fn check_module(text: &str, expected: &EnvProfile) -> Result<Vec<EnvKey>, ProfileError> {
    let parsed = parse_module(text)?;
    Ok(EnvKey::ALL
        .iter()
        .copied()
        .filter(|key| parsed.get(*key) != expected.get(*key))
        .collect())
}

/// Returns the entry and whether it ended with a comma.
fn parse_entry(line: &str, line_no: usize) -> Result<(EnvKey, QuotedLiteral, bool), ProfileError> {
    let (name, rest) = line
        .split_once(':')
        .ok_or_else(|| malformed(line_no, "expected `KEY: 'value'`"))?;

    let key: EnvKey = name.trim().parse()?;

    let rest = rest.trim();
    let (rest, has_comma) = match rest.strip_suffix(',') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (rest, false),
    };
    let body = rest
        .strip_prefix('\'')
        .and_then(|r| r.strip_suffix('\''))
        .ok_or_else(|| malformed(line_no, "value must be a single-quoted string"))?;

    let raw = unescape_single_quoted(body).ok_or_else(|| malformed(line_no, "bad escape sequence"))?;
    let value = QuotedLiteral::parse(&raw).map_err(|e| ProfileError::InvalidValue {
        key,
        reason: e.to_string(),
    })?;

    Ok((key, value, has_comma))
}

fn escape_single_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_single_quoted(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                '\\' => out.push('\\'),
                '\'' => out.push('\''),
                '"' => out.push('"'),
                _ => return None,
            },
            // An unescaped quote would have closed the JS string early.
            '\'' => return None,
            _ => out.push(c),
        }
    }
    Some(out)
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn malformed(line: usize, reason: &str) -> ProfileError {
    ProfileError::Malformed {
        line,
        reason: reason.to_string(),
    }
}
