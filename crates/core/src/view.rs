//! View - one static glyph block with an anchor offset.
//!
//! Views are parsed from a small text format:
//!
//! ```text
//! width 5
//! height 2
//! origin_x 2
//! origin_y 1
//! (o o)
//!  \_/
//! ```
//!
//! Exactly four header lines are consumed; everything after them is body
//! content, kept verbatim apart from row separators.

use crate::error::AssetError;

const HEADER_FIELDS: [&str; 4] = ["width", "height", "origin_x", "origin_y"];

/// Immutable visual data for one frame of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    width: i32,
    height: i32,
    origin_x: i32,
    origin_y: i32,
    /// Body rows joined with `'\n'`. Rows may be ragged.
    body: String,
}

impl View {
    /// Build a view directly. `\r\n` and lone `\r` in `body` become row breaks.
    pub fn new(width: i32, height: i32, origin_x: i32, origin_y: i32, body: &str) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
            body: normalize_rows(body),
        }
    }

    /// A solid `width` x `height` block of `ch` anchored at its top-left corner.
    pub fn filled(width: i32, height: i32, ch: char) -> Self {
        let row: String = std::iter::repeat(ch).take(width.max(0) as usize).collect();
        let body = vec![row; height.max(0) as usize].join("\n");
        Self::new(width, height, 0, 0, &body)
    }

    /// Parse a view from asset text. `name` is only used for diagnostics.
    pub fn parse(name: &str, text: &str) -> Result<Self, AssetError> {
        let mut rest = text;
        let mut values = [0i32; 4];

        for (slot, field) in values.iter_mut().zip(HEADER_FIELDS) {
            let malformed = || AssetError::MalformedHeader {
                name: name.to_string(),
                field,
            };

            let (line, tail) = split_line(rest).ok_or_else(malformed)?;
            rest = tail;

            let mut parts = line.split_whitespace();
            if parts.next() != Some(field) {
                return Err(malformed());
            }
            *slot = parts
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(malformed)?;
            if parts.next().is_some() {
                return Err(malformed());
            }
        }

        let [width, height, origin_x, origin_y] = values;
        if width < 0 || height < 0 {
            let field = if width < 0 { "width" } else { "height" };
            return Err(AssetError::MalformedHeader {
                name: name.to_string(),
                field,
            });
        }

        Ok(Self::new(width, height, origin_x, origin_y, rest))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    pub fn origin_y(&self) -> i32 {
        self.origin_y
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Body rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n')
    }
}

/// Split off the first line. Returns `None` when there is no content left.
fn split_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    match text.find(['\n', '\r']) {
        Some(i) => {
            let skip = if text[i..].starts_with("\r\n") { 2 } else { 1 };
            Some((&text[..i], &text[i + skip..]))
        }
        None => Some((text, "")),
    }
}

fn normalize_rows(body: &str) -> String {
    if body.contains('\r') {
        body.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        body.to_string()
    }
}
