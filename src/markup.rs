//! Flattens the HTML fragments the battle server streams into styled lines.
//!
//! This is not an HTML parser. It understands the handful of tags the server
//! emits (`p`, `div`, `span`, `b`, `h3`, `h4`, `br`, ...) well enough to break
//! lines in the right places and carry bold, italic, `class` and inline
//! `color` through to the terminal. Unknown tags are dropped, their text kept.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)([^>]*)>").expect("tag pattern is valid")
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class\s*=\s*['"]([^'"]*)['"]"#).expect("class pattern is valid")
});

static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[;'\s])color\s*:\s*#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b")
        .expect("color pattern is valid")
});

static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("entity pattern is valid")
});

/// Inline style of a run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    /// Innermost `class` attribute
    pub class: Option<String>,
    /// Innermost inline `color:#rrggbb`
    pub color: Option<(u8, u8, u8)>,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

/// One display line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupLine {
    pub spans: Vec<StyledSpan>,
}

impl MarkupLine {
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// First class found on the line, used for line-level styling.
    pub fn class(&self) -> Option<&str> {
        self.spans.iter().find_map(|s| s.style.class.as_deref())
    }
}

/// Parse a fragment into display lines.
///
/// Whitespace collapses the way a browser would; `<br>` always breaks the
/// line, block tags break it only when it already has content.
pub fn parse_markup(input: &str) -> Vec<MarkupLine> {
    let mut builder = LineBuilder::default();
    let mut stack: Vec<Frame> = Vec::new();
    let mut last = 0;

    for caps in TAG_RE.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        builder.push_text(&input[last..whole.start()], &current_style(&stack));
        last = whole.end();

        let closing = group(&caps, 1) == "/";
        let name = group(&caps, 2).to_ascii_lowercase();
        let attrs = group(&caps, 3);

        if closing {
            pop_frame(&mut stack, &name);
            if is_block(&name) {
                builder.break_line();
            }
            continue;
        }

        if name == "br" {
            builder.hard_break();
            continue;
        }
        if is_block(&name) {
            builder.break_line();
        }
        if is_void(&name) || attrs.trim_end().ends_with('/') {
            continue;
        }
        let frame = Frame::open(name, attrs, &current_style(&stack));
        stack.push(frame);
    }

    builder.push_text(&input[last..], &current_style(&stack));
    builder.finish()
}

/// Flatten a fragment into plain text, one line per display line.
pub fn to_plain_text(input: &str) -> String {
    parse_markup(input)
        .iter()
        .map(MarkupLine::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode named and numeric character references.
///
/// Unknown names are left untouched.
pub fn decode_entities(input: &str) -> String {
    ENTITY_RE
        .replace_all(input, |caps: &Captures<'_>| {
            let entity = group(caps, 1);
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(numeric) = entity.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "iexcl" => "¡",
        "iquest" => "¿",
        "aacute" => "á",
        "eacute" => "é",
        "iacute" => "í",
        "oacute" => "ó",
        "uacute" => "ú",
        "ntilde" => "ñ",
        _ => return None,
    };
    Some(decoded.to_string())
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "li" | "ul" | "ol" | "tr" | "table" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

fn is_void(name: &str) -> bool {
    matches!(name, "br" | "hr" | "img" | "input" | "meta" | "link" | "wbr")
}

fn parse_color(attrs: &str) -> Option<(u8, u8, u8)> {
    let caps = COLOR_RE.captures(attrs)?;
    let hex = group(&caps, 1);
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    if hex.len() == 3 {
        let mut digits = hex.chars().map(|c| c.to_string().repeat(2));
        let r = channel(&digits.next()?)?;
        let g = channel(&digits.next()?)?;
        let b = channel(&digits.next()?)?;
        Some((r, g, b))
    } else {
        Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?))
    }
}

#[derive(Debug)]
struct Frame {
    name: String,
    style: SpanStyle,
}

impl Frame {
    fn open(name: String, attrs: &str, parent: &SpanStyle) -> Self {
        let mut style = parent.clone();
        match name.as_str() {
            "b" | "strong" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => style.bold = true,
            "i" | "em" => style.italic = true,
            _ => {}
        }
        if let Some(class) = CLASS_RE.captures(attrs) {
            style.class = Some(group(&class, 1).to_string());
        }
        if let Some(color) = parse_color(attrs) {
            style.color = Some(color);
        }
        Self { name, style }
    }
}

fn current_style(stack: &[Frame]) -> SpanStyle {
    stack.last().map(|f| f.style.clone()).unwrap_or_default()
}

/// Pop up to and including the nearest frame named `name`. Stray closers are ignored.
fn pop_frame(stack: &mut Vec<Frame>, name: &str) {
    if let Some(index) = stack.iter().rposition(|f| f.name == name) {
        stack.truncate(index);
    }
}

#[derive(Debug, Default)]
struct LineBuilder {
    lines: Vec<MarkupLine>,
    current: MarkupLine,
}

impl LineBuilder {
    fn push_text(&mut self, raw: &str, style: &SpanStyle) {
        let mut text = collapse_whitespace(raw);
        if self.ends_with_space() {
            text = text.trim_start().to_string();
        }
        if text.is_empty() {
            return;
        }
        let text = decode_entities(&text);

        match self.current.spans.last_mut() {
            Some(last) if last.style == *style => last.text.push_str(&text),
            _ => self.current.spans.push(StyledSpan {
                text,
                style: style.clone(),
            }),
        }
    }

    /// True at the start of a line or after a space.
    fn ends_with_space(&self) -> bool {
        self.current
            .spans
            .last()
            .map_or(true, |s| s.text.is_empty() || s.text.ends_with(' '))
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.hard_break();
        }
    }

    fn hard_break(&mut self) {
        let mut line = std::mem::take(&mut self.current);
        trim_line_end(&mut line);
        self.lines.push(line);
    }

    fn finish(mut self) -> Vec<MarkupLine> {
        self.break_line();
        while self.lines.last().is_some_and(MarkupLine::is_empty) {
            self.lines.pop();
        }
        self.lines
    }
}

fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

fn trim_line_end(line: &mut MarkupLine) {
    while let Some(last) = line.spans.last_mut() {
        let trimmed_len = last.text.trim_end().len();
        last.text.truncate(trimmed_len);
        if last.text.is_empty() {
            line.spans.pop();
        } else {
            break;
        }
    }
}
