//! Markdown to terminal text
//!
//! Renders the subset of markdown that chat models commonly produce as
//! padded, word-wrapped plain text. Fenced code is copied verbatim.

/// Left padding applied to every rendered line
pub const LEFT_PADDING: usize = 6;

/// Text never wraps narrower than this, whatever the terminal reports
const MIN_TEXT_WIDTH: usize = 20;

/// Extra indent for fenced code lines
const CODE_INDENT: &str = "    ";

const QUOTE_PREFIX: &str = "│ ";

const RULE_CHAR: char = '─';

/// Render markdown for a terminal of `width` columns
pub fn render_markdown(source: &str, width: usize, padding: usize) -> String {
    let mut renderer = Renderer::new(width, padding);
    for line in source.lines() {
        renderer.line(line);
    }
    renderer.finish()
}

struct Renderer<'a> {
    text_width: usize,
    pad: String,
    in_code: bool,
    paragraph: Vec<&'a str>,
    out: Vec<String>,
}

impl<'a> Renderer<'a> {
    fn new(width: usize, padding: usize) -> Self {
        Self {
            text_width: width.saturating_sub(padding).max(MIN_TEXT_WIDTH),
            pad: " ".repeat(padding),
            in_code: false,
            paragraph: Vec::new(),
            out: Vec::new(),
        }
    }

    fn line(&mut self, line: &'a str) {
        let trimmed = line.trim();

        if self.in_code {
            if is_fence(trimmed) {
                self.in_code = false;
            } else {
                let code = line.trim_end();
                if code.is_empty() {
                    self.out.push(String::new());
                } else {
                    self.push(format!("{}{}", CODE_INDENT, code));
                }
            }
            return;
        }

        if is_fence(trimmed) {
            self.flush_paragraph();
            self.in_code = true;
            return;
        }

        if trimmed.is_empty() {
            self.flush_paragraph();
            self.blank();
            return;
        }

        if let Some((level, text)) = heading(trimmed) {
            self.flush_paragraph();
            self.heading(level, text);
            return;
        }

        if is_rule(trimmed) {
            self.flush_paragraph();
            let rule: String = std::iter::repeat(RULE_CHAR).take(self.text_width).collect();
            self.push(rule);
            return;
        }

        if let Some(quoted) = trimmed.strip_prefix('>') {
            self.flush_paragraph();
            let quoted = quoted.strip_prefix(' ').unwrap_or(quoted);
            let width = self.text_width.saturating_sub(QUOTE_PREFIX.chars().count());
            for wrapped in wrap(&inline(quoted), width) {
                self.push(format!("{}{}", QUOTE_PREFIX, wrapped));
            }
            return;
        }

        if let Some((marker, text)) = list_item(trimmed) {
            self.flush_paragraph();
            let depth = (line.len() - line.trim_start().len()) / 2;
            self.list_item(depth, &marker, text);
            return;
        }

        self.paragraph.push(trimmed);
    }

    fn heading(&mut self, level: usize, text: &str) {
        let lines = wrap(&inline(text), self.text_width);
        let underline_len = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for line in lines {
            self.push(line);
        }
        let underline = match level {
            1 => Some('='),
            2 => Some('-'),
            _ => None,
        };
        if let Some(c) = underline {
            self.push(std::iter::repeat(c).take(underline_len).collect());
        }
    }

    fn list_item(&mut self, depth: usize, marker: &str, text: &str) {
        let indent = " ".repeat(depth * 2);
        let hang = " ".repeat(marker.chars().count());
        let width = self
            .text_width
            .saturating_sub(indent.len() + hang.len())
            .max(1);

        for (i, wrapped) in wrap(&inline(text), width).into_iter().enumerate() {
            let lead = if i == 0 { marker } else { hang.as_str() };
            self.push(format!("{}{}{}", indent, lead, wrapped));
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let joined = self.paragraph.join(" ");
        self.paragraph.clear();
        for wrapped in wrap(&inline(&joined), self.text_width) {
            self.push(wrapped);
        }
    }

    fn blank(&mut self) {
        if self.out.last().map_or(false, |l| !l.is_empty()) {
            self.out.push(String::new());
        }
    }

    fn push(&mut self, line: String) {
        if line.is_empty() {
            self.out.push(line);
        } else {
            self.out.push(format!("{}{}", self.pad, line));
        }
    }

    fn finish(mut self) -> String {
        self.flush_paragraph();
        while self.out.last().map_or(false, |l| l.is_empty()) {
            self.out.pop();
        }
        self.out.join("\n")
    }
}

fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// ATX heading level and text
fn heading(trimmed: &str) -> Option<(usize, &str)> {
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some((level, rest.trim().trim_end_matches('#').trim_end()))
}

fn is_rule(trimmed: &str) -> bool {
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = compact.chars();
    match chars.next() {
        Some(first @ ('-' | '*' | '_')) => compact.len() >= 3 && chars.all(|c| c == first),
        _ => false,
    }
}

/// Rendered marker and text of a bullet or numbered item
fn list_item(trimmed: &str) -> Option<(String, &str)> {
    for bullet in ["- ", "* ", "+ "] {
        if let Some(text) = trimmed.strip_prefix(bullet) {
            return Some(("• ".to_string(), text));
        }
    }

    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let rest = &trimmed[digits..];
    let text = rest
        .strip_prefix(". ")
        .or_else(|| rest.strip_prefix(") "))?;
    Some((format!("{}. ", &trimmed[..digits]), text))
}

enum Span {
    Text(String),
    /// Run of `*` or `_` that may open or close emphasis
    Delim {
        ch: char,
        len: usize,
        can_open: bool,
        can_close: bool,
        matched: bool,
    },
}

/// Strip inline markup that has no plain-text rendering
///
/// Code spans lose their backticks and keep their content verbatim. Paired
/// `*`/`_` emphasis runs are dropped; intraword underscores and lone or
/// spaced asterisks stay as written.
fn inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut spans: Vec<Span> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();

        if c == '`' {
            if let Some(end) = closing_backticks(&chars, i + run, run) {
                plain.extend(&chars[i + run..end]);
                i = end + run;
            } else {
                plain.extend(&chars[i..i + run]);
                i += run;
            }
            continue;
        }

        if c == '*' || c == '_' {
            let before = i.checked_sub(1).map(|p| chars[p]);
            let after = chars.get(i + run).copied();
            let can_open = after.map_or(false, |a| !a.is_whitespace())
                && before.map_or(true, |b| !b.is_alphanumeric());
            let can_close = before.map_or(false, |b| !b.is_whitespace())
                && after.map_or(true, |a| !a.is_alphanumeric());

            if can_open || can_close {
                if !plain.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut plain)));
                }
                spans.push(Span::Delim {
                    ch: c,
                    len: run,
                    can_open,
                    can_close,
                    matched: false,
                });
            } else {
                plain.extend(&chars[i..i + run]);
            }
            i += run;
            continue;
        }

        plain.push(c);
        i += 1;
    }
    if !plain.is_empty() {
        spans.push(Span::Text(plain));
    }

    pair_delimiters(&mut spans);

    let mut out = String::with_capacity(text.len());
    for span in spans {
        match span {
            Span::Text(t) => out.push_str(&t),
            Span::Delim { matched: true, .. } => {}
            Span::Delim { ch, len, .. } => out.extend(std::iter::repeat(ch).take(len)),
        }
    }
    out
}

/// Index where a backtick run of exactly `len` starts, searching from `from`
fn closing_backticks(chars: &[char], from: usize, len: usize) -> Option<usize> {
    let mut i = from;
    while i < chars.len() {
        if chars[i] == '`' {
            let run = chars[i..].iter().take_while(|&&x| x == '`').count();
            if run == len {
                return Some(i);
            }
            i += run;
        } else {
            i += 1;
        }
    }
    None
}

/// Mark closers and the nearest compatible opener as matched
fn pair_delimiters(spans: &mut [Span]) {
    let mut openers: Vec<usize> = Vec::new();

    for idx in 0..spans.len() {
        let (ch, len, can_open, can_close) = match spans[idx] {
            Span::Delim { ch, len, can_open, can_close, .. } => (ch, len, can_open, can_close),
            Span::Text(_) => continue,
        };

        if can_close {
            let found = openers.iter().rposition(|&o| {
                matches!(spans[o], Span::Delim { ch: oc, len: ol, .. } if oc == ch && ol == len)
            });
            if let Some(pos) = found {
                let opener = openers[pos];
                openers.truncate(pos);
                for i in [opener, idx] {
                    if let Span::Delim { matched, .. } = &mut spans[i] {
                        *matched = true;
                    }
                }
                continue;
            }
        }

        if can_open {
            openers.push(idx);
        }
    }
}

/// Greedy word wrap; words wider than `width` keep a line of their own
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
