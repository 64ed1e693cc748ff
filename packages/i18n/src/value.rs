//! Translation values.
//!
//! Whether a value is plain or rich is decided when the catalog is authored.
//! Rich values are parsed once into [`Segment`]s, so no markup string coming
//! from a catalog ever reaches the document unparsed.

const ACCENT_OPEN: &str = r#"<span class="accent">"#;
const ACCENT_CLOSE: &str = "</span>";

/// Class applied to the highlighted part of a rich heading.
pub const ACCENT_CLASS: &str = "accent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
    Plain(String),
    Rich(RichText),
}

impl TranslationValue {
    pub fn is_rich(&self) -> bool {
        matches!(self, TranslationValue::Rich(_))
    }

    /// Text as a user would read it, markup stripped.
    pub fn plain_text(&self) -> String {
        match self {
            TranslationValue::Plain(text) => text.clone(),
            TranslationValue::Rich(rich) => rich.plain_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Accent(String),
}

/// A heading made of plain runs and accent spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parses authoring markup. Only `<span class="accent">…</span>` without
    /// nesting is accepted; anything else that looks like a tag is rejected.
    pub fn parse(markup: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut rest = markup;

        while let Some(start) = rest.find('<') {
            let (text, tail) = rest.split_at(start);
            if !text.is_empty() {
                segments.push(Segment::Text(text.to_string()));
            }
            let Some(body) = tail.strip_prefix(ACCENT_OPEN) else {
                let tag: String = tail.chars().take(24).collect();
                return Err(format!("unexpected markup `{tag}`"));
            };
            let Some(end) = body.find(ACCENT_CLOSE) else {
                return Err("unclosed accent span".to_string());
            };
            let inner = &body[..end];
            if inner.contains('<') {
                return Err("nested markup inside accent span".to_string());
            }
            segments.push(Segment::Accent(inner.to_string()));
            rest = &body[end + ACCENT_CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) | Segment::Accent(text) => text.as_str(),
            })
            .collect()
    }

    /// Serialized markup with every text run escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(&escape_html(text)),
                Segment::Accent(text) => {
                    out.push_str(ACCENT_OPEN);
                    out.push_str(&escape_html(text));
                    out.push_str(ACCENT_CLOSE);
                }
            }
        }
        out
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
