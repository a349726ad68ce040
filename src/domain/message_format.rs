/// How a broadcast body is turned into the HTML part of the email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    Plain,
    Markdown,
}

impl From<&str> for MessageFormat {
    /// Only `markdown` selects Markdown rendering, every other value is plain.
    fn from(s: &str) -> Self {
        match s {
            "markdown" => Self::Markdown,
            _ => Self::Plain,
        }
    }
}
