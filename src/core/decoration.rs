//! Message decoration: prefix/suffix composition and title helpers

/// Default prefix applied to every composite message.
pub const DEFAULT_PREFIX: &str = "\n  ";

/// Prefix/suffix decoration applied to every posted message.
///
/// The composite delivered to sinks is `prefix + body + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
}

impl Decoration {
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Build the composite for `body` without mutating it.
    #[must_use]
    pub fn compose(&self, body: &str) -> String {
        let mut composite =
            String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        composite.push_str(&self.prefix);
        composite.push_str(body);
        composite.push_str(&self.suffix);
        composite
    }

    /// Restore the default prefix and the empty suffix.
    pub fn reset(&mut self) {
        self.prefix = DEFAULT_PREFIX.to_string();
        self.suffix.clear();
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: String::new(),
        }
    }
}

/// Double-underlined heading for demo output.
#[must_use]
pub fn title(text: &str) -> String {
    format!("\n  {}\n {}", text, "=".repeat(text.len() + 2))
}

/// Single-underlined heading for demo output.
#[must_use]
pub fn subtitle(text: &str) -> String {
    format!("\n  {}\n {}", text, "-".repeat(text.len() + 2))
}
