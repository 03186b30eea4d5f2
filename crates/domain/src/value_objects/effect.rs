/// Locale code kept when deriving effect text.
pub const ENGLISH: &str = "en";

/// One localized effect description from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectEntry {
    pub effect: String,
    pub short_effect: String,
    /// Locale code, e.g. "en" or "de"
    pub language: String,
}

impl EffectEntry {
    pub fn new(
        effect: impl Into<String>,
        short_effect: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            effect: effect.into(),
            short_effect: short_effect.into(),
            language: language.into(),
        }
    }

    pub fn is_english(&self) -> bool {
        self.language == ENGLISH
    }
}

/// Join the selected text of every English entry, in catalog order.
pub fn english_text<F>(entries: &[EffectEntry], select: F, separator: &str) -> String
where
    F: Fn(&EffectEntry) -> &str,
{
    entries
        .iter()
        .filter(|entry| entry.is_english())
        .map(select)
        .collect::<Vec<_>>()
        .join(separator)
}
