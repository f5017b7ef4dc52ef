//! Common utility functions shared across the codebase.

/// Letters specific to Turkish orthography, both cases.
pub const TURKISH_CHARS: [char; 12] = ['ı', 'ğ', 'ü', 'ş', 'ö', 'ç', 'İ', 'Ğ', 'Ü', 'Ş', 'Ö', 'Ç'];

/// Checks if the text contains at least one Turkish-specific letter.
///
/// Matching is exact per code point. No Unicode normalization is applied, so a
/// decomposed `u` + combining diaeresis is not treated as `ü`.
///
/// # Examples
///
/// ```
/// use turkscan::utils::contains_turkish;
///
/// assert!(contains_turkish("merhaba dünya"));
/// assert!(contains_turkish("İstanbul"));
/// assert!(contains_turkish("başarılı"));
/// assert!(!contains_turkish("hello world"));
/// assert!(!contains_turkish("é à ñ"));
/// assert!(!contains_turkish(""));
/// ```
pub fn contains_turkish(text: &str) -> bool {
    text.chars().any(|c| TURKISH_CHARS.contains(&c))
}
