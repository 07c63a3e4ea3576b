//! Text normalization shared by the lexical scorer, the semantic scorer and the stub embedder.

/// Lowercases `text`, turns every non-alphanumeric, non-whitespace char into a space, then
/// collapses whitespace runs to a single space and trims both ends.
///
/// Total over all inputs; `""` maps to `""`.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Splits already-normalized text into tokens.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|token| !token.is_empty())
}
