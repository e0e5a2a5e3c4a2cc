/// Split a free-text skill list into lowercase tokens.
///
/// Tokens are separated by `,` or `;`. Each piece is trimmed and lowercased;
/// pieces that are empty after trimming are dropped. Order is preserved and
/// duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Remove repeated tokens, keeping the first occurrence of each.
pub fn dedup_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}
