//! Item display name → URL slug.

/// Convert a display name (e.g. `"Mirage Prime Systems"`) into the slug the
/// API uses in item paths (`"mirage_prime_systems"`).
///
/// Words are split on whitespace and `-`, lowercased, `&` becomes `and`,
/// apostrophes are dropped, and the words are joined with `_`. Any string is
/// accepted; a name that matches no item yields a slug the API answers with 404.
/// Formatting an existing slug returns it unchanged.
pub fn format_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-')
        .map(format_word)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn format_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '&' => out.push_str("and"),
            '\'' | '\u{2019}' => {}
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}
