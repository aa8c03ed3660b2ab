/// Substrings that mark a Korean address: road and street suffixes,
/// neighborhood/town/village markers, city/district markers and the lot
/// number marker.
const ADDRESS_TOKENS: &[&str] = &[
    "로", "길", "동", "읍", "면", "리", "시", "군", "구", "번지",
];

/// Appended to place names so the provider leans towards address matches
const ADDRESS_QUALIFIER: &str = "주소";

pub fn looks_like_address(text: &str) -> bool {
    ADDRESS_TOKENS.iter().any(|token| text.contains(token))
}

/// Second-attempt query. Returns `text` unchanged when it already reads as
/// an address.
pub fn refine_query(text: &str) -> String {
    if looks_like_address(text) {
        text.to_string()
    } else {
        format!("{text} {ADDRESS_QUALIFIER}")
    }
}
