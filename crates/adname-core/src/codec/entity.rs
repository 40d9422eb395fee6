//! # Entity formatting
//!
//! Turns free text such as a product name into the dot-joined, title-cased
//! form used inside creative names: `"ariana  BLOSSOM"` → `"Ariana.Blossom"`.

/// Formats space-separated text as a dot-joined title-case entity.
///
/// Splits on whitespace only. Title-casing restarts after every `.` inside
/// a word, so already-formatted output passes through unchanged.
///
/// # Examples
/// ```
/// use adname_core::codec::format_entity;
///
/// assert_eq!(format_entity("customer testimonial"), "Customer.Testimonial");
/// assert_eq!(format_entity("   "), "");
/// ```
pub fn format_entity(text: &str) -> String {
    text.split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(".")
}

fn title_case_word(word: &str) -> String {
    word.split('.').map(title_case).collect::<Vec<_>>().join(".")
}

/// First character upper-cased, the rest lower-cased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
