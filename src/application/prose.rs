// Prose formatting rules shared by the title and description checkers

/// Words that may stay lowercase inside a Title Case string
pub const NON_CAPS_WORDS: [&str; 18] = [
    "of", "the", "vs", "to", "by", "per", "in", "with", "no", "for", "over", "a", "but", "from",
    "and", "v1", "v2", "on",
];

/// Absent and empty strings count as Title Case
pub fn is_title_case(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return true;
    };
    text.split_whitespace()
        .all(|word| is_capitalized(word) || is_non_caps_word(word))
}

fn is_non_caps_word(word: &str) -> bool {
    let stripped: String = word.chars().filter(|c| !matches!(c, '.' | '(' | ')')).collect();
    NON_CAPS_WORDS.contains(&stripped.as_str())
}

/// First character is not a lowercase letter; digits and punctuation pass
pub fn is_capitalized(text: &str) -> bool {
    text.chars().next().is_some_and(|c| !c.is_lowercase())
}

pub fn ends_with_period(text: &str) -> bool {
    text.ends_with('.')
}

/// More than one sentence, or at least a comma
pub fn has_multiple_clauses(text: &str) -> bool {
    let mut segments: Vec<&str> = text.split('.').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments.len() > 1 || text.contains(',')
}
