//! Wording helpers for counts in progress and report lines

/// `noun` with an `s` unless there is exactly one
pub fn plural(noun: &str, count: usize) -> String {
    match count {
        1 => noun.to_string(),
        _ => format!("{noun}s"),
    }
}

/// `"1 module"`, `"3 modules"`
pub fn counted(count: usize, noun: &str) -> String {
    format!("{count} {}", plural(noun, count))
}
