/// Trim surrounding whitespace and strip line breaks anywhere in the value.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_strips_line_breaks() {
        assert_eq!(normalize("  a\nb\r\nc  "), "abc");
        assert_eq!(normalize("\n"), "");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn normalize_keeps_interior_spaces() {
        assert_eq!(normalize(" a b "), "a b");
    }

    #[test]
    fn capitalize_first_handles_edge_cases() {
        assert_eq!(capitalize_first("config"), "Config");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("A"), "A");
    }
}
