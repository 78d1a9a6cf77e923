/// Names and job titles allow letters and the space character only.
/// Spaces are dropped before the check, so a value made only of spaces fails.
pub fn is_letters_and_spaces(s: &str) -> bool {
    let mut letters = s.chars().filter(|c| *c != ' ').peekable();
    letters.peek().is_some() && letters.all(char::is_alphabetic)
}

/// Parses a salary typed by the user. Surrounding whitespace is ignored;
/// NaN and infinities are rejected since they cannot be stored as JSON numbers.
pub fn parse_amount(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Blank answers in edit prompts mean "leave unchanged".
pub fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Accepts "yes" in any letter case.
pub fn is_yes(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("yes")
}
