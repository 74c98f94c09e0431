/// Uppercase the first character ("lower back" -> "Lower back")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize each item and join with ", "
pub fn capitalized_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| capitalize(item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Number instruction steps, one per paragraph.
/// Steps that already start with "N." keep their own numbering.
pub fn numbered_steps(steps: &[String]) -> String {
    if steps.is_empty() {
        return "No instructions available.".to_string();
    }
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            if has_step_number(step) {
                step.clone()
            } else {
                format!("{}. {}", i + 1, step)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn has_step_number(step: &str) -> bool {
    let digits = step.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && step[digits..].starts_with('.')
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pull-up"), "Pull-up");
        assert_eq!(capitalize("full body"), "Full body");
        assert_eq!(capitalize("Back"), "Back");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalized_list() {
        let muscles = vec!["biceps".to_string(), "rhomboids".to_string()];
        assert_eq!(capitalized_list(&muscles), "Biceps, Rhomboids");
        assert_eq!(capitalized_list(&[]), "");
    }

    #[test]
    fn test_numbered_steps() {
        let remote = vec!["Grip the bar.".to_string(), "Pull up.".to_string()];
        assert_eq!(numbered_steps(&remote), "1. Grip the bar.\n\n2. Pull up.");

        let local = vec!["1. Start standing".to_string(), "2. Jump up".to_string()];
        assert_eq!(numbered_steps(&local), "1. Start standing\n\n2. Jump up");

        assert_eq!(numbered_steps(&[]), "No instructions available.");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }
}
