//! Tab completion of command names.
//!
//! The last space-delimited token of the input is completed against the
//! registered command names, whatever position it is in:
//! - Single match: replace the token and append a space
//! - Multiple matches: list them, input untouched
//! - No match: nothing happens

/// Result of a completion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The whole new input value.
    Single(String),
    /// Every matching name, in registration order.
    Multiple(Vec<String>),
    None,
}

/// Complete the last token of `input` against `names`.
///
/// Matching is a case-sensitive prefix test.
pub fn complete<'a>(input: &str, names: impl IntoIterator<Item = &'a str>) -> Completion {
    let trimmed = input.trim();
    let mut words: Vec<&str> = trimmed.split(' ').collect();
    let partial = words.pop().unwrap_or_default();

    let matches: Vec<&str> = names
        .into_iter()
        .filter(|name| name.starts_with(partial))
        .collect();

    match matches.as_slice() {
        [] => Completion::None,
        [only] => {
            words.push(*only);
            Completion::Single(format!("{} ", words.join(" ")))
        }
        _ => Completion::Multiple(matches.iter().map(|s| s.to_string()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["help", "ls", "cd", "pwd", "cat", "projects", "cowsay"];

    #[test]
    fn test_single_match_appends_space() {
        assert_eq!(
            complete("proj", NAMES.iter().copied()),
            Completion::Single("projects ".into())
        );
    }

    #[test]
    fn test_multiple_matches_leave_input() {
        assert_eq!(
            complete("p", ["projects", "pwd"]),
            Completion::Multiple(vec!["projects".into(), "pwd".into()])
        );
        assert_eq!(
            complete("c", NAMES.iter().copied()),
            Completion::Multiple(vec!["cd".into(), "cat".into(), "cowsay".into()])
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete("xyz", NAMES.iter().copied()), Completion::None);
    }

    #[test]
    fn test_completes_last_token_in_place() {
        assert_eq!(
            complete("help proj", NAMES.iter().copied()),
            Completion::Single("help projects ".into())
        );
        assert_eq!(
            complete("  man he  ", NAMES.iter().copied()),
            Completion::Single("man help ".into())
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(complete("PROJ", NAMES.iter().copied()), Completion::None);
    }

    #[test]
    fn test_empty_input_lists_everything() {
        match complete("", NAMES.iter().copied()) {
            Completion::Multiple(all) => assert_eq!(all.len(), NAMES.len()),
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }
}
