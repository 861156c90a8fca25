//! Auto-generated player names.
//!
//! New players are called `"<prefix> N"`. N is the lowest positive number
//! not already used by an auto-named player, so gaps left by removed
//! players get reused.

use rustc_hash::FxHashSet;

/// Parse the number out of an auto-generated name.
///
/// Returns `None` unless `name` is `prefix`, a space, then a positive
/// integer (surrounding whitespace after the prefix is ignored).
#[must_use]
pub fn default_number(name: &str, prefix: &str) -> Option<usize> {
    let rest = name.strip_prefix(prefix)?.strip_prefix(' ')?;
    match rest.trim().parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Lowest positive number not used by any of `names`.
pub fn lowest_free_number<'a>(names: impl IntoIterator<Item = &'a str>, prefix: &str) -> usize {
    let used: FxHashSet<usize> = names
        .into_iter()
        .filter_map(|name| default_number(name, prefix))
        .collect();

    (1..).find(|n| !used.contains(n)).unwrap_or(1)
}

/// Format an auto-generated name.
#[must_use]
pub fn default_name(prefix: &str, number: usize) -> String {
    format!("{prefix} {number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_number() {
        assert_eq!(default_number("Player 3", "Player"), Some(3));
        assert_eq!(default_number("Player  12 ", "Player"), Some(12));
        assert_eq!(default_number("Player 0", "Player"), None);
        assert_eq!(default_number("Player x", "Player"), None);
        assert_eq!(default_number("Player3", "Player"), None);
        assert_eq!(default_number("Anna", "Player"), None);
        assert_eq!(default_number("Spieler 2", "Spieler"), Some(2));
    }

    #[test]
    fn test_lowest_free_number() {
        assert_eq!(lowest_free_number(Vec::<&str>::new(), "Player"), 1);
        assert_eq!(lowest_free_number(["Player 1", "Player 2"], "Player"), 3);
        assert_eq!(lowest_free_number(["Player 1", "Player 3"], "Player"), 2);
        assert_eq!(lowest_free_number(["Player 2", "Anna"], "Player"), 1);
    }

    #[test]
    fn test_renamed_players_free_their_number() {
        assert_eq!(lowest_free_number(["Anna", "Player 2"], "Player"), 1);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(default_name("Player", 4), "Player 4");
    }
}
