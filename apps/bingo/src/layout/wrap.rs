//! Greedy word wrap against a caller-supplied width measurement.

/// Horizontal padding subtracted from a square's width before wrapping its text.
pub const WRAP_PADDING_PX: f32 = 10.0;

/// Splits `text` into lines whose measured width stays below `max_width`.
///
/// Words are taken in order; each is appended to the current line (space-joined) when
/// the candidate line measures strictly less than `max_width`, otherwise the current
/// line is committed and the word starts a new one. A word wider than `max_width` is
/// never split and ends up alone on its line. Always returns at least one line: empty
/// or all-whitespace text yields a single empty line.
pub fn wrap<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();

    for word in words {
        let candidate = format!("{current} {word}");
        if measure(&candidate) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

/// Wraps text for a square of the given pixel width, applying [`WRAP_PADDING_PX`].
pub fn wrap_for_width<F>(text: &str, square_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    wrap(text, square_width - WRAP_PADDING_PX, measure)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One pixel per character.
    fn char_count(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_wrap_empty_text_yields_one_empty_line() {
        assert_eq!(wrap("", 50.0, char_count), vec![String::new()]);
        assert_eq!(wrap("   ", 50.0, char_count), vec![String::new()]);
    }

    #[test]
    fn test_wrap_short_text_stays_on_one_line() {
        assert_eq!(wrap("free space", 50.0, char_count), vec!["free space"]);
    }

    #[test]
    fn test_wrap_breaks_greedily() {
        // "aaa bbb" = 7 < 8 fits, "aaa bbb ccc" = 11 does not.
        let lines = wrap("aaa bbb ccc ddd", 8.0, char_count);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_wrap_bound_is_strict() {
        // "ab cd" measures exactly 5, which is not < 5.
        let lines = wrap("ab cd", 5.0, char_count);
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn test_wrap_oversized_word_sits_alone() {
        let lines = wrap("a extraordinarily b", 6.0, char_count);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_wrap_single_oversized_word_is_not_split() {
        let lines = wrap("supercalifragilistic", 4.0, char_count);
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_loses_no_words() {
        let texts = [
            "Someone mentions the deadline moved",
            "  leading and   repeated   whitespace  ",
            "one",
            "a b c d e f g h i j k l m n o p",
            "Antidisestablishmentarianism is a long word indeed",
        ];
        for text in texts {
            for max in [1.0_f32, 5.0, 12.0, 40.0, 200.0] {
                let lines = wrap(text, max, char_count);
                let normalized: Vec<&str> = text.split_whitespace().collect();
                assert_eq!(lines.join(" "), normalized.join(" "), "text {text:?} max {max}");
            }
        }
    }

    #[test]
    fn test_wrap_lines_respect_width_unless_single_word() {
        let text = "the quick brown fox jumps over an extraordinarily lazy dog";
        for max in [3.0_f32, 8.0, 15.0, 30.0] {
            for line in wrap(text, max, char_count) {
                let is_single_word = !line.contains(' ');
                assert!(
                    char_count(&line) < max || is_single_word,
                    "line {line:?} exceeds {max}"
                );
            }
        }
    }

    #[test]
    fn test_wrap_for_width_subtracts_padding() {
        // 20px square → 10px usable: "aaaa bbbb" (9) fits, adding "cc" (12) does not.
        let lines = wrap_for_width("aaaa bbbb cc", 20.0, char_count);
        assert_eq!(lines, vec!["aaaa bbbb", "cc"]);
    }
}
