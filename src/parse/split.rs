//! The shared splitting primitives behind the expand and order
//! mini-languages.
//!
//! Both `expand=rel1,rel2(limit:5,page:1)` and `order=age(desc),name` are
//! comma-separated lists whose items may carry a bracketed suffix that
//! itself contains commas. Splitting therefore has to know about the
//! bracket pair, and each item is then tokenized into a head identifier
//! plus its suffix tokens. The same two routines serve both parsers.

/// Splits `input` on `separator`, except where the separator occurs inside
/// the bracket pair.
///
/// The scan keeps a single inside-brackets flag: there is no nesting, a
/// repeated left bracket has no further effect, and a stray right bracket
/// harmlessly clears an already-clear flag. The final pending segment is
/// always emitted, even with unbalanced brackets, so the result contains
/// at least one element. Malformed input is never an error here.
pub(crate) fn split_outside_brackets(
    input: &str,
    separator: char,
    left_bracket: char,
    right_bracket: char,
) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut inside = false;
    let mut start = 0;

    for (idx, ch) in input.char_indices() {
        if ch == left_bracket {
            inside = true;
        } else if ch == right_bracket {
            inside = false;
        } else if ch == separator && !inside {
            segments.push(&input[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    segments.push(&input[start..]);

    segments
}

/// Tokenizes one list item by splitting on any of the three configured
/// characters and discarding empty fields.
///
/// `relation(limit:6,page:8)` becomes `["relation", "limit:6", "page:8"]`.
/// The first token is the head identifier; the rest are suffix tokens.
pub(crate) fn tokenize(
    segment: &str,
    left_bracket: char,
    right_bracket: char,
    separator: char,
) -> Vec<&str> {
    segment
        .split(|c: char| c == left_bracket || c == right_bracket || c == separator)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{split_outside_brackets, tokenize};

    fn split(input: &str) -> Vec<&str> {
        split_outside_brackets(input, ',', '(', ')')
    }

    #[test]
    fn split_no_separator() {
        assert_eq!(split("relation"), vec!["relation"]);
    }

    #[test]
    fn split_plain_list() {
        assert_eq!(split("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_ignores_separators_inside_brackets() {
        assert_eq!(
            split("rel1,rel2(limit:5,page:1),rel3"),
            vec!["rel1", "rel2(limit:5,page:1)", "rel3"]
        );
    }

    #[test]
    fn split_empty_input() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn split_trailing_separator_emits_empty_segment() {
        assert_eq!(split("a,"), vec!["a", ""]);
    }

    #[test]
    fn split_unbalanced_left_bracket_swallows_rest() {
        // the flag never clears, so the remainder is one segment
        assert_eq!(split("a(b,c"), vec!["a(b,c"]);
    }

    #[test]
    fn split_stray_right_bracket_is_harmless() {
        assert_eq!(split("a)b,c"), vec!["a)b", "c"]);
    }

    #[test]
    fn split_repeated_left_bracket_does_not_nest() {
        // the second '(' has no extra effect; the first ')' closes
        assert_eq!(split("a((b,c),d"), vec!["a((b,c)", "d"]);
    }

    #[test]
    fn tokenize_head_only() {
        assert_eq!(tokenize("relation", '(', ')', ','), vec!["relation"]);
    }

    #[test]
    fn tokenize_head_and_overrides() {
        assert_eq!(
            tokenize("relation(limit:6,page:8)", '(', ')', ','),
            vec!["relation", "limit:6", "page:8"]
        );
    }

    #[test]
    fn tokenize_drops_empty_fields() {
        assert_eq!(tokenize("(a,,b)", '(', ')', ','), vec!["a", "b"]);
        assert_eq!(tokenize("", '(', ')', ','), Vec::<&str>::new());
    }

    #[test]
    fn tokenize_direction_suffix() {
        assert_eq!(tokenize("field1(asc)", '(', ')', ','), vec!["field1", "asc"]);
    }
}
