//! Natural ordering for identifiers and version-like tokens.
//!
//! Numeric runs compare by value, everything else compares case-insensitively,
//! so `item2` sorts before `item10` and `a.2` before `a.10`.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

// Digit runs only: dots separate segments, so `1.10` reads as `1`, `.`, `10`
static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// One piece of a split identifier.
#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Text(&'a str),
    Number(&'a str),
}

/// Split `s` into alternating text and numeric segments.
///
/// The result always starts and ends with a (possibly empty) text segment,
/// so two split lists line up kind-for-kind at every index.
fn split(s: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in RE_NUMBER.find_iter(s) {
        segments.push(Segment::Text(&s[last..m.start()]));
        segments.push(Segment::Number(m.as_str()));
        last = m.end();
    }
    segments.push(Segment::Text(&s[last..]));
    segments
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare two digit runs by value, without overflow for long runs.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_segment(a: &Segment<'_>, b: &Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Number(x), Segment::Number(y)) => compare_digits(x, y),
        (Segment::Text(x), Segment::Text(y))
        | (Segment::Text(x), Segment::Number(y))
        | (Segment::Number(x), Segment::Text(y)) => compare_text(x, y),
    }
}

/// Compare two strings in natural order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let aa = split(a);
    let bb = split(b);
    aa.iter()
        .zip(&bb)
        .map(|(x, y)| compare_segment(x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| aa.len().cmp(&bb.len()))
}

/// Compare two dotted member paths in natural order.
///
/// `prototype` segments are ignored for the primary comparison so that
/// `Foo.prototype.bar` lands next to `Foo.bar`; the full paths break ties.
pub fn compare_member_path(a: &str, b: &str) -> Ordering {
    let path = |s: &str| -> Vec<String> {
        s.split('.')
            .filter(|seg| *seg != "prototype")
            .map(str::to_string)
            .collect()
    };
    let aa = path(a);
    let bb = path(b);
    aa.iter()
        .zip(&bb)
        .map(|(x, y)| compare(x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| aa.len().cmp(&bb.len()))
        .then_with(|| compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(compare("item2", "item10"), Ordering::Less);
        assert_eq!(compare("item10", "item2"), Ordering::Greater);
        assert_eq!(compare("a.2", "a.10"), Ordering::Less);
        assert_eq!(compare("A.1", "A.2"), Ordering::Less);
    }

    #[test]
    fn dotted_numbers_compare_per_segment() {
        assert_eq!(compare("a.2", "a.10"), Ordering::Less);
        assert_eq!(compare("v1.2", "v1.10"), Ordering::Less);
        assert_eq!(compare("1.10.0", "1.9.9"), Ordering::Greater);
        assert_eq!(compare_member_path("Foo.2", "Foo.10"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_and_long_runs() {
        assert_eq!(compare("item007", "item7"), Ordering::Equal);
        assert_eq!(
            compare("id99999999999999999999", "id100000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn text_is_case_insensitive() {
        assert_eq!(compare("Apple", "apple"), Ordering::Equal);
        assert_eq!(compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(compare("chunk", "chunk2"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
    }

    #[test]
    fn split_alternates_kinds() {
        assert_eq!(
            split("a1b"),
            vec![Segment::Text("a"), Segment::Number("1"), Segment::Text("b")]
        );
        assert_eq!(
            split("10"),
            vec![Segment::Text(""), Segment::Number("10"), Segment::Text("")]
        );
        assert_eq!(
            split("1.2"),
            vec![
                Segment::Text(""),
                Segment::Number("1"),
                Segment::Text("."),
                Segment::Number("2"),
                Segment::Text("")
            ]
        );
    }

    #[test]
    fn member_paths_ignore_prototype() {
        let mut paths = vec!["Foo.prototype.bar", "Foo.baz", "Foo.bar", "Foo.prototype.alpha"];
        paths.sort_by(|a, b| compare_member_path(a, b));
        assert_eq!(
            paths,
            vec!["Foo.prototype.alpha", "Foo.bar", "Foo.prototype.bar", "Foo.baz"]
        );
    }

    #[test]
    fn member_path_ties_fall_back_to_full_path() {
        assert_eq!(
            compare_member_path("_.prototype", "_"),
            compare("_.prototype", "_")
        );
        assert_ne!(compare_member_path("_.prototype", "_"), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn reflexive(a in "[a-zA-Z0-9._-]{0,12}") {
            prop_assert_eq!(compare(&a, &a), Ordering::Equal);
        }

        #[test]
        fn antisymmetric(a in "[a-zA-Z0-9._-]{0,12}", b in "[a-zA-Z0-9._-]{0,12}") {
            prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        }

        #[test]
        fn transitive(
            a in "[a-zA-Z0-9._-]{0,12}",
            b in "[a-zA-Z0-9._-]{0,12}",
            c in "[a-zA-Z0-9._-]{0,12}",
        ) {
            let mut v = [a, b, c];
            v.sort_by(|x, y| compare(x, y));
            prop_assert_ne!(compare(&v[0], &v[1]), Ordering::Greater);
            prop_assert_ne!(compare(&v[1], &v[2]), Ordering::Greater);
            prop_assert_ne!(compare(&v[0], &v[2]), Ordering::Greater);
        }
    }
}
