//! RPM segment-wise version ordering.

use std::cmp::Ordering;

use super::VersionOrder;

/// The classic `rpmvercmp` ordering
///
/// Strings are split into maximal runs of ASCII digits or ASCII letters;
/// everything else separates runs and is otherwise ignored. Runs are compared
/// pairwise: numeric runs by value, alphabetic runs lexically, and a numeric
/// run is newer than an alphabetic one. When one side runs out of runs, the
/// side with runs left is newer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpmVersionOrder;

impl VersionOrder for RpmVersionOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_segments(a, b)
    }
}

fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Split off the leading run of characters matching `pat`
fn leading_run(s: &str, pat: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pat(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut one = a;
    let mut two = b;

    loop {
        one = one.trim_start_matches(is_separator);
        two = two.trim_start_matches(is_separator);

        if one.is_empty() || two.is_empty() {
            break;
        }

        let numeric = one.starts_with(|c: char| c.is_ascii_digit());
        let pat = |c: char| {
            if numeric {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphabetic()
            }
        };
        let (seg1, rest1) = leading_run(one, pat);
        let (seg2, rest2) = leading_run(two, pat);

        // segments of different types: numbers are newer than letters
        if seg2.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ordering = if numeric {
            let n1 = seg1.trim_start_matches('0');
            let n2 = seg2.trim_start_matches('0');
            n1.len().cmp(&n2.len()).then_with(|| n1.cmp(n2))
        } else {
            seg1.cmp(seg2)
        };
        if ordering != Ordering::Equal {
            return ordering;
        }

        one = rest1;
        two = rest2;
    }

    match (one.is_empty(), two.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, _) => Ordering::Greater,
    }
}
