//! Names for duplicated rule lists.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// `<base>`, `<base> Copy` or `<base> Copy <N>`.
static COPY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*?)(?: Copy(?: (\d+))?)?$").expect("copy suffix pattern is valid")
});

/// Name for a copy of `original` that collides with none of `existing`.
///
/// `"Rules"` becomes `"Rules Copy"`, `"Rules Copy"` becomes
/// `"Rules Copy 2"` and `"Rules Copy N"` becomes `"Rules Copy N+1"`. On a
/// collision the number keeps climbing until the name is free. Only a
/// trailing `" Copy"` counts, so `"Copycat Rules"` becomes
/// `"Copycat Rules Copy"`.
pub fn generate_duplicate_name<S: AsRef<str>>(original: &str, existing: &[S]) -> String {
    let (base, mut number) = parse_copy_suffix(original);
    let taken: HashSet<&str> = existing.iter().map(AsRef::as_ref).collect();

    let mut candidate = format_copy_name(base, number);
    while taken.contains(candidate.as_str()) {
        number = number.saturating_add(1);
        candidate = format!("{base} Copy {number}");
    }
    candidate
}

/// Split a name into its base and the copy number the next copy gets.
fn parse_copy_suffix(original: &str) -> (&str, u64) {
    let Some(caps) = COPY_SUFFIX.captures(original) else {
        return (original.trim(), 1);
    };
    let Some(base) = caps.get(1) else {
        return (original.trim(), 1);
    };

    let has_suffix = base.end() < original.len();
    let number = caps.get(2).and_then(|n| n.as_str().parse::<u64>().ok());
    let next = match (has_suffix, number) {
        (false, _) => 1,
        (true, Some(n)) => n.saturating_add(1),
        (true, None) => 2,
    };
    (base.as_str().trim(), next)
}

fn format_copy_name(base: &str, number: u64) -> String {
    if number == 1 {
        format!("{base} Copy")
    } else {
        format!("{base} Copy {number}")
    }
}
