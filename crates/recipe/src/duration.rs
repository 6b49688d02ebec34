use regex::Regex;
use std::sync::LazyLock;

static RE_ISO_MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"PT([0-9]+)M").unwrap());
static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static RE_ISO_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^P(?:T|[0-9])").unwrap());

/// Minutes from an ISO 8601 duration of the form `PT<n>M`.
///
/// Hour components are not decoded, `PT1H30M` stays unresolved.
pub fn parse_iso(text: &str) -> Option<u32> {
    let captures = RE_ISO_MINUTES.captures(text)?;

    captures.get(1)?.as_str().parse().ok()
}

/// Minutes read from the first run of decimal digits, e.g. `"約20分"` or `"25 mins"`.
pub fn parse_text(text: &str) -> Option<u32> {
    RE_DIGITS.find(text)?.as_str().parse().ok()
}

/// ISO 8601 tokens (`PT..`, `P1D..`) go through [`parse_iso`] only, any other
/// text through [`parse_text`].
pub fn parse_minutes(text: &str) -> Option<u32> {
    let text = text.trim();

    if RE_ISO_SHAPE.is_match(text) {
        return parse_iso(text);
    }

    parse_text(text)
}
