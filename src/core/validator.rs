use regex::Regex;
use std::sync::LazyLock;

/// Warning shown when the year/period field fails its format check.
pub const YEAR_WARNING: &str =
    "⚠️ 'Year or Period of Creation' must be in the format '1990' or '1980-1990'.";

/// Warning shown when the dimensions field fails its format check.
pub const DIMENSIONS_WARNING: &str = "⚠️ 'Dimensions' must be in the format '30x40 cm'.";

/// Warning shown when the place-of-production field fails its format check.
pub const LOCATION_WARNING: &str =
    "⚠️ 'Place of Production' must contain only letters and start with a capital letter.";

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}(-\d{4})?$").unwrap());

static DIMENSIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?x\d+(\.\d+)?\s?cm$").unwrap());

/// Accepts a 4-digit year, optionally followed by a hyphen and a second
/// 4-digit year ("1990", "1980-1990"). Leading/trailing whitespace is
/// ignored. No ordering check between the two years.
pub fn year_or_period_is_valid(value: &str) -> bool {
    YEAR_RE.is_match(value.trim())
}

/// Accepts `<number>x<number>[ ]cm` where each number is an integer or a
/// decimal ("30x40cm", "30.5x40 cm"). Case-insensitive; leading/trailing
/// whitespace is ignored. Spaces around the `x` are not permitted.
pub fn dimensions_are_valid(value: &str) -> bool {
    DIMENSIONS_RE.is_match(value.trim().to_lowercase().as_str())
}

/// Accepts a title-cased place name: after dropping space characters the
/// value must be non-empty and entirely alphabetic, and every cased run of
/// the original string must start uppercase and continue lowercase.
/// Unicode-aware, so accented letters count as letters ("São Paulo" passes).
pub fn location_is_valid(value: &str) -> bool {
    let stripped: String = value.chars().filter(|c| *c != ' ').collect();
    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        return false;
    }
    is_title_case(value)
}

fn is_title_case(value: &str) -> bool {
    let mut seen_cased = false;
    let mut prev_cased = false;
    for c in value.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            seen_cased = true;
            prev_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            seen_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}
