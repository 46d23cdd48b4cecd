//! Cron expression grammar check.
//!
//! The check is a pattern *search*, not a full parse: a string is accepted
//! when any part of it looks like a macro, an `@every` duration or a run of
//! 5 to 7 cron fields. That makes it permissive:
//!
//! * `"12345"` passes (each digit counts as a field, the space is optional);
//! * `"run @daily please"` passes (the macro is found mid-string);
//! * `"0 0 12 * * ?"` passes (the first five fields are enough; `?` is never
//!   looked at);
//! * `"* * * *"` is rejected (only four fields).

use once_cell::sync::Lazy;
use regex::Regex;

const CRON_PATTERN: &str = concat!(
    r"(@(annually|yearly|monthly|weekly|daily|hourly|reboot))",
    r"|(@every ([0-9]+(ns|us|µs|ms|s|m|h))+)",
    r"|((([0-9]+,)+[0-9]+|[0-9]+[/-][0-9]+|[0-9]+|\*) ?){5,7}",
);

static CRON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CRON_PATTERN).unwrap_or_else(|e| panic!("invalid cron pattern: {e}")));

/// Macros accepted in place of field syntax
pub const CRON_MACROS: &[&str] = &[
    "@annually",
    "@yearly",
    "@monthly",
    "@weekly",
    "@daily",
    "@hourly",
    "@reboot",
];

pub fn is_valid_cron(expression: &str) -> bool {
    CRON_RE.is_match(expression)
}
