//! Fixed option lists offered by the screen.

use super::filter::StatusFilter;

/// Known job handlers as `(value, label)`. The first entry is the
/// "please choose" placeholder with an empty value.
pub const JOB_HANDLERS: &[(&str, &str)] = &[
    ("", "Please choose a JobHandler"),
    ("dataSyncJob", "dataSyncJob (data sync)"),
    ("dailyBackupJob", "dailyBackupJob (daily backup)"),
    ("emailNotifyJob", "emailNotifyJob (email notification)"),
    ("cleanTempJob", "cleanTempJob (clean temp files)"),
    ("reportGenJob", "reportGenJob (report generation)"),
];

/// Status filter choices, `All` first
pub const STATUS_FILTERS: &[StatusFilter] = &[
    StatusFilter::All,
    StatusFilter::Running,
    StatusFilter::Stopped,
];

pub const DEFAULT_PAGE_SIZES: &[usize] = &[5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Handlers without the placeholder
pub fn selectable_handlers() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    JOB_HANDLERS.iter().filter(|(value, _)| !value.is_empty())
}

pub fn is_known_handler(value: &str) -> bool {
    selectable_handlers().any(|(known, _)| *known == value)
}

/// Short human description of a handler: the text inside the label's
/// parentheses, or the handler key itself.
pub fn handler_summary(value: &str) -> &str {
    JOB_HANDLERS
        .iter()
        .find(|(known, _)| *known == value)
        .and_then(|(_, label)| {
            let start = label.find('(')?;
            let end = label.rfind(')')?;
            (start < end).then(|| &label[start + 1..end])
        })
        .unwrap_or(value)
}

/// Handler options as owned pairs, the shape the select widgets take
pub fn handler_options() -> Vec<(String, String)> {
    JOB_HANDLERS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

pub fn status_filter_options() -> Vec<(String, String)> {
    STATUS_FILTERS
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_first_and_not_selectable() {
        assert_eq!(JOB_HANDLERS[0].0, "");
        assert_eq!(selectable_handlers().count(), 5);
        assert!(!is_known_handler(""));
        assert!(is_known_handler("reportGenJob"));
    }

    #[test]
    fn test_handler_summary() {
        assert_eq!(handler_summary("dailyBackupJob"), "daily backup");
        assert_eq!(handler_summary("unknownJob"), "unknownJob");
    }

    #[test]
    fn test_status_options_start_with_all() {
        let options = status_filter_options();
        assert_eq!(options[0].0, "ALL");
        assert_eq!(options.len(), 3);
    }
}
