use crate::task::Task;

pub fn completion_label(is_completed: bool) -> &'static str {
    if is_completed {
        "Completed"
    } else {
        "Not Completed"
    }
}

pub fn badge_class(is_completed: bool) -> &'static str {
    if is_completed {
        "badge badge-done"
    } else {
        "badge badge-open"
    }
}

/// `Date : YYYY-MM-DD` as the date input stores it. Values that are not an
/// ISO date are shown as entered.
pub fn date_line(task: &Task) -> String {
    let raw = task.date.trim();
    if raw.is_empty() {
        return "Date : —".to_string();
    }
    match task.due_date() {
        Some(date) => format!("Date : {}", date.format("%Y-%m-%d")),
        None => format!("Date : {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(date: &str) -> Task {
        Task {
            id: 1,
            date: date.to_string(),
            ..Task::default()
        }
    }

    #[test]
    fn label_follows_completion_only() {
        assert_eq!(completion_label(true), "Completed");
        assert_eq!(completion_label(false), "Not Completed");
        assert_ne!(badge_class(true), badge_class(false));
    }

    #[test]
    fn date_line_shows_iso_dates_as_stored() {
        assert_eq!(date_line(&dated("2025-08-20")), "Date : 2025-08-20");
        assert_eq!(date_line(&dated("2025-09-01")), "Date : 2025-09-01");
        assert_eq!(date_line(&dated(" 2025-08-22 ")), "Date : 2025-08-22");
    }

    #[test]
    fn date_line_keeps_odd_values_and_marks_empty() {
        assert_eq!(date_line(&dated("next week")), "Date : next week");
        assert_eq!(date_line(&dated("")), "Date : —");
    }
}
