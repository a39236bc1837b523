use chrono::NaiveDate;

#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%d %b %Y").to_string()
}

/// `04 Mar 2024 – 15 Mar 2024`, or a single date for one-day exams.
#[must_use]
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_date(start)
    } else {
        format!("{} – {}", format_date(start), format_date(end))
    }
}
