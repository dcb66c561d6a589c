use chrono::{Datelike, NaiveDate};

/// Date stamp text in the `MM.DD.YYYY` form.
pub fn date_label(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{:04}", date.month(), date.day(), date.year())
}

/// [`date_label`] for today's local date.
pub fn today_label() -> String {
    date_label(chrono::Local::now().date_naive())
}

#[cfg(test)]
#[path = "../../tests/unit/session/date.rs"]
mod tests;
