//! Literal label strings drawn into the document.

use chrono::NaiveDate;
use vitae_model::WorkExperience;

pub(crate) const CONTACTS: &str = "Контакты";
pub(crate) const PERSONAL_INFO: &str = "Личная информация";
pub(crate) const MAIN_INFO: &str = "Основная информация";
pub(crate) const WORK_EXPERIENCE: &str = "Опыт работы";
pub(crate) const EDUCATION: &str = "Образование";

pub(crate) const PRESENT_TIME: &str = "настоящее время";

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "Да" } else { "Нет" }
}

pub(crate) fn has_no(value: bool) -> &'static str {
    if value { "Есть" } else { "Нет" }
}

pub(crate) fn birth_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn month_year(date: NaiveDate) -> String {
    date.format("%m.%Y").to_string()
}

/// "с MM.YYYY по MM.YYYY" with an open end rendered as "настоящее время".
pub(crate) fn work_period(entry: &WorkExperience) -> String {
    let end = match entry.end_date {
        Some(date) => month_year(date),
        None => PRESENT_TIME.to_string(),
    };
    format!("с {} по {}", month_year(entry.start_date), end)
}
