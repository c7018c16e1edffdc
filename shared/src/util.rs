use chrono::{Datelike, NaiveDate};

const WEEKDAYS_ES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Current local calendar date
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Long Spanish date, e.g. "domingo, 18 de octubre de 2026"
pub fn format_long_date_es(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_ES[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_ES[date.month0() as usize];
    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}

/// `YYYY-MM-DD` rendering used for form defaults and the wire
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_in_spanish() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_long_date_es(d), "domingo, 18 de octubre de 2026");

        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_long_date_es(d), "miércoles, 1 de enero de 2025");
    }

    #[test]
    fn iso_date_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_iso_date(d), "2026-03-05");
    }
}
