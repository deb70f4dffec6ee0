use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

fn weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Long Spanish form of an ISO date, e.g. `miércoles, 15 de enero de 2025`.
/// Input that is not `YYYY-MM-DD` is returned unchanged.
pub fn long_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format!(
            "{}, {} de {} de {}",
            weekday(date.weekday()),
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_spanish() {
        assert_eq!(long_date("2025-01-15"), "miércoles, 15 de enero de 2025");
        assert_eq!(long_date("2025-02-07"), "viernes, 7 de febrero de 2025");
    }

    #[test]
    fn passes_through_garbage() {
        assert_eq!(long_date("pronto"), "pronto");
    }
}
