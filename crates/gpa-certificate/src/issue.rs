//! Per-issue certificate data: serial numbers, declaration date, file name.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use gpa_core::entities::StudentInfo;
use gpa_core::marks::RandomSource;

pub const BOOK_NO_RANGE: RangeInclusive<u32> = 1000..=9999;
pub const CERTIFICATE_NO_RANGE: RangeInclusive<u32> = 100_000..=999_999;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SerialNumbers {
    pub book_no: u32,
    pub certificate_no: u32,
}

impl SerialNumbers {
    /// Draw a fresh book and certificate number.
    pub fn draw(random: &mut dyn RandomSource) -> Self {
        Self {
            book_no: random.pick_inclusive(*BOOK_NO_RANGE.start(), *BOOK_NO_RANGE.end()),
            certificate_no: random
                .pick_inclusive(*CERTIFICATE_NO_RANGE.start(), *CERTIFICATE_NO_RANGE.end()),
        }
    }
}

/// Issue-time details that are not part of the composed payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueDetails {
    pub serials: SerialNumbers,
    pub declared_on: NaiveDate,
}

impl IssueDetails {
    pub fn new(random: &mut dyn RandomSource, declared_on: NaiveDate) -> Self {
        Self {
            serials: SerialNumbers::draw(random),
            declared_on,
        }
    }

    /// Declaration date as printed, `dd/mm/yyyy`.
    #[must_use]
    pub fn declaration_date(&self) -> String {
        declaration_date(self.declared_on)
    }
}

#[must_use]
pub fn declaration_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `<prefix>_GPA_Certificate_<roll>_<year>.<extension>`
#[must_use]
pub fn certificate_file_name(prefix: &str, student: &StudentInfo, extension: &str) -> String {
    format!(
        "{}_GPA_Certificate_{}_{}.{}",
        prefix.trim(),
        student.roll_number.trim(),
        student.year.trim(),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_core::marks::RngSource;

    struct Fixed(Vec<u32>);

    impl RandomSource for Fixed {
        fn pick_inclusive(&mut self, min: u32, max: u32) -> u32 {
            self.0.pop().unwrap_or(min).clamp(min, max)
        }
    }

    #[test]
    fn serials_stay_in_range() {
        let mut random = RngSource::seeded(99);
        for _ in 0..500 {
            let serials = SerialNumbers::draw(&mut random);
            assert!(BOOK_NO_RANGE.contains(&serials.book_no));
            assert!(CERTIFICATE_NO_RANGE.contains(&serials.certificate_no));
        }
    }

    #[test]
    fn serials_come_from_the_source() {
        let mut random = Fixed(vec![654_321, 1234]);
        let serials = SerialNumbers::draw(&mut random);
        assert_eq!(serials.book_no, 1234);
        assert_eq!(serials.certificate_no, 654_321);
    }

    #[test]
    fn date_is_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(declaration_date(date), "07/03/2024");
    }

    #[test]
    fn file_name_uses_roll_and_year() {
        let student = StudentInfo {
            roll_number: "K21SW001".into(),
            year: "2024".into(),
            ..StudentInfo::default()
        };
        assert_eq!(
            certificate_file_name("MUET_SZAB", &student, "txt"),
            "MUET_SZAB_GPA_Certificate_K21SW001_2024.txt"
        );
    }
}
