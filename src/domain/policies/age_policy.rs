//! 최소 나이 정책
//!
//! 생년월일과 기준일(오늘) 사이의 "만 나이"를 계산합니다.
//! 올해 생일이 아직 지나지 않았다면 해당 연도는 세지 않습니다.
//! 2월 29일생은 평년에는 3월 1일에 생일이 지난 것으로 봅니다.

use chrono::{Datelike, NaiveDate};

/// 기본 최소 나이
pub const DEFAULT_MIN_AGE: u32 = 18;

/// `birth_date`부터 `today`까지 완료된 햇수
///
/// 생년월일이 기준일보다 뒤라면 0을 반환합니다.
pub fn completed_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    if birth_date >= today {
        return 0;
    }

    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

/// 만 나이가 `min_age_years` 이상인지 확인
pub fn is_of_age(birth_date: NaiveDate, min_age_years: u32, today: NaiveDate) -> bool {
    completed_years(birth_date, today) >= min_age_years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn years_ago(today: NaiveDate, years: u32) -> NaiveDate {
        today.checked_sub_months(Months::new(years * 12)).unwrap()
    }

    #[test]
    fn test_exact_birthday_counts() {
        let today = date(2024, 6, 15);
        assert!(is_of_age(date(2006, 6, 15), 18, today));
    }

    #[test]
    fn test_day_before_birthday_does_not_count() {
        let today = date(2024, 6, 15);
        assert!(!is_of_age(date(2006, 6, 16), 18, today));
        assert_eq!(completed_years(date(2006, 6, 16), today), 17);
    }

    #[test]
    fn test_every_age_from_minimum_is_allowed() {
        let today = date(2024, 6, 15);
        for age in 18..130 {
            assert!(is_of_age(years_ago(today, age), 18, today), "age {}", age);
        }
    }

    #[test]
    fn test_every_age_below_minimum_is_rejected() {
        let today = date(2024, 6, 15);
        for age in 0..18 {
            assert!(!is_of_age(years_ago(today, age), 18, today), "age {}", age);
        }
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2000, 2, 29);
        assert_eq!(completed_years(birth, date(2018, 2, 28)), 17);
        assert_eq!(completed_years(birth, date(2018, 3, 1)), 18);
        assert_eq!(completed_years(birth, date(2020, 2, 29)), 20);
    }

    #[test]
    fn test_future_birth_date_is_zero_years() {
        let today = date(2024, 6, 15);
        assert_eq!(completed_years(date(2030, 1, 1), today), 0);
        assert!(is_of_age(date(2030, 1, 1), 0, today));
        assert!(!is_of_age(date(2030, 1, 1), 1, today));
    }

    #[test]
    fn test_adult_and_minor_birth_dates() {
        assert!(is_of_age(date(2000, 1, 1), DEFAULT_MIN_AGE, date(2018, 1, 1)));
        assert!(!is_of_age(date(2010, 1, 1), DEFAULT_MIN_AGE, date(2027, 12, 31)));
    }
}
