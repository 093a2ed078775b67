//! 현재 날짜 공급자
//!
//! 나이 계산과 "과거 날짜" 검증은 오늘 날짜에 의존하므로,
//! 벽시계를 직접 읽지 않고 [`Clock`]을 통해 주입받습니다.

use chrono::{Local, NaiveDate};

/// 오늘 날짜를 제공하는 trait
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 시스템 로컬 시간대 기준의 실제 시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 항상 같은 날짜를 반환하는 고정 시계 (테스트용)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_given_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
