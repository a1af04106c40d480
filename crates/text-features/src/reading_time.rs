use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default reading speed in words per minute.
pub const DEFAULT_READING_SPEED: f64 = 200.0;

/// Estimated reading time.
///
/// `minutes` carries the whole fractional value (0.05 for 10 words at 200 wpm);
/// `seconds` is the fractional part of that value expressed in seconds. Both are
/// rounded to two decimals on their own, so they are not a normalised duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub minutes: f64,
    pub seconds: f64,
}

pub fn reading_time(word_count: usize, words_per_minute: f64) -> ReadingTime {
    if word_count == 0 {
        return ReadingTime::default();
    }
    let raw = word_count as f64 / words_per_minute;
    ReadingTime {
        minutes: round2(raw),
        seconds: round2((raw - raw.floor()) * 60.0),
    }
}

/// Two-decimal rounding of the exact binary value, ties upward.
///
/// 0.015 is stored as 0.01499..., so it rounds to 0.01. Scaling by 100 first
/// would land on exactly 1.5 and round the wrong way.
fn round2(v: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(v) else {
        return v;
    };
    exact
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_words_is_zero_time() {
        assert_eq!(reading_time(0, DEFAULT_READING_SPEED), ReadingTime { minutes: 0.0, seconds: 0.0 });
        assert_eq!(reading_time(0, 13.0), ReadingTime::default());
    }

    #[test]
    fn one_full_minute() {
        let t = reading_time(200, DEFAULT_READING_SPEED);
        assert_eq!(t.minutes, 1.0);
        assert_eq!(t.seconds, 0.0);
    }

    #[test]
    fn minutes_keep_their_fraction() {
        let t = reading_time(10, DEFAULT_READING_SPEED);
        assert_eq!(t.minutes, 0.05);
        assert_eq!(t.seconds, 3.0);

        let t = reading_time(300, DEFAULT_READING_SPEED);
        assert_eq!(t.minutes, 1.5);
        assert_eq!(t.seconds, 30.0);
    }

    #[test]
    fn halves_round_up() {
        // 25 / 200 = 0.125
        let t = reading_time(25, DEFAULT_READING_SPEED);
        assert_eq!(t.minutes, 0.13);
        assert_eq!(t.seconds, 7.5);
    }

    #[test]
    fn stored_value_decides_near_halves() {
        // 3 / 200 and 21 / 200 sit just below their decimal halves
        assert_eq!(reading_time(3, DEFAULT_READING_SPEED).minutes, 0.01);
        assert_eq!(reading_time(21, DEFAULT_READING_SPEED).minutes, 0.1);
        for (words, minutes) in [(9, 0.04), (15, 0.07), (7, 0.04)] {
            assert_eq!(reading_time(words, DEFAULT_READING_SPEED).minutes, minutes, "words={words}");
        }
    }

    #[test]
    fn custom_speed() {
        let t = reading_time(7, 3.0);
        assert_eq!(t.minutes, 2.33);
        assert_eq!(t.seconds, 20.0);
    }
}
