//! Dates, clock values and their textual forms.
//!
//! All values are computed and formatted in UTC.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use datamock_core::{DateTimeOptions, SampleError, Sampler};

use crate::error::{MockError, MockResult};
use crate::locale::{resolve, Locale, NamedUnits};
use crate::utils::pick_owned;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const AM_PM: &[&str] = &["am", "pm"];

/// Optional inclusive bounds for a clock or calendar unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl RangeOptions {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Fill missing bounds with `lower`/`upper` and check them against it.
    fn validate(self, lower: i64, upper: i64) -> MockResult<(i64, i64)> {
        let min = self.min.unwrap_or(lower);
        let max = self.max.unwrap_or(upper);
        if min < lower {
            return Err(MockError::MinTooSmall {
                value: min,
                limit: lower,
            });
        }
        if max > upper {
            return Err(MockError::MaxTooLarge {
                value: max,
                limit: upper,
            });
        }
        if min > max {
            return Err(MockError::InvertedRange { min, max });
        }
        Ok((min, max))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// 0-23 instead of 1-12
    pub twenty_four: bool,
}

/// Textual date-time layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// `2023-03-05T08:09:07.005Z`
    #[default]
    Rfc3339,
    /// `Sun, 05 Mar 2023 08:09:07 GMT`
    Rfc2616,
}

#[derive(Debug, Clone)]
pub struct Time {
    sampler: Sampler,
    locale: Arc<Locale>,
}

impl Time {
    pub fn new(sampler: Sampler) -> Self {
        Self::with_locale(sampler, Locale::en())
    }

    pub fn with_locale(sampler: Sampler, locale: Arc<Locale>) -> Self {
        Self { sampler, locale }
    }

    pub fn seed(&mut self, seed: Option<u32>) {
        self.sampler.seed(seed);
    }

    /// Draw from `sampler` from now on.
    pub(crate) fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    /// Replace the locale. `None` restores English.
    pub fn set_locale(&mut self, locale: Option<Arc<Locale>>) {
        self.locale = locale.unwrap_or_else(Locale::en);
    }

    fn units(&self, unit: fn(&Locale) -> &NamedUnits, abbr: bool) -> Vec<String> {
        let en = Locale::en();
        let custom = unit(&self.locale);
        let default = unit(&en);
        let pool = if abbr {
            resolve(&custom.abbr, &default.abbr)
        } else {
            resolve(&custom.names, &default.names)
        };
        pool.to_vec()
    }

    pub fn date(&self, options: DateTimeOptions) -> MockResult<DateTime<Utc>> {
        Ok(self.sampler.datetime(options)?)
    }

    /// Unix time in seconds of a random date.
    pub fn timestamp(&self) -> MockResult<i64> {
        Ok(self.date(DateTimeOptions::default())?.timestamp())
    }

    pub fn am_pm(&self) -> MockResult<String> {
        Ok(self.sampler.pick_one(AM_PM)?.to_string())
    }

    /// Hour of the day. The 12-hour clock accepts `min` down to 0 but
    /// defaults it to 1.
    pub fn hour(&self, options: HourOptions) -> MockResult<i64> {
        let (default_min, upper) = if options.twenty_four { (0, 23) } else { (1, 12) };
        let range = RangeOptions {
            min: Some(options.min.unwrap_or(default_min)),
            max: options.max,
        };
        let (min, max) = range.validate(0, upper)?;
        Ok(self.sampler.integer(min, max))
    }

    pub fn minute(&self, options: RangeOptions) -> MockResult<i64> {
        let (min, max) = options.validate(0, 59)?;
        Ok(self.sampler.integer(min, max))
    }

    pub fn second(&self) -> i64 {
        self.sampler.integer(0, 59)
    }

    pub fn millisecond(&self) -> i64 {
        self.sampler.integer(0, 999)
    }

    /// Month number, 1 for January.
    pub fn month(&self, options: RangeOptions) -> MockResult<i64> {
        let (min, max) = options.validate(1, 12)?;
        Ok(self.sampler.integer(min, max))
    }

    pub fn month_name(&self, abbr: bool) -> MockResult<String> {
        pick_owned(&self.sampler, &self.months(abbr))
    }

    pub fn months(&self, abbr: bool) -> Vec<String> {
        self.units(|l| &l.time.month, abbr)
    }

    /// Weekday number, 1 for Sunday.
    pub fn weekday(&self, options: RangeOptions) -> MockResult<i64> {
        let (min, max) = options.validate(1, 7)?;
        Ok(self.sampler.integer(min, max))
    }

    pub fn weekday_name(&self, abbr: bool) -> MockResult<String> {
        pick_owned(&self.sampler, &self.weekdays(abbr))
    }

    pub fn weekdays(&self, abbr: bool) -> Vec<String> {
        self.units(|l| &l.time.weekday, abbr)
    }

    /// Start of the UTC day containing `at` (epoch milliseconds), or of a
    /// random day.
    pub fn midnight(&self, at: Option<i64>) -> MockResult<i64> {
        let at = match at {
            Some(at) => at,
            None => self.date(DateTimeOptions::default())?.timestamp_millis(),
        };
        Ok(at - at.rem_euclid(MS_PER_DAY))
    }

    /// `YYYY-MM-DD`
    pub fn date_only(&self) -> MockResult<String> {
        Ok(self
            .date(DateTimeOptions::default())?
            .format("%Y-%m-%d")
            .to_string())
    }

    /// `HH:MM:SS`
    pub fn time_only(&self) -> MockResult<String> {
        Ok(self
            .date(DateTimeOptions::default())?
            .format("%H:%M:%S")
            .to_string())
    }

    pub fn date_time(&self, format: DateTimeFormat) -> MockResult<String> {
        let date = self.date(DateTimeOptions::default())?;
        Ok(format_date_time(&date, format))
    }

    /// Date and time without a zone designator, `YYYY-MM-DDTHH:MM:SS`.
    pub fn date_time_only(&self) -> MockResult<String> {
        Ok(self
            .date(DateTimeOptions::default())?
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string())
    }
}

pub fn format_date_time(date: &DateTime<Utc>, format: DateTimeFormat) -> String {
    match format {
        DateTimeFormat::Rfc3339 => date.to_rfc3339_opts(SecondsFormat::Millis, true),
        DateTimeFormat::Rfc2616 => date.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
    }
}

/// Instant for epoch milliseconds.
pub fn from_millis(millis: i64) -> MockResult<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(MockError::Sample(SampleError::TimestampOutOfRange(millis)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(seed: u32) -> Time {
        Time::new(Sampler::from_seed(Some(seed)))
    }

    #[test]
    fn test_hour_ranges() {
        let t = time(1);
        for _ in 0..100 {
            let twelve = t.hour(HourOptions::default()).unwrap();
            assert!((1..=12).contains(&twelve));
            let day = t
                .hour(HourOptions {
                    twenty_four: true,
                    ..HourOptions::default()
                })
                .unwrap();
            assert!((0..=23).contains(&day));
        }
    }

    #[test]
    fn test_twelve_hour_accepts_zero_min() {
        let t = time(3);
        let options = HourOptions {
            min: Some(0),
            max: Some(0),
            twenty_four: false,
        };
        assert_eq!(t.hour(options).unwrap(), 0);

        let mut seen_zero = false;
        for _ in 0..200 {
            let v = t
                .hour(HourOptions {
                    min: Some(0),
                    ..HourOptions::default()
                })
                .unwrap();
            assert!((0..=12).contains(&v));
            seen_zero |= v == 0;
        }
        assert!(seen_zero);

        for _ in 0..100 {
            assert_ne!(t.hour(HourOptions::default()).unwrap(), 0);
        }
    }

    #[test]
    fn test_hour_validation_messages() {
        let t = time(2);
        let err = t
            .hour(HourOptions {
                min: Some(-1),
                ..HourOptions::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Provided value -1 for min is less than 0");

        let err = t
            .hour(HourOptions {
                max: Some(24),
                twenty_four: true,
                ..HourOptions::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Provided value 24 for max is greater than 23");

        let err = t
            .hour(HourOptions {
                min: Some(10),
                max: Some(5),
                twenty_four: false,
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The min value (10) cannot be greater than max value (5)"
        );
    }

    #[test]
    fn test_minute_and_month_ranges() {
        let t = time(3);
        for _ in 0..100 {
            assert!((0..=59).contains(&t.minute(RangeOptions::default()).unwrap()));
            assert!((0..=59).contains(&t.second()));
            assert!((0..=999).contains(&t.millisecond()));
            assert!((1..=12).contains(&t.month(RangeOptions::default()).unwrap()));
            assert!((1..=7).contains(&t.weekday(RangeOptions::default()).unwrap()));
        }
        assert_eq!(t.minute(RangeOptions::new(30, 30)).unwrap(), 30);
        assert!(t.minute(RangeOptions::new(-1, 10)).is_err());
        assert!(t.month(RangeOptions::new(1, 13)).is_err());
        assert!(t.weekday(RangeOptions::new(5, 2)).is_err());
    }

    #[test]
    fn test_month_and_weekday_names() {
        let t = time(4);
        assert_eq!(t.months(false).len(), 12);
        assert_eq!(t.months(false)[0], "January");
        assert_eq!(t.months(true)[11], "Dec");
        assert_eq!(t.weekdays(false).len(), 7);
        assert_eq!(t.weekdays(false)[0], "Sunday");
        assert_eq!(t.weekdays(true)[6], "Sat");

        let name = t.month_name(false).unwrap();
        assert!(t.months(false).contains(&name));
        let abbr = t.weekday_name(true).unwrap();
        assert!(t.weekdays(true).contains(&abbr));
    }

    #[test]
    fn test_custom_month_names() {
        let mut t = time(5);
        let mut locale = Locale::default();
        locale.time.month.names = vec!["Styczeń".to_string()];
        t.set_locale(Some(Arc::new(locale)));
        assert_eq!(t.month_name(false).unwrap(), "Styczeń");
        assert_eq!(t.months(true).len(), 12);
    }

    #[test]
    fn test_am_pm() {
        let t = time(6);
        for _ in 0..20 {
            let value = t.am_pm().unwrap();
            assert!(value == "am" || value == "pm");
        }
    }

    #[test]
    fn test_midnight() {
        let t = time(7);
        // 2023-03-05T08:09:07.005Z
        let at = 1_678_003_747_005;
        assert_eq!(t.midnight(Some(at)).unwrap(), 1_677_974_400_000);
        assert_eq!(t.midnight(Some(-1)).unwrap(), -MS_PER_DAY);

        let random = t.midnight(None).unwrap();
        assert_eq!(random.rem_euclid(MS_PER_DAY), 0);
    }

    #[test]
    fn test_format_date_time() {
        let date = from_millis(1_678_003_747_005).unwrap();
        assert_eq!(
            format_date_time(&date, DateTimeFormat::Rfc3339),
            "2023-03-05T08:09:07.005Z"
        );
        assert_eq!(
            format_date_time(&date, DateTimeFormat::Rfc2616),
            "Sun, 05 Mar 2023 08:09:07 GMT"
        );
    }

    #[test]
    fn test_textual_shapes() {
        let t = time(8);
        let date = t.date_only().unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);

        let clock = t.time_only().unwrap();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);

        let local = t.date_time_only().unwrap();
        assert_eq!(local.len(), 19);
        assert!(local.contains('T'));
        assert!(!local.ends_with('Z'));

        assert!(t.date_time(DateTimeFormat::Rfc3339).unwrap().ends_with('Z'));
        assert!(t.date_time(DateTimeFormat::Rfc2616).unwrap().ends_with(" GMT"));
    }

    #[test]
    fn test_date_within_bounds() {
        let t = time(9);
        let date = t
            .date(DateTimeOptions {
                min: Some(1_000),
                max: Some(2_000),
            })
            .unwrap();
        assert!((1_000..=2_000).contains(&date.timestamp_millis()));
        assert!(t.timestamp().unwrap() > 0);
    }
}
