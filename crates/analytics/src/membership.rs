use chrono::{DateTime, Datelike, Months, Utc};
use core_types::PLACEHOLDER;

/// A calendar-aware difference between two instants.
///
/// Years and months are counted first (with month-end clamping, so Jan 31 + 1 month is the
/// last day of February); the remainder is split into days down to microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl CalendarDelta {
    fn negated(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            microseconds: -self.microseconds,
        }
    }
}

fn add_months(start: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    u32::try_from(months)
        .ok()
        .and_then(|m| start.checked_add_months(Months::new(m)))
        .unwrap_or(start)
}

/// Computes `to - from` as a calendar delta. A negative span yields negated fields.
pub fn calendar_delta(from: DateTime<Utc>, to: DateTime<Utc>) -> CalendarDelta {
    if to < from {
        return calendar_delta(to, from).negated();
    }

    let mut total_months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());
    let mut anchor = add_months(from, total_months);
    while total_months > 0 && anchor > to {
        total_months -= 1;
        anchor = add_months(from, total_months);
    }

    let remainder = to - anchor;
    let total_seconds = remainder.num_seconds();
    let rest = total_seconds % 86_400;

    CalendarDelta {
        years: total_months / 12,
        months: total_months % 12,
        days: total_seconds / 86_400,
        hours: rest / 3_600,
        minutes: rest % 3_600 / 60,
        seconds: rest % 60,
        microseconds: remainder.num_microseconds().map_or(0, |us| us % 1_000_000),
    }
}

/// Renders how long ago `registered` was, using only the largest non-zero unit.
///
/// Minutes are not a candidate unit. The unit is pluralised only when the value is greater
/// than one. Returns the placeholder when every candidate unit is zero.
pub fn membership_duration(registered: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = calendar_delta(registered, now);
    let units = [
        (delta.years, "year"),
        (delta.months, "month"),
        (delta.days, "day"),
        (delta.hours, "hour"),
        (delta.seconds, "second"),
        (delta.microseconds, "microsecond"),
    ];

    units
        .iter()
        .find(|(value, _)| *value != 0)
        .map(|(value, unit)| {
            let suffix = if *value > 1 { "s" } else { "" };
            format!("{} {}{}", value, unit, suffix)
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
