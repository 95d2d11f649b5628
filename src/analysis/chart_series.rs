use {
    chrono::{DateTime, Local, TimeZone},
    std::fmt::Display,
};

use crate::{
    domain::ChartDays,
    models::{ChartPoint, PricePoint},
};

/// How much of a timestamp an x-axis label shows, chosen from the requested span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelGranularity {
    /// `3:05 PM`
    TimeOfDay,
    /// `Jan 5, 3 PM`
    DayAndHour,
    /// `Jan 5`
    Day,
}

impl LabelGranularity {
    pub fn for_days(days: ChartDays) -> Self {
        if days.at_most(1) {
            LabelGranularity::TimeOfDay
        } else if days.at_most(90) {
            LabelGranularity::DayAndHour
        } else {
            LabelGranularity::Day
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            LabelGranularity::TimeOfDay => "%-I:%M %p",
            LabelGranularity::DayAndHour => "%b %-d, %-I %p",
            LabelGranularity::Day => "%b %-d",
        }
    }
}

/// Labels every point in the viewer's local time zone.
pub fn build_chart_series(points: &[PricePoint], days: ChartDays) -> Vec<ChartPoint> {
    build_chart_series_in(points, days, &Local)
}

/// One output point per input point, same order. Nothing is dropped or resampled.
pub fn build_chart_series_in<Tz>(points: &[PricePoint], days: ChartDays, tz: &Tz) -> Vec<ChartPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = LabelGranularity::for_days(days).pattern();
    points
        .iter()
        .map(|point| ChartPoint {
            label: DateTime::from_timestamp_millis(point.timestamp_ms)
                .map(|utc| utc.with_timezone(tz).format(pattern).to_string())
                .unwrap_or_default(),
            price: point.price,
        })
        .collect()
}
