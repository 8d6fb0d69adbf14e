// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report formatting: Strava stats and recent activities to fixed-width text.
//!
//! Everything here is pure. The clock, local UTC offset and unit system come
//! in through [`ReportContext`], so the same inputs always render the same text.
//!
//! Layout, top to bottom:
//! 1. Last activity (omitted when there are no activities)
//! 2. Trailing 7-day totals
//! 3. Strava's "recent" (4-week) totals across all disciplines
//! 4. Year-to-date summary per discipline with a share-of-distance bar

pub mod chart;
pub mod units;

use crate::config::MeasurementSystem;
use crate::models::{ActivitySummary, AthleteStats, Discipline, TotalsPeriod};
use crate::time_utils::{format_duration, format_local_date, window_start};
use chrono::{DateTime, FixedOffset, Local, Utc};

pub use chart::{render_bar, BAR_WIDTH};
pub use units::{calculate_pace, format_distance, format_pace, format_rate};

/// Length of the rolling window, in days.
pub const WINDOW_DAYS: i64 = 7;

/// Inputs that are not part of the Strava data.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
    pub units: MeasurementSystem,
    pub now: DateTime<Utc>,
    /// Offset used to render calendar dates
    pub offset: FixedOffset,
}

impl ReportContext {
    /// Context for the current moment in the process' local timezone.
    pub fn current(units: MeasurementSystem) -> Self {
        let local = Local::now();
        Self {
            units,
            now: local.with_timezone(&Utc),
            offset: *local.offset(),
        }
    }
}

/// Finished report, one entry per output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Year-to-date distance and moving time for one discipline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisciplineSummary {
    pub discipline: Discipline,
    pub distance: f64,
    pub moving_time: u64,
}

/// Extract year-to-date totals for every discipline.
///
/// A missing or malformed entry becomes a zero entry for that discipline.
pub fn summarize_disciplines(stats: &AthleteStats) -> Vec<DisciplineSummary> {
    stats
        .period_totals(TotalsPeriod::YearToDate)
        .map(|(discipline, totals)| match totals {
            Ok(t) => DisciplineSummary {
                discipline,
                distance: t.distance,
                moving_time: t.moving_time,
            },
            Err(e) => {
                tracing::warn!(
                    discipline = discipline.label(),
                    error = %e,
                    "Using zero totals"
                );
                DisciplineSummary {
                    discipline,
                    distance: 0.0,
                    moving_time: 0,
                }
            }
        })
        .collect()
}

/// One summary line per discipline, with bars relative to the combined distance.
pub fn discipline_lines(summaries: &[DisciplineSummary], units: MeasurementSystem) -> Vec<String> {
    let total_distance: f64 = summaries.iter().map(|s| s.distance).sum();

    summaries
        .iter()
        .map(|s| {
            let percent = if total_distance > 0.0 {
                s.distance / total_distance * 100.0
            } else {
                0.0
            };
            format!(
                "{:<10} {:>13} {} {:>7}",
                s.discipline.label(),
                format_distance(s.distance, units),
                render_bar(percent, BAR_WIDTH),
                format_rate(s.distance, s.moving_time, units),
            )
        })
        .collect()
}

/// Lines describing the newest activity.
pub fn last_activity_lines(activity: &ActivitySummary, ctx: &ReportContext) -> Vec<String> {
    let distance = activity.distance_meters();
    let moving_time = activity.moving_seconds();
    let pace = calculate_pace(distance, moving_time, ctx.units);

    vec![
        format!("Last activity: {}", activity.name),
        format!(
            "{:<12} {:>11} {:>7} {:>10}",
            format_local_date(activity.start_date, ctx.offset),
            format_distance(distance, ctx.units),
            format_duration(moving_time),
            format_pace(pace, ctx.units),
        ),
    ]
}

/// Sums over a set of activities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowTotals {
    pub distance: f64,
    pub moving_time: u64,
    pub count: u32,
}

/// Sum activities that started at or after `now - days`.
pub fn trailing_window(
    activities: &[ActivitySummary],
    now: DateTime<Utc>,
    days: i64,
) -> WindowTotals {
    let start = window_start(now, days);
    activities
        .iter()
        .filter(|a| a.start_date >= start)
        .fold(WindowTotals::default(), |mut acc, a| {
            acc.distance += a.distance_meters();
            acc.moving_time += a.moving_seconds();
            acc.count += 1;
            acc
        })
}

/// Combined `recent_*_totals` across disciplines.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecentTotals {
    pub distance: f64,
    pub moving_time: u64,
    pub achievement_count: u32,
}

/// Sum Strava's recent totals over every discipline; bad entries count as zero.
pub fn recent_totals(stats: &AthleteStats) -> RecentTotals {
    stats
        .period_totals(TotalsPeriod::Recent)
        .fold(RecentTotals::default(), |mut acc, (discipline, totals)| {
            match totals {
                Ok(t) => {
                    acc.distance += t.distance;
                    acc.moving_time += t.moving_time;
                    acc.achievement_count += t.achievement_count;
                }
                Err(e) => {
                    tracing::warn!(
                        discipline = discipline.label(),
                        error = %e,
                        "Skipping recent totals"
                    );
                }
            }
            acc
        })
}

fn counted(count: u32, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

fn window_line(totals: &WindowTotals, units: MeasurementSystem) -> String {
    format!(
        "{:<10} {:>13} {:>16} {:>7}",
        "7 days",
        format_distance(totals.distance, units),
        counted(totals.count, "activity", "activities"),
        format_duration(totals.moving_time),
    )
}

fn recent_line(totals: &RecentTotals, units: MeasurementSystem) -> String {
    format!(
        "{:<10} {:>13} {:>16} {:>7}",
        "4 weeks",
        format_distance(totals.distance, units),
        counted(totals.achievement_count, "achievement", "achievements"),
        format_duration(totals.moving_time),
    )
}

/// Assemble the full report.
pub fn build_report(
    stats: &AthleteStats,
    activities: &[ActivitySummary],
    ctx: &ReportContext,
) -> Report {
    let mut lines = Vec::new();

    if let Some(latest) = activities.first() {
        lines.extend(last_activity_lines(latest, ctx));
        lines.push(String::new());
    }

    let window = trailing_window(activities, ctx.now, WINDOW_DAYS);
    lines.push(window_line(&window, ctx.units));
    lines.push(String::new());

    lines.push(recent_line(&recent_totals(stats), ctx.units));
    lines.push(String::new());

    lines.extend(discipline_lines(&summarize_disciplines(stats), ctx.units));

    Report { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn ctx(units: MeasurementSystem) -> ReportContext {
        ReportContext {
            units,
            now: Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap(),
            offset: FixedOffset::east_opt(0).unwrap(),
        }
    }

    fn activity(name: &str, start: DateTime<Utc>, distance: f64, moving_time: u64) -> ActivitySummary {
        ActivitySummary {
            name: name.to_string(),
            start_date: start,
            distance: Some(distance),
            moving_time: Some(moving_time),
        }
    }

    fn ytd_stats() -> AthleteStats {
        AthleteStats::from_value(json!({
            "ytd_run_totals": {"distance": 10000.0, "moving_time": 3600},
            "ytd_swim_totals": {"distance": 0.0, "moving_time": 0},
            "ytd_ride_totals": {"distance": 30000.0, "moving_time": 3600},
        }))
    }

    #[test]
    fn test_discipline_line_layout() {
        let lines = discipline_lines(&summarize_disciplines(&ytd_stats()), MeasurementSystem::Metric);

        assert_eq!(lines.len(), 3);
        // 25% of 19 cells = 38 eighths = 4 full + 6/8
        let expected_bar = format!("{}▊{}", "█".repeat(4), "░".repeat(14));
        assert_eq!(
            lines[0],
            format!("Running         10.00 km {} 10.00/h", expected_bar)
        );
        assert!(lines[1].starts_with("Swimming         0.00 km ░"));
        assert!(lines[1].ends_with(" 0.00/h"));
        assert!(lines[2].ends_with(" 30.00/h"));
    }

    #[test]
    fn test_missing_discipline_renders_zero() {
        let stats = AthleteStats::from_value(json!({
            "ytd_run_totals": {"distance": 10000.0, "moving_time": 3600},
            "ytd_ride_totals": {"distance": 10000.0, "moving_time": 1800},
        }));

        let summaries = summarize_disciplines(&stats);
        assert_eq!(summaries[1].distance, 0.0);
        assert_eq!(summaries[1].moving_time, 0);

        let lines = discipline_lines(&summaries, MeasurementSystem::Metric);
        assert!(lines[0].contains("10.00 km"));
        assert!(lines[1].contains(&"░".repeat(BAR_WIDTH)));
        assert!(lines[2].ends_with(" 20.00/h"));
    }

    #[test]
    fn test_all_zero_distance_has_empty_bars() {
        let lines = discipline_lines(&summarize_disciplines(&AthleteStats::default()), MeasurementSystem::Metric);
        for line in lines {
            assert!(line.contains(&"░".repeat(BAR_WIDTH)), "{}", line);
        }
    }

    #[test]
    fn test_trailing_window_boundary() {
        let now = ctx(MeasurementSystem::Metric).now;
        let activities = vec![
            activity("today", now, 1000.0, 300),
            activity("six days", now - Duration::days(6), 2000.0, 600),
            activity("exactly seven", now - Duration::days(7), 4000.0, 1200),
            activity("eight days", now - Duration::days(8), 8000.0, 2400),
        ];

        let totals = trailing_window(&activities, now, WINDOW_DAYS);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.distance, 7000.0);
        assert_eq!(totals.moving_time, 2100);
    }

    #[test]
    fn test_recent_totals_ignore_ytd() {
        let stats = AthleteStats::from_value(json!({
            "recent_run_totals": {"distance": 1000.0, "moving_time": 300, "achievement_count": 2},
            "recent_swim_totals": {"distance": 500.0, "moving_time": 600, "achievement_count": 0},
            "recent_ride_totals": {"distance": 20000.0, "moving_time": 3000, "achievement_count": 5},
            "ytd_run_totals": {"distance": 99999.0, "moving_time": 99999, "achievement_count": 99},
        }));

        let totals = recent_totals(&stats);
        assert_eq!(totals.distance, 21500.0);
        assert_eq!(totals.moving_time, 3900);
        assert_eq!(totals.achievement_count, 7);
    }

    #[test]
    fn test_last_activity_lines() {
        let ctx = ctx(MeasurementSystem::Metric);
        let latest = activity("Evening Run", ctx.now - Duration::hours(2), 5000.0, 1500);

        let lines = last_activity_lines(&latest, &ctx);
        assert_eq!(lines[0], "Last activity: Evening Run");
        assert_eq!(lines[1], "Mar 10, 2024     5.00 km    0:25    5:00/km");
    }

    #[test]
    fn test_last_activity_without_distance() {
        let ctx = ctx(MeasurementSystem::Imperial);
        let mut yoga = activity("Yoga", ctx.now, 0.0, 3600);
        yoga.distance = None;

        let lines = last_activity_lines(&yoga, &ctx);
        assert!(lines[1].ends_with("0:00/mi"));
        assert!(lines[1].contains("1:00"));
    }

    #[test]
    fn test_build_report_section_order() {
        let ctx = ctx(MeasurementSystem::Metric);
        let activities = vec![activity("Ride", ctx.now, 20000.0, 3600)];

        let report = build_report(&ytd_stats(), &activities, &ctx);
        let lines = &report.lines;

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Last activity: Ride");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("7 days"));
        assert!(lines[3].contains("1 activity"));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("4 weeks"));
        assert!(lines[5].contains("0 achievements"));
        assert_eq!(lines[6], "");
        assert!(lines[7].starts_with("Running"));
        assert!(lines[8].starts_with("Swimming"));
        assert_eq!(report.text().lines().count(), 9);
    }

    #[test]
    fn test_build_report_without_activities() {
        let ctx = ctx(MeasurementSystem::Metric);
        let report = build_report(&ytd_stats(), &[], &ctx);

        assert!(report.lines[0].starts_with("7 days"));
        assert!(report.lines[0].contains("0 activities"));
        assert_eq!(report.lines.len(), 7);
    }
}
