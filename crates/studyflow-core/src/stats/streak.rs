//! Streak and weekly activity derivation from session history.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

/// Activity flags for the last 7 calendar days, oldest first. A day is
/// active when at least one session was completed on it.
pub fn week_activity(session_days: &[NaiveDate], today: NaiveDate) -> [bool; 7] {
    let active: HashSet<&NaiveDate> = session_days.iter().collect();

    let mut week = [false; 7];
    for (i, slot) in week.iter_mut().enumerate() {
        let day = today - Duration::days((6 - i) as i64);
        *slot = active.contains(&day);
    }
    week
}

/// Current and longest streak of consecutive study days.
///
/// The current streak counts back from today; a day without a session yet
/// today does not break it (the run may still be extended), but a gap
/// before yesterday does.
pub fn streaks(session_days: &[NaiveDate], today: NaiveDate) -> (u32, u32) {
    let mut days: Vec<NaiveDate> = session_days.to_vec();
    days.sort();
    days.dedup();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for day in &days {
        run = match prev {
            Some(p) if *day - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*day);
    }

    let mut current = 0u32;
    let mut cursor = if days.last() == Some(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    let day_set: HashSet<&NaiveDate> = days.iter().collect();
    while day_set.contains(&cursor) {
        current += 1;
        cursor = cursor - Duration::days(1);
    }

    (current, longest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_history_has_no_activity() {
        let today = d("2026-03-10");
        assert_eq!(week_activity(&[], today), [false; 7]);
        assert_eq!(streaks(&[], today), (0, 0));
    }

    #[test]
    fn week_strip_marks_session_days() {
        let today = d("2026-03-10");
        let days = vec![d("2026-03-10"), d("2026-03-08"), d("2026-03-04")];
        // Window is 03-04 .. 03-10, oldest first.
        assert_eq!(
            week_activity(&days, today),
            [true, false, false, false, true, false, true]
        );
    }

    #[test]
    fn sessions_outside_window_are_ignored() {
        let today = d("2026-03-10");
        let days = vec![d("2026-03-03"), d("2026-02-01")];
        assert_eq!(week_activity(&days, today), [false; 7]);
    }

    #[test]
    fn current_streak_counts_back_from_today() {
        let today = d("2026-03-10");
        let days = vec![d("2026-03-10"), d("2026-03-09"), d("2026-03-08")];
        assert_eq!(streaks(&days, today), (3, 3));
    }

    #[test]
    fn missing_today_does_not_break_streak_yet() {
        let today = d("2026-03-10");
        let days = vec![d("2026-03-09"), d("2026-03-08")];
        assert_eq!(streaks(&days, today), (2, 2));
    }

    #[test]
    fn gap_before_yesterday_resets_current() {
        let today = d("2026-03-10");
        let days = vec![
            d("2026-03-10"),
            d("2026-03-07"),
            d("2026-03-06"),
            d("2026-03-05"),
        ];
        assert_eq!(streaks(&days, today), (1, 3));
    }

    #[test]
    fn duplicate_days_count_once() {
        let today = d("2026-03-10");
        let days = vec![d("2026-03-10"), d("2026-03-10"), d("2026-03-09")];
        assert_eq!(streaks(&days, today), (2, 2));
    }
}
