use crate::models::{AppData, Entry, TrendResponse};

/// How many recent entries the trend chart shows.
pub const TREND_WINDOW: usize = 7;

/// Replaces any entry with the same date, then appends. Other dates are
/// never touched.
pub fn upsert(data: &mut AppData, entry: Entry) {
    data.entries.retain(|existing| existing.date != entry.date);
    data.entries.push(entry);
}

pub fn find_by_date<'a>(data: &'a AppData, date: &str) -> Option<&'a Entry> {
    data.entries.iter().find(|entry| entry.date == date)
}

/// The last `n` entries sorted ascending by date, oldest first. Lexicographic
/// order is chronological because the dates are fixed-width ISO strings.
pub fn recent_window(data: &AppData, n: usize) -> Vec<&Entry> {
    let mut entries: Vec<&Entry> = data.entries.iter().collect();
    entries.sort_by(|a, b| a.date.cmp(&b.date));
    let skip = entries.len().saturating_sub(n);
    entries.split_off(skip)
}

/// Builds the chart view model from the recent window: date labels plus the
/// two score series in matching positions.
pub fn build_trend(data: &AppData, n: usize) -> TrendResponse {
    let window = recent_window(data, n);
    TrendResponse {
        labels: window.iter().map(|entry| entry.date.clone()).collect(),
        burnout: window
            .iter()
            .map(|entry| entry.results.burnout_score)
            .collect(),
        focus: window
            .iter()
            .map(|entry| entry.results.focus_stability)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyInputs, SwitchLevel};
    use crate::scorer;

    fn entry(date: &str, focus: u8) -> Entry {
        let inputs = DailyInputs {
            screen_time: 4.0,
            sleep: 8.0,
            breaks: true,
            switches: SwitchLevel::Low,
            focus,
        };
        Entry {
            date: date.to_string(),
            inputs,
            results: scorer::compute(&inputs),
        }
    }

    #[test]
    fn upsert_is_idempotent_per_date() {
        let mut data = AppData::default();
        upsert(&mut data, entry("2026-08-01", 5));
        upsert(&mut data, entry("2026-08-01", 5));
        assert_eq!(data.entries.len(), 1);
    }

    #[test]
    fn upsert_replaces_only_the_matching_date() {
        let mut data = AppData::default();
        upsert(&mut data, entry("2026-08-01", 5));
        upsert(&mut data, entry("2026-08-02", 5));
        assert_eq!(data.entries.len(), 2);

        upsert(&mut data, entry("2026-08-01", 2));
        assert_eq!(data.entries.len(), 2);
        let replaced = find_by_date(&data, "2026-08-01").expect("entry kept");
        assert_eq!(replaced.inputs.focus, 2);
        assert!(find_by_date(&data, "2026-08-02").is_some());
    }

    #[test]
    fn find_by_date_misses_are_not_errors() {
        let mut data = AppData::default();
        upsert(&mut data, entry("2026-08-01", 5));
        assert!(find_by_date(&data, "2026-08-02").is_none());
    }

    #[test]
    fn recent_window_takes_latest_seven_ascending() {
        let mut data = AppData::default();
        // Inserted out of order on purpose.
        for day in [4, 1, 9, 2, 10, 6, 3, 8, 5, 7] {
            upsert(&mut data, entry(&format!("2026-08-{day:02}"), 5));
        }

        let window = recent_window(&data, 7);
        assert_eq!(window.len(), 7);
        let dates: Vec<&str> = window.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2026-08-04",
                "2026-08-05",
                "2026-08-06",
                "2026-08-07",
                "2026-08-08",
                "2026-08-09",
                "2026-08-10",
            ]
        );
    }

    #[test]
    fn recent_window_shrinks_to_store_size() {
        let mut data = AppData::default();
        upsert(&mut data, entry("2026-08-01", 5));
        upsert(&mut data, entry("2026-08-02", 5));
        assert_eq!(recent_window(&data, 7).len(), 2);
        assert!(recent_window(&AppData::default(), 7).is_empty());
    }

    #[test]
    fn trend_series_stay_parallel() {
        let mut data = AppData::default();
        upsert(&mut data, entry("2026-08-01", 1));
        upsert(&mut data, entry("2026-08-02", 5));

        let trend = build_trend(&data, TREND_WINDOW);
        assert_eq!(trend.labels, vec!["2026-08-01", "2026-08-02"]);
        assert_eq!(trend.burnout.len(), 2);
        assert_eq!(trend.focus.len(), 2);
        // focus=1 costs 40 stability, focus=5 costs nothing.
        assert_eq!(trend.focus, vec![60, 100]);
    }
}
