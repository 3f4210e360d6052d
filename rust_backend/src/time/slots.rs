use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{HeatmapError, HeatmapResult};

const MINUTES_PER_DAY: usize = 24 * 60;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Time-of-day labels for a day split into `nr_slots` equal slots
///
/// # Arguments
/// * `nr_slots` - Slots per day; must divide 1440 (whole minutes per slot)
///
/// # Returns
/// * `Vec<String>` - `"HH:MM"` labels, earliest first
///
/// # Example
/// ```
/// use occupancy_heatmap::time::slot_labels;
/// let labels = slot_labels(96).unwrap();
/// assert_eq!(labels[1], "00:15");
/// assert_eq!(labels[95], "23:45");
/// ```
pub fn slot_labels(nr_slots: usize) -> HeatmapResult<Vec<String>> {
    if nr_slots == 0 || MINUTES_PER_DAY % nr_slots != 0 {
        return Err(HeatmapError::invalid_grid(format!(
            "{} slots per day do not divide a day into whole minutes",
            nr_slots
        )));
    }
    let minutes = MINUTES_PER_DAY / nr_slots;
    Ok((0..nr_slots)
        .map(|k| {
            let offset = k * minutes;
            format!("{:02}:{:02}", offset / 60, offset % 60)
        })
        .collect())
}

/// Same as [`slot_labels`], latest slot first
///
/// Grids are drawn with the latest slot in the first row, so the first half
/// of the rows is the afternoon and the second half the morning.
pub fn descending_slot_labels(nr_slots: usize) -> HeatmapResult<Vec<String>> {
    let mut labels = slot_labels(nr_slots)?;
    labels.reverse();
    Ok(labels)
}

/// Monday 00:00 of the week containing `dt`
pub fn start_of_week(dt: NaiveDateTime) -> NaiveDateTime {
    let days_from_monday = dt.weekday().num_days_from_monday() as i64;
    (dt.date() - Duration::days(days_from_monday)).and_time(NaiveTime::MIN)
}

/// Midnight UTC timestamps (milliseconds) for `days` consecutive dates
pub fn week_axis(start: NaiveDate, days: usize) -> Vec<f64> {
    let base = start.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64;
    (0..days).map(|d| base + d as f64 * MILLIS_PER_DAY).collect()
}

/// Decode a clicked cell into the start of its slot
///
/// # Arguments
/// * `x` - Clicked column value, a date with an optional time part (`"2021-03-01"`,
///   `"2021-03-01 00:00"`)
/// * `y` - Clicked row label (`"07:15"`)
///
/// # Returns
/// * `NaiveDateTime` - Date of the column at the time of the row
pub fn slot_from_click(x: &str, y: &str) -> HeatmapResult<NaiveDateTime> {
    let date_part = x.split([' ', 'T']).next().unwrap_or_default();
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
        HeatmapError::InvalidView(format!("Invalid clicked date `{}`: {}", x, e))
    })?;
    let time = NaiveTime::parse_from_str(y.trim(), "%H:%M").map_err(|e| {
        HeatmapError::InvalidView(format!("Invalid clicked time `{}`: {}", y, e))
    })?;
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels_quarter_hours() {
        let labels = slot_labels(96).unwrap();
        assert_eq!(labels.len(), 96);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[28], "07:00");
        assert_eq!(labels[95], "23:45");
    }

    #[test]
    fn test_slot_labels_half_hours() {
        let labels = slot_labels(48).unwrap();
        assert_eq!(labels[1], "00:30");
        assert_eq!(labels[47], "23:30");
    }

    #[test]
    fn test_slot_labels_rejects_uneven_split() {
        assert!(slot_labels(0).is_err());
        assert!(slot_labels(7).is_err());
    }

    #[test]
    fn test_descending_slot_labels() {
        let labels = descending_slot_labels(24).unwrap();
        assert_eq!(labels[0], "23:00");
        assert_eq!(labels[23], "00:00");
        // first half is the afternoon
        assert_eq!(labels[11], "12:00");
        assert_eq!(labels[12], "11:00");
    }

    #[test]
    fn test_start_of_week() {
        // 2021-03-04 is a Thursday
        let dt = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        let monday = NaiveDate::from_ymd_opt(2021, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(start_of_week(dt), monday);
        assert_eq!(start_of_week(monday), monday);
    }

    #[test]
    fn test_week_axis() {
        let start = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let axis = week_axis(start, 7);
        assert_eq!(axis.len(), 7);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[6], 6.0 * MILLIS_PER_DAY);
    }

    #[test]
    fn test_slot_from_click() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 2)
            .unwrap()
            .and_hms_opt(7, 15, 0)
            .unwrap();
        assert_eq!(slot_from_click("2021-03-02", "07:15").unwrap(), expected);
        assert_eq!(slot_from_click("2021-03-02 00:00", "07:15").unwrap(), expected);
        assert_eq!(slot_from_click("2021-03-02T00:00:00", "07:15").unwrap(), expected);
    }

    #[test]
    fn test_slot_from_click_invalid() {
        assert!(matches!(
            slot_from_click("March 2nd", "07:15").unwrap_err(),
            HeatmapError::InvalidView(_)
        ));
        assert!(slot_from_click("2021-03-02", "7h15").is_err());
    }
}
