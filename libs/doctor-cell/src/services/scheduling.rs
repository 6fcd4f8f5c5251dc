use chrono::{Days, NaiveDate};

use crate::models::{DateOption, Shift, TimeSlot};

const MORNING_SLOTS: [&str; 6] = ["9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM"];
const AFTERNOON_SLOTS: [&str; 6] = ["2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM"];

/// Half-hour slots across the morning and afternoon shifts, in display order.
pub fn standard_time_slots() -> Vec<TimeSlot> {
    let morning = MORNING_SLOTS.iter().map(|label| TimeSlot {
        label: label.to_string(),
        shift: Shift::Morning,
    });
    let afternoon = AFTERNOON_SLOTS.iter().map(|label| TimeSlot {
        label: label.to_string(),
        shift: Shift::Afternoon,
    });

    morning.chain(afternoon).collect()
}

/// The `days` calendar days starting at `today` (inclusive).
///
/// Stops early at the end of the representable calendar.
pub fn upcoming_dates(today: NaiveDate, days: u32) -> Vec<DateOption> {
    (0..u64::from(days))
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| DateOption {
            weekday: date.format("%a").to_string(),
            day_of_month: date.format("%-d").to_string(),
            label: date.format("%b %-d").to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_slots_split_by_shift() {
        let slots = standard_time_slots();
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0].label, "9:00 AM");
        assert_eq!(slots[5].shift, Shift::Morning);
        assert_eq!(slots[6].label, "2:00 PM");
        assert_eq!(slots[6].shift, Shift::Afternoon);
    }

    #[test]
    fn dates_start_today_and_use_short_labels() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let dates = upcoming_dates(today, 7);

        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0].label, "Feb 15");
        assert_eq!(dates[0].weekday, "Sun");
        assert_eq!(dates[1].label, "Feb 16");
        assert_eq!(dates[1].day_of_month, "16");
    }

    #[test]
    fn dates_roll_over_month_end() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
        let labels: Vec<String> = upcoming_dates(today, 4).into_iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Feb 27", "Feb 28", "Mar 1", "Mar 2"]);
    }

    #[test]
    fn dates_stop_at_calendar_end() {
        let dates = upcoming_dates(NaiveDate::MAX, 7);
        assert_eq!(dates.len(), 1);

        let near_end = NaiveDate::MAX.pred_opt().unwrap();
        assert_eq!(upcoming_dates(near_end, 7).len(), 2);
    }
}
