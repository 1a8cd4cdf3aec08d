use crate::models::interval::WorkInterval;
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{all_days_of_month, month_name};
use chrono::Datelike;

/// Month-grid rendering of logged intervals.
///
/// Every day covered by an interval is highlighted, both endpoints
/// included: green when the interval counts toward the quota, yellow
/// otherwise. A day covered by both kinds renders green.
pub struct CalendarLogic;

impl CalendarLogic {
    pub fn render_month(intervals: &[WorkInterval], year: i32, month: u32) -> String {
        let days = all_days_of_month(year, month);

        let mut out = String::new();
        out.push_str(&format!("      {} {}\n", month_name(month), year));
        out.push_str("Mo Tu We Th Fr Sa Su\n");

        // Leading blanks up to the first weekday
        let offset = days[0].weekday().num_days_from_monday() as usize;
        out.push_str(&"   ".repeat(offset));

        for d in &days {
            let valid = intervals.iter().any(|iv| iv.status && iv.covers(*d));
            let logged = valid || intervals.iter().any(|iv| iv.covers(*d));

            let cell = if valid {
                format!("{}{:>2}{}", GREEN, d.day(), RESET)
            } else if logged {
                format!("{}{:>2}{}", YELLOW, d.day(), RESET)
            } else {
                format!("{}{:>2}{}", GREY, d.day(), RESET)
            };

            out.push_str(&cell);

            if d.weekday().num_days_from_monday() == 6 {
                out.push('\n');
            } else {
                out.push(' ');
            }
        }

        if !out.ends_with('\n') {
            out.push('\n');
        }

        out.push_str(&format!(
            "\n{}██{} counts toward quota   {}██{} logged only\n",
            GREEN, RESET, YELLOW, RESET
        ));

        out
    }
}
