/// First day in the fixed date window.
pub const WINDOW_START: u32 = 15;
/// Last day in the fixed date window (inclusive).
pub const WINDOW_END: u32 = 28;
/// The day selected when the screen first opens.
pub const DEFAULT_SELECTED_DAY: u32 = 18;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell in the date strip. Selection lives outside the cell as a single
/// selected-day integer; it is purely visual and not linked to tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    pub day: u32,
    pub day_name: &'static str,
}

/// Generate the fixed 14-day window. Day names cycle Sun..Sat starting at
/// the first day of the window.
pub fn date_window() -> Vec<DateCell> {
    (WINDOW_START..=WINDOW_END)
        .map(|day| DateCell {
            day,
            day_name: DAY_NAMES[((day - WINDOW_START) % 7) as usize],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_fourteen_days() {
        let window = date_window();
        assert_eq!(window.len(), 14);
        assert_eq!(window.first().unwrap().day, 15);
        assert_eq!(window.last().unwrap().day, 28);
    }

    #[test]
    fn day_names_cycle_from_sunday() {
        let window = date_window();
        assert_eq!(window[0].day_name, "Sun");
        assert_eq!(window[6].day_name, "Sat");
        // Day 22 wraps back around to Sun
        assert_eq!(window[7].day_name, "Sun");
        assert_eq!(window[13].day_name, "Sat");
    }

    #[test]
    fn default_selection_is_in_window() {
        assert!((WINDOW_START..=WINDOW_END).contains(&DEFAULT_SELECTED_DAY));
    }
}
