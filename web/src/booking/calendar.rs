use chrono::{Datelike, NaiveDate};

pub const GRID_CELLS: usize = 42;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// One cell of the booking calendar. Recomputed on every navigation,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub current_month: bool,
    pub disabled: bool,
}

/// The month currently displayed by the calendar. Months are 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Self {
        MonthView { year, month }
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthView {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            MonthView { year: self.year - 1, month: 12 }
        } else {
            MonthView { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            MonthView { year: self.year + 1, month: 1 }
        } else {
            MonthView { year: self.year, month: self.month + 1 }
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Canonical YYYY-MM-DD string for a day of the displayed month.
    pub fn date_string(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        let first_of_next = self.next().first_day();
        (first_of_next - first).num_days() as u32
    }

    /// Weekday index of day 1, 0 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    fn first_day(&self) -> NaiveDate {
        // Month is kept in 1..=12 by construction and navigation.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month view holds a valid year/month")
    }

    /// Six-row calendar grid: the tail of the previous month, the full
    /// displayed month, and the head of the next month, always 42 cells.
    /// Out-of-month cells and current-month days strictly before `today`
    /// are disabled.
    pub fn grid(&self, today: NaiveDate) -> Vec<CalendarDay> {
        let mut cells = Vec::with_capacity(GRID_CELLS);

        let leading = self.first_weekday();
        let prev_month_days = self.prev().days_in_month();
        for day in (prev_month_days - leading + 1)..=prev_month_days {
            cells.push(CalendarDay {
                day,
                current_month: false,
                disabled: true,
            });
        }

        for day in 1..=self.days_in_month() {
            let date = NaiveDate::from_ymd_opt(self.year, self.month, day)
                .expect("day is within the displayed month");
            cells.push(CalendarDay {
                day,
                current_month: true,
                disabled: date < today,
            });
        }

        let mut next_day = 1;
        while cells.len() < GRID_CELLS {
            cells.push(CalendarDay {
                day: next_day,
                current_month: false,
                disabled: true,
            });
            next_day += 1;
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_always_has_42_cells() {
        let today = date(2025, 1, 1);
        let mut view = MonthView::new(2024, 1);
        for _ in 0..36 {
            assert_eq!(view.grid(today).len(), GRID_CELLS, "{}", view.label());
            view = view.next();
        }
    }

    #[test]
    fn current_month_cell_count_matches_days_in_month() {
        let today = date(2025, 1, 1);
        for (year, month, expected) in [
            (2025, 3, 31),
            (2025, 4, 30),
            (2025, 2, 28),
            (2024, 2, 29), // leap year
            (2025, 12, 31),
        ] {
            let view = MonthView::new(year, month);
            let in_month = view
                .grid(today)
                .iter()
                .filter(|c| c.current_month)
                .count();
            assert_eq!(in_month, expected, "{}", view.label());
        }
    }

    #[test]
    fn leading_cells_are_previous_month_tail() {
        // March 2025 starts on a Saturday: six leading cells, Feb 23-28.
        let view = MonthView::new(2025, 3);
        let grid = view.grid(date(2025, 3, 1));
        assert_eq!(view.first_weekday(), 6);
        let leading: Vec<u32> = grid.iter().take(6).map(|c| c.day).collect();
        assert_eq!(leading, vec![23, 24, 25, 26, 27, 28]);
        assert!(grid.iter().take(6).all(|c| !c.current_month && c.disabled));
    }

    #[test]
    fn past_days_are_disabled_at_day_granularity() {
        let today = date(2025, 3, 10);
        let grid = MonthView::new(2025, 3).grid(today);
        for cell in grid.iter().filter(|c| c.current_month) {
            if cell.day < 10 {
                assert!(cell.disabled, "March {} should be disabled", cell.day);
            } else {
                assert!(!cell.disabled, "March {} should be selectable", cell.day);
            }
        }
    }

    #[test]
    fn whole_month_disabled_when_before_today() {
        let today = date(2025, 3, 10);
        let grid = MonthView::new(2025, 2).grid(today);
        assert!(grid.iter().all(|c| c.disabled));
    }

    #[test]
    fn future_month_fully_selectable() {
        let today = date(2025, 3, 10);
        let grid = MonthView::new(2025, 4).grid(today);
        assert!(grid.iter().filter(|c| c.current_month).all(|c| !c.disabled));
    }

    #[test]
    fn out_of_month_cells_are_always_disabled() {
        let grid = MonthView::new(2025, 6).grid(date(2020, 1, 1));
        assert!(grid.iter().filter(|c| !c.current_month).all(|c| c.disabled));
    }

    #[test]
    fn navigation_wraps_across_year_boundaries() {
        assert_eq!(MonthView::new(2025, 1).prev(), MonthView::new(2024, 12));
        assert_eq!(MonthView::new(2025, 12).next(), MonthView::new(2026, 1));
        assert_eq!(MonthView::new(2025, 6).prev(), MonthView::new(2025, 5));
        assert_eq!(MonthView::new(2025, 6).next(), MonthView::new(2025, 7));
    }

    #[test]
    fn date_strings_are_zero_padded() {
        assert_eq!(MonthView::new(2025, 3).date_string(5), "2025-03-05");
        assert_eq!(MonthView::new(2025, 11).date_string(28), "2025-11-28");
    }

    #[test]
    fn month_labels() {
        assert_eq!(MonthView::new(2025, 3).label(), "March 2025");
        assert_eq!(MonthView::new(2024, 12).label(), "December 2024");
    }
}
