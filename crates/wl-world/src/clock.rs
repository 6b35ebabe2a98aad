//! The tick counter and the in-world calendar derived from it.

/// Default simulation rate, in ticks per second.
pub const TPS: u32 = 20;

/// Ticks in one in-world day. At the default rate a day lasts 40 real
/// minutes.
pub const TICKS_PER_DAY: u64 = TPS as u64 * 2400;

/// Hour of day a brand-new world wakes up at.
pub const STARTING_HOUR: u64 = 9;

const HOURS_PER_DAY: u64 = 24;
const MINUTES_PER_HOUR: u64 = 60;
const DAYS_PER_WEEK: usize = 7;
const DAYS_PER_MONTH: u64 = 28;
const MONTHS_PER_YEAR: u64 = 13;

const TICKS_PER_HOUR: u64 = TICKS_PER_DAY / HOURS_PER_DAY;
const STARTING_OFFSET: u64 = TICKS_PER_DAY * STARTING_HOUR / HOURS_PER_DAY;

const WEEKDAYS: [&str; DAYS_PER_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 13] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "Undecimber",
];

/// Monotonic tick counter with calendar derivations.
///
/// The counter itself starts at zero and persists raw; the starting hour
/// is folded in when deriving readings, so a fresh world reads 9:00 AM
/// on Sunday, January 1 of year 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldClock {
    tick: u64,
}

impl WorldClock {
    /// A clock at tick zero.
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    /// A clock resumed at a saved tick.
    pub fn at(tick: u64) -> Self {
        Self { tick }
    }

    /// Advance one tick and return the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// The current tick.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn shifted(&self) -> u64 {
        self.tick + STARTING_OFFSET
    }

    fn days_elapsed(&self) -> u64 {
        self.shifted() / TICKS_PER_DAY
    }

    /// Hour of the day, 0 to 23.
    pub fn hour_of_day(&self) -> u64 {
        self.shifted() % TICKS_PER_DAY / TICKS_PER_HOUR
    }

    /// Minute of the hour, 0 to 59.
    pub fn minute_of_hour(&self) -> u64 {
        // Multiply before dividing; an hour does not split evenly into
        // sixty whole-tick minutes.
        self.shifted() % TICKS_PER_HOUR * MINUTES_PER_HOUR / TICKS_PER_HOUR
    }

    /// Fraction of the day elapsed, in `0.0..1.0`.
    pub fn percent_of_day(&self) -> f32 {
        (self.shifted() % TICKS_PER_DAY) as f32 / TICKS_PER_DAY as f32
    }

    /// Name of the current weekday.
    pub fn day_of_week(&self) -> &'static str {
        WEEKDAYS[(self.days_elapsed() % DAYS_PER_WEEK as u64) as usize]
    }

    /// Day of the month, starting at 1.
    pub fn day_of_month(&self) -> u64 {
        self.days_elapsed() % DAYS_PER_MONTH + 1
    }

    /// Month of the year, starting at 1.
    pub fn month_of_year(&self) -> u64 {
        self.days_elapsed() / DAYS_PER_MONTH % MONTHS_PER_YEAR + 1
    }

    /// Name of the current month. The year has thirteen.
    pub fn month_name(&self) -> &'static str {
        MONTHS[(self.days_elapsed() / DAYS_PER_MONTH % MONTHS_PER_YEAR) as usize]
    }

    /// Year, starting at 1.
    pub fn year(&self) -> u64 {
        self.days_elapsed() / DAYS_PER_MONTH / MONTHS_PER_YEAR + 1
    }

    /// Multi-line clock face: weekday, 12-hour time, and date.
    pub fn time_string(&self) -> String {
        format!(
            "{}\n{:>2}:{:02} {}\n{} {}, {}",
            self.day_of_week(),
            self.hour_12(),
            self.minute_of_hour(),
            self.meridiem(),
            self.month_name(),
            self.day_of_month(),
            self.year(),
        )
    }

    /// Compact timestamp used for chat messages.
    pub fn short_time_string(&self) -> String {
        format!(
            "{}/{}/{} {:>2}:{:02} {}",
            self.year(),
            self.month_of_year(),
            self.day_of_month(),
            self.hour_12(),
            self.minute_of_hour(),
            self.meridiem(),
        )
    }

    fn hour_12(&self) -> u64 {
        match self.hour_of_day() % 12 {
            0 => 12,
            hour => hour,
        }
    }

    fn meridiem(&self) -> &'static str {
        if self.hour_of_day() < 12 { "AM" } else { "PM" }
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new()
    }
}
