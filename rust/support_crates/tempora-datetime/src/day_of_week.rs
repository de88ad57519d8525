use super::*;
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Returns the day for a zero-based index counted from Sunday.
    ///
    /// # Panics
    /// Panics if `index` is outside `0..7`.
    pub fn from_index(index: i32) -> DayOfWeek {
        assert!(
            (0..DAYS_PER_WEEK).contains(&index),
            "Invalid index argument: DayOfWeek::from_index({index})"
        );
        Self::ALL[index as usize]
    }

    /// Zero-based index counted from Sunday.
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Number of days to move forward from `self` to reach `target`, in `0..7`.
    pub fn days_until(self, target: DayOfWeek) -> i32 {
        (target.index() - self.index()).rem_euclid(DAYS_PER_WEEK)
    }

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts full names and three-letter abbreviations, case-insensitively.
impl FromStr for DayOfWeek {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                name == needle || name[..3] == needle
            })
            .ok_or_else(|| DateTimeError::Parse {
                input: s.to_string(),
                expected: "a day of the week such as 'monday' or 'mon'",
            })
    }
}
