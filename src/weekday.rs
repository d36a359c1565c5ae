use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Day of the week.
///
/// The epoch (2001-01-01) is a Monday, and every year and month starts on a
/// Monday, since all of them are whole weeks long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// All days in order, starting from Monday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Constructs from a zero-based index (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the index is out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the zero-based index (0 = Monday … 6 = Sunday).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday of a signed day offset from the epoch.
    pub(crate) const fn from_days_since_epoch(days: i64) -> Self {
        // rem_euclid keeps negative offsets in 0..7
        Self::ALL[days.rem_euclid(crate::consts::DAYS_IN_WEEK) as usize]
    }

    /// The following day, wrapping Sunday to Monday
    pub const fn succ(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 7]
    }

    /// The preceding day, wrapping Monday to Sunday
    pub const fn pred(self) -> Self {
        Self::ALL[(self.index() as usize + 6) % 7]
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}
