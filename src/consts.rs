/// Year whose first day is day offset 0
pub const EPOCH_YEAR: i32 = 2001;

/// Leap rule: a year is leap when `(LEAP_MULTIPLIER * year + LEAP_OFFSET) mod LEAP_MODULUS < LEAP_THRESHOLD`
pub const LEAP_MULTIPLIER: i64 = 52;
/// Additive term of the leap congruence
pub const LEAP_OFFSET: i64 = 146;
/// Cycle length of the leap congruence, in years
pub const LEAP_MODULUS: i64 = 293;
/// Remainders below this value mark a leap year
pub const LEAP_THRESHOLD: i64 = 52;

/// First regular month
pub const JANUARY: u8 = 1;
/// Last regular month
pub const DECEMBER: u8 = 12;
/// Month number of the leap week, only present in leap years
pub const LEAP_WEEK: u8 = 13;
/// Maximum valid month (the leap week)
pub const MAX_MONTH: u8 = LEAP_WEEK;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// Index 13 holds the leap week length; it only applies in leap years.
pub const DAYS_IN_MONTH: [u8; 14] = [
    0,  // index 0 unused (months are 1-indexed)
    28, // January
    35, // February
    28, // March
    28, // April
    35, // May
    28, // June
    28, // July
    35, // August
    28, // September
    28, // October
    35, // November
    28, // December
    7,  // Leap week
];

/// Days in a year without a leap week (52 weeks)
pub const DAYS_IN_COMMON_YEAR: u16 = 364;
/// Days in a year with a leap week (53 weeks)
pub const DAYS_IN_LEAP_YEAR: u16 = 371;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Label rendered in place of the month number for the leap week
pub const LEAP_WEEK_LABEL: &str = "LeapWeek";
/// Suffix appended to years before year 1
pub const BCE_SUFFIX: &str = " BCE";
