//! Canonical weekdays and their cyclic ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days a weekly schedule must cover.
pub const DAYS_IN_WEEK: usize = 7;

/// Day of the week used as the primary key of every schedule.
///
/// The derived ordering is the canonical Monday → Sunday sequence, so a
/// `BTreeMap<Weekday, _>` iterates in display order. Serialized names are the
/// lowercase English day names (`"monday"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in canonical order.
    pub const ALL: [Weekday; DAYS_IN_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the canonical sequence (Monday = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weekday at `index`, wrapping modulo seven.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_IN_WEEK]
    }

    /// The following day. Sunday wraps to Monday.
    pub const fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The preceding day. Monday wraps to Sunday.
    pub const fn pred(self) -> Self {
        Self::from_index(self.index() + DAYS_IN_WEEK - 1)
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the seven lowercase day names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a weekday name")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Parsing is case-sensitive: only the canonical lowercase names match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, day) in Weekday::ALL.into_iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), day);
        }
    }

    #[test]
    fn test_succ_wraps_sunday_to_monday() {
        assert_eq!(Weekday::Friday.succ(), Weekday::Saturday);
        assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
    }

    #[test]
    fn test_pred_wraps_monday_to_sunday() {
        assert_eq!(Weekday::Tuesday.pred(), Weekday::Monday);
        assert_eq!(Weekday::Monday.pred(), Weekday::Sunday);
    }

    #[test]
    fn test_succ_and_pred_are_inverse() {
        for day in Weekday::ALL {
            assert_eq!(day.succ().pred(), day);
            assert_eq!(day.pred().succ(), day);
        }
    }

    #[test]
    fn test_ordering_is_monday_first() {
        assert!(Weekday::Monday < Weekday::Tuesday);
        assert!(Weekday::Saturday < Weekday::Sunday);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!("wednesday".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert!("Wednesday".parse::<Weekday>().is_err());
        assert!("WEDNESDAY".parse::<Weekday>().is_err());
        assert!("wed".parse::<Weekday>().is_err());
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, "\"thursday\"");
        let day: Weekday = serde_json::from_str("\"sunday\"").unwrap();
        assert_eq!(day, Weekday::Sunday);
    }
}
