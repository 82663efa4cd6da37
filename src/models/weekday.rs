use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Weekday index used on the wire: 0 = Sunday ... 6 = Saturday.
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Set of weekdays a booking should land on. An empty set means no constraint.
///
/// Serialized as a sorted list of indices (`[3, 5]` for Wednesday and Friday).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PreferredWeekdays(u8);

impl PreferredWeekdays {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Self(0b0111_1111)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | Self::bit(day))
    }

    /// Adds `day` when absent, removes it when present.
    pub fn toggle(self, day: Weekday) -> Self {
        Self(self.0 ^ Self::bit(day))
    }

    /// Days in index order, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let days = *self;
        (0..7u8)
            .filter_map(weekday_from_index)
            .filter(move |day| days.contains(*day))
    }

    fn bit(day: Weekday) -> u8 {
        1 << weekday_index(day)
    }
}

impl FromIterator<Weekday> for PreferredWeekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl TryFrom<Vec<u8>> for PreferredWeekdays {
    type Error = String;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        indices
            .into_iter()
            .map(|index| {
                weekday_from_index(index)
                    .ok_or_else(|| format!("weekday index out of range 0-6: {}", index))
            })
            .collect()
    }
}

impl From<PreferredWeekdays> for Vec<u8> {
    fn from(days: PreferredWeekdays) -> Self {
        days.iter().map(weekday_index).collect()
    }
}
