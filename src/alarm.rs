//! Alarm data model
//!
//! Alarms live in memory only. The one thing handed to the OS is a
//! single-fire time-of-day trigger; repeat days are validated and stored
//! but nothing schedules from them.

use crate::error::AlarmError;
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Days are indexed 0 (Sunday) through 6 (Saturday)
pub const WEEKDAY_COUNT: u8 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub id: Uuid,
    pub time: NaiveTime,
    pub is_enabled: bool,
    pub label: String,
    repeat_days: BTreeSet<u8>,
}

impl Alarm {
    pub fn new(time: NaiveTime, label: impl Into<String>) -> Self {
        Alarm {
            id: Uuid::new_v4(),
            time,
            is_enabled: true,
            label: label.into(),
            repeat_days: BTreeSet::new(),
        }
    }

    /// Replace the repeat days; every index must be unique and in `0..=6`
    pub fn with_repeat_days(mut self, days: &[u8]) -> Result<Self, AlarmError> {
        let mut set = BTreeSet::new();
        for &day in days {
            if day >= WEEKDAY_COUNT {
                return Err(AlarmError::WeekdayOutOfRange(day));
            }
            if !set.insert(day) {
                return Err(AlarmError::DuplicateWeekday(day));
            }
        }
        self.repeat_days = set;
        Ok(self)
    }

    pub fn repeat_days(&self) -> &BTreeSet<u8> {
        &self.repeat_days
    }

    pub fn toggle(&mut self) {
        self.is_enabled = !self.is_enabled;
    }

    /// "07:30"
    pub fn display_time(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// The notification trigger registered for this alarm
    pub fn trigger(&self) -> TimeOfDayTrigger {
        TimeOfDayTrigger {
            hour: self.time.hour(),
            minute: self.time.minute(),
            repeats: false,
        }
    }
}

/// Fires at the next wall-clock hour:minute, once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDayTrigger {
    pub hour: u32,
    pub minute: u32,
    pub repeats: bool,
}

impl TimeOfDayTrigger {
    /// Next instant strictly after `now` matching hour:minute (local, naive)
    pub fn next_fire_after(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let at = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;
        let today = now.date().and_time(at);
        if today > now {
            Some(today)
        } else {
            today.checked_add_signed(Duration::days(1))
        }
    }
}
