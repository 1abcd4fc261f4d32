//! # Slot time normalization
//!
//! An interviewer declares availability as a day plus an hour range; the
//! booking backend stores one record per hour. This module turns the former
//! into the latter and reduces any timestamp to the canonical on-the-hour
//! form the backend keys slots by.
//!
//! All functions are pure. The only ambient input, the current time used to
//! give a bare date a time-of-day, comes from an injected [`Clock`].

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::clock::Clock;
use crate::errors::{ScheduleError, ScheduleResult};

/// `strftime` pattern of a canonical slot.
pub const SLOT_FORMAT: &str = "%Y-%m-%dT%H:00:00Z";

/// Offset-less layouts accepted when parsing instants and slots.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// One bookable hour, identified by its start.
///
/// Minutes, seconds and sub-seconds are always zero. Rendered and
/// serialized as `YYYY-MM-DDTHH:00:00Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(DateTime<Utc>);

impl Slot {
    pub fn start(&self) -> DateTime<Utc> {
        self.0
    }

    /// Start of the following slot.
    pub fn end(&self) -> DateTime<Utc> {
        shift_by_hours(&self.0, 1)
    }

    /// Reads `s` as a UTC instant and truncates it to the hour.
    ///
    /// Strings with an explicit offset are converted to UTC first; strings
    /// without one (as the backend returns them) are taken to be UTC already.
    pub fn parse(s: &str) -> ScheduleResult<Self> {
        let instant = parse_in_zone(s, &Utc)?
            .ok_or_else(|| ScheduleError::TimeParse(format!("'{s}' has no time of day")))?;
        Ok(canonicalize(&instant))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

impl FromStr for Slot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::parse(s)
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Slot::parse(&raw).map_err(de::Error::custom)
    }
}

/// Ordered hourly slots, one hour apart, without gaps or duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotRange(Vec<Slot>);

impl SlotRange {
    pub fn into_vec(self) -> Vec<Slot> {
        self.0
    }
}

impl Deref for SlotRange {
    type Target = [Slot];

    fn deref(&self) -> &[Slot] {
        &self.0
    }
}

impl IntoIterator for SlotRange {
    type Item = Slot;
    type IntoIter = std::vec::IntoIter<Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SlotRange {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Slot> for SlotRange {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        SlotRange(iter.into_iter().collect())
    }
}

/// The day an availability range is declared on.
///
/// Carries a full local date-time: only the date matters to callers, but the
/// time-of-day is kept and survives [`combine_day_and_hour`] (minutes and
/// seconds are only dropped by [`canonicalize`]).
#[derive(Debug, Clone)]
pub struct CalendarDay<Tz: TimeZone> {
    at: DateTime<Tz>,
}

impl<Tz: TimeZone> CalendarDay<Tz> {
    pub fn new(at: DateTime<Tz>) -> Self {
        Self { at }
    }

    /// `date` at the clock's current time-of-day in `zone`.
    pub fn on(date: NaiveDate, zone: &Tz, clock: &impl Clock) -> Self {
        let time_of_day = clock.now().with_timezone(zone).time();
        Self::new(resolve_local(zone, date.and_time(time_of_day)))
    }

    pub fn date(&self) -> NaiveDate {
        self.at.date_naive()
    }

    pub fn as_datetime(&self) -> &DateTime<Tz> {
        &self.at
    }
}

impl<Tz: TimeZone> PartialEq for CalendarDay<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

/// Reduces `instant` to its canonical slot.
///
/// The wall-clock reading of `instant` in its own zone is floored to the hour
/// and labelled UTC, so 09:47 local becomes `...T09:00:00Z` whatever the zone.
/// Sub-hour fields are discarded, never rounded.
pub fn canonicalize<Tz: TimeZone>(instant: &DateTime<Tz>) -> Slot {
    Slot(floor_to_hour(instant.naive_local()).and_utc())
}

/// `day` with its hour replaced by the hour of `hour_source`.
///
/// Only the hour moves across: the date of `hour_source` and the original
/// hour of `day` are ignored, and `day`'s minutes and seconds are left as
/// they were. A local time that falls in a DST gap is pushed forward.
pub fn combine_day_and_hour<Tz: TimeZone, Tz2: TimeZone>(
    day: &DateTime<Tz>,
    hour_source: &DateTime<Tz2>,
) -> DateTime<Tz> {
    resolve_local(&day.timezone(), with_hour(day.naive_local(), hour_source.hour()))
}

/// Every slot starting in `[start_hour, end_hour)` on `day`.
///
/// The caller is expected to have checked that `start_hour` precedes
/// `end_hour` and that both are on the hour. Out-of-order input yields an
/// empty range; a fractional hour count is truncated.
///
/// Hours are stepped on the wall clock of `day`, so a DST change inside the
/// range neither drops nor repeats a slot.
pub fn expand_range<Tz: TimeZone, Tz2: TimeZone>(
    day: &DateTime<Tz>,
    start_hour: &DateTime<Tz2>,
    end_hour: &DateTime<Tz2>,
) -> SlotRange {
    let local = day.naive_local();
    let start = with_hour(local, start_hour.hour());
    let end = with_hour(local, end_hour.hour());
    let count = (end - start).num_hours();

    (0..count.max(0))
        .map(|i| Slot(floor_to_hour(start + Duration::hours(i)).and_utc()))
        .collect()
}

/// `instant` moved by a signed number of hours.
///
/// # Panics
///
/// If the result falls outside the range `chrono` can represent.
pub fn shift_by_hours<Tz: TimeZone>(instant: &DateTime<Tz>, hours: i64) -> DateTime<Tz> {
    instant.clone() + Duration::hours(hours)
}

/// ISO-8601 in UTC with milliseconds, e.g. `2024-03-11T10:00:00.000Z`.
pub fn to_json_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Slot arithmetic bound to a zone and a clock.
///
/// Holds the two ambient inputs the free functions would otherwise need, and
/// parses user-entered days and hours.
#[derive(Debug, Clone)]
pub struct SlotTimeNormalizer<Tz: TimeZone, C: Clock> {
    zone: Tz,
    clock: C,
}

impl<Tz: TimeZone, C: Clock> SlotTimeNormalizer<Tz, C> {
    pub fn new(zone: Tz, clock: C) -> Self {
        Self { zone, clock }
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.zone)
    }

    pub fn today(&self) -> CalendarDay<Tz> {
        CalendarDay::new(self.now())
    }

    pub fn day(&self, date: NaiveDate) -> CalendarDay<Tz> {
        CalendarDay::on(date, &self.zone, &self.clock)
    }

    /// `hour:minute` on today's date, or on a neighbouring date when today
    /// skips that wall time.
    pub fn hour(&self, hour: u32, minute: u32) -> ScheduleResult<DateTime<Tz>> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ScheduleError::TimeParse(format!("{hour:02}:{minute:02} is not a time of day")))?;
        Ok(wall_time_near(&self.zone, self.now().date_naive(), time))
    }

    /// Parses `YYYY-MM-DD`.
    pub fn parse_day(&self, s: &str) -> ScheduleResult<CalendarDay<Tz>> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| ScheduleError::TimeParse(format!("'{s}': {e}")))?;
        Ok(self.day(date))
    }

    /// Parses `HH:MM` or `HH:MM:SS`.
    pub fn parse_hour(&self, s: &str) -> ScheduleResult<DateTime<Tz>> {
        let s = s.trim();
        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map_err(|e| ScheduleError::TimeParse(format!("'{s}': {e}")))?;
        self.hour(time.hour(), time.minute())
    }

    /// Parses a timestamp-like string into this normalizer's zone.
    ///
    /// Explicit offsets are honoured, offset-less date-times are read as
    /// local, and a bare date takes the clock's time-of-day.
    pub fn parse_instant(&self, s: &str) -> ScheduleResult<DateTime<Tz>> {
        match parse_in_zone(s, &self.zone)? {
            Some(instant) => Ok(instant),
            None => Ok(self.parse_day(s)?.at),
        }
    }

    pub fn canonicalize(&self, instant: &DateTime<Tz>) -> Slot {
        canonicalize(instant)
    }

    pub fn combine_day_and_hour(&self, day: &CalendarDay<Tz>, hour_source: &DateTime<Tz>) -> DateTime<Tz> {
        combine_day_and_hour(&day.at, hour_source)
    }

    pub fn expand_range(
        &self,
        day: &CalendarDay<Tz>,
        start_hour: &DateTime<Tz>,
        end_hour: &DateTime<Tz>,
    ) -> SlotRange {
        expand_range(&day.at, start_hour, end_hour)
    }

    pub fn shift_by_hours(&self, instant: &DateTime<Tz>, hours: i64) -> DateTime<Tz> {
        shift_by_hours(instant, hours)
    }
}

/// Parses an instant with or without offset. `Ok(None)` means `s` is a
/// bare date and needs a time-of-day from elsewhere.
fn parse_in_zone<Tz: TimeZone>(s: &str, zone: &Tz) -> ScheduleResult<Option<DateTime<Tz>>> {
    let s = s.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(instant.with_timezone(zone)));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Some(resolve_local(zone, naive)));
        }
    }
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return Ok(None);
    }
    Err(ScheduleError::TimeParse(format!("'{s}' is not a recognised date or time")))
}

fn with_hour(naive: NaiveDateTime, hour: u32) -> NaiveDateTime {
    naive + Duration::hours(i64::from(hour) - i64::from(naive.hour()))
}

/// An instant showing `time` on the wall clock, on `date` if it exists there.
/// Transitions are never on consecutive days, so one day either side is
/// enough to find a date where it does.
fn wall_time_near<Tz: TimeZone>(zone: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    for offset in [0, -1, 1] {
        let naive = (date + Duration::days(offset)).and_time(time);
        if let Some(instant) = zone.from_local_datetime(&naive).earliest() {
            return instant;
        }
    }
    resolve_local(zone, date.and_time(time))
}

fn floor_to_hour(naive: NaiveDateTime) -> NaiveDateTime {
    naive
        - Duration::seconds(i64::from(naive.minute() * 60 + naive.second()))
        - Duration::nanoseconds(i64::from(naive.nanosecond()))
}

/// Maps a wall-clock reading onto `zone`. Ambiguous readings take the
/// earlier instant; readings inside a DST gap move forward hour by hour.
fn resolve_local<Tz: TimeZone>(zone: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = naive;
    for _ in 0..24 {
        match zone.from_local_datetime(&candidate) {
            LocalResult::Single(instant) => return instant,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => candidate += Duration::hours(1),
        }
    }
    zone.from_utc_datetime(&naive)
}
