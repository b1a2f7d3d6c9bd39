//! UTC offset to named timezone table
//!
//! A parsed datetime only knows its fixed offset. When that offset matches
//! an entry here the value is re-localized into the named zone, so that e.g.
//! `-08:00` becomes `US/Pacific`.

use chrono::{DateTime, FixedOffset, LocalResult, TimeZone};
use chrono_tz::Tz;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

use dataprop_types::DateTimeValue;

static DEFAULT_TABLE: Lazy<TimezoneTable> = Lazy::new(|| {
    TimezoneTable::empty()
        .with_zone(-36000, chrono_tz::America::Adak)
        .with_zone(-32400, chrono_tz::US::Alaska)
        .with_zone(-28800, chrono_tz::US::Pacific)
        .with_zone(-25200, chrono_tz::US::Mountain)
        .with_zone(-21600, chrono_tz::US::Central)
        .with_zone(-18000, chrono_tz::US::Eastern)
        .with_zone(-14400, chrono_tz::Canada::Atlantic)
        .with_zone(-12600, chrono_tz::America::St_Johns)
        .with_zone(-10800, chrono_tz::America::Miquelon)
        .with_zone(7200, chrono_tz::Africa::Tripoli)
});

/// Mapping from UTC offset (seconds east of UTC) to a named zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneTable {
    zones: IndexMap<i32, Tz>,
}

impl Default for TimezoneTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl TimezoneTable {
    /// Create a table with no entries; nothing gets re-localized
    pub fn empty() -> Self {
        Self {
            zones: IndexMap::new(),
        }
    }

    /// Add or replace an entry, builder style
    pub fn with_zone(mut self, offset_seconds: i32, zone: Tz) -> Self {
        self.insert(offset_seconds, zone);
        self
    }

    /// Add or replace an entry, returning the previous zone for the offset
    pub fn insert(&mut self, offset_seconds: i32, zone: Tz) -> Option<Tz> {
        self.zones.insert(offset_seconds, zone)
    }

    /// Remove an entry
    pub fn remove(&mut self, offset_seconds: i32) -> Option<Tz> {
        self.zones.shift_remove(&offset_seconds)
    }

    /// Zone registered for an offset
    pub fn get(&self, offset_seconds: i32) -> Option<Tz> {
        self.zones.get(&offset_seconds).copied()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (i32, Tz)> + '_ {
        self.zones.iter().map(|(offset, zone)| (*offset, *zone))
    }

    /// Re-localize a fixed-offset datetime into the zone registered for its
    /// offset, keeping the wall-clock time.
    ///
    /// Returns the input unchanged when the offset is unmapped or the wall
    /// clock does not exist in the zone. Ambiguous wall clocks resolve to
    /// standard time (the later instant).
    pub fn localize(&self, dt: DateTime<FixedOffset>) -> DateTimeValue {
        let offset = dt.offset().local_minus_utc();
        let Some(zone) = self.get(offset) else {
            return DateTimeValue::Fixed(dt);
        };

        match zone.from_local_datetime(&dt.naive_local()) {
            LocalResult::Single(zoned) => DateTimeValue::Zoned(zoned),
            LocalResult::Ambiguous(_, standard) => DateTimeValue::Zoned(standard),
            LocalResult::None => {
                log::trace!("{} does not exist in {}, keeping fixed offset", dt, zone.name());
                DateTimeValue::Fixed(dt)
            }
        }
    }
}
