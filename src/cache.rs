//! Bounded LRU cache of completed per-year calendars.
//!
//! Key is the civil year, value is the year's day records. Eviction is
//! LRU up to a fixed capacity. No `lru` crate appears anywhere in the
//! reference corpus this crate was built from, so this is a small
//! hand-rolled `HashMap` + `VecDeque` recency queue rather than a new
//! dependency (see `DESIGN.md`).

use std::collections::{HashMap, VecDeque};

use crate::calendar::CalendarDay;

/// Default capacity.
pub const DEFAULT_CAPACITY: usize = 500;

/// A bounded, least-recently-used cache keyed by civil year.
pub struct YearCache {
    capacity: usize,
    entries: HashMap<i32, Vec<CalendarDay>>,
    recency: VecDeque<i32>,
}

impl YearCache {
    /// Creates an empty cache holding at most `capacity` years. A capacity
    /// of `0` disables caching entirely (every lookup misses).
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: HashMap::new(), recency: VecDeque::new() }
    }

    /// Returns a cloned copy of the cached year, touching its recency if
    /// present.
    pub fn get(&mut self, year: i32) -> Option<Vec<CalendarDay>> {
        if !self.entries.contains_key(&year) {
            return None;
        }
        self.touch(year);
        self.entries.get(&year).cloned()
    }

    /// Inserts (or replaces) the calendar for `year`, evicting the least
    /// recently used entry if the cache is at capacity.
    pub fn put(&mut self, year: i32, days: Vec<CalendarDay>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(year, days).is_some() {
            self.touch(year);
            return;
        }
        self.recency.push_back(year);
        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.recency.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    fn touch(&mut self, year: i32) {
        if let Some(pos) = self.recency.iter().position(|&y| y == year) {
            self.recency.remove(pos);
        }
        self.recency.push_back(year);
    }

    /// Number of years currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days_for(year: i32) -> Vec<CalendarDay> {
        vec![CalendarDay {
            date: chrono::NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            chinese_month_code: 12,
            day_of_month: 1,
            month_label: "十二月",
            day_label: "初一",
            jieqi_label: None,
            holiday_label: None,
        }]
    }

    #[test]
    fn evicts_least_recently_used_entry() {
        let mut cache = YearCache::new(2);
        cache.put(2020, days_for(2020));
        cache.put(2021, days_for(2021));
        assert!(cache.get(2020).is_some());
        cache.put(2022, days_for(2022));
        assert!(cache.get(2021).is_none());
        assert!(cache.get(2020).is_some());
        assert!(cache.get(2022).is_some());
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let mut cache = YearCache::new(0);
        cache.put(2020, days_for(2020));
        assert!(cache.get(2020).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn replacing_an_entry_does_not_grow_len() {
        let mut cache = YearCache::new(5);
        cache.put(2020, days_for(2020));
        cache.put(2020, days_for(2020));
        assert_eq!(cache.len(), 1);
    }
}
