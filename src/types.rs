//! Reconciliation data model
//!
//! Both sources are reduced to the same shape: for every person, the ordered
//! list of `(day, hours)` observations read from their row. Client files also
//! yield a [`LeaveRecord`] built from highlighted cells.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Hours reported for one day of the month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub day: u32,
    pub hours: f64,
}

impl Observation {
    pub fn new(day: u32, hours: f64) -> Self {
        Self { day, hours }
    }
}

/// Person name → observations, iterated in first-seen order
///
/// Insertion order matters: report rows follow the row order of the Hana
/// export, and each person's observations follow column order.
#[derive(Debug, Clone, Default)]
pub struct PersonSeries {
    order: Vec<String>,
    by_person: HashMap<String, Vec<Observation>>,
}

impl PersonSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observation to a person's series, registering the person on first sight
    pub fn push(&mut self, person: &str, observation: Observation) {
        match self.by_person.get_mut(person) {
            Some(series) => series.push(observation),
            None => {
                self.order.push(person.to_string());
                self.by_person
                    .insert(person.to_string(), vec![observation]);
            }
        }
    }

    pub fn get(&self, person: &str) -> Option<&[Observation]> {
        self.by_person.get(person).map(Vec::as_slice)
    }

    /// Iterate persons with their observations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Observation])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.by_person[name].as_slice()))
    }

    pub fn persons(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Days on which each person was highlighted as on leave
#[derive(Debug, Clone, Default)]
pub struct LeaveRecord {
    days: HashMap<String, HashSet<u32>>,
}

impl LeaveRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, person: &str, day: u32) {
        self.days.entry(person.to_string()).or_default().insert(day);
    }

    pub fn is_on_leave(&self, person: &str, day: u32) -> bool {
        self.days
            .get(person)
            .is_some_and(|days| days.contains(&day))
    }

    /// Number of leave days recorded for a person
    pub fn days_for(&self, person: &str) -> usize {
        self.days.get(person).map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveFlag {
    Yes,
    No,
}

impl LeaveFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveFlag::Yes => "Yes",
            LeaveFlag::No => "No",
        }
    }
}

impl From<bool> for LeaveFlag {
    fn from(on_leave: bool) -> Self {
        if on_leave {
            LeaveFlag::Yes
        } else {
            LeaveFlag::No
        }
    }
}

impl fmt::Display for LeaveFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flagged day in the discrepancy report
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationRow {
    pub person: String,
    pub day: u32,
    pub hana_hours: f64,
    pub client_hours: f64,
    pub leave: LeaveFlag,
}
