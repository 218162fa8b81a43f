//! Weekly call-status grid
//!
//! Buckets already-fetched call events into a Monday-first week and answers
//! "what happened with this student on this day" lookups.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{CallEvent, CallStatus};
use super::week::{in_week, week_dates};

/// Lookup key for a (student, day) cell: `<studentId>-YYYY-MM-DD`
pub fn grid_key(student_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", student_id, date.format("%Y-%m-%d"))
}

/// Status counts over the whole grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSummary {
    pub done: usize,
    pub did_not_pick: usize,
    pub scheduled: usize,
    pub nothing: usize,
}

impl GridSummary {
    pub fn get(&self, status: CallStatus) -> usize {
        match status {
            CallStatus::Done => self.done,
            CallStatus::DidNotPick => self.did_not_pick,
            CallStatus::Scheduled => self.scheduled,
            CallStatus::Nothing => self.nothing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CallGrid {
    days: [NaiveDate; 7],
    students: Vec<String>,
    cells: HashMap<String, CallStatus>,
}

impl CallGrid {
    /// Build the grid for the week containing `week`.
    ///
    /// Events outside the week are ignored. When a (student, day) has several
    /// events the most specific status wins.
    pub fn build<'a, I>(week: NaiveDate, events: I) -> Self
    where
        I: IntoIterator<Item = &'a CallEvent>,
    {
        let days = week_dates(week);
        let monday = days[0];
        let mut students: Vec<String> = Vec::new();
        let mut cells: HashMap<String, CallStatus> = HashMap::new();

        for event in events {
            if !in_week(monday, event.date) {
                continue;
            }

            if !students.iter().any(|s| s == &event.student_id) {
                students.push(event.student_id.clone());
            }

            if event.status == CallStatus::Nothing {
                continue;
            }

            let key = grid_key(&event.student_id, event.date);
            let cell = cells.entry(key).or_insert(CallStatus::Nothing);
            if event.status.specificity() > cell.specificity() {
                *cell = event.status;
            }
        }

        Self { days, students, cells }
    }

    /// Make sure these students get a row even without events this week.
    /// Existing row order is kept; new ids are appended in the given order.
    pub fn with_students<S: AsRef<str>>(mut self, student_ids: &[S]) -> Self {
        for id in student_ids {
            let id = id.as_ref();
            if !self.students.iter().any(|s| s == id) {
                self.students.push(id.to_string());
            }
        }
        self
    }

    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.days
    }

    pub fn week_start(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Status for a student on a day; `Nothing` when nothing is known
    pub fn status(&self, student_id: &str, date: NaiveDate) -> CallStatus {
        self.lookup(&grid_key(student_id, date))
    }

    /// Status by precomputed key; `Nothing` when absent
    pub fn lookup(&self, key: &str) -> CallStatus {
        self.cells.get(key).copied().unwrap_or_default()
    }

    /// Monday-to-Sunday statuses for one student
    pub fn row(&self, student_id: &str) -> [CallStatus; 7] {
        std::array::from_fn(|i| self.status(student_id, self.days[i]))
    }

    pub fn summary(&self) -> GridSummary {
        let mut summary = GridSummary::default();
        for student in &self.students {
            for status in self.row(student) {
                match status {
                    CallStatus::Done => summary.done += 1,
                    CallStatus::DidNotPick => summary.did_not_pick += 1,
                    CallStatus::Scheduled => summary.scheduled += 1,
                    CallStatus::Nothing => summary.nothing += 1,
                }
            }
        }
        summary
    }
}
