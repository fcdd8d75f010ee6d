//! Filter index and conjunctive filtering.

use crate::models::{Priority, Record};
use indexmap::IndexSet;

pub const ALL_SERVICES: &str = "All services";
pub const ALL_PRIORITIES: &str = "All priorities";
pub const ALL_ASSIGNEES: &str = "All assignees";

/// One selectable entry. An empty `value` is the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub services: Vec<FilterOption>,
    pub priorities: Vec<FilterOption>,
    pub assignees: Vec<FilterOption>,
}

/// Build the filter controls from the current records.
///
/// Services and assignees are listed once each, in order of first
/// appearance, after the "all" sentinel. Unlike a plain set of distinct
/// values, blank services and assignees are left out: their empty value is
/// the sentinel's, so selecting one would mean "all". Priorities are the
/// fixed four codes.
pub fn derive_options(records: &[Record]) -> FilterOptions {
    let services: IndexSet<&str> = records
        .iter()
        .map(|r| r.service.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    let assignees: IndexSet<&str> = records
        .iter()
        .map(|r| r.assign_to.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    let mut priorities = vec![FilterOption::new("", ALL_PRIORITIES)];
    priorities.extend(Priority::ALL.iter().map(|p| FilterOption::new(p.code(), p.name())));

    FilterOptions {
        services: with_sentinel(ALL_SERVICES, services),
        priorities,
        assignees: with_sentinel(ALL_ASSIGNEES, assignees),
    }
}

fn with_sentinel(label: &str, values: IndexSet<&str>) -> Vec<FilterOption> {
    std::iter::once(FilterOption::new("", label))
        .chain(values.into_iter().map(|v| FilterOption::new(v, v)))
        .collect()
}

/// Current selection of the three filter controls. `None` (or an empty
/// string) means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub service: Option<String>,
    pub priority: Option<String>,
    pub assign_to: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        [&self.service, &self.priority, &self.assign_to]
            .iter()
            .all(|c| active(c).is_none())
    }

    /// Exact equality on every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        active(&self.service).is_none_or(|s| record.service == s)
            && active(&self.priority).is_none_or(|p| record.priority == p)
            && active(&self.assign_to).is_none_or(|a| record.assign_to == a)
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|v| !v.is_empty())
}
