//! Filter/sort engine shared by the report, roster and swing views.
//!
//! Evaluation is a pure function of `(records, criteria)`: records are
//! filtered by the free-text query and every categorical selection, then
//! stably sorted by the active key. The returned vector borrows the input
//! records, so callers see the same values they passed in.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{Category, ParseCategoryError};

/// Filter value that is either unrestricted or pinned to one enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Category> Selection<T> {
    pub fn admits(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => *wanted == value,
        }
    }
}

impl<T: Category> FromStr for Selection<T> {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Selection::All);
        }
        T::parse(s).map(Selection::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key {value:?}, expected one of: {expected}")]
pub struct ParseSortKeyError {
    pub value: String,
    pub expected: &'static str,
}

/// Text fields that the free-text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Conjunction of categorical selections for one record kind.
pub trait FilterSet<R> {
    fn admits(&self, record: &R) -> bool;
}

/// Single active ordering for one record kind.
pub trait SortKey<R> {
    fn compare(&self, a: &R, b: &R) -> Ordering;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria<F, S> {
    pub query: String,
    pub filters: F,
    pub sort: S,
}

impl<F, S> Criteria<F, S> {
    pub fn new(query: impl Into<String>, filters: F, sort: S) -> Self {
        Self {
            query: query.into(),
            filters,
            sort,
        }
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Searchable,
        F: FilterSet<R>,
    {
        matches_query(record, &self.query.to_lowercase()) && self.filters.admits(record)
    }
}

fn matches_query<R: Searchable>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

pub fn apply<'a, R, F, S>(records: &'a [R], criteria: &Criteria<F, S>) -> Vec<&'a R>
where
    R: Searchable,
    F: FilterSet<R>,
    S: SortKey<R>,
{
    let mut selected: Vec<&R> = records
        .iter()
        .filter(|record| criteria.matches(*record))
        .collect();

    // `sort_by` is stable, so equal keys keep insertion order.
    selected.sort_by(|a, b| criteria.sort.compare(*a, *b));
    selected
}
