use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};

use crate::validation::parse_date;

/// A single bound on `record_date`. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    OnOrAfter(NaiveDate),
    OnOrBefore(NaiveDate),
}

impl DatePredicate {
    fn operator(&self) -> &'static str {
        match self {
            DatePredicate::OnOrAfter(_) => ">=",
            DatePredicate::OnOrBefore(_) => "<=",
        }
    }

    fn date(&self) -> NaiveDate {
        match self {
            DatePredicate::OnOrAfter(date) | DatePredicate::OnOrBefore(date) => *date,
        }
    }

    #[cfg(test)]
    pub fn matches(&self, record_date: NaiveDate) -> bool {
        match self {
            DatePredicate::OnOrAfter(start) => record_date >= *start,
            DatePredicate::OnOrBefore(end) => record_date <= *end,
        }
    }
}

/// Optional inclusive date range applied to listings and exports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    predicates: Vec<DatePredicate>,
}

impl DateRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting(mut self, start: NaiveDate) -> Self {
        self.predicates.push(DatePredicate::OnOrAfter(start));
        self
    }

    pub fn ending(mut self, end: NaiveDate) -> Self {
        self.predicates.push(DatePredicate::OnOrBefore(end));
        self
    }

    /// Builds a range from raw query parameters. Empty strings count as
    /// absent; anything else must be a `YYYY-MM-DD` date.
    pub fn from_params(
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, Vec<String>> {
        let mut range = DateRange::new();
        let mut errors = Vec::new();

        match start_date.map(str::trim).filter(|s| !s.is_empty()) {
            None => {}
            Some(raw) => match parse_date(raw) {
                Some(start) => range = range.starting(start),
                None => errors.push("start_date must be a valid date (YYYY-MM-DD)".to_string()),
            },
        }
        match end_date.map(str::trim).filter(|s| !s.is_empty()) {
            None => {}
            Some(raw) => match parse_date(raw) {
                Some(end) => range = range.ending(end),
                None => errors.push("end_date must be a valid date (YYYY-MM-DD)".to_string()),
            },
        }

        if errors.is_empty() {
            Ok(range)
        } else {
            Err(errors)
        }
    }

    pub fn predicates(&self) -> &[DatePredicate] {
        &self.predicates
    }

    #[cfg(test)]
    pub fn contains(&self, record_date: NaiveDate) -> bool {
        self.predicates.iter().all(|p| p.matches(record_date))
    }

    /// Appends the WHERE clause for this range. Dates are always bound as
    /// parameters.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates().iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push("record_date ")
                .push(predicate.operator())
                .push(" ")
                .push_bind(predicate.date());
        }
    }
}
