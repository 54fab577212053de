// src/analyze.rs
//
// Query layer over one segmented dataset. Regions and continents share every
// code path; the bound dataset decides which kind you are asking about.
//
// Growth rates are computed on demand against the chronologically nearest
// earlier sample for the same area (the page samples decades, not years) and
// cached on the record. The cache is monotone: unset until first computed,
// recomputation overwrites with the same value.

use std::cmp::Ordering;

use crate::data::{AreaKind, Dataset, Record};
use crate::error::QueryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    FirstGreater,
    SecondGreater,
    Equal,
}

fn verdict_of<T: PartialOrd>(first: &T, second: &T) -> Verdict {
    if first > second {
        Verdict::FirstGreater
    } else if second > first {
        Verdict::SecondGreater
    } else {
        Verdict::Equal
    }
}

/// Result of a pairwise comparison; `T` is the compared measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison<T> {
    pub first: T,
    pub second: T,
    pub verdict: Verdict,
}

pub struct AreaAnalyzer<'a> {
    data: &'a mut Dataset,
}

impl<'a> AreaAnalyzer<'a> {
    pub fn new(data: &'a mut Dataset) -> Self {
        Self { data }
    }

    pub fn kind(&self) -> AreaKind {
        self.data.kind
    }

    fn not_found(&self, area: &str, year: i32) -> QueryError {
        QueryError::NotFound { area: s!(area), year }
    }

    /// Exact lookup on (area, year).
    pub fn population(&self, area: &str, year: i32) -> Result<u64, QueryError> {
        self.data
            .find(area, year)
            .map(|r| r.population)
            .ok_or_else(|| self.not_found(area, year))
    }

    /// Compare two areas in one year. Partial availability is one combined
    /// miss; no half-comparison is produced.
    pub fn compare_population(
        &self,
        first_area: &str,
        second_area: &str,
        year: i32,
    ) -> Result<Comparison<u64>, QueryError> {
        match (self.data.find(first_area, year), self.data.find(second_area, year)) {
            (Some(a), Some(b)) => Ok(Comparison {
                first: a.population,
                second: b.population,
                verdict: verdict_of(&a.population, &b.population),
            }),
            (None, _) => Err(self.not_found(first_area, year)),
            (_, None) => Err(self.not_found(second_area, year)),
        }
    }

    /// All records for `year`, descending by population. Stable, so equal
    /// populations keep dataset order. Unknown years yield an empty list,
    /// not an error.
    pub fn sort_by_population(&self, year: i32) -> Vec<Record> {
        let mut out: Vec<Record> = self
            .data
            .records
            .iter()
            .filter(|r| r.year == year)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.population.cmp(&a.population));
        out
    }

    /// Growth against the nearest earlier sampled year for the same area,
    /// in percent. Caches the rate on the matching record.
    pub fn growth_rate(&mut self, area: &str, year: i32) -> Result<f64, QueryError> {
        let current = self.population(area, year)?;

        let previous = self
            .data
            .records
            .iter()
            .filter(|r| r.area == area && r.year < year)
            .max_by_key(|r| r.year)
            .map(|r| r.population)
            .ok_or_else(|| QueryError::InsufficientData { area: s!(area), year })?;

        let rate = (current as f64 - previous as f64) / previous as f64 * 100.0;

        if let Some(rec) = self.data.find_mut(area, year) {
            rec.growth_rate = Some(rate);
        }
        Ok(rate)
    }

    /// Compose two growth computations. Fails whole if either does; the
    /// cache side effect of a successful half still stands (it is monotone).
    pub fn compare_growth_rate(
        &mut self,
        first_area: &str,
        second_area: &str,
        year: i32,
    ) -> Result<Comparison<f64>, QueryError> {
        let first = self.growth_rate(first_area, year)?;
        let second = self.growth_rate(second_area, year)?;
        Ok(Comparison { first, second, verdict: verdict_of(&first, &second) })
    }

    /// All records for `year`, descending by growth rate. Forces the lazy
    /// rate for every distinct area first; areas where no rate exists (no
    /// earlier sample) stay unset and sort to the end, in dataset order.
    pub fn sort_by_growth_rate(&mut self, year: i32) -> Vec<Record> {
        for area in self.data.area_names() {
            // Misses are expected here: first recorded year has no growth.
            let _ = self.growth_rate(&area, year);
        }

        let mut out: Vec<Record> = self
            .data
            .records
            .iter()
            .filter(|r| r.year == year)
            .cloned()
            .collect();
        out.sort_by(|a, b| match (a.growth_rate, b.growth_rate) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        out
    }
}
