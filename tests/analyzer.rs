// tests/analyzer.rs
//
// Query-layer behavior over hand-built datasets.

use pop_scrape::analyze::{AreaAnalyzer, Verdict};
use pop_scrape::data::{AreaKind, Dataset, Record};
use pop_scrape::error::QueryError;

fn dataset(kind: AreaKind, rows: &[(&str, i32, u64)]) -> Dataset {
    let mut ds = Dataset::new(kind);
    let mut seen: Vec<&str> = Vec::new();
    for &(area, year, population) in rows {
        if !seen.contains(&area) {
            seen.push(area);
        }
        let group_nr = seen.iter().position(|a| *a == area).unwrap() as u32 + 1;
        ds.records.push(Record {
            year,
            population,
            group_nr,
            area: area.to_string(),
            growth_rate: None,
        });
    }
    ds
}

#[test]
fn population_exact_match() {
    let mut ds = dataset(AreaKind::Region, &[("Eastern Africa", 1950, 100)]);
    let az = AreaAnalyzer::new(&mut ds);
    assert_eq!(az.population("Eastern Africa", 1950).unwrap(), 100);
}

#[test]
fn unknown_area_is_not_found() {
    let mut ds = dataset(AreaKind::Region, &[("Eastern Africa", 1950, 100)]);
    let az = AreaAnalyzer::new(&mut ds);
    match az.population("Atlantis", 2000).unwrap_err() {
        QueryError::NotFound { area, year } => {
            assert_eq!(area, "Atlantis");
            assert_eq!(year, 2000);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn duplicate_rows_first_match_wins() {
    // uniqueness invariant violated on purpose; lookup must stay deterministic
    let mut ds = dataset(AreaKind::Region, &[("A", 2000, 1), ("A", 2000, 2)]);
    let az = AreaAnalyzer::new(&mut ds);
    assert_eq!(az.population("A", 2000).unwrap(), 1);
}

#[test]
fn compare_equal_populations() {
    let mut ds = dataset(AreaKind::Region, &[("A", 2000, 500), ("B", 2000, 500)]);
    let az = AreaAnalyzer::new(&mut ds);
    let c = az.compare_population("A", "B", 2000).unwrap();
    assert_eq!(c.verdict, Verdict::Equal);
    assert_eq!((c.first, c.second), (500, 500));
}

#[test]
fn compare_orders_by_side() {
    let mut ds = dataset(AreaKind::Region, &[("A", 2000, 900), ("B", 2000, 500)]);
    let az = AreaAnalyzer::new(&mut ds);
    assert_eq!(az.compare_population("A", "B", 2000).unwrap().verdict, Verdict::FirstGreater);
    assert_eq!(az.compare_population("B", "A", 2000).unwrap().verdict, Verdict::SecondGreater);
}

#[test]
fn compare_with_one_side_missing_is_one_not_found() {
    let mut ds = dataset(AreaKind::Region, &[("A", 2000, 900)]);
    let az = AreaAnalyzer::new(&mut ds);
    match az.compare_population("A", "B", 2000).unwrap_err() {
        QueryError::NotFound { area, .. } => assert_eq!(area, "B"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn sort_by_population_descending_stable() {
    let mut ds = dataset(
        AreaKind::Region,
        &[("A", 2000, 300), ("B", 2000, 700), ("C", 2000, 300), ("D", 1990, 999)],
    );
    let az = AreaAnalyzer::new(&mut ds);

    let sorted = az.sort_by_population(2000);
    let order: Vec<&str> = sorted.iter().map(|r| r.area.as_str()).collect();
    // B first; A and C tie and keep dataset order
    assert_eq!(order, vec!["B", "A", "C"]);

    // deterministic on re-run
    let again = az.sort_by_population(2000);
    assert_eq!(sorted, again);

    // unknown year is an empty result, not an error
    assert!(az.sort_by_population(1800).is_empty());
}

#[test]
fn growth_rate_against_nearest_prior_year() {
    let mut ds = dataset(
        AreaKind::Region,
        &[("Eastern Africa", 1950, 100), ("Eastern Africa", 1960, 150)],
    );
    let mut az = AreaAnalyzer::new(&mut ds);
    let rate = az.growth_rate("Eastern Africa", 1960).unwrap();
    assert!((rate - 50.0).abs() < 1e-9);
}

#[test]
fn growth_rate_skips_gaps_to_the_nearest_sample() {
    let mut ds = dataset(
        AreaKind::Region,
        &[("A", 1950, 100), ("A", 1960, 200), ("A", 1980, 300)],
    );
    let mut az = AreaAnalyzer::new(&mut ds);
    // 1980 compares against 1960, not 1950 and not 1979
    let rate = az.growth_rate("A", 1980).unwrap();
    assert!((rate - 50.0).abs() < 1e-9);
}

#[test]
fn first_recorded_year_has_no_growth() {
    let mut ds = dataset(
        AreaKind::Region,
        &[("Eastern Africa", 1950, 100), ("Eastern Africa", 1960, 150)],
    );
    let mut az = AreaAnalyzer::new(&mut ds);
    match az.growth_rate("Eastern Africa", 1950).unwrap_err() {
        QueryError::InsufficientData { area, year } => {
            assert_eq!(area, "Eastern Africa");
            assert_eq!(year, 1950);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn growth_rate_unknown_area_is_not_found() {
    let mut ds = dataset(AreaKind::Region, &[("A", 1950, 100)]);
    let mut az = AreaAnalyzer::new(&mut ds);
    assert!(matches!(
        az.growth_rate("Atlantis", 1950).unwrap_err(),
        QueryError::NotFound { .. }
    ));
}

#[test]
fn growth_rate_is_idempotent_and_cached() {
    let mut ds = dataset(AreaKind::Region, &[("A", 1950, 100), ("A", 1960, 150)]);
    let before = ds.len();

    let mut az = AreaAnalyzer::new(&mut ds);
    let first = az.growth_rate("A", 1960).unwrap();
    let second = az.growth_rate("A", 1960).unwrap();
    assert_eq!(first, second);

    assert_eq!(ds.len(), before); // no records added or dropped
    assert_eq!(ds.find("A", 1960).unwrap().growth_rate, Some(first));
    assert_eq!(ds.find("A", 1950).unwrap().growth_rate, None);
}

#[test]
fn compare_growth_fails_whole_when_either_side_fails() {
    let mut ds = dataset(
        AreaKind::Region,
        &[("A", 1950, 100), ("A", 1960, 150), ("B", 1960, 150)],
    );
    let mut az = AreaAnalyzer::new(&mut ds);
    // B has no year before 1960
    assert!(matches!(
        az.compare_growth_rate("A", "B", 1960).unwrap_err(),
        QueryError::InsufficientData { .. }
    ));
}

#[test]
fn compare_growth_equal_rates() {
    let mut ds = dataset(
        AreaKind::Region,
        &[("A", 1950, 100), ("A", 1960, 150), ("B", 1950, 200), ("B", 1960, 300)],
    );
    let mut az = AreaAnalyzer::new(&mut ds);
    let c = az.compare_growth_rate("A", "B", 1960).unwrap();
    assert_eq!(c.verdict, Verdict::Equal);
}

#[test]
fn sort_by_growth_rate_forces_cache_and_sinks_unset_rates() {
    let mut ds = dataset(
        AreaKind::Region,
        &[
            ("A", 1950, 100),
            ("A", 1960, 110), // +10%
            ("B", 1960, 500), // no prior year: rate stays unset
            ("C", 1950, 100),
            ("C", 1960, 180), // +80%
        ],
    );
    let mut az = AreaAnalyzer::new(&mut ds);
    let sorted = az.sort_by_growth_rate(1960);

    let order: Vec<&str> = sorted.iter().map(|r| r.area.as_str()).collect();
    assert_eq!(order, vec!["C", "A", "B"]);
    assert!(sorted[0].growth_rate.is_some());
    assert!(sorted[2].growth_rate.is_none()); // uncomputable, placed last

    // the forced fill landed on the dataset records too
    assert!(ds.find("A", 1960).unwrap().growth_rate.is_some());
    assert!(ds.find("B", 1960).unwrap().growth_rate.is_none());
}
