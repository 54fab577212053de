// src/segment.rs
//
// Assigns every sample to an area series by counting marker-year restarts,
// then splits the run into leaf regions and aggregate continents.
//
// The page lists each area as its own table, always starting at the marker
// year; after concatenation that restart is the only series boundary left.

use crate::config::consts::{AGGREGATE_GROUPS, GROUP_NAMES, MARKER_YEAR};
use crate::data::{AreaKind, Dataset, Record};
use crate::error::IngestError;
use crate::ingest::Sample;

pub fn is_aggregate(group: u32) -> bool {
    AGGREGATE_GROUPS.contains(&group)
}

/// Group → canonical area name, 1-based.
pub fn group_name(group: u32) -> Option<&'static str> {
    if group == 0 {
        return None;
    }
    GROUP_NAMES.get(group as usize - 1).copied()
}

/// Segment the concatenated sample run into (regions, continents).
///
/// Group numbers are a running count of marker rows, inclusive. Samples
/// before the first marker belong to no series and are excluded. A group
/// past the name table is rejected: the page layout changed and silent
/// drops would corrupt both datasets.
pub fn segment(samples: &[Sample]) -> Result<(Dataset, Dataset), IngestError> {
    let mut regions = Dataset::new(AreaKind::Region);
    let mut continents = Dataset::new(AreaKind::Continent);

    let mut group: u32 = 0;
    let mut skipped_preamble = 0usize;

    for s in samples {
        if s.year == MARKER_YEAR {
            group += 1;
        }
        if group == 0 {
            skipped_preamble += 1;
            continue;
        }
        let name = group_name(group).ok_or(IngestError::UnmappedGroup(group))?;

        let rec = Record {
            year: s.year,
            population: s.population,
            group_nr: group,
            area: s!(name),
            growth_rate: None,
        };
        if is_aggregate(group) {
            continents.records.push(rec);
        } else {
            regions.records.push(rec);
        }
    }

    if skipped_preamble > 0 {
        logd!("excluded {} sample(s) before the first {} marker", skipped_preamble, MARKER_YEAR);
    }
    logf!(
        "segmented {} groups: {} region rows, {} continent rows",
        group, regions.len(), continents.len()
    );

    Ok((regions, continents))
}
