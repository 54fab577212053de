// src/store.rs
//
// CSV persistence for the two segmented datasets. The exports double as a
// local cache: a later run reloads them instead of scraping again. Reload
// is strict: a file that no longer parses is an error, not a half-empty
// dataset.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{CONTINENT_STEM, RAW_DUMP_STEM, REGION_STEM};
use crate::config::options::AppOptions;
use crate::csv::{parse_rows, rows_to_string};
use crate::data::{AreaKind, Dataset, Record};
use crate::error::StoreError;
use crate::ingest::Sample;

fn dataset_stem(kind: AreaKind) -> &'static str {
    match kind {
        AreaKind::Region => REGION_STEM,
        AreaKind::Continent => CONTINENT_STEM,
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() && !dir.is_dir() {
        return Err(StoreError::Io(std::io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/* ---------------- Save ---------------- */

/// Write both dataset files; returns the paths written.
pub fn save_datasets(
    opts: &AppOptions,
    region: &Dataset,
    continent: &Dataset,
) -> Result<Vec<PathBuf>, StoreError> {
    ensure_directory(&opts.out_dir)?;
    let paths = vec![save_one(opts, region)?, save_one(opts, continent)?];
    logf!("wrote {} and {}", paths[0].display(), paths[1].display());
    Ok(paths)
}

fn save_one(opts: &AppOptions, ds: &Dataset) -> Result<PathBuf, StoreError> {
    let path = opts.out_file(dataset_stem(ds.kind));

    let mut headers = vec![s!("Year"), s!("Population"), s!("Region_nr"), s!(ds.kind.column())];
    if opts.include_growth {
        headers.push(s!("Growth Rate"));
    }

    let rows: Vec<Vec<String>> = ds
        .records
        .iter()
        .map(|r| {
            let mut row = vec![
                r.year.to_string(),
                r.population.to_string(),
                r.group_nr.to_string(),
                r.area.clone(),
            ];
            if opts.include_growth {
                // blank cell where the rate was never computed
                row.push(r.growth_rate.map(|g| format!("{:.2}", g)).unwrap_or_default());
            }
            row
        })
        .collect();

    fs::write(&path, rows_to_string(Some(&headers), &rows, opts.format.delim()))?;
    Ok(path)
}

/// Dump the cleaned concatenated sample run (pre-segmentation).
pub fn save_raw_dump(opts: &AppOptions, samples: &[Sample]) -> Result<PathBuf, StoreError> {
    ensure_directory(&opts.out_dir)?;
    let path = opts.out_file(RAW_DUMP_STEM);

    let headers = vec![s!("Year"), s!("Population")];
    let rows: Vec<Vec<String>> = samples
        .iter()
        .map(|s| vec![s.year.to_string(), s.population.to_string()])
        .collect();

    fs::write(&path, rows_to_string(Some(&headers), &rows, opts.format.delim()))?;
    logf!("wrote {}", path.display());
    Ok(path)
}

/* ---------------- Load ---------------- */

/// Reload both datasets from a previous export. `None` when either file is
/// missing (fresh workspace); an unparseable file is an error.
pub fn load_datasets(opts: &AppOptions) -> Result<Option<(Dataset, Dataset)>, StoreError> {
    let region_path = opts.out_file(REGION_STEM);
    let continent_path = opts.out_file(CONTINENT_STEM);
    if !region_path.exists() || !continent_path.exists() {
        return Ok(None);
    }

    let region = load_one(opts, &region_path, AreaKind::Region)?;
    let continent = load_one(opts, &continent_path, AreaKind::Continent)?;
    logf!(
        "cache hit: {} region rows, {} continent rows",
        region.len(), continent.len()
    );
    Ok(Some((region, continent)))
}

fn load_one(opts: &AppOptions, path: &Path, kind: AreaKind) -> Result<Dataset, StoreError> {
    let text = fs::read_to_string(path)?;
    let file = path.display().to_string();
    let bad = |reason: String| StoreError::BadRow { file: file.clone(), reason };

    let mut rows = parse_rows(&text, opts.format.delim());
    if rows.is_empty() {
        return Err(bad(s!("empty file")));
    }
    rows.remove(0); // header line

    let mut ds = Dataset::new(kind);
    for row in rows {
        if row.len() < 4 {
            return Err(bad(format!("expected at least 4 columns, got {}", row.len())));
        }
        let year = row[0]
            .parse()
            .map_err(|_| bad(format!("bad year {:?}", row[0])))?;
        let population = row[1]
            .parse()
            .map_err(|_| bad(format!("bad population {:?}", row[1])))?;
        let group_nr = row[2]
            .parse()
            .map_err(|_| bad(format!("bad group number {:?}", row[2])))?;
        let growth_rate = match row.get(4).map(String::as_str) {
            None | Some("") => None,
            Some(g) => Some(g.parse().map_err(|_| bad(format!("bad growth rate {:?}", g)))?),
        };

        ds.records.push(Record {
            year,
            population,
            group_nr,
            area: row[3].clone(),
            growth_rate,
        });
    }
    Ok(ds)
}
