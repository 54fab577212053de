// src/config/consts.rs

// Net config
pub const HOST: &str = "en.wikipedia.org";
pub const PAGE_PATH: &str = "/wiki/List_of_continents_and_continental_subregions_by_population";
pub const USER_AGENT: &str = "pop_scrape/0.3 (population table exporter)";

// Local logs
pub const STORE_DIR: &str = ".store";

// Segmentation
pub const MARKER_YEAR: i32 = 1950; // every area's series restarts here
pub const MISSING_GLYPH: &str = "\u{2014}"; // em dash the page prints for "no value"

/// Canonical area names in page order. Group N (1-based) maps to index N-1.
/// Encodes the source page's table ordering; must track the page if its
/// layout ever changes.
pub const GROUP_NAMES: [&str; 25] = [
    "Eastern Africa",
    "Middle Africa",
    "Northern Africa",
    "Southern Africa",
    "Western Africa",
    "Total Africa",
    "Total Americas",
    "Caribbean",
    "Central America",
    "North America",
    "Total North America",
    "Total South America",
    "Central Asia",
    "Eastern Asia",
    "South-Eastern Asia",
    "Southern Asia",
    "Western Asia",
    "Total Asia",
    "Eastern Europe",
    "North Europe",
    "Southern Europe",
    "Western Europe",
    "Total Europe",
    "Total Oceania",
    "Total World",
];

/// Groups that are aggregates (continent-level totals), not leaf regions.
pub const AGGREGATE_GROUPS: [u32; 7] = [6, 11, 12, 18, 23, 24, 25];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const REGION_STEM: &str = "region";
pub const CONTINENT_STEM: &str = "continent";
pub const RAW_DUMP_STEM: &str = "subregions_raw";
