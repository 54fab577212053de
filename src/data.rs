// src/data.rs
//
// Canonical data model produced by segmentation.
//
// - Record: one (area, year) sample. Closed struct, no open-ended columns;
//   growth_rate starts unset and is filled at most once by the analyzer.
// - Dataset: ordered records sharing one AreaKind. Owns its records; the
//   analyzer only ever borrows.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaKind {
    Region,
    Continent,
}

impl AreaKind {
    /// Lowercase noun for prose ("region", "continent").
    pub fn label(&self) -> &'static str {
        match self {
            AreaKind::Region => "region",
            AreaKind::Continent => "continent",
        }
    }

    /// Export column header ("Region", "Continent").
    pub fn column(&self) -> &'static str {
        match self {
            AreaKind::Region => "Region",
            AreaKind::Continent => "Continent",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub year: i32,
    pub population: u64,
    /// 1-based series ordinal from segmentation. Stable, not user-facing.
    pub group_nr: u32,
    pub area: String,
    pub growth_rate: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub kind: AreaKind,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(kind: AreaKind) -> Self {
        Self { kind, records: Vec::new() }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// First record matching (area, year), in dataset order.
    /// Duplicates violate the uniqueness invariant; first-wins keeps the
    /// lookup deterministic anyway.
    pub fn find(&self, area: &str, year: i32) -> Option<&Record> {
        self.records.iter().find(|r| r.area == area && r.year == year)
    }

    pub fn find_mut(&mut self, area: &str, year: i32) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.area == area && r.year == year)
    }

    /// Distinct area names, first-seen order.
    pub fn area_names(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|a| a == &r.area) {
                out.push(r.area.clone());
            }
        }
        out
    }

    /// Distinct years, first-seen order.
    pub fn years(&self) -> Vec<i32> {
        let mut out: Vec<i32> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.year) {
                out.push(r.year);
            }
        }
        out
    }
}
