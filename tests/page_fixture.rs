// tests/page_fixture.rs
//
// Offline end-to-end: captured-page-shaped HTML through extraction,
// ingestion, segmentation and one analyzer query.

use pop_scrape::analyze::AreaAnalyzer;
use pop_scrape::config::consts::GROUP_NAMES;
use pop_scrape::ingest;
use pop_scrape::segment;
use pop_scrape::specs::subregions::extract_tables;

// One infobox to skip, then three series tables in page order. Cells carry
// the page's noise: footnote refs, grouped digits, nbsp, the missing-value
// dash and signed percentages.
const PAGE: &str = r#"
<html><body>
  <table class="infobox vcard"><tr><td><a href="/wiki/Earth">Earth</a></td></tr></table>

  <table class="wikitable" style="text-align:right">
    <caption>Eastern Africa</caption>
    <tr><th>Year</th><th>Pop.</th><th>±% p.a.</th></tr>
    <tr><td>1950</td><td>100<sup>[1]</sup></td><td>—</td></tr>
    <tr><td>1960</td><td>150</td><td>+4.14%</td></tr>
  </table>

  <table class="wikitable">
    <tr><th>Year</th><th>Pop.</th><th>±% p.a.</th></tr>
    <tr><td>1950</td><td>2,000</td><td>—</td></tr>
    <tr><td>1960</td><td>2&nbsp;500</td><td>+2.26%</td></tr>
  </table>

  <table class="wikitable">
    <tr><th>Year</th><th>Pop.</th><th>±% p.a.</th></tr>
    <tr><td>1950</td><td>300</td><td>—</td></tr>
  </table>
</body></html>
"#;

#[test]
fn page_to_datasets_end_to_end() {
    let tables = extract_tables(PAGE);
    assert_eq!(tables.len(), 3); // infobox is not a wikitable

    let samples = ingest::ingest(tables).unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[2].population, 2_000);
    assert_eq!(samples[3].population, 2_500);

    let (mut region, continent) = segment::segment(&samples).unwrap();
    assert!(continent.is_empty()); // aggregates start at group 6
    assert_eq!(
        region.area_names(),
        vec![
            GROUP_NAMES[0].to_string(),
            GROUP_NAMES[1].to_string(),
            GROUP_NAMES[2].to_string(),
        ]
    );

    let mut az = AreaAnalyzer::new(&mut region);
    let rate = az.growth_rate(GROUP_NAMES[0], 1960).unwrap();
    assert!((rate - 50.0).abs() < 1e-9);

    let sorted = az.sort_by_population(1950);
    let pops: Vec<u64> = sorted.iter().map(|r| r.population).collect();
    assert_eq!(pops, vec![2_000, 300, 100]);
}
