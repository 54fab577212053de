// src/shell.rs
//
// Interactive console menu over the two datasets. Areas and years are picked
// by ordinal index into each dataset's distinct-value lists. Recoverable
// query misses print a message and the session continues; EOF on stdin ends
// the session.

use std::io::{self, BufRead, Write};

use crate::analyze::{AreaAnalyzer, Verdict};
use crate::data::{AreaKind, Dataset};
use crate::error::QueryError;

pub fn run(region: &mut Dataset, continent: &mut Dataset) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Welcome to the Population Analyzer");
        println!("Menu:");
        println!("1. Display the population of a region or continent.");
        println!("2. Compare the population between two regions or continents.");
        println!("3. Sort regions or continents by population size.");
        println!("4. Calculate the annual growth rate of regions or continents.");
        println!("5. Compare the growth rate between two regions or continents.");
        println!("6. Sort regions or continents by growth rate.");
        println!("7. Exit");

        let Some(line) = prompt(&mut input, "Choose an option: ")? else { break };
        match line.parse::<u32>() {
            Ok(7) => {
                println!("Exiting program.");
                break;
            }
            Ok(op @ 1..=6) => run_operation(op, &mut input, region, continent)?,
            _ => println!("Invalid input. Please enter a number from the menu."),
        }
    }
    Ok(())
}

/// One menu operation, repeated while the user keeps answering "yes".
fn run_operation(
    op: u32,
    input: &mut impl BufRead,
    region: &mut Dataset,
    continent: &mut Dataset,
) -> io::Result<()> {
    loop {
        let Some(kind) = pick_kind(input)? else { return Ok(()) };
        let ds = match kind {
            AreaKind::Region => &mut *region,
            AreaKind::Continent => &mut *continent,
        };
        if ds.is_empty() {
            println!("No {} data loaded.", kind.label());
            return Ok(());
        }

        if !perform(op, input, ds)? || !analyze_more(input)? {
            return Ok(());
        }
    }
}

/// Returns Ok(false) when input ran out mid-operation.
fn perform(op: u32, input: &mut impl BufRead, ds: &mut Dataset) -> io::Result<bool> {
    let label = ds.kind.label();

    match op {
        1 => {
            let Some(area) = pick_area(input, ds)? else { return Ok(false) };
            let Some(year) = pick_year(input, ds)? else { return Ok(false) };
            match AreaAnalyzer::new(ds).population(&area, year) {
                Ok(pop) => {
                    println!("Population of {} in {}: {}", area, year, group_digits(pop));
                }
                Err(e) => report(&e),
            }
        }
        2 => {
            let Some((a1, a2)) = pick_two_areas(input, ds)? else { return Ok(false) };
            let Some(year) = pick_year(input, ds)? else { return Ok(false) };
            match AreaAnalyzer::new(ds).compare_population(&a1, &a2, year) {
                Ok(c) => {
                    println!("Population in {} in {}: {}", a1, year, group_digits(c.first));
                    println!("Population in {} in {}: {}", a2, year, group_digits(c.second));
                    match c.verdict {
                        Verdict::FirstGreater => {
                            println!("{}'s population was greater than {}'s.", a1, a2);
                        }
                        Verdict::SecondGreater => {
                            println!("{}'s population was greater than {}'s.", a2, a1);
                        }
                        Verdict::Equal => {
                            println!("{} and {} had the same population in {}.", a1, a2, year);
                        }
                    }
                }
                Err(e) => report(&e),
            }
        }
        3 => {
            let Some(year) = pick_year(input, ds)? else { return Ok(false) };
            let sorted = AreaAnalyzer::new(ds).sort_by_population(year);
            if sorted.is_empty() {
                println!("No data available for {}s in {}.", label, year);
            } else {
                println!("{}s sorted by population in {}:", capitalize(label), year);
                for (i, r) in sorted.iter().enumerate() {
                    println!("{:>3}. {:<22} {:>15}", i + 1, r.area, group_digits(r.population));
                }
            }
        }
        4 => {
            let Some(area) = pick_area(input, ds)? else { return Ok(false) };
            let Some(year) = pick_year(input, ds)? else { return Ok(false) };
            match AreaAnalyzer::new(ds).growth_rate(&area, year) {
                Ok(rate) => println!("Growth rate for {} in {}: {:.2}%", area, year, rate),
                Err(e) => report(&e),
            }
        }
        5 => {
            let Some((a1, a2)) = pick_two_areas(input, ds)? else { return Ok(false) };
            let Some(year) = pick_year(input, ds)? else { return Ok(false) };
            match AreaAnalyzer::new(ds).compare_growth_rate(&a1, &a2, year) {
                Ok(c) => match c.verdict {
                    Verdict::FirstGreater => println!(
                        "{} had a higher growth rate ({:.2}%) than {} ({:.2}%) in {}.",
                        a1, c.first, a2, c.second, year
                    ),
                    Verdict::SecondGreater => println!(
                        "{} had a higher growth rate ({:.2}%) than {} ({:.2}%) in {}.",
                        a2, c.second, a1, c.first, year
                    ),
                    Verdict::Equal => println!(
                        "{} and {} had the same growth rate ({:.2}%) in {}.",
                        a1, a2, c.first, year
                    ),
                },
                Err(e) => {
                    report(&e);
                    println!("Comparison could not be made due to insufficient data.");
                }
            }
        }
        6 => {
            let Some(year) = pick_year(input, ds)? else { return Ok(false) };
            let sorted = AreaAnalyzer::new(ds).sort_by_growth_rate(year);
            if sorted.is_empty() {
                println!("No data available for {}s in {}.", label, year);
            } else {
                println!("{}s sorted by growth rate in {}:", capitalize(label), year);
                for (i, r) in sorted.iter().enumerate() {
                    let rate = match r.growth_rate {
                        Some(g) => format!("{:.2}%", g),
                        None => s!("n/a"),
                    };
                    println!("{:>3}. {:<22} {:>10}", i + 1, r.area, rate);
                }
            }
        }
        _ => unreachable!("menu guards the range"),
    }
    Ok(true)
}

/* ---------------- Prompts ---------------- */

/// Trimmed line, or None on EOF.
fn prompt(input: &mut impl BufRead, msg: &str) -> io::Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn pick_kind(input: &mut impl BufRead) -> io::Result<Option<AreaKind>> {
    loop {
        println!();
        println!("1. Region");
        println!("2. Continent");
        let Some(line) = prompt(input, "Choose 1 for Region or 2 for Continent: ")? else {
            return Ok(None);
        };
        match line.as_str() {
            "1" => return Ok(Some(AreaKind::Region)),
            "2" => return Ok(Some(AreaKind::Continent)),
            _ => println!("Invalid choice. Please choose 1 for Region or 2 for Continent."),
        }
    }
}

/// 1-based pick from a printed list; retries until valid, None on EOF.
fn pick_index(input: &mut impl BufRead, msg: &str, len: usize) -> io::Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, msg)? else { return Ok(None) };
        match line.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Invalid input. Please enter a number between 1 and {}.", len),
        }
    }
}

fn pick_area(input: &mut impl BufRead, ds: &Dataset) -> io::Result<Option<String>> {
    let names = ds.area_names();
    println!();
    println!("Available {}s:", capitalize(ds.kind.label()));
    for (i, name) in names.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    let msg = format!("Select a {} by number: ", ds.kind.label());
    Ok(pick_index(input, &msg, names.len())?.map(|i| names[i].clone()))
}

fn pick_two_areas(input: &mut impl BufRead, ds: &Dataset) -> io::Result<Option<(String, String)>> {
    let names = ds.area_names();
    println!();
    println!("Available {}s:", capitalize(ds.kind.label()));
    for (i, name) in names.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    let first = format!("Select the first {} by number: ", ds.kind.label());
    let second = format!("Select the second {} by number: ", ds.kind.label());
    let Some(i) = pick_index(input, &first, names.len())? else { return Ok(None) };
    let Some(j) = pick_index(input, &second, names.len())? else { return Ok(None) };
    Ok(Some((names[i].clone(), names[j].clone())))
}

fn pick_year(input: &mut impl BufRead, ds: &Dataset) -> io::Result<Option<i32>> {
    let years = ds.years();
    println!();
    println!("Available Years:");
    for (i, y) in years.iter().enumerate() {
        println!("{}. {}", i + 1, y);
    }
    Ok(pick_index(input, "Select a year by number: ", years.len())?.map(|i| years[i]))
}

fn analyze_more(input: &mut impl BufRead) -> io::Result<bool> {
    loop {
        let Some(line) =
            prompt(input, "\nDo you want to analyze more data in this context? (yes/no): ")?
        else {
            return Ok(false);
        };
        match line.to_ascii_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Invalid input. Please enter 'yes' or 'no'."),
        }
    }
}

/* ---------------- Formatting ---------------- */

fn report(e: &QueryError) {
    match e {
        QueryError::NotFound { area, year } => {
            println!("No data available for {} in {}.", area, year);
        }
        QueryError::InsufficientData { area, year } => {
            println!("No previous data available for {} before {}.", area, year);
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => s!(),
    }
}

/// 1234567 → "1,234,567"
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
