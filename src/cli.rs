// src/cli.rs
use std::env;
use std::path::PathBuf;

use color_eyre::eyre::{bail, eyre, Result};

use crate::config::consts::HOST;
use crate::config::options::{AppOptions, DataSource, ExportFormat};
use crate::data::Dataset;
use crate::{ingest, segment, shell, specs, store};

pub fn run() -> Result<()> {
    color_eyre::install()?;

    let mut opts = AppOptions::default();
    parse_cli(&mut opts)?;

    let (mut region, mut continent) = obtain(&opts)?;

    let written = store::save_datasets(&opts, &region, &continent)?;
    for p in &written {
        println!("Wrote {}", p.display());
    }

    if opts.export_only {
        return Ok(());
    }
    shell::run(&mut region, &mut continent)?;
    Ok(())
}

fn obtain(opts: &AppOptions) -> Result<(Dataset, Dataset)> {
    match opts.source {
        DataSource::Scrape => scrape_fresh(opts),
        DataSource::Offline => store::load_datasets(opts)?.ok_or_else(|| {
            eyre!(
                "no cached datasets under {} (run once without --offline)",
                opts.out_dir.display()
            )
        }),
        DataSource::Cache => match store::load_datasets(opts)? {
            Some(pair) => Ok(pair),
            None => scrape_fresh(opts),
        },
    }
}

fn scrape_fresh(opts: &AppOptions) -> Result<(Dataset, Dataset)> {
    println!("Scraping {}…", HOST);
    let tables = specs::subregions::fetch()?;
    let samples = ingest::ingest(tables)?;

    if opts.dump_raw {
        let p = store::save_raw_dump(opts, &samples)?;
        println!("Wrote {}", p.display());
    }

    Ok(segment::segment(&samples)?)
}

fn parse_cli(opts: &mut AppOptions) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--scrape" => opts.source = DataSource::Scrape,
            "--offline" => opts.source = DataSource::Offline,
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output directory"))?;
                opts.out_dir = PathBuf::from(v);
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => bail!("Unknown format: {}", other),
                };
            }
            "--include-growth" => opts.include_growth = true,
            "--export-only" => opts.export_only = true,
            "--dump-raw" => opts.dump_raw = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }
    Ok(())
}
