// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

use dtindex::{Dataset, LookupOutcome, QueryService};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let data_dir = data_dir_from_args(&args);

    match args.get(1).map(|s| s.as_str()) {
        Some("query") => run_query(&args, &data_dir)?,
        Some("summary") => run_summary(&data_dir)?,
        Some("--data") | None => run_ui_mode(&data_dir)?,
        Some(other) => {
            eprintln!("Unknown mode: {}", other);
            eprintln!("Usage: dtindex [query CODE YEAR | summary] [--data DIR]");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Directory holding the two CSV tables. `--data DIR` anywhere on the
/// command line overrides the default `data/`.
fn data_dir_from_args(args: &[String]) -> PathBuf {
    args.iter()
        .position(|a| a == "--data")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn load_dataset(data_dir: &Path) -> Result<Dataset> {
    let index_path = data_dir.join("digital_index.csv");
    let keywords_path = data_dir.join("tech_keywords.csv");

    println!("📂 Loading data from {:?}...", data_dir);

    let dataset = match Dataset::load(&index_path, &keywords_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("❌ Data load failed: {}", e);
            eprintln!("   Expected tables: digital_index.csv, tech_keywords.csv");
            eprintln!("   Pass --data DIR to point at another directory.");
            std::process::exit(1);
        }
    };

    println!(
        "✓ Loaded {} index records, {} keyword records",
        dataset.index_records().len(),
        dataset.keyword_records().len()
    );

    Ok(dataset)
}

fn run_query(args: &[String], data_dir: &Path) -> Result<()> {
    let code = args.get(2).cloned().unwrap_or_default();
    let year: i32 = match args.get(3).map(|s| s.parse()) {
        Some(Ok(year)) => year,
        _ => {
            eprintln!("Usage: dtindex query CODE YEAR");
            std::process::exit(2);
        }
    };

    let dataset = load_dataset(data_dir)?;
    let service = QueryService::new(&dataset);

    match service.lookup(&code, year) {
        LookupOutcome::Found(record) => {
            println!("\n🔍 Query result");
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("Stock code:            {}", record.stock_code);
            println!("Firm name:             {}", record.firm_name);
            println!("Year:                  {}", record.year);
            println!(
                "Digitalization index:  {:.2} (0-100)",
                record.digitalization_index
            );
            println!("\nTechnology term frequencies:");
            println!("  AI:                  {}", record.ai_terms);
            println!("  Big data:            {}", record.big_data_terms);
            println!("  Cloud computing:     {}", record.cloud_terms);
            println!("  Blockchain:          {}", record.blockchain_terms);
            println!("  Digital tech usage:  {}", record.digital_usage_terms);
        }
        LookupOutcome::NotFound => {
            println!("⚠️  No record for stock code {} in {}", code, year);
        }
        LookupOutcome::MissingCode => {
            println!("⚠️  Please supply a stock code");
        }
    }

    Ok(())
}

fn run_summary(data_dir: &Path) -> Result<()> {
    let dataset = load_dataset(data_dir)?;
    let service = QueryService::new(&dataset);
    let summary = service.summarize();

    println!("\n📊 Dataset overview");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Data year range: {}", summary.year_range());
    println!("Firms covered:   {}", summary.firm_count);

    let distributions = dtindex::year_distributions(&dataset);
    if !distributions.is_empty() {
        println!("\nIndex distribution by year:");
        println!(
            "{:>6} {:>7} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "Year", "Firms", "Min", "Q1", "Median", "Q3", "Max"
        );
        for d in distributions {
            println!(
                "{:>6} {:>7} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                d.year, d.count, d.min, d.q1, d.median, d.q3, d.max
            );
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(data_dir: &Path) -> Result<()> {
    println!("🖥️  Digitalization Index Query System\n");

    let dataset = load_dataset(data_dir)?;

    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(dataset);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_data_dir: &Path) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin dtindex-server --features server");
    std::process::exit(1);
}
