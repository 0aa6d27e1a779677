use anyhow::{Context, Result};
use menutally::{
    config::Layout,
    process::{day_groups, invalid_cells, monthly_range, parse_csv, week_groups},
};
use std::{env, fs, path::Path, process::exit};

fn main() {
    // Expect exactly one CLI argument: path to a CSV export.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <CSV_FILE>", args[0]);
        exit(1);
    }
    if let Err(e) = inspect_sheet(Path::new(&args[1])) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Print how the export's columns map onto days, weeks and the monthly block,
/// then every cell that will be counted as zero.
fn inspect_sheet(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let table = parse_csv(&raw);
    let layout = Layout::default();

    println!("=== Sheet: {} ===", path.display());
    println!("Columns:              {}", table.header_count());
    println!("Items:                {}", table.rows.len());
    println!();

    let days = day_groups(table.header_count(), &layout);
    println!("=== Days ({}) ===", days.len());
    for day in &days {
        let names = &table.headers[day.range.columns()];
        println!(
            "- {:<8} | cols {:>3}..{:<3} | {}",
            day.label,
            day.range.start,
            day.range.end(),
            names.join(", ")
        );
    }
    println!();

    let weeks = week_groups(days.len(), &layout);
    println!("=== Weeks ({}) ===", weeks.len());
    for week in &weeks {
        println!(
            "- {:<8} | cols {:>3}..{:<3} | {} day(s)",
            week.label, week.start, week.end, week.days
        );
    }
    println!();

    println!("=== Monthly ===");
    match monthly_range(table.header_count(), &layout) {
        Ok(r) => println!(
            "- cols {}..{} | {}",
            r.start,
            r.end(),
            table.headers[r.columns()].join(", ")
        ),
        Err(e) => println!("- {}", e),
    }
    println!();

    let invalid = invalid_cells(&table);
    println!("=== Non-numeric cells ({}) ===", invalid.len());
    for cell in &invalid {
        println!(
            "- row {:>4} col {:>3} | {:<20} | {:<12} | {:?} -> {}",
            cell.row + 1,
            cell.column,
            cell.item,
            cell.header,
            cell.raw,
            cell.coerced
        );
    }

    Ok(())
}
