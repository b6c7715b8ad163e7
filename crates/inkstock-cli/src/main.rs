use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use inkstock_core::{csv_filename, export_csv, format_inventory_table, FormattedInventoryTable};
use inkstock_vendor::{lookup_inventory, DistributorClient, StyleQuery};

#[derive(Debug, Parser)]
#[command(name = "inkstock")]
#[command(about = "Look up distributor inventory for a style and export it")]
struct Cli {
    /// Style number to look up (e.g. 64000)
    style: String,

    /// Product-page slug, when already known (enables the direct-slug step)
    #[arg(long)]
    slug: Option<String>,

    /// Show only one color in the table
    #[arg(long)]
    color: Option<String>,

    /// Restrict the SOAP lookup to one size
    #[arg(long)]
    size: Option<String>,

    /// Distributor base URL
    #[arg(long, env = "INKSTOCK_BASE_URL")]
    base_url: String,

    /// Per-call timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Write the CSV export; the filename defaults to
    /// `inventory-{style}.csv` when the flag is given without a path
    #[arg(long, num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = DistributorClient::new(&cli.base_url, cli.timeout)?;
    let query = StyleQuery {
        style: cli.style.clone(),
        slug: cli.slug.clone(),
        color: cli.color.clone(),
        size: cli.size.clone(),
    };

    let response = lookup_inventory(&client, &query).await;
    if response.error {
        anyhow::bail!(response
            .message
            .unwrap_or_else(|| "inventory lookup failed".to_owned()));
    }

    let table = format_inventory_table(&response.rows, cli.color.as_deref());
    if table.headers.is_empty() {
        println!("No inventory for the selected filters.");
        return Ok(());
    }

    let total_units: i64 = table.totals.values().sum();
    println!(
        "{}: {} units across {} warehouses, {} sizes\n",
        cli.style,
        total_units,
        table.warehouses.len(),
        table.headers.len()
    );
    print_table(&table);

    if let Some(destination) = cli.csv {
        let path = destination
            .unwrap_or_else(|| PathBuf::from(csv_filename(Some(cli.style.as_str()))));
        fs::write(&path, export_csv(&table))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nwrote {}", path.display());
    }

    Ok(())
}

/// Prints the pivoted matrix as aligned columns: sizes across, one row per
/// warehouse, pricing above and totals below.
fn print_table(table: &FormattedInventoryTable) {
    let label_width = table
        .warehouses
        .iter()
        .map(|w| w.len())
        .chain(["Price ($)".len(), "Total".len()])
        .max()
        .unwrap_or(0);
    let column_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|size| {
            let widest_cell = table
                .warehouses
                .iter()
                .map(|w| cell_text(table, w, size).len())
                .chain([
                    table.totals.get(size).copied().unwrap_or(0).to_string().len(),
                    table.pricing.get(size).map_or(1, |p| p.len()),
                ])
                .max()
                .unwrap_or(0);
            widest_cell.max(size.len())
        })
        .collect();

    print_row(label_width, &column_widths, "", &table.headers);

    if !table.pricing.is_empty() {
        let prices: Vec<String> = table
            .headers
            .iter()
            .map(|size| table.pricing.get(size).cloned().unwrap_or_else(|| "-".to_owned()))
            .collect();
        print_row(label_width, &column_widths, "Price ($)", &prices);
    }

    for warehouse in &table.warehouses {
        let cells: Vec<String> = table
            .headers
            .iter()
            .map(|size| cell_text(table, warehouse, size))
            .collect();
        print_row(label_width, &column_widths, warehouse, &cells);
    }

    let totals: Vec<String> = table
        .headers
        .iter()
        .map(|size| table.totals.get(size).copied().unwrap_or(0).to_string())
        .collect();
    print_row(label_width, &column_widths, "Total", &totals);
}

fn cell_text(table: &FormattedInventoryTable, warehouse: &str, size: &str) -> String {
    table
        .data
        .get(warehouse)
        .and_then(|row| row.get(size))
        .copied()
        .unwrap_or(0)
        .to_string()
}

fn print_row<S: AsRef<str>>(label_width: usize, column_widths: &[usize], label: &str, cells: &[S]) {
    let mut line = format!("{label:<label_width$}");
    for (cell, width) in cells.iter().zip(column_widths) {
        line.push_str("  ");
        line.push_str(&format!("{:>width$}", cell.as_ref()));
    }
    println!("{}", line.trim_end());
}
