//! report-runner: headless renderer for the auto-sales report.
//!
//! Usage:
//!   report-runner --data "Auto Sales data.csv"
//!   report-runner --config report.json --json
//!   report-runner --synthetic 2000 --seed 7
//!   report-runner --data sales.csv --ipc-mode

mod cache;

use anyhow::Result;
use cache::TableCache;
use sales_report_core::{
    loader::{load_orders, OrderLoader},
    synthetic::SyntheticOrders,
    OrderTable, ReportConfig, ReportEngine, SalesReport, SectionSlot,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Render,
    Section { name: String },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let synthetic_rows = find_arg(&args, "--synthetic").and_then(|v| v.parse::<usize>().ok());
    let seed = parse_arg(&args, "--seed", 42u64);

    let mut config = match find_arg(&args, "--config") {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if let Some(data) = find_arg(&args, "--data") {
        config = config.with_input_path(data);
    }

    if ipc_mode {
        return run_ipc_loop(&config);
    }

    let table = match synthetic_rows {
        Some(rows) => {
            log::info!("generating {rows} synthetic order lines (seed {seed})");
            SyntheticOrders::new(seed, rows).generate()
        }
        None => load_orders(&config)?,
    };
    let report = ReportEngine::build().render(&table);

    if json_mode {
        println!("{}", report.to_json()?);
    } else {
        let source = match synthetic_rows {
            Some(_) => format!("synthetic (seed {seed})"),
            None => config.input_path.clone(),
        };
        print_summary(&report, &source, &table);
    }
    Ok(())
}

fn run_ipc_loop(config: &ReportConfig) -> Result<()> {
    let loader = OrderLoader::new(config)?;
    let engine = ReportEngine::build();
    let mut cache = TableCache::new();
    let path = Path::new(&config.input_path);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Render => match cache.get_or_load(&loader, path) {
                Ok(table) => {
                    let report = engine.render(table);
                    writeln!(stdout, "{}", serde_json::to_string(&report)?)?;
                }
                Err(e) => write_error(&mut stdout, &e.to_string())?,
            },
            IpcCommand::Section { name } => {
                let Some(slot) = SectionSlot::from_name(&name) else {
                    write_error(&mut stdout, &format!("unknown section '{name}'"))?;
                    continue;
                };
                match cache.get_or_load(&loader, path) {
                    Ok(table) => {
                        let report = engine.render(table);
                        match report.section(slot) {
                            Some(section) => {
                                writeln!(stdout, "{}", serde_json::to_string(section)?)?
                            }
                            None => write_error(&mut stdout, &format!("section '{name}' not rendered"))?,
                        }
                    }
                    Err(e) => write_error(&mut stdout, &e.to_string())?,
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn print_summary(report: &SalesReport, source: &str, table: &OrderTable) {
    println!("Auto sales report: report-runner");
    println!("  source:      {source}");
    println!("  order lines: {}", report.source_rows);
    println!("  customers:   {}", table.distinct_customers().len());
    println!("  total sales: {:.2}", report.grand_total_sales);
    if let (Some(first), Some(last)) = (report.first_order_date, report.last_order_date) {
        println!("  date range:  {first} .. {last}");
    }

    if let Some(recency) = report.customer_recency() {
        section_header(SectionSlot::CustomerRecency);
        let mut rows: Vec<_> = recency.rows.iter().collect();
        rows.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
        for r in rows.iter().take(10) {
            println!(
                "  {:<40} {:>6} days | {:>12.2}",
                r.customer_name, r.days_since_last_order, r.total_sales
            );
        }
        if rows.len() > 10 {
            println!("  ... {} more customers", rows.len() - 10);
        }
    }

    if let Some(heat) = report.country_product_heat() {
        section_header(SectionSlot::CountryProductHeat);
        println!(
            "  {} countries x {} product lines, {} empty cells",
            heat.countries.len(),
            heat.product_lines.len(),
            heat.cells.iter().flatten().filter(|c| **c == 0.0).count()
        );
        for country in &heat.countries {
            if let Some(total) = heat.country_total(country) {
                println!("  {country:<20} {total:>12.2}");
            }
        }
    }

    if let Some(profile) = report.transaction_profile() {
        section_header(SectionSlot::TransactionProfile);
        let n = profile.points.len().max(1) as f64;
        let avg_price = profile.points.iter().map(|p| p.price_each).sum::<f64>() / n;
        let avg_qty = profile.points.iter().map(|p| p.quantity_ordered as f64).sum::<f64>() / n;
        println!("  {} points | avg price {avg_price:.2} | avg qty {avg_qty:.1}", profile.points.len());
    }

    if let Some(cycle) = report.repurchase_cycle() {
        section_header(SectionSlot::RepurchaseCycle);
        for r in &cycle.rows {
            println!(
                "  {:<20} {:>8.1} days ({} customers)",
                r.product_line, r.mean_days_between, r.customer_count
            );
        }
    }

    if let Some(flow) = report.country_product_flow() {
        section_header(SectionSlot::CountryProductFlow);
        println!(
            "  {} nodes ({} countries, {} product lines), {} links, weight {:.2}",
            flow.labels.len(),
            flow.country_count(),
            flow.product_line_count(),
            flow.links.len(),
            flow.total_weight()
        );
    }

    if let Some(deals) = report.deal_size_summary() {
        section_header(SectionSlot::DealSizeSummary);
        for r in &deals.rows {
            println!(
                "  {:<10} {:>5} customers | mean {:>12.2}",
                r.deal_size, r.customer_count, r.mean_customer_sales
            );
        }
    }
}

fn section_header(slot: SectionSlot) {
    println!();
    println!("=== {} ===", slot.title().to_uppercase());
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
