//! Console output formatter for advisor results

use advisor_domain::{GeneralQuery, InventorySummary, SpecialistCategory, VehicleRecord};
use colored::Colorize;

/// Formats answers, inventory tables and diagnostics for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a model answer to a shopper's question
    pub fn format_answer(query: &str, answer: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "=== Vehicle Advisor ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Q:".bold(), query));
        output.push_str(answer.trim_end());
        output.push('\n');
        output
    }

    /// Format vehicles as a fixed-width table
    pub fn format_vehicles(vehicles: &[VehicleRecord]) -> String {
        if vehicles.is_empty() {
            return format!("{}\n", "No matching vehicles in stock.".yellow());
        }

        let mut output = String::new();
        let header = format!(
            "{:<6} {:<28} {:<16} {:<10} {:>10} {:>9} {:>5}",
            "ID", "Vehicle", "Type", "Fuel", "Price", "MPG", "Seats"
        );
        output.push_str(&format!("{}\n", header.bold()));
        output.push_str(&format!("{}\n", "-".repeat(header.len())));

        for v in vehicles {
            output.push_str(&format!(
                "{:<6} {:<28} {:<16} {:<10} {:>10} {:>9} {:>5}\n",
                v.id,
                truncate(&v.display_name(), 28),
                truncate(&v.vehicle_type, 16),
                truncate(&v.fuel_type, 10),
                format_price(v.price),
                format!("{}/{}", v.mpg_city, v.mpg_highway),
                v.seating_capacity
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            vehicles.len().to_string().green().bold(),
            if vehicles.len() == 1 { "match" } else { "matches" }
        ));
        output
    }

    /// Format what the free-text filter understood
    pub fn format_search_filter(parsed: &GeneralQuery) -> String {
        if parsed.is_unstructured() {
            format!(
                "{} no filters recognized, showing everything in stock\n",
                "Filter:".dimmed()
            )
        } else {
            format!("{} {}\n", "Filter:".dimmed(), parsed.filter().describe())
        }
    }

    /// Format detected specialist categories with the keywords that hit
    pub fn format_categories(explained: &[(SpecialistCategory, Vec<&'static str>)]) -> String {
        if explained.is_empty() {
            return format!(
                "{}\n",
                "No specialist categories detected (the manager answers alone).".yellow()
            );
        }

        let mut output = format!("{}\n", "Specialist categories:".cyan().bold());
        for (category, keywords) in explained {
            output.push_str(&format!(
                "  {} {:<8} {}\n",
                "*".green(),
                category.as_str(),
                format!("({})", keywords.join(", ")).dimmed()
            ));
        }
        output
    }

    pub fn format_summary(summary: &InventorySummary) -> String {
        format!(
            "{} {} vehicles available ({} models in stock, {} units) {}\n",
            "Inventory loaded:".cyan().bold(),
            summary.total,
            summary.in_stock,
            summary.units_in_stock,
            format!(
                "[{} data, {}]",
                summary.origin,
                summary.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
            .dimmed()
        )
    }
}

/// `$28,000` style price
fn format_price(price: f64) -> String {
    let whole = price.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}~", head)
    }
}
