//! Display functions for command results

use super::formatters::{format_count, format_probability, probability_bar};
use crate::calculator::ChromaticResult;
use crate::chances::{ChanceModel, ColorProbabilities};
use crate::commands::{ChancesReport, ChromaticReport};
use crate::core::{Color, ConfidenceLevel, ItemDescriptor};
use colored::{ColoredString, Colorize};

const OPTION_WIDTH: usize = 12;
const COLUMN_WIDTH: usize = 10;

/// Print the color chances of an item
pub fn print_chances_report(report: &ChancesReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SOCKET COLOR CHANCES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_item_summary(&report.item);
    print_chances(&report.chances);
}

/// Print the ranked crafting options for a target
pub fn print_chromatic_report(report: &ChromaticReport) {
    println!("\n{}", "═".repeat(100).cyan());
    println!(
        " {} {} ",
        "CHROMATIC COST:".bright_cyan().bold(),
        report.target.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(100).cyan());

    print_item_summary(&report.item);
    print_chances(&report.chances);

    if report.results.is_empty() {
        println!(
            "\n{}",
            "❌ No crafting option can reach these colors (does the target match the socket count?)"
                .red()
                .bold()
        );
        return;
    }

    println!("\n💰 {}", "Crafting options:".bright_cyan().bold());
    print_header(report.sort_by);
    for (rank, result) in report.results.iter().enumerate() {
        print_row(result, report.sort_by, rank == 0);
    }

    println!(
        "\n{}",
        format!(
            "Sorted by cost at {}. Note on percentiles: the 90% column means you are \
             expected to hit the desired colors with that number of tries or less, \
             with 90% probability.",
            report.sort_by
        )
        .bright_black()
    );
}

fn print_item_summary(item: &ItemDescriptor) {
    let reqs = item.requirements();
    println!(
        "\n🛡  Sockets: {}/{}   Requirements: {} str / {} dex / {} int",
        item.socket_count(),
        item.max_sockets(),
        reqs.strength,
        reqs.dexterity,
        reqs.intelligence
    );
}

fn print_chances(chances: &ColorProbabilities) {
    println!("\n🎲 {}", "Per-socket chances:".bright_cyan().bold());
    for (color, probability) in chances.iter() {
        let bar = probability_bar(probability, 30);
        println!(
            "   {} ({}): [{}] {}",
            paint(color, &color.letter().to_string()),
            color.attribute(),
            paint(color, &bar),
            format_probability(probability).bright_yellow()
        );
    }

    let model = match chances.model() {
        ChanceModel::Unrestricted => "no requirements, all colors equally likely".to_string(),
        ChanceModel::SingleAttribute(color) => format!("single requirement, {color} favoured"),
        ChanceModel::DualAttribute {
            dominant,
            secondary,
        } => format!("dual requirement, {dominant} dominant over {secondary}"),
        ChanceModel::TripleAttributeFallback => {
            "all three attributes required, chances unknown".to_string()
        }
    };
    println!("   Model: {model}");

    if chances.model().is_approximation() {
        println!(
            "   {}",
            "⚠ Approximation: uniform chances are assumed for triple-requirement items"
                .yellow()
                .bold()
        );
    }
}

fn print_header(sort_by: ConfidenceLevel) {
    let mut header = format!(
        "   {:<OPTION_WIDTH$} {:>COLUMN_WIDTH$} {:>6} {:>COLUMN_WIDTH$}",
        "option", "chance", "cost", "mean tries"
    );
    for level in ConfidenceLevel::ALL {
        header.push_str(&format!(" {:>7}", level.to_string()));
    }
    header.push_str(&format!(" {:>12}", format!("cost@{sort_by}")));

    println!("{}", header.bold());
    println!("   {}", "─".repeat(header.chars().count() - 3).bright_black());
}

fn print_row(result: &ChromaticResult, sort_by: ConfidenceLevel, best: bool) {
    let mut row = format!(
        "   {:<OPTION_WIDTH$} {:>COLUMN_WIDTH$} {:>6} {:>COLUMN_WIDTH$.1}",
        result.option_label,
        format_probability(result.success_probability),
        result.cost_per_try,
        result.mean_attempts
    );
    for (_, attempts) in result.percentiles.iter() {
        row.push_str(&format!(" {:>7}", format_count(attempts)));
    }

    row.push_str(&format!(" {:>12}", format_count(result.cost_at(sort_by))));

    if best {
        println!("{}", row.green().bold());
    } else {
        println!("{row}");
    }
}

fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Green => text.green(),
        Color::Blue => text.blue(),
    }
}
