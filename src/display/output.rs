use crate::mastery::{LookupFailure, Masteries};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MasteryRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    points: String,
    share: String,
}

fn mastery_rows(masteries: &Masteries) -> Vec<MasteryRow> {
    let total = masteries.total_points();

    masteries
        .descending()
        .enumerate()
        .map(|(idx, entry)| MasteryRow {
            rank: format!("#{}", idx + 1),
            champion: entry.champion.clone(),
            points: entry.points.to_string(),
            share: if total > 0 {
                format!("{:.2}%", entry.points as f64 / total as f64 * 100.0)
            } else {
                "-".to_string()
            },
        })
        .collect()
}

pub fn display_masteries(player_name: &str, masteries: &Masteries) {
    println!(
        "\n{}",
        format!("🏆 Champion Mastery for {} ({})", player_name, masteries.region.code.to_uppercase())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if masteries.is_empty() {
        println!("{}", "No champion mastery recorded for this player".yellow());
        return;
    }

    println!(
        "{} {} points across {} champions\n",
        "📈 Total:".bold(),
        masteries.total_points().to_string().green(),
        masteries.len()
    );

    let mut table = Table::new(mastery_rows(masteries));
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_failure(reason: LookupFailure) {
    println!("{} {}", "⚠️".yellow(), reason.to_string().yellow());
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
