use colored::Colorize;

use crate::domain::RankingEntry;
use crate::services::ImportSummary;

pub fn print_import_summary(file_name: &str, summary: &ImportSummary) {
    println!(
        "{} {} as tournament {} ({} players)",
        "Imported".green().bold(),
        file_name,
        summary.tournament_id,
        summary.players_inserted
    );
}

pub fn print_rankings(rankings: &[RankingEntry]) {
    println!(
        "{}",
        format!("{:>4}  {:<32} {:<4} {:>6} {:>8} {:>6}", "#", "Name", "Fed", "Rtg", "Perf", "Events").bold()
    );
    for (i, entry) in rankings.iter().enumerate() {
        println!("{}", format_line(i + 1, entry));
    }
}

fn format_line(position: usize, entry: &RankingEntry) -> String {
    let performance = match entry.average_performance {
        Some(value) => format!("{:>8.2}", value).normal(),
        None => format!("{:>8}", "-").dimmed(),
    };
    format!(
        "{:>4}  {:<32} {:<4} {:>6} {} {:>6}",
        position,
        entry.name,
        entry.federation.as_deref().unwrap_or(""),
        entry.rating.map(|r| r.to_string()).unwrap_or_default(),
        performance,
        format!("{}/{}", entry.tournaments_used.len(), entry.tournaments_played.len())
    )
}
