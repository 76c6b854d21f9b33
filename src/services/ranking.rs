use anyhow::Result;
use log::info;

use crate::config::RankingSettings;
use crate::database::TournamentRepository;
use crate::domain::RankingEntry;
use crate::ranking::PerformanceAggregator;

/// Cross-tournament ranking over everything stored so far
pub struct RankingService<'a, R: TournamentRepository + ?Sized> {
    repository: &'a R,
    settings: &'a RankingSettings,
}

impl<'a, R: TournamentRepository + ?Sized> RankingService<'a, R> {
    pub fn new(repository: &'a R, settings: &'a RankingSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn rankings(&self, limit: usize) -> Result<Vec<RankingEntry>> {
        let players = self.repository.list_all_players()?;
        let tournaments = self.repository.list_all_tournaments()?;
        info!(
            "Computing rankings from {} player rows across {} tournaments",
            players.len(),
            tournaments.len()
        );

        let aggregator = PerformanceAggregator::new(self.settings);
        Ok(aggregator.rank(&players, &tournaments, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::SqliteRepository;
    use crate::services::import::ImportService;

    fn sheet(name: &str, tb1_lis: &str, tb1_nowak: &str) -> String {
        format!(
            "Export\n{name}\nRk.,Name,FED,Rtg,Pts.,TB1\n1,Lis Piotr,POL,2050,5,{tb1_lis}\n2,Nowak Anna,POL,1990,4,{tb1_nowak}\n"
        )
    }

    #[test]
    fn test_rankings_across_uploads() {
        let repo = SqliteRepository::in_memory().unwrap();
        let import = ImportService::new(&repo);
        import.import("a.csv", sheet("Open A", "10", "12").as_bytes()).unwrap();
        import.import("b.csv", sheet("Open B", "8", "").as_bytes()).unwrap();

        let settings = RankingSettings::default();
        let ranking = RankingService::new(&repo, &settings).rankings(50).unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Lis Piotr");
        assert_eq!(ranking[0].average_performance, Some(9.0));
        assert_eq!(
            ranking[0].tournaments_used[0].tournament_name.as_deref(),
            Some("Open A")
        );
        // a blank TB1 cell is stored as zero and still counts
        assert_eq!(ranking[1].name, "Nowak Anna");
        assert_eq!(ranking[1].average_performance, Some(6.0));
        assert_eq!(ranking[1].tournaments_used.len(), 2);
    }
}
