use regex::Regex;

use super::cell::{Cell, Grid};
use super::patterns::{NAME_HEADER, RANK_HEADER, RATING_HEADER};

/// Index of the first row declaring the player table.
///
/// A header row needs three different cells matching rank, name and rating.
pub fn locate_header_row(grid: &Grid) -> Option<usize> {
    grid.rows().iter().position(|row| is_header_row(row))
}

fn is_header_row(row: &[Cell]) -> bool {
    let texts: Vec<String> = row.iter().map(Cell::text).collect();
    let ranks = matching_indices(&texts, &RANK_HEADER);
    let names = matching_indices(&texts, &NAME_HEADER);
    let ratings = matching_indices(&texts, &RATING_HEADER);

    ranks.iter().any(|&rank| {
        names.iter().filter(|&&name| name != rank).any(|&name| {
            ratings
                .iter()
                .any(|&rating| rating != rank && rating != name)
        })
    })
}

fn matching_indices(texts: &[String], pattern: &Regex) -> Vec<usize> {
    texts
        .iter()
        .enumerate()
        .filter(|(_, text)| pattern.is_match(text))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::Text(c.to_string())).collect()
    }

    #[test]
    fn test_first_complete_row_wins() {
        let grid = Grid::new(vec![
            text_row(&["Spring Open"]),
            text_row(&["Rk.", "Name", "FED", "Rtg", "Pts."]),
            text_row(&["Rank", "Name", "Elo"]),
        ]);

        assert_eq!(locate_header_row(&grid), Some(1));
    }

    #[test]
    fn test_partial_rows_are_skipped() {
        let grid = Grid::new(vec![
            text_row(&["Rk.", "Name"]),
            text_row(&["Name", "Rtg"]),
            text_row(&["Pos", "Player name", "Elo"]),
        ]);

        assert_eq!(locate_header_row(&grid), Some(2));
    }

    #[test]
    fn test_roles_need_distinct_cells() {
        // "Name Elo" alone satisfies both name and rating
        let grid = Grid::new(vec![text_row(&["Rk", "Name Elo"])]);

        assert_eq!(locate_header_row(&grid), None);
    }

    #[test]
    fn test_missing_header() {
        let grid = Grid::new(vec![text_row(&["Organizer : Club"])]);

        assert_eq!(locate_header_row(&grid), None);
    }
}
