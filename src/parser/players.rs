use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::PlayerRecord;

use super::cell::{cell_text, parse_float, parse_int, parse_tie_break, Cell, Grid, Row};
use super::patterns;
use super::rounds::decode_round;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Rank,
    Name,
    Federation,
    Rating,
    Points,
    Round,
    TieBreak,
}

/// Header matchers in evaluation order. A cell takes the first role it matches.
static ROLE_MATCHERS: [(ColumnRole, &LazyLock<Regex>); 7] = [
    (ColumnRole::Rank, &patterns::RANK_HEADER),
    (ColumnRole::Federation, &patterns::FEDERATION_HEADER),
    (ColumnRole::Points, &patterns::POINTS_HEADER),
    (ColumnRole::TieBreak, &patterns::TIE_BREAK_HEADER),
    (ColumnRole::Round, &patterns::ROUND_HEADER),
    (ColumnRole::Name, &patterns::NAME_HEADER),
    (ColumnRole::Rating, &patterns::RATING_HEADER),
];

/// Column positions resolved once from the header row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    pub rank: Option<usize>,
    pub name: Option<usize>,
    pub federation: Option<usize>,
    pub rating: Option<usize>,
    pub points: Option<usize>,
    pub rounds: Vec<usize>,
    pub tie_breaks: Vec<(String, usize)>,
}

impl ColumnMap {
    pub fn from_header(header: &[Cell]) -> Self {
        header
            .iter()
            .map(Cell::text)
            .enumerate()
            .fold(Self::default(), |map, (index, text)| {
                match classify_header(&text) {
                    Some(role) => map.with_column(role, index, &text),
                    None => map,
                }
            })
    }

    fn with_column(mut self, role: ColumnRole, index: usize, text: &str) -> Self {
        match role {
            ColumnRole::Rank => {
                self.rank.get_or_insert(index);
            }
            ColumnRole::Name => {
                self.name.get_or_insert(index);
            }
            ColumnRole::Federation => {
                self.federation.get_or_insert(index);
            }
            ColumnRole::Rating => {
                self.rating.get_or_insert(index);
            }
            ColumnRole::Points => {
                self.points.get_or_insert(index);
            }
            ColumnRole::Round => self.rounds.push(index),
            ColumnRole::TieBreak => self.tie_breaks.push((text.to_uppercase(), index)),
        }
        self
    }
}

pub fn classify_header(text: &str) -> Option<ColumnRole> {
    ROLE_MATCHERS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(role, _)| *role)
}

/// Player records for every non-empty row below the header, in sheet order
pub fn extract_players(grid: &Grid, header_index: usize) -> Vec<PlayerRecord> {
    let Some(header) = grid.row(header_index) else {
        return Vec::new();
    };
    let columns = ColumnMap::from_header(header);

    grid.rows()
        .iter()
        .skip(header_index + 1)
        .filter(|row| !row.is_empty())
        .map(|row| extract_player(row, &columns))
        .collect()
}

fn extract_player(row: &Row, columns: &ColumnMap) -> PlayerRecord {
    let text_at = |index: Option<usize>| index.map(|i| cell_text(row, i)).unwrap_or_default();

    let rounds = columns
        .rounds
        .iter()
        .map(|&i| decode_round(&cell_text(row, i)))
        .collect();

    let tie_breaks: BTreeMap<String, Option<f64>> = columns
        .tie_breaks
        .iter()
        .map(|(key, i)| (key.clone(), parse_tie_break(&cell_text(row, *i))))
        .collect();

    PlayerRecord {
        rank: parse_rank(&text_at(columns.rank)),
        name: text_at(columns.name),
        federation: columns.federation.map(|i| cell_text(row, i)),
        rating: parse_int(&text_at(columns.rating)),
        points: parse_float(&text_at(columns.points)).unwrap_or(0.0),
        rounds,
        tie_breaks,
    }
}

fn parse_rank(text: &str) -> u32 {
    parse_int(text)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameResult;

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|c| Cell::Text(c.to_string())).collect()
    }

    fn header() -> Row {
        text_row(&[
            "Rk.", "SNo", "Name", "FED", "Rtg", "1.Rd", "2.Rd", "3.Rd", "Pts.", "TB1", "TB2",
        ])
    }

    #[test]
    fn test_column_map_from_header() {
        let columns = ColumnMap::from_header(&header());

        assert_eq!(columns.rank, Some(0));
        assert_eq!(columns.name, Some(2));
        assert_eq!(columns.federation, Some(3));
        assert_eq!(columns.rating, Some(4));
        assert_eq!(columns.rounds, vec![5, 6, 7]);
        assert_eq!(columns.points, Some(8));
        assert_eq!(
            columns.tie_breaks,
            vec![("TB1".to_string(), 9), ("TB2".to_string(), 10)]
        );
    }

    #[test]
    fn test_round_order_follows_columns_not_numbers() {
        let columns = ColumnMap::from_header(&text_row(&["Rk", "Name", "Elo", "2.Rd", "1.Rd"]));

        assert_eq!(columns.rounds, vec![3, 4]);
    }

    #[test]
    fn test_extract_players_in_row_order() {
        let grid = Grid::new(vec![
            text_row(&["Spring Open"]),
            header(),
            vec![
                Cell::Number(1.0),
                Cell::Number(4.0),
                Cell::Text(" Kowalski, Jan ".to_string()),
                Cell::Text("POL".to_string()),
                Cell::Number(2101.0),
                Cell::Text("15w1".to_string()),
                Cell::Empty,
                Cell::Text("3b½".to_string()),
                Cell::Number(2.5),
                Cell::Number(21.5),
                Cell::Text("x".to_string()),
            ],
            vec![],
            text_row(&["", "", "Nowak, Anna", "GER", "", "2b0"]),
        ]);

        let players = extract_players(&grid, 1);
        assert_eq!(players.len(), 2);

        let first = &players[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.name, "Kowalski, Jan");
        assert_eq!(first.federation.as_deref(), Some("POL"));
        assert_eq!(first.rating, Some(2101));
        assert_eq!(first.points, 2.5);
        assert_eq!(first.rounds.len(), 3);
        assert!(first.rounds[1].is_none());
        assert_eq!(first.rounds[2].as_ref().unwrap().result, Some(GameResult::Draw));
        assert_eq!(first.tie_breaks["TB1"], Some(21.5));
        assert_eq!(first.tie_breaks["TB2"], None);

        let second = &players[1];
        assert_eq!(second.rank, 0);
        assert_eq!(second.rating, None);
        assert_eq!(second.points, 0.0);
        assert_eq!(second.rounds[0].as_ref().unwrap().result, Some(GameResult::Loss));
        assert!(second.rounds[1].is_none());
        assert!(second.rounds[2].is_none());
    }

    #[test]
    fn test_missing_federation_column_leaves_field_absent() {
        let grid = Grid::new(vec![
            text_row(&["Pos", "Name", "Elo", "Pts"]),
            text_row(&["1", "Lis, Piotr", "1900", "3"]),
        ]);

        let players = extract_players(&grid, 0);

        assert_eq!(players[0].federation, None);
        assert_eq!(players[0].points, 3.0);
        assert!(players[0].tie_breaks.is_empty());
    }

    #[test]
    fn test_blank_tie_break_cells_are_zero() {
        let grid = Grid::new(vec![
            text_row(&["Rk", "Name", "Rtg", "TB1", "TB2", "TB3"]),
            vec![
                Cell::Text("1".to_string()),
                Cell::Text("Lis Piotr".to_string()),
                Cell::Text("1900".to_string()),
                Cell::Empty,
                Cell::Text("n/a".to_string()),
            ],
        ]);

        let players = extract_players(&grid, 0);

        assert_eq!(players[0].tie_breaks["TB1"], Some(0.0));
        assert_eq!(players[0].tie_breaks["TB2"], None);
        assert_eq!(players[0].tie_breaks["TB3"], Some(0.0));
    }
}
