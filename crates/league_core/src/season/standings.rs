//! Record ordering shared by the history and schedule steps

use crate::models::{DivisionStanding, PreviousStandings, Team, TeamRecord};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Worse record first: win percentage, then point differential.
pub fn compare_records(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    a.win_percentage()
        .total_cmp(&b.win_percentage())
        .then_with(|| a.point_differential().cmp(&b.point_differential()))
}

/// Team ids worst to best by current record. Equal records keep id order.
pub fn draft_order<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Vec<String> {
    let mut ordered: Vec<&Team> = teams.into_iter().collect();
    ordered.sort_by(|a, b| compare_records(&a.current_record, &b.current_record));
    ordered.into_iter().map(|t| t.id.clone()).collect()
}

/// Divisions grouped by conference and name, each ordered best to worst.
pub fn previous_standings<'a>(teams: impl IntoIterator<Item = &'a Team>) -> PreviousStandings {
    let mut grouped: BTreeMap<(&str, &str), Vec<&Team>> = BTreeMap::new();
    for team in teams {
        grouped.entry((team.conference.as_str(), team.division.as_str())).or_default().push(team);
    }

    let divisions = grouped
        .into_iter()
        .map(|((conference, division), mut members)| {
            members.sort_by(|a, b| compare_records(&b.current_record, &a.current_record));
            DivisionStanding {
                conference: conference.to_string(),
                division: division.to_string(),
                team_ids: members.into_iter().map(|t| t.id.clone()).collect(),
            }
        })
        .collect();

    PreviousStandings { divisions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::test_fixtures::{record, team};

    fn team_with(id: &str, conference: &str, division: &str, rec: TeamRecord) -> Team {
        let mut t = team(id, conference, division);
        t.current_record = rec;
        t
    }

    #[test]
    fn test_draft_order_worst_first() {
        let teams = vec![
            team_with("A", "X", "1", record(12, 5, 0, 400, 300)),
            team_with("B", "X", "1", record(3, 14, 0, 250, 400)),
            team_with("C", "X", "2", record(8, 8, 1, 350, 350)),
        ];
        assert_eq!(draft_order(&teams), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_draft_order_tie_broken_by_differential() {
        let teams = vec![
            team_with("A", "X", "1", record(8, 9, 0, 380, 300)),
            team_with("B", "X", "1", record(8, 9, 0, 300, 380)),
        ];
        assert_eq!(draft_order(&teams), vec!["B", "A"]);
    }

    #[test]
    fn test_zero_games_counts_as_zero_percent() {
        let teams = vec![
            team_with("A", "X", "1", record(1, 16, 0, 100, 400)),
            team_with("B", "X", "1", TeamRecord::default()),
        ];
        // 0.0 vs 1/17: the team with no games picks first
        assert_eq!(draft_order(&teams), vec!["B", "A"]);
    }

    #[test]
    fn test_ties_count_half() {
        let teams = vec![
            team_with("A", "X", "1", record(8, 8, 1, 300, 300)),
            team_with("B", "X", "1", record(8, 9, 0, 300, 300)),
        ];
        assert_eq!(draft_order(&teams), vec!["B", "A"]);
    }

    #[test]
    fn test_previous_standings_grouped_best_first() {
        let teams = vec![
            team_with("A", "AFC", "East", record(4, 13, 0, 200, 400)),
            team_with("B", "AFC", "East", record(11, 6, 0, 400, 300)),
            team_with("C", "NFC", "West", record(9, 8, 0, 360, 350)),
            team_with("D", "NFC", "West", record(9, 8, 0, 380, 340)),
        ];
        let standings = previous_standings(&teams);

        assert_eq!(standings.divisions.len(), 2);
        assert_eq!(standings.divisions[0].conference, "AFC");
        assert_eq!(standings.divisions[0].team_ids, vec!["B", "A"]);
        assert_eq!(standings.divisions[1].team_ids, vec!["D", "C"]);
        assert_eq!(standings.place_of("A"), Some(1));
        assert_eq!(standings.teams_by_place(), vec!["B", "D", "A", "C"]);
    }
}
