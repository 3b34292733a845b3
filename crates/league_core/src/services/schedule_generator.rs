//! Round-robin schedule construction
//!
//! Circle method: one slot stays fixed and the rest rotate, so every round
//! pairs each team exactly once. Teams are seeded by last season's finishing
//! place, which decides who meets whom in the first rounds.

use super::ScheduleGenerator;
use crate::models::{Game, PreviousStandings, Schedule, Team};

pub struct RoundRobinScheduleGenerator {
    games_per_team: u8,
}

impl RoundRobinScheduleGenerator {
    pub fn new(games_per_team: u8) -> Self {
        Self { games_per_team }
    }

    /// Standings order first, then any team the standings did not list.
    fn seeded_order<'a>(teams: &[&'a Team], previous: &'a PreviousStandings) -> Vec<&'a str> {
        let mut order: Vec<&str> = previous
            .teams_by_place()
            .into_iter()
            .filter(|id| teams.iter().any(|t| t.id == *id))
            .collect();
        let mut missing: Vec<&str> =
            teams.iter().copied().map(|t| t.id.as_str()).filter(|id| !order.contains(id)).collect();
        missing.sort_unstable();
        order.extend(missing);
        order
    }

    /// Pairings for round `round` of the circle.
    fn round_pairings<'a>(slots: &[Option<&'a str>], round: usize) -> Vec<(Option<&'a str>, Option<&'a str>)> {
        let n = slots.len();
        let mut rotated = Vec::with_capacity(n);
        rotated.push(slots[0]);
        let rest = &slots[1..];
        let shift = round % rest.len();
        rotated.extend(rest[rest.len() - shift..].iter().copied());
        rotated.extend(rest[..rest.len() - shift].iter().copied());

        (0..n / 2).map(|i| (rotated[i], rotated[n - 1 - i])).collect()
    }
}

impl ScheduleGenerator for RoundRobinScheduleGenerator {
    fn generate(&mut self, teams: &[&Team], previous: &PreviousStandings, year: u16) -> Schedule {
        let order = Self::seeded_order(teams, previous);
        if order.len() < 2 {
            return Schedule { year, regular_season: Vec::new() };
        }

        let mut slots: Vec<Option<&str>> = order.into_iter().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None); // bye
        }
        let rounds = slots.len() - 1;

        let mut games = Vec::with_capacity(self.games_per_team as usize * slots.len() / 2);
        for week_index in 0..self.games_per_team as usize {
            let week = week_index as u8 + 1;
            for (i, pairing) in Self::round_pairings(&slots, week_index % rounds).into_iter().enumerate() {
                let (Some(a), Some(b)) = pairing else {
                    continue;
                };
                let (home, away) = if (week_index + i) % 2 == 0 { (a, b) } else { (b, a) };
                games.push(Game { week, home_team_id: home.to_string(), away_team_id: away.to_string() });
            }
        }

        Schedule { year, regular_season: games }
    }
}
