use super::Money;
use serde::{Deserialize, Serialize};

/// Win/loss/tie line plus points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamRecord {
    pub wins: u16,
    pub losses: u16,
    pub ties: u16,
    pub points_for: u32,
    pub points_against: u32,
}

impl TeamRecord {
    pub fn games_played(&self) -> u32 {
        self.wins as u32 + self.losses as u32 + self.ties as u32
    }

    /// `(wins + 0.5 * ties) / games`, zero for a team that has not played.
    pub fn win_percentage(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / games as f64
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// Field-wise sum, saturating.
    pub fn combined(&self, other: &TeamRecord) -> TeamRecord {
        TeamRecord {
            wins: self.wins.saturating_add(other.wins),
            losses: self.losses.saturating_add(other.losses),
            ties: self.ties.saturating_add(other.ties),
            points_for: self.points_for.saturating_add(other.points_for),
            points_against: self.points_against.saturating_add(other.points_against),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == TeamRecord::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub id: String,
    pub name: String,
    /// Player development skill, 0..=100
    pub development: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StaffHierarchy {
    #[serde(default)]
    pub head_coach: Option<Coach>,
    #[serde(default)]
    pub offensive_coordinator: Option<Coach>,
    #[serde(default)]
    pub defensive_coordinator: Option<Coach>,
}

/// Dead money carried for a released player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapPenalty {
    pub player_id: String,
    pub amount: Money,
    pub years_remaining: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamFinances {
    pub salary_cap: Money,
    pub current_cap_usage: Money,
    pub cap_space: Money,
    pub next_year_commitments: Money,
    pub two_years_out_commitments: Money,
    pub three_years_out_commitments: Money,
    #[serde(default)]
    pub cap_penalties: Vec<CapPenalty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub city: String,
    pub name: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
    #[serde(default)]
    pub current_record: TeamRecord,
    #[serde(default)]
    pub all_time_record: TeamRecord,
    #[serde(default)]
    pub roster: Vec<String>,
    #[serde(default)]
    pub practice_squad: Vec<String>,
    #[serde(default)]
    pub injured_reserve: Vec<String>,
    #[serde(default)]
    pub finances: TeamFinances,
    #[serde(default)]
    pub staff: StaffHierarchy,
    #[serde(default)]
    pub playoff_seed: Option<u8>,
    #[serde(default)]
    pub is_eliminated: bool,
}

impl Team {
    /// Roster, practice squad and injured reserve, in that order.
    pub fn all_player_ids(&self) -> impl Iterator<Item = &String> {
        self.roster.iter().chain(self.practice_squad.iter()).chain(self.injured_reserve.iter())
    }

    pub fn head_coach(&self) -> Option<&Coach> {
        self.staff.head_coach.as_ref()
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_percentage_counts_ties_as_half() {
        let record = TeamRecord { wins: 10, losses: 6, ties: 1, points_for: 400, points_against: 350 };
        assert!((record.win_percentage() - 10.5 / 17.0).abs() < 1e-9);
        assert_eq!(record.point_differential(), 50);
    }

    #[test]
    fn test_win_percentage_zero_games() {
        assert_eq!(TeamRecord::default().win_percentage(), 0.0);
    }

    #[test]
    fn test_combined_sums_every_field() {
        let a = TeamRecord { wins: 3, losses: 2, ties: 1, points_for: 100, points_against: 90 };
        let b = TeamRecord { wins: 1, losses: 4, ties: 0, points_for: 50, points_against: 120 };
        let sum = a.combined(&b);
        assert_eq!(sum, TeamRecord { wins: 4, losses: 6, ties: 1, points_for: 150, points_against: 210 });
        assert!(!sum.is_zero());
    }
}
