//! LeagueBuilder - fresh league snapshots
//!
//! Builds a valid `GameState` from nothing but a year, a team count and a
//! seed: teams with coaching staffs, full rosters under contract, cap figures,
//! this year's picks, a prospect pool and a schedule.
//!
//! ```rust
//! use league_core::bootstrap::LeagueBuilder;
//!
//! let state = LeagueBuilder::new(2024, 8).seed(7).played_season(true).build();
//! assert_eq!(state.teams.len(), 8);
//! assert!(state.validate().is_ok());
//! ```

use crate::config::LeagueConfig;
use crate::models::{
    Calendar, Coach, Contract, ContractStatus, ContractYear, Game, League, Money, PickKind,
    PlayoffBracket, PlayoffMatchup, PlayoffRound, Position, PreviousStandings, SeasonPhase,
    StaffHierarchy, StandingsEntry, Team, TeamFinances, TeamRecord,
};
use crate::season::standings;
use crate::services::{
    CapCalculator, DraftClassGenerator, PickIssuer, PlayerConstraints, PlayerGenerator,
    RandomPlayerGenerator, RoundRobinScheduleGenerator, ScheduleGenerator, StandardCapCalculator,
    StandardDraftClassGenerator, StandardPickIssuer,
};
use crate::state::{GameState, InSeasonState, SessionState};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

const FRANCHISES: &[(&str, &str, &str)] = &[
    ("ARI", "Arizona", "Scorpions"),
    ("ATL", "Atlanta", "Firebirds"),
    ("BAL", "Baltimore", "Harbormen"),
    ("BOS", "Boston", "Minutemen"),
    ("CHA", "Charlotte", "Hornets"),
    ("CHI", "Chicago", "Blizzard"),
    ("CIN", "Cincinnati", "Riverboats"),
    ("CLE", "Cleveland", "Ironmen"),
    ("DAL", "Dallas", "Wranglers"),
    ("DEN", "Denver", "Peaks"),
    ("DET", "Detroit", "Motors"),
    ("GB", "Green Bay", "Lumberjacks"),
    ("HOU", "Houston", "Rockets"),
    ("IND", "Indianapolis", "Racers"),
    ("JAX", "Jacksonville", "Stingrays"),
    ("KC", "Kansas City", "Monarchs"),
    ("LV", "Las Vegas", "Aces"),
    ("LA", "Los Angeles", "Stars"),
    ("MEM", "Memphis", "Blues"),
    ("MIA", "Miami", "Hurricanes"),
    ("MIN", "Minnesota", "Lakers"),
    ("NO", "New Orleans", "Krewe"),
    ("NY", "New York", "Titans"),
    ("OAK", "Oakland", "Invaders"),
    ("ORL", "Orlando", "Thunder"),
    ("PHI", "Philadelphia", "Liberty"),
    ("PIT", "Pittsburgh", "Forge"),
    ("POR", "Portland", "Pioneers"),
    ("SD", "San Diego", "Mariners"),
    ("SEA", "Seattle", "Sounders"),
    ("STL", "St. Louis", "Archers"),
    ("TB", "Tampa Bay", "Buccaneers"),
];

const CONFERENCES: [&str; 2] = ["AFC", "NFC"];
const DIVISIONS: [&str; 4] = ["East", "North", "South", "West"];
const PRACTICE_SQUAD_SIZE: usize = 4;
const COACH_NAMES: &[&str] = &[
    "Bill Harmon", "Andy Reese", "Sean Doyle", "Kyle Brennan", "Mike Tolliver", "Dan Quinlan",
    "Pete Carrow", "John Hadley", "Nick Serrano", "Matt Lafferty", "Ron Whitaker", "Dave Ellison",
];

// Generator streams, offset from the builder seed.
const PLAYER_STREAM: u64 = 1;
const DRAFT_STREAM: u64 = 2;

/// Declarative builder for a new league
pub struct LeagueBuilder {
    year: u16,
    team_count: usize,
    seed: u64,
    config: LeagueConfig,
    played_season: bool,
    user_team: Option<String>,
}

impl LeagueBuilder {
    pub fn new(year: u16, team_count: usize) -> Self {
        Self {
            year,
            team_count,
            seed: 0,
            config: LeagueConfig::default(),
            played_season: false,
            user_team: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: LeagueConfig) -> Self {
        self.config = config;
        self
    }

    /// Fill in regular-season results and a decided playoff bracket, leaving
    /// the snapshot where a season transition expects it.
    pub fn played_season(mut self, played: bool) -> Self {
        self.played_season = played;
        self
    }

    /// Defaults to the first team.
    pub fn user_team(mut self, team_id: &str) -> Self {
        self.user_team = Some(team_id.to_string());
        self
    }

    pub fn build(self) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut players_gen = RandomPlayerGenerator::new(self.seed.wrapping_add(PLAYER_STREAM));

        let mut teams = BTreeMap::new();
        let mut players = BTreeMap::new();
        let mut contracts = BTreeMap::new();

        for index in 0..self.team_count {
            let mut team = Self::franchise(index, &mut rng);

            let mut signings = Vec::new();
            for position in Position::ALL {
                for _ in 0..position.roster_slots() {
                    let player = players_gen.generate(&PlayerConstraints::veteran(position));
                    team.roster.push(player.id.clone());
                    signings.push(player);
                }
            }
            for _ in 0..PRACTICE_SQUAD_SIZE {
                let player = players_gen.generate(&PlayerConstraints::default());
                team.practice_squad.push(player.id.clone());
                signings.push(player);
            }

            for mut player in signings {
                let contract = self.sign(&player.id, &team.id, player.overall(), &mut rng);
                player.contract_id = Some(contract.id.clone());
                contracts.insert(contract.id.clone(), contract);
                players.insert(player.id.clone(), player);
            }

            teams.insert(team.id.clone(), team);
        }

        let team_ids: Vec<String> = teams.keys().cloned().collect();
        let draft_picks = StandardPickIssuer::new(self.config.draft.rounds).generate(
            self.year,
            &team_ids,
            PickKind::Original,
        );
        let prospects = StandardDraftClassGenerator::new(
            self.seed.wrapping_add(DRAFT_STREAM),
            self.config.draft.class_size,
            self.config.draft.rounds,
        )
        .generate(self.year)
        .prospects
        .into_iter()
        .map(|p| (p.id().to_string(), p))
        .collect();

        let schedule = {
            let refs: Vec<&Team> = teams.values().collect();
            RoundRobinScheduleGenerator::new(self.config.schedule.games_per_team).generate(
                &refs,
                &PreviousStandings::default(),
                self.year,
            )
        };

        let cap = StandardCapCalculator;
        for team in teams.values_mut() {
            let owned: Vec<&Contract> = contracts.values().filter(|c| c.team_id == team.id).collect();
            let salary_cap = self.config.finance.salary_cap_for(self.year);
            let usage = cap.total_cap_usage(&owned, self.year);
            let future = cap.future_commitments(&owned, self.year);
            team.finances = TeamFinances {
                salary_cap,
                current_cap_usage: usage,
                cap_space: salary_cap - usage,
                next_year_commitments: future.next_year,
                two_years_out_commitments: future.two_years_out,
                three_years_out_commitments: future.three_years_out,
                cap_penalties: Vec::new(),
            };
        }

        let user_team_id = self.user_team.clone().or_else(|| team_ids.first().cloned());
        let mut state = GameState {
            league: League {
                calendar: Calendar::season_start(self.year),
                season_history: Vec::new(),
                standings: Vec::new(),
                playoff_bracket: None,
                schedule: Some(schedule),
                team_ids,
                upcoming_events: Vec::new(),
            },
            teams,
            players,
            contracts,
            draft_picks,
            prospects,
            career_stats: Default::default(),
            user_team_id,
            session: Some(SessionState::InSeason(InSeasonState::default())),
        };

        if self.played_season {
            Self::play_season(&mut state, &mut rng);
        }

        log::debug!(
            "Built {} league: {} teams, {} players, seed {}",
            self.year,
            state.teams.len(),
            state.players.len(),
            self.seed
        );
        state
    }

    fn franchise(index: usize, rng: &mut ChaCha8Rng) -> Team {
        let (abbreviation, city, name) = match FRANCHISES.get(index) {
            Some(&(abbr, city, name)) => (abbr.to_string(), city.to_string(), name.to_string()),
            None => (format!("T{:02}", index), format!("Expansion {}", index), "Expansion".to_string()),
        };
        let mut coach = |role: &str| Coach {
            id: format!("{}-{}", abbreviation, role),
            name: COACH_NAMES.choose(&mut *rng).copied().unwrap_or("Staff").to_string(),
            development: rng.gen_range(30..=90),
        };
        let staff = StaffHierarchy {
            head_coach: Some(coach("HC")),
            offensive_coordinator: Some(coach("OC")),
            defensive_coordinator: Some(coach("DC")),
        };

        Team {
            id: abbreviation.clone(),
            city,
            name,
            abbreviation,
            conference: CONFERENCES[index % CONFERENCES.len()].to_string(),
            division: DIVISIONS[(index / CONFERENCES.len()) % DIVISIONS.len()].to_string(),
            current_record: TeamRecord::default(),
            all_time_record: TeamRecord::default(),
            roster: Vec::new(),
            practice_squad: Vec::new(),
            injured_reserve: Vec::new(),
            finances: TeamFinances::default(),
            staff,
            playoff_seed: None,
            is_eliminated: false,
        }
    }

    /// One to four years, paid by overall rating.
    fn sign(&self, player_id: &str, team_id: &str, overall: u8, rng: &mut ChaCha8Rng) -> Contract {
        let years: u8 = rng.gen_range(1..=4);
        let base: Money = 750_000 + (overall.saturating_sub(40) as Money) * 180_000;
        let breakdown: Vec<ContractYear> = (0..years as u16)
            .map_while(|offset| {
                let year = self.year.checked_add(offset)?;
                let bonus = base / 5;
                let salary = base + base * offset as Money / 20;
                Some(ContractYear { year, salary, bonus, cap_hit: salary + bonus, is_void: false })
            })
            .collect();

        Contract {
            id: format!("CT-{}", player_id),
            player_id: player_id.to_string(),
            team_id: team_id.to_string(),
            status: ContractStatus::Active,
            years_remaining: breakdown.len() as u8,
            breakdown,
        }
    }

    /// Random scores for every scheduled game, then a single-elimination
    /// bracket over the best four records (two in smaller leagues).
    fn play_season(state: &mut GameState, rng: &mut ChaCha8Rng) {
        let games: Vec<Game> =
            state.league.schedule.as_ref().map(|s| s.regular_season.clone()).unwrap_or_default();
        let last_week = games.iter().map(|g| g.week).max().unwrap_or(0);

        for game in &games {
            let home_points: u32 = rng.gen_range(6..=45);
            let away_points: u32 = rng.gen_range(3..=42);
            Self::record_result(state, &game.home_team_id, home_points, away_points);
            Self::record_result(state, &game.away_team_id, away_points, home_points);
        }

        let mut ranked = standings::draft_order(state.teams.values());
        ranked.reverse();
        let field = if ranked.len() >= 4 { 4 } else { ranked.len().min(2) };
        let seeds: Vec<String> = ranked.into_iter().take(field).collect();

        for (seed, team_id) in seeds.iter().enumerate() {
            if let Some(team) = state.teams.get_mut(team_id) {
                team.playoff_seed = Some(seed as u8 + 1);
            }
        }
        for team in state.teams.values_mut() {
            team.is_eliminated = team.playoff_seed.is_none();
        }

        let mut rounds = Vec::new();
        let mut alive = seeds;
        while alive.len() >= 2 {
            let matchups: Vec<PlayoffMatchup> = (0..alive.len() / 2)
                .map(|i| {
                    let home = alive[i].clone();
                    let away = alive[alive.len() - 1 - i].clone();
                    let winner = if rng.gen_bool(0.6) { home.clone() } else { away.clone() };
                    PlayoffMatchup { home_team_id: home, away_team_id: away, winner_team_id: Some(winner) }
                })
                .collect();
            alive = matchups.iter().filter_map(|m| m.winner_team_id.clone()).collect();
            let name = if alive.len() == 1 { "Championship" } else { "Semifinal" };
            rounds.push(PlayoffRound { name: name.to_string(), matchups });
        }

        state.league.standings = state
            .teams
            .values()
            .map(|t| StandingsEntry { team_id: t.id.clone(), record: t.current_record })
            .collect();
        state.league.calendar = Calendar {
            current_year: state.league.calendar.current_year,
            current_week: last_week.saturating_add(rounds.len() as u8),
            current_phase: SeasonPhase::Playoffs,
            offseason_phase: None,
        };
        state.league.playoff_bracket = Some(PlayoffBracket { rounds });
    }

    fn record_result(state: &mut GameState, team_id: &str, scored: u32, allowed: u32) {
        let Some(team) = state.teams.get_mut(team_id) else {
            return;
        };
        let record = &mut team.current_record;
        match scored.cmp(&allowed) {
            std::cmp::Ordering::Greater => record.wins += 1,
            std::cmp::Ordering::Less => record.losses += 1,
            std::cmp::Ordering::Equal => record.ties += 1,
        }
        record.points_for += scored;
        record.points_against += allowed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_league_is_valid() {
        let state = LeagueBuilder::new(2024, 32).seed(7).build();

        assert!(state.validate().is_ok());
        assert_eq!(state.teams.len(), 32);
        assert_eq!(state.league.team_ids.len(), 32);
        assert_eq!(state.league.calendar.current_week, 1);
        assert_eq!(state.draft_picks.len(), 7 * 32);
        assert_eq!(state.prospects.len(), 256);
        assert_eq!(state.league.schedule.as_ref().unwrap().regular_season.len(), 272);
        assert!(state.players.values().all(|p| p.contract_id.is_some()));
    }

    #[test]
    fn test_rosters_fill_every_slot() {
        let state = LeagueBuilder::new(2024, 4).seed(1).build();
        for team in state.teams.values() {
            assert_eq!(team.roster.len(), 53);
            assert_eq!(team.practice_squad.len(), PRACTICE_SQUAD_SIZE);
            assert!(team.head_coach().is_some());
            assert!(team.finances.current_cap_usage > 0);
            assert_eq!(team.finances.cap_space, team.finances.salary_cap - team.finances.current_cap_usage);
        }
    }

    #[test]
    fn test_divisions_split_evenly() {
        let state = LeagueBuilder::new(2024, 32).build();
        let mut sizes: BTreeMap<(String, String), usize> = BTreeMap::new();
        for team in state.teams.values() {
            *sizes.entry((team.conference.clone(), team.division.clone())).or_default() += 1;
        }
        assert_eq!(sizes.len(), 8);
        assert!(sizes.values().all(|&n| n == 4));
    }

    #[test]
    fn test_played_season_has_champion() {
        let state = LeagueBuilder::new(2024, 8).seed(5).played_season(true).build();

        let bracket = state.league.playoff_bracket.as_ref().unwrap();
        let champion = bracket.champion().unwrap();
        assert!(state.teams[champion].playoff_seed.is_some());
        assert_eq!(state.league.calendar.current_phase, SeasonPhase::Playoffs);
        assert!(state.teams.values().all(|t| t.current_record.games_played() == 17));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_same_seed_same_league() {
        let a = LeagueBuilder::new(2024, 6).seed(11).played_season(true).build();
        let b = LeagueBuilder::new(2024, 6).seed(11).played_season(true).build();
        assert_eq!(a.digest(), b.digest());

        let c = LeagueBuilder::new(2024, 6).seed(12).played_season(true).build();
        assert_ne!(a.digest(), c.digest());
    }

    #[test]
    fn test_expansion_teams_beyond_named_franchises() {
        let state = LeagueBuilder::new(2024, 34).build();
        assert!(state.teams.contains_key("T33"));
        assert!(state.validate().is_ok());
    }
}
