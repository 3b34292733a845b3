//! Shared builders for unit tests
//!
//! `small_league()` is a four-team snapshot taken during the playoffs of
//! `FIXTURE_YEAR`, just before the season transition runs.

use crate::models::{
    Calendar, CareerSeason, CareerStats, Coach, Contract, ContractStatus, ContractYear, DraftPick,
    Game, InjuryStatus, League, LeagueEvent, PickKind, Player, PlayoffBracket, PlayoffMatchup,
    PlayoffRound, Position, Prospect, Schedule, ScoutingReport, SeasonPhase, SeasonSummary, Skill,
    StaffHierarchy, StandingsEntry, Team, TeamRecord,
};
use crate::state::{GamePlan, GameState, InSeasonState, PlayerSeasonStats, SessionState, WeeklyAward};
use std::collections::BTreeMap;

pub const FIXTURE_YEAR: u16 = 2030;
/// Best record, bracket winner, user team
pub const CHAMPION: &str = "CHI";
/// Worst record
pub const WORST_TEAM: &str = "ATL";

pub fn record(wins: u16, losses: u16, ties: u16, points_for: u32, points_against: u32) -> TeamRecord {
    TeamRecord { wins, losses, ties, points_for, points_against }
}

pub fn coach(id: &str, development: u8) -> Coach {
    Coach { id: id.to_string(), name: format!("Coach {}", id), development }
}

/// Team with a head coach and nobody on it.
pub fn team(id: &str, conference: &str, division: &str) -> Team {
    Team {
        id: id.to_string(),
        city: format!("{} City", id),
        name: format!("{}s", id),
        abbreviation: id.chars().take(3).collect(),
        conference: conference.to_string(),
        division: division.to_string(),
        current_record: TeamRecord::default(),
        all_time_record: TeamRecord::default(),
        roster: Vec::new(),
        practice_squad: Vec::new(),
        injured_reserve: Vec::new(),
        finances: Default::default(),
        staff: StaffHierarchy { head_coach: Some(coach(&format!("{}-hc", id), 60)), ..Default::default() },
        playoff_seed: None,
        is_eliminated: false,
    }
}

/// Healthy free agent with every skill at 60.
pub fn player(id: &str, age: u8) -> Player {
    Player {
        id: id.to_string(),
        name: format!("Player {}", id),
        position: Position::QB,
        age,
        experience: age.saturating_sub(21),
        fatigue: 0,
        morale: 50,
        injury: InjuryStatus::healthy(),
        potential: 75,
        skills: Skill::ALL.iter().map(|&s| (s, 60)).collect(),
        contract_id: None,
    }
}

/// Active contract starting in `FIXTURE_YEAR`, cap hit 1M in the first
/// year, 2M in the second and so on.
pub fn contract(id: &str, player_id: &str, team_id: &str, years: u8) -> Contract {
    let breakdown = (0..years as u16)
        .map(|offset| {
            let cap_hit = 1_000_000 * (offset as i64 + 1);
            ContractYear {
                year: FIXTURE_YEAR + offset,
                salary: cap_hit - 100_000,
                bonus: 100_000,
                cap_hit,
                is_void: false,
            }
        })
        .collect();

    Contract {
        id: id.to_string(),
        player_id: player_id.to_string(),
        team_id: team_id.to_string(),
        status: ContractStatus::Active,
        years_remaining: years,
        breakdown,
    }
}

fn pick(year: u16, round: u8, owner: &str, original: &str, kind: PickKind) -> DraftPick {
    DraftPick {
        id: format!("{}-R{}-{}", year, round, original),
        year,
        round,
        team_id: owner.to_string(),
        original_team_id: original.to_string(),
        kind,
    }
}

fn matchup(home: &str, away: &str, winner: &str) -> PlayoffMatchup {
    PlayoffMatchup {
        home_team_id: home.to_string(),
        away_team_id: away.to_string(),
        winner_team_id: Some(winner.to_string()),
    }
}

/// Four teams, five players each (three rostered, one practice squad, one
/// on injured reserve), all under contract and under 34.
pub fn small_league() -> GameState {
    // id, conference, division, record, all-time record, playoff seed
    let layout = [
        ("ATL", "AFC", "East", record(3, 14, 0, 280, 450), record(40, 62, 1, 2_000, 2_300), None),
        ("BOS", "AFC", "East", record(10, 7, 0, 390, 340), record(55, 47, 1, 2_250, 2_100), Some(2)),
        ("CHI", "NFC", "North", record(13, 4, 0, 450, 300), record(60, 42, 0, 2_400, 2_000), Some(1)),
        ("DEN", "NFC", "North", record(7, 9, 1, 330, 350), record(50, 51, 1, 2_100, 2_150), None),
    ];

    let mut teams = BTreeMap::new();
    let mut players = BTreeMap::new();
    let mut contracts = BTreeMap::new();

    for (t, (id, conference, division, current, all_time, seed)) in layout.into_iter().enumerate() {
        let mut team = team(id, conference, division);
        team.current_record = current;
        team.all_time_record = all_time;
        team.playoff_seed = seed;
        team.is_eliminated = seed.is_none();

        for n in 0..5u8 {
            let player_id = format!("{}-{:02}", id, n);
            let mut p = player(&player_id, 22 + n * 2 + t as u8);
            p.fatigue = 30 + n * 10;
            p.morale = match n {
                0 => 10,
                4 => 120,
                _ => 40 + n * 10,
            };

            let years = n % 3 + 1;
            let c = contract(&format!("c-{}", player_id), &player_id, id, years);
            p.contract_id = Some(c.id.clone());
            contracts.insert(c.id.clone(), c);

            match n {
                0..=2 => team.roster.push(player_id.clone()),
                3 => team.practice_squad.push(player_id.clone()),
                _ => {
                    p.injury = InjuryStatus::Injured { description: "Torn ACL".to_string(), weeks_out: 30 };
                    team.injured_reserve.push(player_id.clone());
                }
            }
            players.insert(player_id, p);
        }
        teams.insert(id.to_string(), team);
    }

    let team_ids: Vec<String> = teams.keys().cloned().collect();

    let mut draft_picks: Vec<DraftPick> =
        team_ids.iter().map(|id| pick(FIXTURE_YEAR, 1, id, id, PickKind::Original)).collect();
    draft_picks.push(pick(FIXTURE_YEAR + 1, 2, CHAMPION, WORST_TEAM, PickKind::Traded));

    let prospects = (0..3)
        .map(|i| {
            let mut p = player(&format!("prospect-{}", i), 21);
            p.experience = 0;
            let prospect = Prospect {
                player: p,
                scouting: ScoutingReport { grade: 70 - i as u8 * 5, projected_round: i as u8 + 1, college: "State".to_string() },
                draft_year: FIXTURE_YEAR,
            };
            (prospect.id().to_string(), prospect)
        })
        .collect();

    let league = League {
        calendar: Calendar {
            current_year: FIXTURE_YEAR,
            current_week: 21,
            current_phase: SeasonPhase::Playoffs,
            offseason_phase: None,
        },
        season_history: vec![SeasonSummary {
            year: FIXTURE_YEAR - 1,
            champion_team_id: "BOS".to_string(),
            mvp_player_id: "BOS-00".to_string(),
            draft_order: vec!["DEN".into(), "ATL".into(), "CHI".into(), "BOS".into()],
        }],
        standings: teams
            .values()
            .map(|t| StandingsEntry { team_id: t.id.clone(), record: t.current_record })
            .collect(),
        playoff_bracket: Some(PlayoffBracket {
            rounds: vec![
                PlayoffRound {
                    name: "Conference".to_string(),
                    matchups: vec![matchup("CHI", "DEN", "CHI"), matchup("BOS", "ATL", "BOS")],
                },
                PlayoffRound { name: "Final".to_string(), matchups: vec![matchup("CHI", "BOS", CHAMPION)] },
            ],
        }),
        schedule: Some(Schedule {
            year: FIXTURE_YEAR,
            regular_season: vec![
                Game { week: 1, home_team_id: "ATL".into(), away_team_id: "BOS".into() },
                Game { week: 1, home_team_id: "CHI".into(), away_team_id: "DEN".into() },
            ],
        }),
        team_ids,
        upcoming_events: vec![LeagueEvent { week: 22, description: "Championship parade".to_string() }],
    };

    let session = SessionState::InSeason(InSeasonState {
        weekly_game_plan: Some(GamePlan { offense: "Spread".to_string(), defense: "Cover 2".to_string() }),
        start_sit_decisions: [("CHI-00".to_string(), true)].into_iter().collect(),
        weekly_awards: vec![WeeklyAward { week: 20, award: "Offensive Player".to_string(), player_id: "CHI-00".to_string() }],
        waiver_wire: vec!["ATL-03".to_string()],
        season_stats: [("CHI-00".to_string(), PlayerSeasonStats { games: 17, yards: 4_100, touchdowns: 32 })]
            .into_iter()
            .collect(),
        ..Default::default()
    });

    let career_stats = CareerStats {
        seasons_completed: 1,
        total_wins: 9,
        total_losses: 8,
        playoff_appearances: 0,
        championships: 0,
        history: vec![CareerSeason {
            year: FIXTURE_YEAR - 1,
            wins: 9,
            losses: 8,
            made_playoffs: false,
            won_championship: false,
        }],
    };

    GameState {
        league,
        teams,
        players,
        contracts,
        draft_picks,
        prospects,
        career_stats,
        user_team_id: Some(CHAMPION.to_string()),
        session: Some(session),
    }
}
