//! End-to-end properties of a full season transition on generated leagues.

use league_core::config::{LeagueConfig, RetirementConfig};
use league_core::models::{ContractStatus, SeasonPhase};
use league_core::season::RetirementResolver;
use league_core::{
    transition_to_new_season, GameState, LeagueBuilder, SeasonPipeline, TransitionContext, TransitionError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const YEAR: u16 = 2024;

fn league(teams: usize, seed: u64) -> GameState {
    LeagueBuilder::new(YEAR, teams).seed(seed).played_season(true).build()
}

fn advance(state: &GameState, seed: u64) -> GameState {
    transition_to_new_season(state, &mut TransitionContext::standard(seed)).unwrap()
}

#[test]
fn test_calendar_opens_week_one_of_next_year() {
    let input = league(32, 1);
    let result = advance(&input, 10);

    let calendar = &result.league.calendar;
    assert_eq!(calendar.current_year, YEAR + 1);
    assert_eq!(calendar.current_week, 1);
    assert_eq!(calendar.current_phase, SeasonPhase::RegularSeason);
    assert!(calendar.offseason_phase.is_none());
}

#[test]
fn test_records_roll_into_all_time() {
    let input = league(32, 2);
    let result = advance(&input, 10);

    for (id, before) in &input.teams {
        let after = &result.teams[id];
        assert!(after.current_record.is_zero());
        assert_eq!(after.all_time_record.wins, before.all_time_record.wins + before.current_record.wins);
        assert_eq!(after.all_time_record.losses, before.all_time_record.losses + before.current_record.losses);
        assert_eq!(after.all_time_record.ties, before.all_time_record.ties + before.current_record.ties);
    }
}

#[test]
fn test_history_appends_input_year() {
    let input = league(32, 3);
    let result = advance(&input, 10);

    assert_eq!(result.league.season_history.len(), input.league.season_history.len() + 1);
    let entry = result.league.season_history.last().unwrap();
    assert_eq!(entry.year, YEAR);
    assert_eq!(Some(entry.champion_team_id.as_str()), input.league.playoff_bracket.as_ref().unwrap().champion());
    assert_eq!(entry.draft_order.len(), 32);
}

#[test]
fn test_survivors_age_and_rest() {
    let input = league(32, 4);
    let result = advance(&input, 10);

    assert!(!result.players.is_empty());
    for (id, after) in &result.players {
        let before = &input.players[id];
        assert_eq!(after.age, before.age + 1);
        assert_eq!(after.experience, before.experience + 1);
        assert_eq!(after.fatigue, 0);
        assert!(after.injury.is_healthy());
    }
}

#[test]
fn test_prospect_pool_replaced() {
    let mut input = league(32, 5);
    let result = advance(&input, 10);
    assert!(result.prospects.len() > 200);
    assert!(result.prospects.keys().all(|id| !input.prospects.contains_key(id)));

    input.prospects.clear();
    let result = advance(&input, 10);
    assert!(result.prospects.len() > 200);
    assert!(result.prospects.values().all(|p| p.draft_year == YEAR + 1));
}

#[test]
fn test_next_year_picks_issued_and_stale_purged() {
    let input = league(32, 6);
    let result = advance(&input, 10);

    let next_year = result.draft_picks.iter().filter(|p| p.year == YEAR + 1).count();
    assert_eq!(next_year, 7 * 32);
    assert!(result.draft_picks.iter().all(|p| p.year > YEAR));
}

#[test]
fn test_final_year_contracts_expire_and_free_players() {
    let input = league(32, 7);
    let config = LeagueConfig::deterministic();
    let result =
        transition_to_new_season(&input, &mut TransitionContext::with_config(10, config)).unwrap();

    let final_year: Vec<_> = input.contracts.values().filter(|c| c.years_remaining == 1).collect();
    assert!(!final_year.is_empty());
    for before in final_year {
        let after = &result.contracts[&before.id];
        assert_eq!(after.status, ContractStatus::Expired);
        assert_eq!(after.years_remaining, 0);
        assert!(result.players[&before.player_id].contract_id.is_none());
    }
}

#[test]
fn test_full_league_schedule() {
    let input = league(32, 8);
    let result = advance(&input, 10);

    let schedule = result.league.schedule.as_ref().unwrap();
    assert_eq!(schedule.year, YEAR + 1);
    assert_eq!(schedule.regular_season.len(), 272);
    assert_eq!(schedule.teams_covered().len(), 32);
}

#[test]
fn test_session_data_cleared() {
    let input = league(32, 9);
    assert!(input.session.is_some());
    let result = advance(&input, 10);

    assert!(result.session.is_none());
    assert!(result.league.standings.is_empty());
    assert!(result.league.playoff_bracket.is_none());
    assert!(result.teams.values().all(|t| t.playoff_seed.is_none() && !t.is_eliminated));
}

#[test]
fn test_career_stats_follow_user_team() {
    let input = league(32, 11);
    let user = input.user_team().unwrap().clone();
    let result = advance(&input, 10);

    let before = &input.career_stats;
    let after = &result.career_stats;
    assert_eq!(after.seasons_completed, before.seasons_completed + 1);
    assert_eq!(after.total_wins, before.total_wins + user.current_record.wins as u32);
    assert_eq!(after.total_losses, before.total_losses + user.current_record.losses as u32);
    assert_eq!(after.history.last().unwrap().made_playoffs, user.playoff_seed.is_some());
}

#[test]
fn test_two_transitions_compose() {
    let input = league(16, 12);
    let mut ctx = TransitionContext::standard(10);

    let once = transition_to_new_season(&input, &mut ctx).unwrap();
    let twice = transition_to_new_season(&once, &mut ctx).unwrap();

    assert_eq!(twice.league.calendar.current_year, YEAR + 2);
    assert_eq!(twice.league.season_history.len(), input.league.season_history.len() + 2);
    assert_eq!(twice.career_stats.seasons_completed, input.career_stats.seasons_completed + 2);
    assert!(twice.draft_picks.iter().all(|p| p.year > YEAR + 1));
    assert!(twice.validate().is_ok());
}

#[test]
fn test_reused_seed_still_drafts_fresh_classes() {
    let input = league(8, 15);
    let first = advance(&input, 42);
    let second = advance(&first, 42);

    assert!(!first.prospects.is_empty());
    assert_eq!(first.prospects.len(), second.prospects.len());
    assert!(second.prospects.keys().all(|id| !first.prospects.contains_key(id)));
    assert!(second.prospects.keys().all(|id| !second.players.contains_key(id)));
}

#[test]
fn test_odd_league_single_round_is_invalid_config() {
    let input = league(5, 16);
    let mut config = LeagueConfig::default();
    config.schedule.games_per_team = 1;

    let err = transition_to_new_season(&input, &mut TransitionContext::with_config(1, config)).unwrap_err();
    assert!(matches!(err, TransitionError::InvalidConfig(_)));

    let mut config = LeagueConfig::default();
    config.schedule.games_per_team = 2;
    let result = transition_to_new_season(&input, &mut TransitionContext::with_config(1, config)).unwrap();
    assert_eq!(result.league.schedule.as_ref().unwrap().teams_covered().len(), 5);
}

#[test]
fn test_year_at_end_of_range_is_an_error() {
    let mut input = league(4, 17);
    input.league.calendar.current_year = u16::MAX;

    let err = transition_to_new_season(&input, &mut TransitionContext::standard(1)).unwrap_err();
    assert_eq!(err, TransitionError::YearOutOfRange { year: u16::MAX });
}

#[test]
fn test_same_seed_same_digest() {
    let input = league(32, 13);
    let a = advance(&input, 77);
    let b = advance(&input, 77);
    assert_eq!(a.digest(), b.digest());

    let c = advance(&input, 78);
    assert_ne!(a.digest(), c.digest());
}

#[test]
fn test_input_never_mutated() {
    let input = league(8, 14);
    let digest = input.digest();
    let _ = SeasonPipeline::run(&input, &mut TransitionContext::standard(1)).unwrap();
    assert_eq!(input.digest(), digest);
}

#[test]
fn test_finances_use_next_year_cap() {
    let input = league(8, 15);
    let result = advance(&input, 10);
    let expected_cap = LeagueConfig::default().finance.salary_cap_for(YEAR + 1);

    for team in result.teams.values() {
        assert_eq!(team.finances.salary_cap, expected_cap);
        assert_eq!(team.finances.cap_space, expected_cap - team.finances.current_cap_usage);
    }
}

#[test]
fn test_forty_two_year_old_retires_in_some_trial() {
    let mut state = league(4, 16);
    let veteran = state.players.keys().next().unwrap().clone();
    state.players.get_mut(&veteran).unwrap().age = 42;

    let config = RetirementConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    let retired = (0..100).any(|_| {
        let (_, retired) = RetirementResolver::apply(state.clone(), &config, &mut rng);
        retired.contains(&veteran)
    });
    assert!(retired);
}

#[test]
fn test_under_34_never_retires() {
    let mut state = league(4, 17);
    for player in state.players.values_mut() {
        player.age = player.age.min(33);
    }

    let config = RetirementConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..100 {
        let (next, retired) = RetirementResolver::apply(state.clone(), &config, &mut rng);
        assert!(retired.is_empty());
        assert_eq!(next.players.len(), state.players.len());
    }
}

#[test]
fn test_retirees_vanish_everywhere() {
    let mut input = league(8, 18);
    for player in input.players.values_mut().take(40) {
        player.age = 41;
    }
    let (result, report) = SeasonPipeline::run(&input, &mut TransitionContext::standard(3)).unwrap();

    assert!(!report.retired_player_ids.is_empty());
    for id in &report.retired_player_ids {
        assert!(!result.players.contains_key(id));
        assert!(result.contracts.values().all(|c| &c.player_id != id));
        assert!(result.teams.values().all(|t| t.all_player_ids().all(|p| p != id)));
    }
}
