//! Next season's schedule

use super::standings;
use crate::error::{Result, TransitionError};
use crate::models::{League, Team};
use crate::services::ScheduleGenerator;
use crate::state::GameState;

pub struct ScheduleStep;

impl ScheduleStep {
    /// Seed the generator with last season's division standings and replace
    /// the league schedule with its result.
    pub fn apply(state: GameState, generator: &mut dyn ScheduleGenerator) -> Result<GameState> {
        let next_year = state.next_year();
        let previous = standings::previous_standings(state.teams.values());
        let teams: Vec<&Team> = state.teams.values().collect();

        let schedule = generator.generate(&teams, &previous, next_year);

        if schedule.year != next_year {
            return Err(TransitionError::ScheduleYearMismatch { expected: next_year, found: schedule.year });
        }
        if teams.len() > 1 {
            let covered = schedule.teams_covered();
            if let Some(team) = teams.iter().find(|t| !covered.contains(t.id.as_str())) {
                return Err(TransitionError::ScheduleMissingTeam { team_id: team.id.clone() });
            }
        }
        log::debug!("Scheduled {} games for {}", schedule.regular_season.len(), next_year);

        Ok(GameState { league: League { schedule: Some(schedule), ..state.league }, ..state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, PreviousStandings, Schedule};
    use crate::services::RoundRobinScheduleGenerator;
    use crate::season::test_fixtures::*;

    #[test]
    fn test_schedule_replaced_for_next_year() {
        let state = small_league();
        let next = ScheduleStep::apply(state.clone(), &mut RoundRobinScheduleGenerator::new(17)).unwrap();

        let schedule = next.league.schedule.as_ref().unwrap();
        assert_eq!(schedule.year, FIXTURE_YEAR + 1);
        assert_eq!(schedule.teams_covered().len(), state.teams.len());
        assert_ne!(next.league.schedule, state.league.schedule);
    }

    #[test]
    fn test_generator_receives_standings_best_first() {
        struct Capture(Option<PreviousStandings>);
        impl ScheduleGenerator for Capture {
            fn generate(&mut self, teams: &[&Team], previous: &PreviousStandings, year: u16) -> Schedule {
                self.0 = Some(previous.clone());
                RoundRobinScheduleGenerator::new(3).generate(teams, previous, year)
            }
        }

        let state = small_league();
        let mut capture = Capture(None);
        ScheduleStep::apply(state, &mut capture).unwrap();

        let previous = capture.0.unwrap();
        assert_eq!(previous.place_of(CHAMPION), Some(0));
        assert_eq!(previous.divisions.iter().map(|d| d.team_ids.len()).sum::<usize>(), 4);
    }

    #[test]
    fn test_missing_team_is_fatal() {
        struct OneGame;
        impl ScheduleGenerator for OneGame {
            fn generate(&mut self, teams: &[&Team], _previous: &PreviousStandings, year: u16) -> Schedule {
                Schedule {
                    year,
                    regular_season: vec![Game {
                        week: 1,
                        home_team_id: teams[0].id.clone(),
                        away_team_id: teams[1].id.clone(),
                    }],
                }
            }
        }

        let err = ScheduleStep::apply(small_league(), &mut OneGame).unwrap_err();
        assert!(matches!(err, TransitionError::ScheduleMissingTeam { .. }));
    }

    #[test]
    fn test_wrong_year_is_fatal() {
        struct LastYear;
        impl ScheduleGenerator for LastYear {
            fn generate(&mut self, teams: &[&Team], previous: &PreviousStandings, year: u16) -> Schedule {
                RoundRobinScheduleGenerator::new(3).generate(teams, previous, year - 1)
            }
        }

        let err = ScheduleStep::apply(small_league(), &mut LastYear).unwrap_err();
        assert_eq!(err, TransitionError::ScheduleYearMismatch { expected: FIXTURE_YEAR + 1, found: FIXTURE_YEAR });
    }
}
