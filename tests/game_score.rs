use std::collections::HashSet;

use clubscore::fixture::{Fixture, OfficialScore};
use clubscore::perspective::Perspective;
use clubscore::score::{
    calculate_game_score, game_result, QuarterScore, ResultCategory, ScoreSource,
};

fn completed_fixture(id: u32, home: u32, away: u32) -> Fixture {
    Fixture {
        id,
        finished: true,
        status_name: Some("Final".to_string()),
        home_team_id: home,
        away_team_id: Some(away),
        summary_home_goals: None,
        summary_away_goals: None,
        is_bye: false,
        utc_time: "2026-05-02 04:10".to_string(),
    }
}

fn entry(game_id: u32, team_id: u32, quarter: u8, score: u32) -> OfficialScore {
    OfficialScore {
        game_id,
        team_id,
        quarter,
        score,
    }
}

fn two_quarter_scores(game_id: u32) -> Vec<OfficialScore> {
    vec![
        entry(game_id, 10, 1, 5),
        entry(game_id, 20, 1, 4),
        entry(game_id, 10, 2, 6),
        entry(game_id, 20, 2, 3),
    ]
}

fn no_club() -> HashSet<u32> {
    HashSet::new()
}

#[test]
fn official_quarters_sum_for_the_home_perspective() {
    let fixture = completed_fixture(1, 10, 20);
    let score = calculate_game_score(
        &fixture,
        &two_quarter_scores(1),
        Perspective::Team(10),
        &no_club(),
    );

    assert!(score.valid);
    assert_eq!(score.ours, 11);
    assert_eq!(score.theirs, 7);
    assert_eq!(score.result, ResultCategory::Win);
    assert_eq!(score.source, ScoreSource::Official);
    assert_eq!(
        score.quarters,
        vec![
            QuarterScore {
                quarter: 1,
                ours: 5,
                theirs: 4
            },
            QuarterScore {
                quarter: 2,
                ours: 6,
                theirs: 3
            },
        ]
    );
}

#[test]
fn away_perspective_swaps_orientation_and_result() {
    let fixture = completed_fixture(1, 10, 20);
    let score = calculate_game_score(
        &fixture,
        &two_quarter_scores(1),
        Perspective::Team(20),
        &no_club(),
    );

    assert_eq!(score.ours, 7);
    assert_eq!(score.theirs, 11);
    assert_eq!(score.result, ResultCategory::Loss);
    assert_eq!(
        score.quarters[0],
        QuarterScore {
            quarter: 1,
            ours: 4,
            theirs: 5
        }
    );
}

#[test]
fn orientation_symmetry_holds_for_draws() {
    let mut fixture = completed_fixture(2, 10, 20);
    fixture.summary_home_goals = Some(15);
    fixture.summary_away_goals = Some(15);

    let home = calculate_game_score(&fixture, &[], Perspective::Team(10), &no_club());
    let away = calculate_game_score(&fixture, &[], Perspective::Team(20), &no_club());

    assert_eq!(home.result, ResultCategory::Draw);
    assert_eq!(away.result, ResultCategory::Draw);
    assert_eq!((home.ours, home.theirs), (away.theirs, away.ours));
}

#[test]
fn embedded_pair_is_used_when_no_official_entries_exist() {
    let mut fixture = completed_fixture(3, 10, 20);
    fixture.summary_home_goals = Some(15);
    fixture.summary_away_goals = Some(15);

    let score = calculate_game_score(&fixture, &[], Perspective::Team(10), &no_club());

    assert!(score.valid);
    assert_eq!(score.result, ResultCategory::Draw);
    assert_eq!(score.source, ScoreSource::Embedded);
    assert!(score.quarters.is_empty());
}

#[test]
fn embedded_pair_is_flipped_for_the_away_side() {
    let mut fixture = completed_fixture(3, 10, 20);
    fixture.summary_home_goals = Some(12);
    fixture.summary_away_goals = Some(8);

    let score = calculate_game_score(&fixture, &[], Perspective::Team(20), &no_club());

    assert_eq!((score.ours, score.theirs), (8, 12));
    assert_eq!(score.result, ResultCategory::Loss);
}

#[test]
fn official_entries_beat_a_contradicting_embedded_pair() {
    let mut fixture = completed_fixture(4, 10, 20);
    fixture.summary_home_goals = Some(1);
    fixture.summary_away_goals = Some(99);

    let score = calculate_game_score(
        &fixture,
        &two_quarter_scores(4),
        Perspective::Team(10),
        &no_club(),
    );

    assert_eq!(score.source, ScoreSource::Official);
    assert_eq!((score.ours, score.theirs), (11, 7));
    assert!(!score.quarters.is_empty());
}

#[test]
fn bye_wins_over_any_recorded_scores() {
    let mut fixture = completed_fixture(5, 10, 20);
    fixture.is_bye = true;
    fixture.summary_home_goals = Some(10);
    fixture.summary_away_goals = Some(2);

    let score = calculate_game_score(
        &fixture,
        &two_quarter_scores(5),
        Perspective::Team(10),
        &no_club(),
    );

    assert_eq!(score.result, ResultCategory::Bye);
    assert!(!score.valid);
    assert!(score.quarters.is_empty());
    assert_eq!((score.ours, score.theirs), (0, 0));
}

#[test]
fn missing_opponent_counts_as_a_bye() {
    let mut fixture = completed_fixture(6, 10, 20);
    fixture.away_team_id = None;

    let score = calculate_game_score(&fixture, &[], Perspective::Team(10), &no_club());
    assert_eq!(score.result, ResultCategory::Bye);
}

#[test]
fn unfinished_game_is_upcoming_even_with_provisional_scores() {
    let mut fixture = completed_fixture(7, 10, 20);
    fixture.finished = false;
    fixture.summary_home_goals = Some(6);
    fixture.summary_away_goals = Some(2);

    let score = calculate_game_score(
        &fixture,
        &two_quarter_scores(7),
        Perspective::Team(10),
        &no_club(),
    );

    assert_eq!(score.result, ResultCategory::Upcoming);
    assert!(!score.valid);
}

#[test]
fn one_sided_official_entries_fall_through_to_the_embedded_pair() {
    let mut fixture = completed_fixture(8, 10, 20);
    fixture.summary_home_goals = Some(9);
    fixture.summary_away_goals = Some(4);

    let one_sided = vec![entry(8, 10, 1, 5), entry(8, 10, 2, 6)];
    let score = calculate_game_score(&fixture, &one_sided, Perspective::Team(10), &no_club());

    assert_eq!(score.source, ScoreSource::Embedded);
    assert_eq!((score.ours, score.theirs), (9, 4));
    assert!(score.quarters.is_empty());
}

#[test]
fn one_sided_official_entries_alone_yield_unknown() {
    let fixture = completed_fixture(9, 10, 20);
    let one_sided = vec![entry(9, 20, 1, 5)];

    let score = calculate_game_score(&fixture, &one_sided, Perspective::Team(10), &no_club());

    assert_eq!(score.result, ResultCategory::Unknown);
    assert_eq!(score.source, ScoreSource::None);
    assert!(!score.valid);
}

#[test]
fn a_recorded_zero_is_valid_data_not_missing_data() {
    let fixture = completed_fixture(10, 10, 20);
    let scoreless = vec![entry(10, 10, 1, 0), entry(10, 20, 1, 0)];

    let score = calculate_game_score(&fixture, &scoreless, Perspective::Team(10), &no_club());

    assert!(score.valid);
    assert_eq!(score.result, ResultCategory::Draw);
    assert_eq!((score.ours, score.theirs), (0, 0));
}

#[test]
fn duplicate_entries_for_a_quarter_are_summed() {
    let fixture = completed_fixture(11, 10, 20);
    let with_duplicate = vec![
        entry(11, 10, 1, 3),
        entry(11, 10, 1, 2),
        entry(11, 20, 1, 4),
    ];

    let score = calculate_game_score(&fixture, &with_duplicate, Perspective::Team(10), &no_club());

    assert_eq!(score.ours, 5);
    assert_eq!(
        score.quarters,
        vec![QuarterScore {
            quarter: 1,
            ours: 5,
            theirs: 4
        }]
    );
}

#[test]
fn entries_for_other_games_are_ignored() {
    let fixture = completed_fixture(12, 10, 20);
    let other_game = vec![entry(99, 10, 1, 5), entry(99, 20, 1, 4)];

    let score = calculate_game_score(&fixture, &other_game, Perspective::Team(10), &no_club());

    assert_eq!(score.result, ResultCategory::Unknown);
    assert!(!score.valid);
}

#[test]
fn inter_club_overrides_win_and_loss_from_every_perspective() {
    let fixture = completed_fixture(13, 10, 11);
    let scores = vec![entry(13, 10, 1, 8), entry(13, 11, 1, 3)];
    let club: HashSet<u32> = [10, 11, 12].into_iter().collect();

    for perspective in [
        Perspective::Team(10),
        Perspective::Team(11),
        Perspective::ClubWide,
    ] {
        let score = calculate_game_score(&fixture, &scores, perspective, &club);
        assert_eq!(score.result, ResultCategory::InterClub);
        assert!(score.inter_club);
        assert!(score.valid);
    }
}

#[test]
fn game_result_is_a_projection_of_the_full_computation() {
    let fixture = completed_fixture(14, 10, 20);
    let result = game_result(
        &fixture,
        &two_quarter_scores(14),
        Perspective::Team(10),
        &no_club(),
    );
    assert_eq!(result, ResultCategory::Win);
    assert_eq!(result.to_string(), "win");
    assert_eq!(ResultCategory::InterClub.as_str(), "inter-club");
}
