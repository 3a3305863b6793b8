use std::collections::HashSet;

use clubscore::display::display_score;
use clubscore::fixture::{Fixture, OfficialScore};
use clubscore::perspective::Perspective;

fn fixture(id: u32, home: u32, away: u32) -> Fixture {
    Fixture {
        id,
        finished: true,
        status_name: Some("Final".to_string()),
        home_team_id: home,
        away_team_id: Some(away),
        summary_home_goals: None,
        summary_away_goals: None,
        is_bye: false,
        utc_time: String::new(),
    }
}

fn no_club() -> HashSet<u32> {
    HashSet::new()
}

#[test]
fn byes_render_as_a_literal() {
    let mut game = fixture(1, 10, 20);
    game.is_bye = true;

    let text = display_score(&game, &[], Perspective::Team(10), &no_club());
    assert_eq!(text, "BYE");
}

#[test]
fn upcoming_and_unknown_render_as_a_dash() {
    let mut upcoming = fixture(2, 10, 20);
    upcoming.finished = false;
    assert_eq!(
        display_score(&upcoming, &[], Perspective::Team(10), &no_club()),
        "\u{2014}"
    );

    let no_data = fixture(3, 10, 20);
    assert_eq!(
        display_score(&no_data, &[], Perspective::Team(10), &no_club()),
        "\u{2014}"
    );
}

#[test]
fn team_view_reads_ours_first_even_from_the_away_side() {
    let mut game = fixture(4, 10, 20);
    game.summary_home_goals = Some(12);
    game.summary_away_goals = Some(8);

    assert_eq!(
        display_score(&game, &[], Perspective::Team(10), &no_club()),
        "12-8"
    );
    assert_eq!(
        display_score(&game, &[], Perspective::Team(20), &no_club()),
        "8-12"
    );
}

#[test]
fn club_view_always_reads_home_away() {
    // The club team is the away side here; the string still reads home-away.
    let mut game = fixture(5, 20, 10);
    game.summary_home_goals = Some(15);
    game.summary_away_goals = Some(9);
    let club: HashSet<u32> = [10].into_iter().collect();

    assert_eq!(
        display_score(&game, &[], Perspective::ClubWide, &club),
        "15-9"
    );
    assert_eq!(
        display_score(&game, &[], Perspective::Team(10), &club),
        "9-15"
    );
}

#[test]
fn official_scores_drive_the_string_when_present() {
    let game = fixture(6, 10, 20);
    let scores = vec![
        OfficialScore {
            game_id: 6,
            team_id: 10,
            quarter: 1,
            score: 11,
        },
        OfficialScore {
            game_id: 6,
            team_id: 20,
            quarter: 1,
            score: 7,
        },
    ];

    assert_eq!(
        display_score(&game, &scores, Perspective::Team(20), &no_club()),
        "7-11"
    );
}
