use std::collections::HashSet;

use crate::fixture::{Fixture, OfficialScore};
use crate::perspective::{resolve_sides, Perspective};
use crate::score::{calculate_game_score, ResultCategory};

const NO_SCORE: &str = "\u{2014}";

/// Short score string for cards and tables.
///
/// Team perspective reads ours-theirs; club-wide reads home-away, flipping
/// back when the club side resolved to away. The orientation here must stay
/// in lock-step with [`resolve_sides`], which is why it lives next to the
/// engine instead of in a view layer.
pub fn display_score(
    fixture: &Fixture,
    officials: &[OfficialScore],
    perspective: Perspective,
    club_team_ids: &HashSet<u32>,
) -> String {
    let score = calculate_game_score(fixture, officials, perspective, club_team_ids);

    if score.result == ResultCategory::Bye {
        return "BYE".to_string();
    }
    if !score.valid {
        return NO_SCORE.to_string();
    }

    match perspective {
        Perspective::Team(_) => format!("{}-{}", score.ours, score.theirs),
        Perspective::ClubWide => {
            let sides = resolve_sides(fixture, perspective, club_team_ids);
            if sides.ours == fixture.home_team_id {
                format!("{}-{}", score.ours, score.theirs)
            } else {
                format!("{}-{}", score.theirs, score.ours)
            }
        }
    }
}
