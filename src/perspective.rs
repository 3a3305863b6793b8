use std::collections::HashSet;

use crate::fixture::Fixture;

/// Whose point of view a score is reported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Oriented to one specific team, regardless of home/away.
    Team(u32),
    /// Neutral club-wide view; orientation comes from the club's team ids.
    ClubWide,
}

/// Whether resolution actually found the requested side, or fell back to
/// home/away ordering. Callers must not assume "ours" is the requested team
/// on a `Fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    Matched,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSides {
    pub ours: u32,
    pub theirs: u32,
    pub kind: ResolutionKind,
    pub inter_club: bool,
}

/// Decide which side of a fixture is "ours" and which is "theirs".
///
/// Never fails: a missing side resolves to 0. Both sides belonging to the
/// club registry marks the fixture inter-club, which overrides win/loss
/// classification later on.
pub fn resolve_sides(
    fixture: &Fixture,
    perspective: Perspective,
    club_team_ids: &HashSet<u32>,
) -> ResolvedSides {
    let home = fixture.home_team_id;
    let away = fixture.away_team_id.unwrap_or(0);
    let inter_club = club_team_ids.contains(&home)
        && fixture
            .away_team_id
            .is_some_and(|id| club_team_ids.contains(&id));

    match perspective {
        Perspective::Team(team_id) => {
            if team_id == home {
                ResolvedSides {
                    ours: home,
                    theirs: away,
                    kind: ResolutionKind::Matched,
                    inter_club,
                }
            } else if fixture.away_team_id == Some(team_id) {
                ResolvedSides {
                    ours: away,
                    theirs: home,
                    kind: ResolutionKind::Matched,
                    inter_club,
                }
            } else {
                log::debug!(
                    "game {}: team {team_id} is not a side, falling back to home/away",
                    fixture.id
                );
                ResolvedSides {
                    ours: home,
                    theirs: away,
                    kind: ResolutionKind::Fallback,
                    inter_club,
                }
            }
        }
        Perspective::ClubWide => {
            let home_is_ours = club_team_ids.contains(&home);
            let away_is_ours = fixture
                .away_team_id
                .is_some_and(|id| club_team_ids.contains(&id));
            match (home_is_ours, away_is_ours) {
                // Inter-club keeps home/away ordering; the flag does the rest.
                (true, _) => ResolvedSides {
                    ours: home,
                    theirs: away,
                    kind: ResolutionKind::Matched,
                    inter_club,
                },
                (false, true) => ResolvedSides {
                    ours: away,
                    theirs: home,
                    kind: ResolutionKind::Matched,
                    inter_club,
                },
                (false, false) => {
                    log::debug!(
                        "game {}: no side belongs to the club, falling back to home/away",
                        fixture.id
                    );
                    ResolvedSides {
                        ours: home,
                        theirs: away,
                        kind: ResolutionKind::Fallback,
                        inter_club: false,
                    }
                }
            }
        }
    }
}
