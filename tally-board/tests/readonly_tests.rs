mod common;

use common::FakeWorld;
use pretty_assertions::assert_eq;
use tally_board::{DisplayOptions, Scoreboard, ScoreboardError};
use tally_types::{DisplaySlotId, SortOrder};

/// Fully observable scoreboard state, for before/after comparison.
#[derive(Debug, PartialEq)]
struct Snapshot {
    objectives: Vec<(String, String)>,
    scores: Vec<(String, Vec<(u32, i32)>)>,
    participants: Vec<u32>,
    display: Vec<(String, Option<String>)>,
}

fn snapshot(board: &Scoreboard) -> Snapshot {
    Snapshot {
        objectives: board
            .objectives()
            .iter()
            .map(|objective| {
                (
                    objective.id().to_string(),
                    objective.display_name().to_owned(),
                )
            })
            .collect(),
        scores: board
            .objectives()
            .iter()
            .map(|objective| {
                let entries = board
                    .scores(objective)
                    .unwrap()
                    .iter()
                    .map(|entry| (entry.participant.id().as_u32(), entry.score))
                    .collect();
                (objective.id().to_string(), entries)
            })
            .collect(),
        participants: board
            .participants()
            .iter()
            .map(|identity| identity.id().as_u32())
            .collect(),
        display: DisplaySlotId::ALL
            .iter()
            .map(|&slot| {
                (
                    slot.to_string(),
                    board
                        .display_slot(slot)
                        .map(|options| options.objective.id().to_string()),
                )
            })
            .collect(),
    }
}

fn populated(world: &FakeWorld) -> Scoreboard {
    let mut board = Scoreboard::new();
    let kills = board.add_objective(&world.ctx(), "kills", "Kills").unwrap();
    let deaths = board.add_objective(&world.ctx(), "deaths", "Deaths").unwrap();
    board.set_score(&world.ctx(), &kills, "alice", 10.0).unwrap();
    board.set_score(&world.ctx(), &deaths, "bob", 3.0).unwrap();
    board
        .set_display_slot(
            &world.ctx(),
            DisplaySlotId::Sidebar,
            DisplayOptions {
                objective: kills,
                sort_order: Some(SortOrder::Descending),
            },
        )
        .unwrap();
    board
}

#[test]
fn every_mutation_is_rejected_and_state_is_untouched() {
    let world = FakeWorld::new();
    let player = world.spawn_player(1, "Steve");
    let mut board = populated(&world);
    let kills = board.objective("kills").unwrap();
    let before = snapshot(&board);

    world.set_read_only(true);
    let rejected = |result: Result<(), ScoreboardError>| {
        assert!(matches!(result.unwrap_err(), ScoreboardError::ReadOnly));
    };

    rejected(board.add_objective(&world.ctx(), "assists", "Assists").map(drop));
    rejected(board.remove_objective(&world.ctx(), "kills").map(drop));
    rejected(board.set_score(&world.ctx(), &kills, "alice", 99.0).map(drop));
    rejected(board.set_score(&world.ctx(), &kills, player, 1.0).map(drop));
    rejected(board.add_score(&world.ctx(), &kills, "carol", 1.0).map(drop));
    rejected(
        board
            .remove_participant(&world.ctx(), &kills, "alice")
            .map(drop),
    );
    rejected(
        board
            .set_display_slot(
                &world.ctx(),
                DisplaySlotId::List,
                DisplayOptions {
                    objective: kills.clone(),
                    sort_order: None,
                },
            )
            .map(drop),
    );
    rejected(
        board
            .clear_display_slot(&world.ctx(), DisplaySlotId::Sidebar)
            .map(drop),
    );

    assert_eq!(snapshot(&board), before);
}

#[test]
fn read_paths_stay_open_in_read_only_mode() {
    let world = FakeWorld::new();
    let board = populated(&world);
    let kills = board.objective("kills").unwrap();

    world.set_read_only(true);
    assert_eq!(board.objectives().len(), 2);
    assert_eq!(board.score(&world.ctx(), &kills, "alice").unwrap(), Some(10));
    assert!(board.has_participant(&world.ctx(), &kills, "alice").unwrap());
    assert_eq!(board.scores(&kills).unwrap().len(), 1);
    assert_eq!(board.participants().len(), 2);
    assert!(board.display_slot(DisplaySlotId::Sidebar).is_some());
    assert!(board.is_objective_valid(&kills));
}

#[test]
fn mutations_resume_once_the_flag_clears() {
    let world = FakeWorld::new();
    let mut board = populated(&world);
    let kills = board.objective("kills").unwrap();

    world.set_read_only(true);
    assert!(board.set_score(&world.ctx(), &kills, "alice", 11.0).is_err());

    world.set_read_only(false);
    board.set_score(&world.ctx(), &kills, "alice", 11.0).unwrap();
    assert_eq!(board.score(&world.ctx(), &kills, "alice").unwrap(), Some(11));
}

#[test]
fn rejection_does_not_mint_identities() {
    let world = FakeWorld::new();
    let mut board = populated(&world);
    let kills = board.objective("kills").unwrap();
    let before: Vec<_> = board.participants();

    world.set_read_only(true);
    assert!(board.set_score(&world.ctx(), &kills, "newcomer", 1.0).is_err());
    world.set_read_only(false);

    assert_eq!(board.participants(), before);
}
