//! Turn engine integration tests.
//!
//! These tests drive whole turns through `TurnEngine` and check movement,
//! lap bonuses, landing resolution, elimination and turn order.

use trade_board::board::{FeeStrategy, Space, SpecialEffect};
use trade_board::core::{DiceRoll, PlayerId, TurnError};
use trade_board::events::{EventLog, GameEvent};
use trade_board::game::{GameBuilder, TurnEngine, TurnPhase};
use trade_board::rules::{GameResult, NeverBuy, ScriptedDice};

const ANA: PlayerId = PlayerId::new(0);
const BRUNO: PlayerId = PlayerId::new(1);
const CARLA: PlayerId = PlayerId::new(2);

/// A board of `len` plain squares with `space` placed at `slot`.
fn board_with(len: usize, slot: usize, space: Space) -> Vec<Space> {
    let mut spaces: Vec<Space> = (0..len)
        .map(|i| {
            let name = if i == 0 { "Start".to_string() } else { format!("Rest {i}") };
            Space::special(name, SpecialEffect::Nothing)
        })
        .collect();
    spaces[slot] = space;
    spaces
}

fn engine(players: &[&str], spaces: Vec<Space>, log: &EventLog) -> TurnEngine {
    let game = GameBuilder::new()
        .players(players.iter().copied())
        .spaces(spaces)
        .sink(log.clone())
        .build()
        .unwrap();
    TurnEngine::new(game)
}

/// Test the property purchase-then-rent scenario.
#[test]
fn test_property_purchase_then_rent() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(4, 3, Space::property("Rua", 100, 10)), &log);

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    assert_eq!(engine.game().player(ANA).balance(), 400);
    assert_eq!(engine.game().board().space(3).owner(), Some(ANA));

    let phase = engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    assert_eq!(engine.game().player(BRUNO).balance(), 490);
    assert_eq!(engine.game().player(ANA).balance(), 410);
    assert_eq!(phase, TurnPhase::AwaitingRoll(ANA));
}

/// Test a variable-fee company charges base fee times pips.
#[test]
fn test_variable_company_fee() {
    let log = EventLog::new();
    let company = Space::company("Empresa", 150, 5, FeeStrategy::Variable);
    let mut engine = engine(&["Ana", "Bruno"], board_with(8, 7, company), &log);

    engine.advance_turn(DiceRoll::new(3, 4)).unwrap();
    assert_eq!(engine.game().player(ANA).balance(), 350);

    engine.advance_turn(DiceRoll::new(3, 4)).unwrap();
    assert_eq!(engine.game().player(BRUNO).balance(), 465);
    assert_eq!(engine.game().player(ANA).balance(), 385);
    assert!(log.events().contains(&GameEvent::FeeDue {
        player: "Bruno".into(),
        space: "Empresa".into(),
        owner: "Ana".into(),
        amount: 35,
    }));
}

/// Test a fixed-fee company ignores the dice.
#[test]
fn test_fixed_company_fee() {
    let log = EventLog::new();
    let company = Space::company("Gas", 150, 35, FeeStrategy::Fixed);
    let mut engine = engine(&["Ana", "Bruno"], board_with(13, 12, company), &log);

    engine.advance_turn(DiceRoll::new(6, 6)).unwrap();
    engine.advance_turn(DiceRoll::new(6, 6)).unwrap();

    assert_eq!(engine.game().player(BRUNO).balance(), 465);
}

/// Test that unaffordable rent eliminates without partial payment and ends
/// a two-player game.
#[test]
fn test_unaffordable_rent_eliminates_and_declares_winner() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(4, 3, Space::property("Rua", 100, 10)), &log);

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    engine.game_mut().player_mut(BRUNO).adjust_balance(-495);

    let phase = engine.advance_turn(DiceRoll::new(1, 2)).unwrap();

    assert_eq!(phase, TurnPhase::GameOver(GameResult::Winner(ANA)));
    assert_eq!(engine.game().player(BRUNO).balance(), 5);
    assert_eq!(engine.game().player(ANA).balance(), 400);
    assert_eq!(engine.game().active_players(), &[ANA]);
    assert!(!engine.game().is_active());

    let lines = log.lines();
    assert_eq!(lines[lines.len() - 2], "Bruno was eliminated!");
    assert_eq!(lines[lines.len() - 1], "Ana is the winner!");
}

/// Test landing on your own property only logs.
#[test]
fn test_own_property_no_charge() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(4, 3, Space::property("Rua", 100, 10)), &log);

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();
    // Ana: 3 -> 7, lap bonus, lands on slot 3 again.
    engine.advance_turn(DiceRoll::new(2, 2)).unwrap();

    assert_eq!(engine.game().player(ANA).balance(), 500);
    assert!(log.events().contains(&GameEvent::OwnSpace {
        player: "Ana".into(),
        space: "Rua".into(),
    }));
}

/// Test landing on your own company charges no fee.
#[test]
fn test_own_company_no_fee() {
    let log = EventLog::new();
    let company = Space::company("Empresa", 150, 5, FeeStrategy::Variable);
    let mut engine = engine(&["Ana", "Bruno"], board_with(4, 3, company), &log);

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();
    // Ana: 3 -> 7, lap bonus, lands on slot 3 again.
    engine.advance_turn(DiceRoll::new(2, 2)).unwrap();

    assert_eq!(engine.game().player(ANA).balance(), 450);
    assert_eq!(log.count(|e| matches!(e, GameEvent::FeeDue { .. })), 0);
    assert!(log.events().contains(&GameEvent::OwnSpace {
        player: "Ana".into(),
        space: "Empresa".into(),
    }));
}

/// Test the lap bonus is paid when a move crosses the start.
#[test]
fn test_lap_bonus() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(10, 0, Space::special("Go", SpecialEffect::Nothing)), &log);

    engine.advance_turn(DiceRoll::new(4, 4)).unwrap();
    assert_eq!(engine.game().player(ANA).balance(), 500);

    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();
    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();

    assert_eq!(engine.game().player(ANA).position, 10);
    assert_eq!(engine.game().player(ANA).balance(), 600);
    assert_eq!(
        log.count(|e| matches!(e, GameEvent::PassedStart { .. })),
        1
    );
}

/// Test a move covering several laps pays the bonus once.
#[test]
fn test_multi_lap_move_pays_single_bonus() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(5, 0, Space::special("Go", SpecialEffect::Nothing)), &log);
    engine.game_mut().player_mut(ANA).position = 3;

    engine.advance_turn(DiceRoll::new(6, 6)).unwrap();

    assert_eq!(engine.game().player(ANA).position, 15);
    assert_eq!(engine.game().player(ANA).balance(), 600);
    assert_eq!(
        log.count(|e| matches!(e, GameEvent::PassedStart { .. })),
        1
    );
}

/// Test the event order of a purchase turn.
#[test]
fn test_turn_event_order() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(4, 3, Space::property("Rua", 100, 10)), &log);

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();

    assert_eq!(
        log.lines(),
        vec![
            "Game started with Ana, Bruno.",
            "It is Ana's turn.",
            "Ana rolled [1, 2] for a total of 3.",
            "Ana landed on Rua (property). Price: 100, rent: 10.",
            "Ana bought Rua for 100.",
            "It is Bruno's turn.",
        ]
    );
}

/// Test a player eliminated on their own turn is followed by their successor.
#[test]
fn test_own_turn_elimination_passes_to_successor() {
    let log = EventLog::new();
    let mut engine = engine(
        &["Ana", "Bruno", "Carla"],
        board_with(8, 3, Space::property("Rua", 100, 10)),
        &log,
    );

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    engine.game_mut().player_mut(BRUNO).adjust_balance(-495);
    let phase = engine.advance_turn(DiceRoll::new(1, 2)).unwrap();

    assert!(!engine.game().is_in_game(BRUNO));
    assert_eq!(phase, TurnPhase::AwaitingRoll(CARLA));
    assert_eq!(engine.game().active_players(), &[ANA, CARLA]);
    assert_eq!(log.lines().last().unwrap(), "It is Carla's turn.");
}

/// Test that eliminating the last player in order wraps the turn to the first.
#[test]
fn test_own_turn_elimination_wraps_around() {
    let log = EventLog::new();
    let mut engine = engine(
        &["Ana", "Bruno", "Carla"],
        board_with(8, 3, Space::property("Rua", 100, 10)),
        &log,
    );

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();
    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();
    engine.game_mut().player_mut(CARLA).adjust_balance(-495);
    let phase = engine.advance_turn(DiceRoll::new(1, 2)).unwrap();

    assert_eq!(phase, TurnPhase::AwaitingRoll(ANA));
    assert_eq!(engine.game().active_players(), &[ANA, BRUNO]);
}

/// Test turn order cycles through every active player.
#[test]
fn test_turn_order_cycles() {
    let log = EventLog::new();
    let mut engine = engine(
        &["Ana", "Bruno", "Carla"],
        board_with(40, 0, Space::special("Go", SpecialEffect::Nothing)),
        &log,
    );

    let mut order = Vec::new();
    for _ in 0..6 {
        if let TurnPhase::AwaitingRoll(player) = engine.phase() {
            order.push(player);
        }
        engine.advance_turn(DiceRoll::new(1, 1)).unwrap();
    }

    assert_eq!(order, vec![ANA, BRUNO, CARLA, ANA, BRUNO, CARLA]);
    assert_eq!(engine.turn_number(), 6);
}

/// Test a penalty square that leaves a player negative eliminates them.
#[test]
fn test_penalty_eliminates() {
    let log = EventLog::new();
    let tax = Space::special("Tax", SpecialEffect::Penalty(600));
    let mut engine = engine(&["Ana", "Bruno"], board_with(6, 4, tax), &log);

    let phase = engine.advance_turn(DiceRoll::new(2, 2)).unwrap();

    assert_eq!(phase, TurnPhase::GameOver(GameResult::Winner(BRUNO)));
    assert_eq!(engine.game().player(ANA).balance(), -100);
    assert_eq!(
        log.lines()[3..],
        [
            "Ana landed on Tax (special).",
            "Ana pays a penalty of 600.",
            "Ana was eliminated!",
            "Bruno is the winner!",
        ]
    );
}

/// Test a penalty that can be covered leaves the player in the game.
#[test]
fn test_penalty_affordable() {
    let log = EventLog::new();
    let tax = Space::special("Tax", SpecialEffect::Penalty(500));
    let mut engine = engine(&["Ana", "Bruno"], board_with(6, 4, tax), &log);

    engine.advance_turn(DiceRoll::new(2, 2)).unwrap();

    assert_eq!(engine.game().player(ANA).balance(), 0);
    assert!(engine.game().is_in_game(ANA));
}

/// Test a bonus square credits the player.
#[test]
fn test_bonus_square() {
    let log = EventLog::new();
    let square = Space::special("Praca", SpecialEffect::Bonus(50));
    let mut engine = engine(&["Ana", "Bruno"], board_with(6, 2, square), &log);

    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();

    assert_eq!(engine.game().player(ANA).balance(), 550);
}

/// Test the advance effect moves without resolving the destination.
#[test]
fn test_advance_does_not_resolve_destination() {
    let log = EventLog::new();
    let mut spaces = board_with(8, 2, Space::special("Detour", SpecialEffect::Advance(1)));
    spaces[3] = Space::property("Rua", 100, 10);
    let mut engine = engine(&["Ana", "Bruno"], spaces, &log);

    engine.advance_turn(DiceRoll::new(1, 1)).unwrap();

    assert_eq!(engine.game().player(ANA).position, 3);
    assert_eq!(engine.game().player(ANA).balance(), 500);
    assert_eq!(engine.game().board().space(3).owner(), None);
    assert_eq!(
        log.count(|e| matches!(e, GameEvent::Advanced { steps: 1, .. })),
        1
    );
}

/// Test a custom effect that eliminates everyone ends in a draw.
#[test]
fn test_custom_effect_draw() {
    let log = EventLog::new();
    let disaster = Space::special(
        "Disaster",
        SpecialEffect::custom(|_, game| {
            let everyone = game.active_players().to_vec();
            for player in everyone {
                game.eliminate_player(player);
            }
        }),
    );
    let mut engine = engine(&["Ana", "Bruno", "Carla"], board_with(6, 2, disaster), &log);

    let phase = engine.advance_turn(DiceRoll::new(1, 1)).unwrap();

    assert_eq!(phase, TurnPhase::GameOver(GameResult::Draw));
    assert!(engine.game().active_players().is_empty());
    assert_eq!(
        log.lines().last().unwrap(),
        "Every player was eliminated. There is no winner."
    );
}

/// Test that no turn is played once the game is over.
#[test]
fn test_advance_after_game_over() {
    let log = EventLog::new();
    let tax = Space::special("Tax", SpecialEffect::Penalty(600));
    let mut engine = engine(&["Ana", "Bruno"], board_with(6, 4, tax), &log);

    engine.advance_turn(DiceRoll::new(2, 2)).unwrap();
    let logged = log.len();

    assert_eq!(engine.advance_turn(DiceRoll::new(1, 1)), Err(TurnError::GameOver));
    assert_eq!(log.len(), logged);
    assert!(engine.is_over());
    assert_eq!(engine.result(), Some(GameResult::Winner(BRUNO)));
}

/// Test declined purchases leave the space unowned.
#[test]
fn test_declined_purchase() {
    let log = EventLog::new();
    let game = GameBuilder::new()
        .players(["Ana", "Bruno"])
        .spaces(board_with(4, 3, Space::property("Rua", 100, 10)))
        .decider(NeverBuy)
        .sink(log.clone())
        .build()
        .unwrap();
    let mut engine = TurnEngine::new(game);

    engine.advance_turn(DiceRoll::new(1, 2)).unwrap();

    assert_eq!(engine.game().player(ANA).balance(), 500);
    assert_eq!(engine.game().board().space(3).owner(), None);
    assert!(log.lines().contains(&"Ana chose not to buy Rua.".to_string()));
}

/// Test `play_turn` pulls rolls from the dice source.
#[test]
fn test_play_turn_with_scripted_dice() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(4, 3, Space::property("Rua", 100, 10)), &log);
    let mut dice = ScriptedDice::from_pairs(&[(1, 2), (1, 1)]);

    engine.play_turn(&mut dice).unwrap();
    engine.play_turn(&mut dice).unwrap();

    assert_eq!(engine.game().player(ANA).position, 3);
    assert_eq!(engine.game().player(BRUNO).position, 2);
    assert_eq!(engine.game().board().space(3).owner(), Some(ANA));
}

/// Test a player eliminated between turns does not get to roll.
#[test]
fn test_elimination_between_turns_skips_player() {
    let log = EventLog::new();
    let mut engine = engine(
        &["Ana", "Bruno", "Carla"],
        board_with(8, 3, Space::property("Rua", 100, 10)),
        &log,
    );

    engine.game_mut().eliminate_player(ANA);
    assert_eq!(engine.phase(), TurnPhase::AwaitingRoll(BRUNO));

    let phase = engine.advance_turn(DiceRoll::new(1, 2)).unwrap();

    assert_eq!(engine.game().board().space(3).owner(), Some(BRUNO));
    assert_eq!(engine.game().player(ANA).position, 0);
    assert_eq!(engine.game().player(ANA).balance(), 500);
    assert_eq!(phase, TurnPhase::AwaitingRoll(CARLA));
    assert!(log.lines().contains(&"It is Bruno's turn.".to_string()));
}

/// Test a game ended between turns refuses further turns.
#[test]
fn test_game_ended_between_turns() {
    let log = EventLog::new();
    let mut engine = engine(&["Ana", "Bruno"], board_with(8, 3, Space::property("Rua", 100, 10)), &log);

    engine.game_mut().eliminate_player(BRUNO);
    let logged = log.len();

    assert!(engine.is_over());
    assert_eq!(engine.phase(), TurnPhase::GameOver(GameResult::Winner(ANA)));
    assert_eq!(engine.advance_turn(DiceRoll::new(1, 2)), Err(TurnError::GameOver));

    let mut dice = ScriptedDice::from_pairs(&[(1, 2)]);
    assert_eq!(engine.play_turn(&mut dice), Err(TurnError::GameOver));

    assert_eq!(log.len(), logged);
    assert_eq!(engine.game().board().space(3).owner(), None);
    assert_eq!(engine.game().player(ANA).position, 0);
}
