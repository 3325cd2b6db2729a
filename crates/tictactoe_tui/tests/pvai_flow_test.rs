//! Timed opponent flow against a paused tokio clock.

use std::time::Duration;
use tictactoe_core::{Mark, Mode, OpponentTrigger, ScriptedRandom, SeededRandom, Square};
use tictactoe_tui::{Action, AppConfig, ControlEvent, Controller};
use tokio::sync::mpsc;

fn controller_with(
    mode: Mode,
    rng: Box<dyn tictactoe_core::RandomSource + Send>,
) -> (Controller, mpsc::UnboundedReceiver<ControlEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let config = AppConfig::default().with_mode(mode);
    (Controller::with_random(&config, rng, tx), rx)
}

fn no_picks() -> Box<dyn tictactoe_core::RandomSource + Send> {
    Box::new(ScriptedRandom::new(Vec::new()))
}

fn count(controller: &Controller, mark: Mark) -> usize {
    controller
        .session()
        .board()
        .squares()
        .iter()
        .filter(|square| **square == Square::Occupied(mark))
        .count()
}

#[tokio::test(start_paused = true)]
async fn test_reset_with_human_to_move_schedules_nothing() {
    let (mut controller, mut rx) = controller_with(Mode::PvAI, no_picks());
    controller.handle(Action::ResetAll);
    assert!(!controller.opponent_pending());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
    assert!(controller.session().board().squares().iter().all(|s| *s == Square::Empty));
}

#[tokio::test(start_paused = true)]
async fn test_reply_waits_for_delay_then_places_one_o() {
    let (mut controller, mut rx) = controller_with(Mode::PvAI, no_picks());
    controller.handle(Action::Select(0));

    tokio::time::sleep(Duration::from_millis(340)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(count(&controller, Mark::O), 0);

    let event = rx.recv().await.unwrap();
    assert_eq!(event, ControlEvent::OpponentDue(OpponentTrigger::HumanMoved));
    controller.on_event(event).unwrap();

    assert_eq!(count(&controller, Mark::O), 1);
    assert_eq!(count(&controller, Mark::X), 1);
    assert_eq!(controller.session().current_turn(), Mark::X);
    assert_eq!(controller.render_state().status(), "Your turn (X)");
}

#[tokio::test(start_paused = true)]
async fn test_mode_switch_supersedes_pending_reply() {
    let (mut controller, mut rx) = controller_with(Mode::PvAI, no_picks());
    controller.handle(Action::Select(0));
    controller.handle(Action::SetMode(Mode::PvAI));
    assert!(!controller.opponent_pending());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(count(&controller, Mark::O), 0);
    assert_eq!(count(&controller, Mark::X), 0);
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_event_is_ignored_after_switch_to_pvp() {
    let (mut controller, _rx) = controller_with(Mode::PvAI, no_picks());
    controller.handle(Action::Select(0));
    controller.handle(Action::SetMode(Mode::PvP));

    let stale = ControlEvent::OpponentDue(OpponentTrigger::HumanMoved);
    assert_eq!(controller.on_event(stale).unwrap(), None);
    assert_eq!(count(&controller, Mark::O), 0);
    assert_eq!(controller.session().current_turn(), Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_new_round_on_ai_turn_lets_ai_open() {
    let (mut controller, mut rx) = controller_with(Mode::PvAI, no_picks());
    controller.handle(Action::Select(0));
    controller.handle(Action::NewRound);
    assert!(controller.opponent_pending());

    let event = rx.recv().await.unwrap();
    assert_eq!(event, ControlEvent::OpponentDue(OpponentTrigger::RoundStart));
    controller.on_event(event).unwrap();

    assert_eq!(count(&controller, Mark::O), 1);
    assert_eq!(count(&controller, Mark::X), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_full_round_against_ai_scores_once() {
    let rng = Box::new(SeededRandom::with_seed(5));
    let (mut controller, mut rx) = controller_with(Mode::PvAI, rng);

    while controller.session().round_active() {
        let next = controller.session().board().empty_indices()[0];
        controller.handle(Action::Select(next));
        if controller.opponent_pending() {
            let event = rx.recv().await.unwrap();
            controller.on_event(event).unwrap();
        }
    }

    assert_eq!(controller.session().score().total(), 1);
    assert!(!controller.opponent_pending());
    let x = count(&controller, Mark::X);
    let o = count(&controller, Mark::O);
    assert!(x == o || x == o + 1);
}
