use happiness_chart::chart::reconcile::{BarPhase, ChartState};
use happiness_chart::chart::reveal::{RevealTracker, VisibilityEvent};
use happiness_chart::Record;

fn record(country: &str) -> Record {
    Record {
        country: country.to_string(),
        overall_rank: None,
        score: Some(7.0),
        gdp_per_capita: None,
        social_support: None,
        healthy_life_expectancy: None,
        freedom_to_make_life_choices: None,
        generosity: None,
        perceptions_of_corruption: None,
    }
}

fn view(countries: &[&str]) -> Vec<Record> {
    countries.iter().map(|c| record(c)).collect()
}

fn visible(country: &str) -> VisibilityEvent {
    VisibilityEvent {
        country: country.to_string(),
        is_visible: true,
    }
}

fn hidden(country: &str) -> VisibilityEvent {
    VisibilityEvent {
        country: country.to_string(),
        is_visible: false,
    }
}

#[test]
fn first_apply_enters_everything_collapsed() {
    let mut state = ChartState::new();
    let plan = state.apply(&view(&["Finland", "Denmark"]));

    assert_eq!(plan.enter, vec!["Finland", "Denmark"]);
    assert!(plan.update.is_empty());
    assert!(plan.exit.is_empty());
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Collapsed);
    assert_eq!(state.bar("Denmark").unwrap().index, 1);
}

#[test]
fn retained_records_update_in_place() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland", "Denmark"]));
    assert!(state.begin_reveal("Finland"));

    // Reordered view: both retained, no enters or exits.
    let plan = state.apply(&view(&["Denmark", "Finland"]));
    assert!(plan.enter.is_empty());
    assert_eq!(plan.update, vec!["Denmark", "Finland"]);
    assert!(plan.exit.is_empty());

    // Identity kept: reveal progress survives the update.
    let finland = state.bar("Finland").unwrap();
    assert_eq!(finland.phase, BarPhase::Revealing);
    assert_eq!(finland.index, 1);
}

#[test]
fn departed_records_exit_and_are_removed_when_done() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland", "Denmark", "Norway"]));

    let plan = state.apply(&view(&["Denmark"]));
    assert_eq!(plan.exit, vec!["Finland", "Norway"]);
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Exiting);

    state.finish_exit("Finland");
    assert!(state.bar("Finland").is_none());
    // Norway's transition has not finished yet.
    assert_eq!(state.bar("Norway").unwrap().phase, BarPhase::Exiting);
    assert_eq!(state.len(), 2);
}

#[test]
fn exiting_records_are_not_reported_twice() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland", "Denmark"]));

    let plan = state.apply(&view(&["Denmark"]));
    assert_eq!(plan.exit, vec!["Finland"]);

    // Next transition while Finland is still animating out.
    let plan = state.apply(&view(&["Denmark"]));
    assert!(plan.exit.is_empty());
}

#[test]
fn reenter_during_exit_is_a_fresh_enter() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland"]));
    assert!(state.begin_reveal("Finland"));
    state.settle("Finland");

    state.apply(&view(&[]));
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Exiting);

    // Back before the exit transition finished: a brand-new collapsed
    // element that must reveal again.
    let plan = state.apply(&view(&["Finland"]));
    assert_eq!(plan.enter, vec!["Finland"]);
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Collapsed);

    // The stale exit timer is a no-op now.
    state.finish_exit("Finland");
    assert!(state.bar("Finland").is_some());
}

#[test]
fn reveal_walks_collapsed_revealing_settled() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland"]));

    assert!(state.begin_reveal("Finland"));
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Revealing);

    // Only the first trigger starts the animation.
    assert!(!state.begin_reveal("Finland"));

    state.settle("Finland");
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Settled);
    assert!(!state.begin_reveal("Finland"));
}

#[test]
fn settle_only_applies_to_revealing_bars() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland"]));

    state.settle("Finland");
    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Collapsed);
}

#[test]
fn generation_bumps_on_every_apply() {
    let mut state = ChartState::new();
    let before = state.generation();
    state.apply(&view(&["Finland"]));
    state.apply(&view(&["Finland"]));
    assert_eq!(state.generation(), before + 2);
}

#[test]
fn live_countries_exclude_exiting_bars() {
    let mut state = ChartState::new();
    state.apply(&view(&["Finland", "Denmark"]));
    state.apply(&view(&["Denmark"]));

    let live: Vec<&str> = state.live_countries().collect();
    assert_eq!(live, vec!["Denmark"]);
}

#[test]
fn first_visible_event_triggers_exactly_once() {
    let mut tracker = RevealTracker::new();

    assert!(tracker.observe(&visible("Finland")));
    assert!(tracker.is_revealed("Finland"));

    // Scrolling away and back must not re-trigger.
    assert!(!tracker.observe(&hidden("Finland")));
    assert!(!tracker.observe(&visible("Finland")));
}

#[test]
fn invisible_events_never_trigger() {
    let mut tracker = RevealTracker::new();
    assert!(!tracker.observe(&hidden("Finland")));
    assert!(!tracker.is_revealed("Finland"));
}

#[test]
fn exited_elements_reveal_again_after_retain() {
    let mut tracker = RevealTracker::new();
    tracker.observe(&visible("Finland"));
    tracker.observe(&visible("Denmark"));

    // Finland left the view; Denmark stayed.
    tracker.retain(["Denmark"]);

    assert!(tracker.is_revealed("Denmark"));
    assert!(!tracker.is_revealed("Finland"));
    // Fresh, untriggered observation for the re-entered element.
    assert!(tracker.observe(&visible("Finland")));
}

#[test]
fn unrevealed_lists_elements_still_waiting() {
    let mut tracker = RevealTracker::new();
    tracker.observe(&visible("Finland"));

    let waiting: Vec<&str> = tracker.unrevealed(["Finland", "Denmark", "Norway"]).collect();
    assert_eq!(waiting, vec!["Denmark", "Norway"]);
}

#[test]
fn reconciliation_keeps_reveal_state_in_step_with_the_view() {
    let mut state = ChartState::new();
    let mut tracker = RevealTracker::new();

    state.apply(&view(&["Finland", "Denmark"]));
    assert!(tracker.observe(&visible("Finland")));
    assert!(state.begin_reveal("Finland"));

    // Finland filtered out, then brought back: both layers agree it is a
    // fresh element.
    state.apply(&view(&["Denmark"]));
    tracker.retain(state.live_countries().collect::<Vec<_>>());
    state.finish_exit("Finland");

    state.apply(&view(&["Denmark", "Finland"]));
    tracker.retain(state.live_countries().collect::<Vec<_>>());

    assert_eq!(state.bar("Finland").unwrap().phase, BarPhase::Collapsed);
    assert!(!tracker.is_revealed("Finland"));
    assert!(tracker.observe(&visible("Finland")));
    assert!(state.begin_reveal("Finland"));
}
