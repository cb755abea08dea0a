use crate::record::Record;
use std::collections::HashMap;

/// Lifecycle of a single bar element.
///
/// `Collapsed → Revealing → Settled`, entered at `Collapsed`; a bar that
/// drops out of the data set moves to `Exiting` from any phase and is
/// removed once its exit transition finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarPhase {
    /// Created at zero width and zero text opacity, awaiting first
    /// visibility.
    Collapsed,
    /// Reveal animation in progress.
    Revealing,
    /// Fully revealed.
    Settled,
    /// Shrink/fade out in progress; the element is removed when it ends.
    Exiting,
}

/// Tracked state for one bar element, keyed by country.
#[derive(Clone, Debug)]
pub struct BarState {
    pub country: String,
    pub phase: BarPhase,
    /// Row index in the current view.
    pub index: usize,
}

/// The explicit enter/update/exit sets for one view transition, each in a
/// deterministic order (enter/update in view order, exit alphabetical).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconcilePlan {
    pub enter: Vec<String>,
    pub update: Vec<String>,
    pub exit: Vec<String>,
}

/// Keyed reconciliation state: a mapping from country to element state,
/// independent of any rendering library.
///
/// Applying a new ordered view diffs it against the tracked elements:
/// retained countries keep their element (and its reveal progress), new
/// countries enter collapsed, and departed countries begin exiting. Each
/// apply bumps a generation counter; the browser layer tears down its
/// observer set and creates a fresh one per generation.
#[derive(Debug, Default)]
pub struct ChartState {
    bars: HashMap<String, BarState>,
    generation: u64,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff the new view against the tracked elements
    ///
    /// # Arguments
    /// * `view` - The filtered, sorted records about to be rendered
    ///
    /// # Returns
    /// * `ReconcilePlan` - Which countries enter, update in place, and exit
    pub fn apply(&mut self, view: &[Record]) -> ReconcilePlan {
        self.generation += 1;
        let mut plan = ReconcilePlan::default();

        for (index, record) in view.iter().enumerate() {
            if let Some(state) = self.bars.get_mut(&record.country) {
                if state.phase != BarPhase::Exiting {
                    // Retained: same element, new position.
                    state.index = index;
                    plan.update.push(record.country.clone());
                    continue;
                }
            }

            // New, or came back mid-exit: the element is recreated
            // collapsed and must be revealed again.
            self.bars.insert(
                record.country.clone(),
                BarState {
                    country: record.country.clone(),
                    phase: BarPhase::Collapsed,
                    index,
                },
            );
            plan.enter.push(record.country.clone());
        }

        for (country, state) in self.bars.iter_mut() {
            if state.phase != BarPhase::Exiting && !view.iter().any(|r| &r.country == country) {
                state.phase = BarPhase::Exiting;
                plan.exit.push(country.clone());
            }
        }
        plan.exit.sort();

        plan
    }

    /// First visibility: `Collapsed → Revealing`. Returns whether the
    /// reveal animation should start; any other phase is a no-op.
    pub fn begin_reveal(&mut self, country: &str) -> bool {
        match self.bars.get_mut(country) {
            Some(state) if state.phase == BarPhase::Collapsed => {
                state.phase = BarPhase::Revealing;
                true
            }
            _ => false,
        }
    }

    /// Reveal animation finished: `Revealing → Settled`.
    pub fn settle(&mut self, country: &str) {
        if let Some(state) = self.bars.get_mut(country) {
            if state.phase == BarPhase::Revealing {
                state.phase = BarPhase::Settled;
            }
        }
    }

    /// Exit transition finished: drop the element.
    pub fn finish_exit(&mut self, country: &str) {
        if matches!(self.bars.get(country).map(|s| s.phase), Some(BarPhase::Exiting)) {
            self.bars.remove(country);
        }
    }

    pub fn bar(&self, country: &str) -> Option<&BarState> {
        self.bars.get(country)
    }

    /// Countries currently in the view (everything not exiting).
    pub fn live_countries(&self) -> impl Iterator<Item = &str> {
        self.bars
            .values()
            .filter(|s| s.phase != BarPhase::Exiting)
            .map(|s| s.country.as_str())
    }

    /// Monotonic counter, bumped per `apply`; scopes the observer set.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
