//! Ad-gate state machine guarding the pro features.
//!
//! The countdown is tick-driven rather than timer-driven: the embedding UI
//! owns the clock and calls [`AdGate::tick`] once per elapsed second, which
//! keeps the machine deterministic under test. Unlocks live in a
//! session-scoped set inside the gate and are never persisted.

use std::collections::HashSet;

/// Seconds a visitor watches the ad before the unlock button arms.
pub const DEFAULT_COUNTDOWN_TICKS: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// No gate is showing.
    Idle,
    /// Ad showing, countdown running.
    Counting {
        feature: String,
        ticks_remaining: u8,
    },
    /// Countdown elapsed; the unlock action is armed.
    Ready { feature: String },
}

/// What the caller should do after asking to open the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Feature was unlocked earlier this session: skip the gate and run it.
    Run,
    /// Gate opened; drive [`AdGate::tick`] until the unlock arms.
    Wait,
}

#[derive(Debug)]
pub struct AdGate {
    countdown_ticks: u8,
    state: GateState,
    unlocked: HashSet<String>,
}

impl Default for AdGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AdGate {
    pub fn new() -> Self {
        Self::with_countdown(DEFAULT_COUNTDOWN_TICKS)
    }

    /// A gate with a custom countdown. A countdown of zero is clamped to one
    /// tick so the unlock can never arm instantly.
    pub fn with_countdown(ticks: u8) -> Self {
        Self {
            countdown_ticks: ticks.max(1),
            state: GateState::Idle,
            unlocked: HashSet::new(),
        }
    }

    /// Open the gate for `feature`. Features unlocked earlier in the session
    /// bypass the machine entirely; otherwise the countdown restarts from
    /// the full constant, replacing any gate already showing.
    pub fn open(&mut self, feature: &str) -> GateAction {
        if self.unlocked.contains(feature) {
            return GateAction::Run;
        }
        self.state = GateState::Counting {
            feature: feature.to_owned(),
            ticks_remaining: self.countdown_ticks,
        };
        GateAction::Wait
    }

    /// One second elapsed. No-op unless counting.
    pub fn tick(&mut self) {
        if let GateState::Counting {
            feature,
            ticks_remaining,
        } = &mut self.state
        {
            *ticks_remaining -= 1;
            if *ticks_remaining == 0 {
                let feature = std::mem::take(feature);
                self.state = GateState::Ready { feature };
            }
        }
    }

    /// The visitor pressed unlock. Only honored once the countdown has
    /// elapsed: records the feature for the rest of the session, closes the
    /// gate, and returns the feature name to run. Pressing early changes
    /// nothing.
    pub fn unlock(&mut self) -> Option<String> {
        match &self.state {
            GateState::Ready { feature } => {
                let feature = feature.clone();
                self.unlocked.insert(feature.clone());
                self.state = GateState::Idle;
                Some(feature)
            }
            _ => None,
        }
    }

    /// Dismiss the gate. Closing before the unlock records nothing.
    pub fn close(&mut self) {
        self.state = GateState::Idle;
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_unlocked(&self, feature: &str) -> bool {
        self.unlocked.contains(feature)
    }
}
