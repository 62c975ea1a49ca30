//! Count-up animation for headline statistics.
//!
//! Each retarget issues a fresh [`AnimationToken`]. Frame tasks carry the token
//! they were started with and [`StatBoard::tick`] drops any tick whose token
//! is no longer current, so a superseded selection can never write its
//! half-blended values over the new one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationGate {
    current: u64,
}

impl AnimationGate {
    pub fn issue(&mut self) -> AnimationToken {
        self.current = self.current.wrapping_add(1);
        AnimationToken(self.current)
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        token.0 == self.current
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Token was superseded; the caller should stop its frame loop.
    Stale,
    Running,
    Settled,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatBoard {
    gate: AnimationGate,
    duration_ms: u64,
    targets: Vec<f64>,
    displayed: Vec<f64>,
}

impl StatBoard {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Start animating toward `targets` from zero, superseding any running animation.
    pub fn retarget(&mut self, targets: Vec<f64>) -> AnimationToken {
        let token = self.gate.issue();
        self.displayed = vec![0.0; targets.len()];
        self.targets = targets;
        if self.duration_ms == 0 {
            self.displayed = self.targets.clone();
        }
        token
    }

    pub fn tick(&mut self, token: AnimationToken, elapsed_ms: u64) -> Tick {
        if !self.gate.is_current(token) {
            return Tick::Stale;
        }
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            self.displayed = self.targets.clone();
            return Tick::Settled;
        }

        let eased = ease_out_cubic(elapsed_ms as f64 / self.duration_ms as f64);
        for (shown, target) in self.displayed.iter_mut().zip(&self.targets) {
            *shown = target * eased;
        }
        Tick::Running
    }

    /// True when the board is animating toward exactly these targets.
    pub fn tracks(&self, targets: &[f64]) -> bool {
        self.targets == targets
    }

    pub fn displayed(&self) -> &[f64] {
        &self.displayed
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}
