#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay step between blocks revealed by the same observer callback.
pub const STAGGER_STEP_MS: u32 = 50;

/// One-shot visibility latch for a revealed content block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub visible: bool,
}

impl RevealState {
    /// Latch to visible. Returns `true` only the first time; once a
    /// block has revealed, later intersections have no effect.
    pub fn reveal(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Reveal delay for the `batch_index`-th intersecting entry of an
/// observer callback.
#[must_use]
pub fn stagger_delay_ms(batch_index: usize) -> u32 {
    u32::try_from(batch_index).map_or(u32::MAX, |i| i.saturating_mul(STAGGER_STEP_MS))
}
