/// Number of distinct generation values before the counter wraps.
pub const GENERATION_CYCLE: u32 = 10_000;

/// Per-frame logical timestamp used to tell which tracks were matched in the
/// current frame.
///
/// The value cycles through `[0, GENERATION_CYCLE)`. Only equality with the
/// tracker's current generation matters, so wrapping is harmless: every
/// track that misses a frame is pruned in that same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u32);

impl Generation {
    /// Create a generation, reducing `value` into the cycle range.
    pub fn new(value: u32) -> Self {
        Self(value % GENERATION_CYCLE)
    }

    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self((self.0 + 1) % GENERATION_CYCLE)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
