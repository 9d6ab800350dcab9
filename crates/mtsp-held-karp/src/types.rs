use mtsp_core::Tour;

/// Work counters for one solver invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Memo slots filled (distinct `(visited, current)` states expanded).
    pub states: u64,
    /// Edges relaxed across all expanded states.
    pub transitions: u64,
    /// Memo slots allocated up front.
    pub memo_slots: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeldKarpResult {
    pub tour: Tour,
    pub stats: SolveStats,
    /// `layer_states[k]`: states expanded whose visited set holds `k` cities.
    pub layer_states: Vec<u64>,
}
