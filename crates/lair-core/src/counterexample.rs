//! Counterexamples attached to failing properties.
//!
//! A counterexample is a short sequence of state snapshots leading to the
//! violation, plus the DST seed when the run was randomized.

use std::fmt::Write;

/// One observed state on the way to a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Move number at which the snapshot was taken (0 = initial state)
    pub step: u64,
    pub description: String,
    /// Named values, rendered as `name = value`
    pub variables: Vec<(String, String)>,
}

/// Reproduction recipe for a property violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counterexample {
    /// Seed to rerun a randomized walk with (`DST_SEED=<seed>`)
    pub dst_seed: Option<u64>,
    pub states: Vec<StateSnapshot>,
}

impl Counterexample {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counterexample reproducible from a DST seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            dst_seed: Some(seed),
            states: Vec::new(),
        }
    }

    pub fn add_state(&mut self, state: StateSnapshot) {
        debug_assert!(
            self.states.last().map_or(true, |last| last.step <= state.step),
            "Snapshots must be added in step order"
        );
        self.states.push(state);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Render the snapshots as a vertical trace.
    ///
    /// ```text
    /// DST_SEED=42
    /// [step 3] Log 2 placed on log 1
    ///     from = Forest
    ///      |
    ///      v
    /// ```
    #[must_use]
    pub fn render_diagram(&self) -> String {
        let mut out = String::new();

        if let Some(seed) = self.dst_seed {
            let _ = writeln!(out, "DST_SEED={}", seed);
        }

        for (i, state) in self.states.iter().enumerate() {
            let _ = writeln!(out, "[step {}] {}", state.step, state.description);
            for (name, value) in &state.variables {
                let _ = writeln!(out, "    {} = {}", name, value);
            }
            if i + 1 < self.states.len() {
                out.push_str("     |\n     v\n");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(step: u64, description: &str) -> StateSnapshot {
        StateSnapshot {
            step,
            description: description.to_string(),
            variables: vec![("source".to_string(), "[1, 2]".to_string())],
        }
    }

    #[test]
    fn test_render_with_seed() {
        let mut ce = Counterexample::with_seed(42);
        ce.add_state(snapshot(0, "initial"));
        ce.add_state(snapshot(1, "log 2 placed on log 1"));

        let diagram = ce.render_diagram();
        assert!(diagram.starts_with("DST_SEED=42\n"));
        assert!(diagram.contains("[step 1] log 2 placed on log 1"));
        assert!(diagram.contains("source = [1, 2]"));
        assert_eq!(diagram.matches(" v\n").count(), 1);
    }

    #[test]
    fn test_empty() {
        let ce = Counterexample::new();
        assert!(ce.is_empty());
        assert!(ce.render_diagram().is_empty());
    }
}
