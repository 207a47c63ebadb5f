//! Counterexamples for failed sequence properties.
//!
//! A counterexample is a short trace of snapshots around the first term
//! that breaks a property, enough to reproduce the failure by hand.

use std::fmt::Write;

/// One snapshot in a counterexample trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Step number (1-indexed term position)
    pub step: u64,
    /// What happened at this step
    pub description: String,
    /// Named values at this step
    pub variables: Vec<(String, String)>,
}

/// Trace leading to a property violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counterexample {
    /// Number of terms the failing sequence was generated with, if known
    pub terms_count: Option<u64>,
    /// Snapshots in step order
    pub states: Vec<StateSnapshot>,
}

impl Counterexample {
    /// Create an empty counterexample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counterexample tied to a generation request of `terms_count` terms.
    #[must_use]
    pub fn with_terms_count(terms_count: u64) -> Self {
        Self {
            terms_count: Some(terms_count),
            states: Vec::new(),
        }
    }

    /// Append a snapshot.
    pub fn add_state(&mut self, state: StateSnapshot) {
        debug_assert!(state.step > 0, "Step must be positive");
        debug_assert!(
            self.states.last().map_or(true, |s| s.step <= state.step),
            "Snapshots must be added in step order"
        );
        self.states.push(state);
    }

    /// Render the trace as indented text.
    #[must_use]
    pub fn render_diagram(&self) -> String {
        let mut out = String::new();
        if let Some(count) = self.terms_count {
            let _ = writeln!(out, "  reproduce with: generate({})", count);
        }
        for state in &self.states {
            let _ = writeln!(out, "  [{}] {}", state.step, state.description);
            for (name, value) in &state.variables {
                let _ = writeln!(out, "      {} = {}", name, value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_variables() {
        let mut ce = Counterexample::with_terms_count(5);
        ce.add_state(StateSnapshot {
            step: 5,
            description: "term 8 skips 6".to_string(),
            variables: vec![("prefix".to_string(), "[1, 2, 3, 5]".to_string())],
        });

        let text = ce.render_diagram();
        assert!(text.contains("generate(5)"));
        assert!(text.contains("[5] term 8 skips 6"));
        assert!(text.contains("prefix = [1, 2, 3, 5]"));
    }

    #[test]
    fn test_empty_render() {
        assert!(Counterexample::new().render_diagram().is_empty());
    }
}
