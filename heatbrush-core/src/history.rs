//! Linear undo history for the weight field.

use crate::field::WeightField;

/// Stack of prior weight-field snapshots.
///
/// Push a snapshot before each mutation; pop to undo. Unbounded: one
/// full-resolution snapshot per click, matching the cost the user opted
/// into by clicking.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    snapshots: Vec<WeightField>,
}

impl HistoryStack {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot.
    pub fn push(&mut self, snapshot: WeightField) {
        self.snapshots.push(snapshot);
    }

    /// Pops the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<WeightField> {
        self.snapshots.pop()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut history = HistoryStack::new();
        assert!(history.is_empty());
        assert!(history.pop().is_none());

        let mut first = WeightField::new(2, 2).unwrap();
        first.set(0, 0, 0.1).unwrap();
        let mut second = WeightField::new(2, 2).unwrap();
        second.set(0, 0, 0.2).unwrap();

        history.push(first.clone());
        history.push(second.clone());
        assert_eq!(history.len(), 2);

        assert_eq!(history.pop().unwrap(), second);
        assert_eq!(history.pop().unwrap(), first);
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryStack::new();
        history.push(WeightField::new(1, 1).unwrap());
        history.clear();
        assert!(history.is_empty());
    }
}
