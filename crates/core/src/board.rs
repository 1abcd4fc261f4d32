//! The slot list a view renders, as a value rather than a global store.

use serde::Serialize;

use crate::calendar::CalendarEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Add to the end.
    Append(CalendarEntry),
    /// Add at `index`; indexes past the end append.
    Insert { index: usize, entry: CalendarEntry },
    Clear,
    /// Replace everything with a freshly fetched list.
    Loaded(Vec<CalendarEntry>),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotBoard {
    pub is_initially_loaded: bool,
    pub interview_slots: Vec<CalendarEntry>,
    pub error: String,
}

impl SlotBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after `action`; `self` is left untouched.
    pub fn apply(&self, action: BoardAction) -> Self {
        let mut next = self.clone();
        match action {
            BoardAction::Append(entry) => next.interview_slots.push(entry),
            BoardAction::Insert { index, entry } => {
                let index = index.min(next.interview_slots.len());
                next.interview_slots.insert(index, entry);
            }
            BoardAction::Clear => next.interview_slots.clear(),
            BoardAction::Loaded(entries) => {
                next.interview_slots = entries;
                next.is_initially_loaded = true;
                next.error.clear();
            }
            BoardAction::Failed(message) => next.error = message,
        }
        next
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.interview_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(hour: u32) -> CalendarEntry {
        CalendarEntry {
            start_date: format!("2024-03-11T{hour:02}:00:00Z"),
            end_date: format!("2024-03-11T{:02}:00:00.000Z", hour + 1),
            title: String::new(),
        }
    }

    #[test]
    fn append_keeps_order() {
        let board = SlotBoard::new()
            .apply(BoardAction::Append(entry(9)))
            .apply(BoardAction::Append(entry(10)));

        assert_eq!(board.entries(), &[entry(9), entry(10)]);
    }

    #[test]
    fn insert_places_at_index_and_clamps() {
        let board = SlotBoard::new()
            .apply(BoardAction::Append(entry(9)))
            .apply(BoardAction::Append(entry(11)))
            .apply(BoardAction::Insert { index: 1, entry: entry(10) })
            .apply(BoardAction::Insert { index: 0, entry: entry(8) })
            .apply(BoardAction::Insert { index: 99, entry: entry(12) });

        assert_eq!(
            board.entries(),
            &[entry(8), entry(9), entry(10), entry(11), entry(12)]
        );
    }

    #[test]
    fn apply_does_not_mutate_previous_state() {
        let before = SlotBoard::new().apply(BoardAction::Append(entry(9)));
        let after = before.apply(BoardAction::Clear);

        assert_eq!(before.entries().len(), 1);
        assert!(after.entries().is_empty());
    }

    #[test]
    fn loaded_marks_board_and_clears_error() {
        let board = SlotBoard::new()
            .apply(BoardAction::Failed("Unable to get Your Interview Slots".into()))
            .apply(BoardAction::Loaded(vec![entry(14)]));

        assert!(board.is_initially_loaded);
        assert!(board.error.is_empty());
        assert_eq!(board.entries(), &[entry(14)]);
    }
}
