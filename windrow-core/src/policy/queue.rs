//! Candidate queue holding accepted cells that still await expansion.

use std::{collections::VecDeque, fmt, str::FromStr};

use crate::error::ConfigurationError;

/// Order in which accepted cells are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QueueDiscipline {
    /// First in, first out: clusters grow breadth-first.
    #[default]
    Fifo,
    /// Last in, first out: clusters grow depth-first.
    Lifo,
}

impl QueueDiscipline {
    /// Returns the canonical discipline name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lifo => "LIFO",
        }
    }
}

impl fmt::Display for QueueDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueDiscipline {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "FIFO" => Ok(Self::Fifo),
            "LIFO" => Ok(Self::Lifo),
            other => Err(ConfigurationError::UnknownQueueDiscipline {
                name: other.to_owned(),
            }),
        }
    }
}

/// Pending cells of the cluster under construction.
///
/// Both disciplines remove from the head; they differ only in where
/// [`CandidateQueue::enqueue`] inserts.
///
/// # Examples
/// ```
/// use windrow_core::{CandidateQueue, QueueDiscipline};
///
/// let mut fifo = CandidateQueue::new(QueueDiscipline::Fifo);
/// let mut lifo = CandidateQueue::new(QueueDiscipline::Lifo);
/// for cell in [4, 7, 9] {
///     fifo.enqueue(cell);
///     lifo.enqueue(cell);
/// }
/// assert_eq!(fifo.dequeue(), Some(4));
/// assert_eq!(lifo.dequeue(), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct CandidateQueue {
    discipline: QueueDiscipline,
    items: VecDeque<usize>,
}

impl CandidateQueue {
    /// Creates an empty queue with a fixed discipline.
    #[must_use]
    pub fn new(discipline: QueueDiscipline) -> Self {
        Self {
            discipline,
            items: VecDeque::new(),
        }
    }

    /// Returns the discipline fixed at construction.
    #[must_use]
    pub const fn discipline(&self) -> QueueDiscipline {
        self.discipline
    }

    /// Adds an accepted cell.
    pub fn enqueue(&mut self, cell: usize) {
        match self.discipline {
            QueueDiscipline::Fifo => self.items.push_back(cell),
            QueueDiscipline::Lifo => self.items.push_front(cell),
        }
    }

    /// Removes the next cell to expand.
    pub fn dequeue(&mut self) -> Option<usize> {
        self.items.pop_front()
    }

    /// Drops every pending cell.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of pending cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether no cells are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fifo(QueueDiscipline::Fifo, vec![1, 2, 3, 5])]
    #[case::lifo(QueueDiscipline::Lifo, vec![2, 5, 3, 1])]
    fn interleaved_operations_follow_discipline(
        #[case] discipline: QueueDiscipline,
        #[case] expected: Vec<usize>,
    ) {
        let mut queue = CandidateQueue::new(discipline);
        let mut drained = Vec::new();
        queue.enqueue(1);
        queue.enqueue(2);
        drained.extend(queue.dequeue());
        queue.enqueue(3);
        queue.enqueue(5);
        while let Some(cell) = queue.dequeue() {
            drained.push(cell);
        }
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);

        let mut sorted = drained.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 5]);
        assert_eq!(drained, expected);
    }

    #[test]
    fn clear_discards_pending_cells() {
        let mut queue = CandidateQueue::new(QueueDiscipline::Lifo);
        queue.enqueue(8);
        queue.enqueue(9);
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.discipline(), QueueDiscipline::Lifo);
    }

    #[rstest]
    #[case("FIFO", QueueDiscipline::Fifo)]
    #[case("LIFO", QueueDiscipline::Lifo)]
    fn parses_and_renders_canonical_names(#[case] name: &str, #[case] expected: QueueDiscipline) {
        let parsed: QueueDiscipline = name.parse().expect("name is canonical");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), name);
    }

    #[test]
    fn rejects_lowercase_names() {
        assert!(matches!(
            "fifo".parse::<QueueDiscipline>(),
            Err(ConfigurationError::UnknownQueueDiscipline { .. })
        ));
    }
}
