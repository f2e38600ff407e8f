//! Subscribers notified whenever a move lands on the board.

use othello_engine::{Location, Player};

/// A move that was just applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveApplied {
    pub location: Location,
    pub player: Player,
    pub flipped: usize,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&MoveApplied) + Send>;

/// Observers in subscription order. Delivery is synchronous and follows
/// that order.
#[derive(Default)]
pub struct MoveObservers {
    next_id: u64,
    observers: Vec<(ObserverId, Observer)>,
}

impl MoveObservers {
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&MoveApplied) + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &MoveApplied) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for MoveObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveObservers")
            .field("count", &self.observers.len())
            .finish()
    }
}
