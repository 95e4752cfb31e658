use tokio::sync::{broadcast, watch};

const CHANGE_BUFFER: usize = 32;

/// A single observable value.
///
/// Readers either watch the latest value (`subscribe`) or receive every write
/// in order (`changes`). Writes never fail, even with no readers attached.
#[derive(Debug)]
pub struct Observable<T: Clone> {
    current: watch::Sender<T>,
    changes: broadcast::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (current, _) = watch::channel(initial);
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self { current, changes }
    }

    pub fn get(&self) -> T {
        self.current.borrow().clone()
    }

    /// Publishes `value`. The latest value is updated before the change is
    /// broadcast, so a change receiver reading `get` never sees an older value.
    pub fn set(&self, value: T) {
        self.current.send_replace(value.clone());
        // No broadcast receivers is not an error.
        let _ = self.changes.send(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.current.subscribe()
    }

    pub fn changes(&self) -> broadcast::Receiver<T> {
        self.changes.subscribe()
    }
}
