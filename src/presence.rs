use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Sending half handed to whatever delivers connection-count updates.
pub type OnlineUsersSender = Sender<u32>;

/// Client-side view of the connection-count broadcast.
///
/// Counts arrive asynchronously from the hosting environment with no
/// ordering guarantee relative to frames; only the most recent value is
/// kept. The display never affects game state.
#[derive(Debug)]
pub struct OnlineUsers {
    incoming: Receiver<u32>,
    latest: Option<u32>,
}

impl OnlineUsers {
    /// Creates the latch and the sender for the broadcast source.
    #[must_use]
    pub fn channel() -> (OnlineUsersSender, Self) {
        let (sender, incoming) = mpsc::channel();
        (
            sender,
            Self {
                incoming,
                latest: None,
            },
        )
    }

    /// Drains delivered counts and returns the most recent one, if any
    /// has arrived yet.
    pub fn poll(&mut self) -> Option<u32> {
        loop {
            match self.incoming.try_recv() {
                Ok(count) => self.latest = Some(count),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        self.latest
    }
}
