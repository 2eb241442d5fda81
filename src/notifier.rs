//! The wake primitive a `select` call registers on every channel it targets.
//!
//! A plain edge-triggered event would not do: a post that happens between a
//! select's failed non-blocking poll and the moment it goes to sleep must
//! still be observed, or the wake-up is lost. A counting semaphore records
//! every post regardless of whether anyone is currently waiting, which is
//! exactly the property needed here.

use crate::sync::{self, Condvar, Mutex};

#[derive(Debug)]
pub(crate) struct Notifier {
    count: Mutex<usize>,
    posted: Condvar,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            count: Mutex::new(0),
            posted: Condvar::new(),
        }
    }

    /// Records one unit of progress and wakes a single waiter.
    pub(crate) fn post(&self) {
        let mut count = sync::lock(&self.count);
        *count += 1;
        self.posted.notify_one();
    }

    /// Blocks until at least one post is outstanding, then consumes it.
    pub(crate) fn wait(&self) {
        let mut count = sync::lock(&self.count);
        while *count == 0 {
            count = sync::wait(&self.posted, count);
        }
        *count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn post_before_wait_is_not_lost() {
        let notifier = Notifier::new();
        notifier.post();
        notifier.wait(); // must return immediately, not deadlock
    }

    #[test]
    fn wait_blocks_until_posted() {
        let notifier = Arc::new(Notifier::new());
        let waiter = {
            let notifier = Arc::clone(&notifier);
            thread::spawn(move || notifier.wait())
        };

        thread::sleep(Duration::from_millis(50));
        notifier.post();

        waiter.join().unwrap();
    }
}
