//! Lock-guarded shared values with bounded acquisition.

use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

/// A shared value paired with the mutex that must be held to read or write it.
///
/// Producers mutate through [`Guarded::lock`] or [`Guarded::update`]; observers
/// read through [`Guarded::snapshot`] or [`Guarded::read_with`], which give up
/// after a timeout instead of blocking indefinitely.
#[derive(Debug, Default)]
pub struct Guarded<T> {
    inner: Mutex<T>,
}

impl<T> Guarded<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Block until the lock is held.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock()
    }

    /// Block until the lock is held, then mutate in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Run `f` under the lock if it can be acquired within `timeout`.
    ///
    /// The guard is dropped before this returns, so `f` should copy out
    /// whatever it needs rather than doing any slow work.
    pub fn read_with<R>(&self, timeout: Duration, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.inner.try_lock_for(timeout)?;
        Some(f(&guard))
    }
}

impl<T: Clone> Guarded<T> {
    /// Copy the value out under the lock, or `None` on timeout.
    pub fn snapshot(&self, timeout: Duration) -> Option<T> {
        self.read_with(timeout, T::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_snapshot_copies_value() {
        let guarded = Guarded::new(vec![1, 2, 3]);
        let copy = guarded.snapshot(Duration::from_millis(10)).unwrap();
        guarded.update(|v| v.push(4));

        assert_eq!(copy, vec![1, 2, 3]);
        assert_eq!(guarded.lock().len(), 4);
    }

    #[test]
    fn test_snapshot_times_out_while_held() {
        let guarded = Arc::new(Guarded::new(0_u32));
        let holder = Arc::clone(&guarded);
        let (tx, rx) = std::sync::mpsc::channel();

        let handle = thread::spawn(move || {
            let _guard = holder.lock();
            tx.send(()).unwrap();
            thread::sleep(Duration::from_millis(300));
        });

        rx.recv().unwrap();
        let start = Instant::now();
        let result = guarded.snapshot(Duration::from_millis(50));
        let waited = start.elapsed();

        assert!(result.is_none());
        assert!(waited >= Duration::from_millis(45));
        assert!(waited < Duration::from_millis(290));

        handle.join().unwrap();
        assert_eq!(guarded.snapshot(Duration::from_millis(50)), Some(0));
    }

    #[test]
    fn test_read_with_returns_projection() {
        let guarded = Guarded::new(vec!["a", "b", "c"]);
        let tail = guarded.read_with(Duration::from_millis(10), |v| v[1..].to_vec());
        assert_eq!(tail, Some(vec!["b", "c"]));
    }
}
