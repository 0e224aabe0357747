use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::Task;
use crate::heap::TimeHeap;

/// Thread safe delayed-task queue: payloads go in tagged with a future
/// execution time and come back out, one per [`DelayQueue::try_get`] call,
/// once that time has arrived.
///
/// The queue is passive. It runs no threads of its own and never blocks a
/// caller; consumers poll `try_get` on whatever cadence suits them.
///
/// A queue is only usable when built by [`DelayQueue::new`]. The
/// [`Default`] value exists so a handle can sit in a larger struct before
/// configuration, but every operation on it panics.
#[derive(Debug)]
pub struct DelayQueue<T> {
    heap: Mutex<TimeHeap<T>>,
    initialized: bool,
}

impl<T> DelayQueue<T> {
    /// Create an empty, usable queue.
    pub fn new() -> Self {
        Self {
            heap: Mutex::new(TimeHeap::new()),
            initialized: true,
        }
    }

    fn check_initialized(&self) {
        if !self.initialized {
            panic!("DelayQueue must be created via DelayQueue::new()");
        }
    }

    /// Schedule `payload` for retrieval at the absolute instant `when`.
    ///
    /// Returns `true` if the task was accepted. A `when` that is not
    /// strictly in the future is rejected with `false` and leaves the queue
    /// untouched. There is no upper bound on how far out `when` may lie.
    pub fn schedule_at(&self, payload: T, when: Instant) -> bool {
        self.check_initialized();
        if when <= Instant::now() {
            return false;
        }
        let task = Task::new(payload, when);
        let mut heap = self.heap.lock().unwrap();
        heap.insert(task);
        true
    }

    /// Schedule `payload` for retrieval `delay` from now.
    ///
    /// A zero delay is rejected like a past timestamp.
    pub fn schedule_after(&self, payload: T, delay: Duration) -> bool {
        self.schedule_at(payload, Instant::now() + delay)
    }

    /// Retrieve one task whose execution time has arrived, if any.
    ///
    /// `None` means "nothing due right now": the queue may be empty, or the
    /// earliest task may still lie in the future. A returned task is
    /// removed from the queue and always satisfies `execute_at <= now`.
    pub fn try_get(&self) -> Option<Task<T>> {
        self.check_initialized();
        let mut heap = self.heap.lock().unwrap();
        if heap.is_empty() {
            return None;
        }
        let now = Instant::now();
        // Fast path: the watermark says nothing can possibly be due yet.
        if heap.next_on() > now {
            return None;
        }
        let task = heap.remove_min()?;
        if task.is_due(now) {
            return Some(task);
        }
        // The watermark was a stale upper bound and the root is not due
        // after all. Put it back and report not ready.
        heap.reinsert(task);
        None
    }

    /// Number of tasks currently pending.
    pub fn len(&self) -> usize {
        self.check_initialized();
        self.heap.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard every pending task.
    pub fn reset(&self) {
        self.check_initialized();
        self.heap.lock().unwrap().clear();
    }
}

impl<T: Clone> DelayQueue<T> {
    /// Copy of every pending task, sorted ascending by execution time.
    ///
    /// The sort is stable, so tasks sharing a timestamp keep their relative
    /// order from the copy. The internal heap is left untouched.
    pub fn snapshot(&self) -> Vec<Task<T>> {
        self.check_initialized();
        let mut tasks = {
            let heap = self.heap.lock().unwrap();
            heap.tasks().to_vec()
        };
        tasks.sort_by_key(|task| task.execute_at);
        tasks
    }
}

impl<T> Default for DelayQueue<T> {
    /// The invalid zero-value handle; see the type-level docs.
    fn default() -> Self {
        Self {
            heap: Mutex::new(TimeHeap::new()),
            initialized: false,
        }
    }
}
