use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel::{after, tick};
use crossbeam::select;
use dqueue::DelayQueue;

/// Payload handed out to the demo workers.
#[derive(Debug, Clone)]
struct DemoJob {
    index: usize,
    suffix: Option<&'static str>,
}

impl fmt::Display for DemoJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix {
            Some(suffix) => write!(f, "Job {}_{}", self.index, suffix),
            None => write!(f, "Job {}", self.index),
        }
    }
}

const PUBLISH_BATCH: usize = 10;
const WORKERS: usize = 10;
const POLL_INTERVAL: Duration = Duration::from_millis(1);
const DEMO_DEADLINE: Duration = Duration::from_secs(3);

/// Publish a batch of timed tasks, dump the pending queue, then let a pool
/// of polling workers race to retrieve each task once it is due.
pub fn run() -> anyhow::Result<()> {
    let queue = Arc::new(DelayQueue::new());

    // -- Publish tasks
    for i in 0..PUBLISH_BATCH {
        queue.schedule_at(
            DemoJob {
                index: i,
                suffix: None,
            },
            Instant::now() + Duration::from_millis(1_000 + 10 * i as u64),
        );
        queue.schedule_after(
            DemoJob {
                index: i,
                suffix: Some("bis"),
            },
            Duration::from_millis(1_100 + 10 * i as u64),
        );
    }

    let now = Instant::now();
    for (i, task) in queue.snapshot().iter().enumerate() {
        println!(
            "Task {}: `{}` to be executed in {:?} from now.",
            i,
            task.payload,
            task.execute_at.saturating_duration_since(now),
        );
    }

    // -- Worker pool polling the queue until the deadline
    let mut worker_handles = vec![];
    for worker_number in 0..WORKERS {
        let cloned_queue = Arc::clone(&queue);
        worker_handles.push(thread::spawn(move || {
            let ticker = tick(POLL_INTERVAL);
            let deadline = after(DEMO_DEADLINE);
            loop {
                select! {
                    recv(ticker) -> _ => {
                        if let Some(task) = cloned_queue.try_get() {
                            println!(
                                "Worker {} executed `{}` {:?} after its scheduled time.",
                                worker_number,
                                task.payload,
                                Instant::now().saturating_duration_since(task.execute_at),
                            );
                        }
                    }
                    recv(deadline) -> _ => {
                        println!(
                            "Closing worker {}, there are {} tasks in queue",
                            worker_number,
                            cloned_queue.len()
                        );
                        return;
                    }
                }
            }
        }));
    }

    for handle in worker_handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("demo worker panicked"))?;
    }
    Ok(())
}
