use std::time::Duration;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay.
///
/// Dropping the returned handle cancels the task if it has not fired yet.
pub trait Scheduler: 'static {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

/// Browser event-loop timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use super::{Scheduler, Task};

    struct Entry {
        id: u64,
        due: Duration,
        task: Task,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        entries: Vec<Entry>,
    }

    /// Virtual clock: nothing runs until [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                if let Ok(mut queue) = queue.try_borrow_mut() {
                    queue.entries.retain(|e| e.id != self.id);
                }
            }
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> Duration {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        /// Moves the clock forward, running every task that falls due on the
        /// way in due order (ties in scheduling order).
        pub fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let earliest = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(pos, _)| pos);
                    earliest.map(|pos| {
                        let entry = queue.entries.remove(pos);
                        queue.now = entry.due;
                        entry.task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.entries.push(Entry { id, due, task });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    mod tests {
        use std::cell::Cell;

        use super::*;

        #[test]
        fn runs_only_due_tasks() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(0));
            let f = fired.clone();
            let _handle = scheduler.schedule(Duration::from_millis(100), Box::new(move || f.set(f.get() + 1)));

            scheduler.advance(Duration::from_millis(99));
            assert_eq!(fired.get(), 0);
            scheduler.advance(Duration::from_millis(1));
            assert_eq!(fired.get(), 1);
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn dropping_handle_cancels() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(false));
            let f = fired.clone();
            let handle = scheduler.schedule(Duration::from_millis(10), Box::new(move || f.set(true)));
            drop(handle);

            assert_eq!(scheduler.pending(), 0);
            scheduler.advance(Duration::from_secs(1));
            assert!(!fired.get());
        }
    }
}
