use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use super::cycler::{Cycler, PhraseList, Step, Timing};
use super::scheduler::Scheduler;

struct Inner<S: Scheduler> {
    cycler: Cycler,
    timing: Timing,
    scheduler: S,
    pending: Option<S::Handle>,
    on_change: Box<dyn Fn(&str)>,
}

/// A running typewriter: one cycler ticked by one pending timer at a time.
///
/// Dropping it cancels the pending tick. Scheduled tasks only hold a weak
/// reference, so a tick racing the teardown finds nothing to update.
pub struct Typewriter<S: Scheduler> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler> Typewriter<S> {
    pub fn start<F>(phrases: PhraseList, timing: Timing, scheduler: S, on_change: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        debug!("Starting typewriter over {} phrases", phrases.len());
        let inner = Rc::new(RefCell::new(Inner {
            cycler: Cycler::new(phrases),
            timing,
            scheduler,
            pending: None,
            on_change: Box::new(on_change),
        }));
        arm(&inner, timing.first_delay());
        Self { inner }
    }

    #[cfg(test)]
    pub fn displayed(&self) -> String {
        self.inner.borrow().cycler.displayed().to_owned()
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.inner.borrow().cycler.index()
    }
}

impl<S: Scheduler> Drop for Typewriter<S> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            if inner.pending.take().is_some() {
                debug!("Typewriter stopped, pending tick cancelled");
            }
        }
    }
}

fn arm<S: Scheduler>(inner: &Rc<RefCell<Inner<S>>>, delay: std::time::Duration) {
    let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
    let handle = inner.borrow().scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                fire(&inner);
            }
        }),
    );
    inner.borrow_mut().pending = Some(handle);
}

fn fire<S: Scheduler>(inner: &Rc<RefCell<Inner<S>>>) {
    let delay = {
        let mut state = inner.borrow_mut();
        state.pending = None;
        let step = state.cycler.tick();
        if step.changes_text() {
            (state.on_change)(state.cycler.displayed());
        } else if step == Step::Advanced {
            trace!("Typewriter moved on to phrase {}", state.cycler.index());
        }
        state.timing.delay_after(step)
    };
    arm(inner, delay);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::typewriter::scheduler::manual::ManualScheduler;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn start(phrases: &[&str]) -> (ManualScheduler, Typewriter<ManualScheduler>, Rc<RefCell<Vec<String>>>) {
        let scheduler = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let typewriter = Typewriter::start(
            PhraseList::new(phrases.iter().copied()).unwrap(),
            Timing::default(),
            scheduler.clone(),
            move |text| log.borrow_mut().push(text.to_owned()),
        );
        (scheduler, typewriter, seen)
    }

    #[test]
    fn nothing_shown_before_first_tick() {
        let (scheduler, typewriter, seen) = start(&["Ab"]);
        scheduler.advance(ms(149));
        assert_eq!(typewriter.displayed(), "");
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn follows_phase_delays() {
        let (scheduler, typewriter, seen) = start(&["Ab"]);

        scheduler.advance(ms(150));
        assert_eq!(typewriter.displayed(), "A");
        scheduler.advance(ms(150));
        assert_eq!(typewriter.displayed(), "Ab");

        // pause tick at 450ms, first deletion a full pause later
        scheduler.advance(ms(150 + 999));
        assert_eq!(typewriter.displayed(), "Ab");
        scheduler.advance(ms(1));
        assert_eq!(typewriter.displayed(), "A");

        scheduler.advance(ms(75));
        assert_eq!(typewriter.displayed(), "");

        // advance tick, then retype after the typing delay
        scheduler.advance(ms(75 + 150));
        assert_eq!(typewriter.displayed(), "A");
        assert_eq!(typewriter.index(), 0);

        assert_eq!(*seen.borrow(), vec!["A", "Ab", "A", "", "A"]);
    }

    #[test]
    fn rotates_to_next_phrase() {
        let (scheduler, typewriter, seen) = start(&["x", "yz"]);
        // x: type(150) pause(150) delete(1000) advance(75) -> y at +150
        scheduler.advance(ms(150 + 150 + 1000 + 75 + 150));
        assert_eq!(typewriter.index(), 1);
        assert_eq!(typewriter.displayed(), "y");
        assert_eq!(*seen.borrow(), vec!["x", "", "y"]);
    }

    #[test]
    fn drop_cancels_pending_tick() {
        let (scheduler, typewriter, seen) = start(&["Ab"]);
        scheduler.advance(ms(150));
        assert_eq!(scheduler.pending(), 1);

        drop(typewriter);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(10_000));
        assert_eq!(*seen.borrow(), vec!["A"]);
    }

    #[test]
    fn exactly_one_tick_pending_while_running() {
        let (scheduler, _typewriter, _) = start(&["abc", "de"]);
        for _ in 0..200 {
            scheduler.advance(ms(25));
            assert_eq!(scheduler.pending(), 1);
        }
    }
}
