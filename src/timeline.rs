use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

struct Step {
    at_ms: u32,
    action: Rc<dyn Fn()>,
}

/// An ordered list of actions, each fired a fixed time after `start`.
///
/// One task walks the steps in order. `cancel` (or dropping the timeline)
/// stops whatever run is in flight; `start` begins a fresh run and cancels the
/// previous one.
pub struct Timeline {
    steps: Vec<Step>,
    run: Rc<Cell<u64>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            run: Rc::new(Cell::new(0)),
        }
    }

    /// Adds an action at `at_ms`. Steps sharing an offset keep insertion order.
    pub fn at(mut self, at_ms: u32, action: impl Fn() + 'static) -> Self {
        let index = self.steps.partition_point(|step| step.at_ms <= at_ms);
        self.steps.insert(
            index,
            Step {
                at_ms,
                action: Rc::new(action),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn offsets(&self) -> Vec<u32> {
        self.steps.iter().map(|step| step.at_ms).collect()
    }

    /// Time to wait before each step, relative to the one before it.
    pub fn waits(&self) -> Vec<u32> {
        let mut previous = 0;
        self.steps
            .iter()
            .map(|step| {
                let wait = step.at_ms - previous;
                previous = step.at_ms;
                wait
            })
            .collect()
    }

    /// Begins a new run and invalidates any earlier one. The returned run
    /// fires nothing until played.
    pub fn begin(&self) -> Run {
        let generation = self.run.get() + 1;
        self.run.set(generation);
        Run {
            plan: self
                .steps
                .iter()
                .map(|step| (step.at_ms, step.action.clone()))
                .collect(),
            run: self.run.clone(),
            generation,
        }
    }

    pub fn start(&self) {
        let run = self.begin();
        spawn_local(run.play(js_sys::Date::now, TimeoutFuture::new));
    }

    pub fn cancel(&self) {
        self.run.set(self.run.get() + 1);
    }

    #[cfg(test)]
    pub(crate) fn fire_all(&self) {
        for step in &self.steps {
            (step.action)();
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

/// One pass over a timeline's steps.
pub struct Run {
    plan: Vec<(u32, Rc<dyn Fn()>)>,
    run: Rc<Cell<u64>>,
    generation: u64,
}

impl Run {
    fn is_current(&self) -> bool {
        self.run.get() == self.generation
    }

    /// Fires each step once its offset has elapsed on `now` (milliseconds),
    /// counted from when play begins. Every wait is measured from that start,
    /// so timer latency does not accumulate from step to step. Stops as soon
    /// as the run is cancelled or superseded.
    pub async fn play<C, S, F>(self, now: C, mut sleep: S)
    where
        C: Fn() -> f64,
        S: FnMut(u32) -> F,
        F: Future<Output = ()>,
    {
        let started = now();
        for (at_ms, action) in &self.plan {
            let remaining = started + f64::from(*at_ms) - now();
            if remaining > 0.0 {
                sleep(remaining.ceil() as u32).await;
            }
            if !self.is_current() {
                return;
            }
            action();
        }
    }
}

impl Drop for Timeline {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn steps_are_kept_in_time_order() {
        let timeline = Timeline::new().at(800, || ()).at(200, || ()).at(500, || ());
        assert_eq!(timeline.offsets(), vec![200, 500, 800]);
        assert_eq!(timeline.waits(), vec![200, 300, 300]);
    }

    #[test]
    fn equal_offsets_keep_insertion_order() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let a = fired.clone();
        let b = fired.clone();
        let timeline = Timeline::new()
            .at(100, move || a.borrow_mut().push("a"))
            .at(100, move || b.borrow_mut().push("b"));
        assert_eq!(timeline.waits(), vec![100, 0]);
        timeline.fire_all();
        assert_eq!(*fired.borrow(), vec!["a", "b"]);
    }

    /// A timeline whose steps log their index and the clock reading.
    fn recording(offsets: &[u32], clock: &Rc<Cell<f64>>) -> (Timeline, Rc<RefCell<Vec<(usize, f64)>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let timeline = offsets.iter().enumerate().fold(Timeline::new(), |timeline, (i, at)| {
            let fired = fired.clone();
            let clock = clock.clone();
            timeline.at(*at, move || fired.borrow_mut().push((i, clock.get())))
        });
        (timeline, fired)
    }

    fn indices(fired: &RefCell<Vec<(usize, f64)>>) -> Vec<usize> {
        fired.borrow().iter().map(|(i, _)| *i).collect()
    }

    #[tokio::test]
    async fn cancel_between_steps_stops_the_run() {
        let clock = Rc::new(Cell::new(0.0));
        let (timeline, fired) = recording(&[500, 800, 1100], &clock);
        let mut sleeps = 0;
        timeline
            .begin()
            .play(
                || clock.get(),
                |ms| {
                    sleeps += 1;
                    if sleeps == 2 {
                        timeline.cancel();
                    }
                    clock.set(clock.get() + f64::from(ms));
                    std::future::ready(())
                },
            )
            .await;
        assert_eq!(indices(&fired), vec![0]);
    }

    #[tokio::test]
    async fn restart_supersedes_the_previous_run() {
        let clock = Rc::new(Cell::new(0.0));
        let (timeline, fired) = recording(&[500, 800, 1100], &clock);
        let advance = |ms: u32| {
            clock.set(clock.get() + f64::from(ms));
            std::future::ready(())
        };

        let first = timeline.begin();
        let second = timeline.begin();
        first.play(|| clock.get(), advance).await;
        assert!(fired.borrow().is_empty());

        second.play(|| clock.get(), advance).await;
        assert_eq!(indices(&fired), vec![0, 1, 2]);

        fired.borrow_mut().clear();
        let third = timeline.begin();
        timeline.cancel();
        third.play(|| clock.get(), advance).await;
        assert!(fired.borrow().is_empty());
    }

    #[tokio::test]
    async fn timer_latency_does_not_accumulate() {
        let clock = Rc::new(Cell::new(1_000.0));
        let (timeline, fired) = recording(&[500, 800, 1100], &clock);
        timeline
            .begin()
            .play(
                || clock.get(),
                |ms| {
                    // Every timer fires 7ms late.
                    clock.set(clock.get() + f64::from(ms) + 7.0);
                    std::future::ready(())
                },
            )
            .await;

        let times: Vec<f64> = fired.borrow().iter().map(|(_, at)| *at).collect();
        assert_eq!(times, vec![1_507.0, 1_807.0, 2_107.0]);
    }

    #[test]
    fn empty_timeline() {
        let timeline = Timeline::default();
        assert!(timeline.is_empty());
        assert!(timeline.waits().is_empty());
    }
}
