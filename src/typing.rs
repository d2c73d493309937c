use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::timing::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingSpeeds {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    /// Pause with the phrase fully revealed.
    pub full_pause: Duration,
    /// Pause with the phrase fully erased, before the next one starts.
    pub empty_pause: Duration,
    pub start_delay: Duration,
}

impl Default for TypingSpeeds {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            full_pause: Duration::from_millis(1500),
            empty_pause: Duration::from_millis(500),
            start_delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    /// Delay before the following tick.
    pub delay: Duration,
    /// Phase the following tick will run in.
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    speeds: TypingSpeeds,
    phrase: usize,
    chars: usize,
    phase: Phase,
}

impl TypingAnimator {
    pub fn new<I, S>(phrases: I, speeds: TypingSpeeds) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            phrases,
            speeds,
            phrase: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    pub fn speeds(&self) -> TypingSpeeds {
        self.speeds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances one character and reports what to display next.
    pub fn tick(&mut self) -> Option<Step> {
        let current = self.phrases.get(self.phrase)?;
        let len = current.len();

        let mut delay = match self.phase {
            Phase::Typing => {
                self.chars += 1;
                self.speeds.type_delay
            }
            Phase::Deleting => {
                self.chars -= 1;
                self.speeds.delete_delay
            }
        };
        let text = current[..self.chars].iter().collect::<String>();

        if self.phase == Phase::Typing && self.chars == len {
            self.phase = Phase::Deleting;
            delay = self.speeds.full_pause;
        } else if self.phase == Phase::Deleting && self.chars == 0 {
            self.phase = Phase::Typing;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay = self.speeds.empty_pause;
        }

        Some(Step {
            text,
            delay,
            phase: self.phase,
        })
    }
}

struct Driver {
    animator: TypingAnimator,
    render: Box<dyn FnMut(&str)>,
}

/// Runs the animator forever on `scheduler`, handing each frame of text
/// to `render`.
pub fn drive<S, F>(animator: TypingAnimator, scheduler: S, render: F)
where
    S: Scheduler + Clone + 'static,
    F: FnMut(&str) + 'static,
{
    let start = animator.speeds().start_delay;
    let driver = Rc::new(RefCell::new(Driver {
        animator,
        render: Box::new(render),
    }));
    schedule(driver, scheduler, start);
}

fn schedule<S>(driver: Rc<RefCell<Driver>>, scheduler: S, delay: Duration)
where
    S: Scheduler + Clone + 'static,
{
    let next = scheduler.clone();
    scheduler.after(
        delay,
        Box::new(move || {
            let delay = {
                let mut d = driver.borrow_mut();
                let Some(step) = d.animator.tick() else {
                    return;
                };
                (d.render)(&step.text);
                step.delay
            };
            schedule(driver, next, delay);
        }),
    );
}
