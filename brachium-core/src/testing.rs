//! Host test bench
//!
//! A simulated microsecond clock and output pins that record every write
//! with its timestamp, so tests can check pulse counts and signal ordering.

use core::cell::{Cell, RefCell};
use std::vec::Vec;

use brachium_hal::{Clock, OutputPin};

use crate::stepper::{JointPins, StepperPins};
use crate::traits::Effector;

/// One recorded pin write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub line: &'static str,
    pub high: bool,
    pub at_us: u32,
}

/// Shared time base and write trace
#[derive(Debug, Default)]
pub struct Bench {
    now: Cell<u32>,
    trace: RefCell<Vec<Write>>,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench starting at an arbitrary counter value
    pub fn starting_at(now_us: u32) -> Self {
        let bench = Self::default();
        bench.now.set(now_us);
        bench
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn advance(&self, us: u32) {
        self.now.set(self.now.get().wrapping_add(us));
    }

    pub fn pin(&self, line: &'static str) -> TracePin<'_> {
        TracePin {
            bench: self,
            line,
            high: false,
        }
    }

    pub fn clock(&self) -> BenchClock<'_> {
        BenchClock { bench: self }
    }

    /// STEP/DIR/ENABLE lines named `<axis>.step`, `<axis>.dir`, `<axis>.en`
    pub fn stepper_pins(&self, axis: &'static str) -> StepperPins<TracePin<'_>> {
        let (step, dir, enable) = match axis {
            "rot" => ("rot.step", "rot.dir", "rot.en"),
            "low" => ("low.step", "low.dir", "low.en"),
            "up" => ("up.step", "up.dir", "up.en"),
            _ => ("step", "dir", "en"),
        };
        StepperPins {
            step: self.pin(step),
            dir: self.pin(dir),
            enable: self.pin(enable),
        }
    }

    pub fn joint_pins(&self) -> JointPins<TracePin<'_>> {
        JointPins {
            rotate: self.stepper_pins("rot"),
            lower: self.stepper_pins("low"),
            upper: self.stepper_pins("up"),
        }
    }

    /// All writes to one line, in order
    pub fn writes(&self, line: &str) -> Vec<Write> {
        self.trace
            .borrow()
            .iter()
            .filter(|w| w.line == line)
            .copied()
            .collect()
    }

    /// Timestamps of low-to-high transitions on a line that idles low
    pub fn rising_edges(&self, line: &str) -> Vec<u32> {
        let mut level = false;
        let mut edges = Vec::new();
        for w in self.writes(line) {
            if w.high && !level {
                edges.push(w.at_us);
            }
            level = w.high;
        }
        edges
    }

    /// Level of the last write to a line, if any
    pub fn level(&self, line: &str) -> Option<bool> {
        self.writes(line).last().map(|w| w.high)
    }

    pub fn clear_trace(&self) {
        self.trace.borrow_mut().clear();
    }
}

/// Output pin recording into a [`Bench`]
#[derive(Debug)]
pub struct TracePin<'a> {
    bench: &'a Bench,
    line: &'static str,
    high: bool,
}

impl OutputPin for TracePin<'_> {
    fn set_high(&mut self) {
        self.high = true;
        self.record();
    }

    fn set_low(&mut self) {
        self.high = false;
        self.record();
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl TracePin<'_> {
    fn record(&self) {
        self.bench.trace.borrow_mut().push(Write {
            line: self.line,
            high: self.high,
            at_us: self.bench.now(),
        });
    }
}

/// Clock reading the bench time; delays advance it
#[derive(Debug)]
pub struct BenchClock<'a> {
    bench: &'a Bench,
}

impl Clock for BenchClock<'_> {
    fn now_us(&self) -> u32 {
        self.bench.now()
    }

    fn delay_us(&mut self, us: u32) {
        self.bench.advance(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.bench.advance(ms.wrapping_mul(1000));
    }
}

/// Effector mirroring its state into a shared cell
#[derive(Debug)]
pub struct FlagEffector<'a>(pub &'a Cell<bool>);

impl Effector for FlagEffector<'_> {
    fn set_active(&mut self, active: bool) {
        self.0.set(active);
    }

    fn is_active(&self) -> bool {
        self.0.get()
    }
}
