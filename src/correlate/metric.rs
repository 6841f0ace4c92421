use std::fmt;
use super::Outcome;
use crate::capture::Record;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Owd,
    Events,
    Cumulative,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Delay(f64),
    Loss(bool),
    Count(u64),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Output {
    pub ts:    f64,
    pub value: Value,
}

#[derive(Debug)]
pub struct Metric {
    mode:     Mode,
    anchor:   bool,
    midpoint: bool,
    lost:     u64,
    negative: u64,
}

impl Mode {
    pub fn extension(&self) -> &'static str {
        match self {
            Mode::Owd => ".owds2.gz",
            _         => ".loss2.gz",
        }
    }
}

impl Metric {
    pub fn new(mode: Mode, anchor: bool, midpoint: bool) -> Self {
        Self {
            mode:     mode,
            anchor:   anchor && mode == Mode::Owd,
            midpoint: midpoint && mode == Mode::Owd,
            lost:     0,
            negative: 0,
        }
    }

    pub fn apply(&mut self, src: &Record, outcome: Outcome, dst: &[Record]) -> Option<Output> {
        if outcome == Outcome::Lost {
            self.lost += 1;
        }

        let value = match (self.mode, outcome) {
            (Mode::Owd, Outcome::Matched(index)) => return Some(self.delay(src, &dst[index])),
            (Mode::Owd, Outcome::Lost)           => return None,
            (Mode::Events, outcome)              => Value::Loss(outcome == Outcome::Lost),
            (Mode::Cumulative, _)                => Value::Count(self.lost),
        };

        Some(Output { ts: src.ts, value })
    }

    // Negative delays pass through untouched; they flag a clock correction
    // problem upstream.
    fn delay(&mut self, src: &Record, dst: &Record) -> Output {
        let owd = dst.ts - src.ts;
        if owd < 0.0 {
            self.negative += 1;
        }

        let mut ts = if self.anchor { dst.ts } else { src.ts };
        if self.midpoint {
            ts += owd / 2.0;
        }

        Output { ts, value: Value::Delay(owd) }
    }

    pub fn lost(&self) -> u64 {
        self.lost
    }

    pub fn negative(&self) -> u64 {
        self.negative
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value {
            Value::Delay(owd)   => write!(f, "{:.6} {:.6}", self.ts, owd),
            Value::Loss(lost)   => write!(f, "{:.6} {}", self.ts, lost as u8),
            Value::Count(count) => write!(f, "{:.6} {}", self.ts, count),
        }
    }
}
