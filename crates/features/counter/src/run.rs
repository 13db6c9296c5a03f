//! Linear count-up from zero, one frame per timer tick.

/// Parses the integer at the start of `text` the way `parseInt(text, 10)` does:
/// leading whitespace, an optional sign, then digits up to the first non-digit.
/// Values beyond `i64` saturate.
#[must_use]
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut value: i64 = 0;
    for digit in digits {
        seen = true;
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    seen.then_some(if negative { -value } else { value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// An intermediate value: the accumulator rounded down.
    Running(i64),
    /// The exact target; the run is over.
    Done(i64),
}

impl Frame {
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Running(v) | Self::Done(v) => v,
        }
    }
}

/// Frames of one counter. Each tick adds `target / (duration / tick)` to an
/// accumulator starting at zero; the first tick that reaches the target yields
/// [`Frame::Done`] and the iterator ends.
#[derive(Debug, Clone)]
pub struct CounterRun {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterRun {
    #[must_use]
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self { target, increment: target as f64 / ticks, current: 0.0, finished: false }
    }

    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }
}

impl Iterator for CounterRun {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(Frame::Done(self.target))
        } else {
            Some(Frame::Running(self.current.floor() as i64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_like_parse_int() {
        assert_eq!(parse_leading_integer("150"), Some(150));
        assert_eq!(parse_leading_integer("  50+"), Some(50));
        assert_eq!(parse_leading_integer("12k clients"), Some(12));
        assert_eq!(parse_leading_integer("-7"), Some(-7));
        assert_eq!(parse_leading_integer("+3"), Some(3));
        assert_eq!(parse_leading_integer("1,200"), Some(1));
        assert_eq!(parse_leading_integer("many"), None);
        assert_eq!(parse_leading_integer("-"), None);
        assert_eq!(parse_leading_integer(""), None);
        assert_eq!(parse_leading_integer("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_non_positive_targets_finish_on_first_tick() {
        assert_eq!(CounterRun::new(0, 1000, 16).collect::<Vec<_>>(), vec![Frame::Done(0)]);
        assert_eq!(CounterRun::new(-40, 1000, 16).collect::<Vec<_>>(), vec![Frame::Done(-40)]);
    }

    #[test]
    fn test_degenerate_timing_finishes_at_once() {
        assert_eq!(CounterRun::new(10, 0, 16).collect::<Vec<_>>(), vec![Frame::Done(10)]);
        assert_eq!(CounterRun::new(10, 1000, 0).last(), Some(Frame::Done(10)));
    }
}
