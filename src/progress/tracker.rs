//! Monotonic progress tracking for one run.

use super::event::Milestone;
use super::reporter::ProgressReporter;
use parking_lot::Mutex;

/// Wraps a reporter for the duration of one run. A report below the last reported
/// percent is raised to it, so the caller never sees progress go backwards.
pub struct ProgressTracker<'a> {
    reporter: &'a dyn ProgressReporter,
    last: Mutex<u8>,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(reporter: &'a dyn ProgressReporter) -> Self {
        Self {
            reporter,
            last: Mutex::new(0),
        }
    }

    pub fn report(&self, percent: u8, message: &str) {
        let percent = {
            let mut last = self.last.lock();
            *last = percent.min(100).max(*last);
            *last
        };
        self.reporter.report(percent, message);
    }

    pub fn milestone(&self, milestone: Milestone) {
        self.report(milestone.percent(), milestone.message());
    }

    /// Report `message` without advancing.
    pub fn note(&self, message: &str) {
        self.report(self.current(), message);
    }

    pub fn current(&self) -> u8 {
        *self.last.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_percent_is_raised_to_the_last_one() {
        let seen = Mutex::new(Vec::new());
        let reporter = |percent: u8, _: &str| seen.lock().push(percent);
        let tracker = ProgressTracker::new(&reporter);
        tracker.milestone(Milestone::Parsed);
        tracker.report(20, "late stage report");
        tracker.report(250, "overflow");
        assert_eq!(seen.lock().as_slice(), &[70, 70, 100]);
    }

    #[test]
    fn note_keeps_the_current_percent() {
        let seen = Mutex::new(Vec::new());
        let reporter =
            |percent: u8, message: &str| seen.lock().push((percent, message.to_string()));
        let tracker = ProgressTracker::new(&reporter);
        tracker.milestone(Milestone::RequestSent);
        tracker.note("degraded");
        assert_eq!(seen.lock()[1], (25, "degraded".to_string()));
        assert_eq!(tracker.current(), 25);
    }
}
