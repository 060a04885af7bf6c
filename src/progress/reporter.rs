//! Reporter implementations.

use super::event::GenerationProgress;
use tokio::sync::mpsc;

/// Receives `(percent, message)` notifications, synchronously, from whichever
/// stage is active.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, percent: u8, message: &str);
}

impl<F> ProgressReporter for F
where
    F: Fn(u8, &str) + Send + Sync,
{
    fn report(&self, percent: u8, message: &str) {
        self(percent, message)
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}

/// Forwards notifications into an unbounded channel, for callers that consume
/// progress as a stream.
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    sender: mpsc::UnboundedSender<GenerationProgress>,
}

impl ChannelProgress {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GenerationProgress>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ProgressReporter for ChannelProgress {
    fn report(&self, percent: u8, message: &str) {
        // A dropped receiver means nobody is listening any more.
        let _ = self.sender.send(GenerationProgress::new(percent, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn closures_are_reporters() {
        let seen = Mutex::new(Vec::new());
        let reporter =
            |percent: u8, message: &str| seen.lock().push((percent, message.to_string()));
        reporter.report(15, "Prompt compiled");
        assert_eq!(seen.lock().as_slice(), &[(15, "Prompt compiled".to_string())]);
    }

    #[test]
    fn channel_reporter_delivers_in_order() {
        let (reporter, mut receiver) = ChannelProgress::channel();
        reporter.report(5, "a");
        reporter.report(100, "b");
        assert_eq!(receiver.try_recv().unwrap(), GenerationProgress::new(5, "a"));
        assert_eq!(receiver.try_recv().unwrap(), GenerationProgress::new(100, "b"));
    }

    #[test]
    fn channel_reporter_survives_dropped_receiver() {
        let (reporter, receiver) = ChannelProgress::channel();
        drop(receiver);
        reporter.report(50, "nobody listens");
    }
}
