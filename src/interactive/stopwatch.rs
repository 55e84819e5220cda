//! Solve timer

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
    stopped: Option<Duration>,
}

impl Stopwatch {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Freeze the displayed time; later calls keep the first reading
    pub fn stop(&mut self) {
        if self.stopped.is_none() {
            self.stopped = Some(self.started.elapsed());
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_freezes_elapsed() {
        let mut watch = Stopwatch::start();
        assert!(watch.is_running());
        watch.stop();
        let first = watch.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        watch.stop();
        assert_eq!(watch.elapsed(), first);
        assert!(!watch.is_running());
    }
}
