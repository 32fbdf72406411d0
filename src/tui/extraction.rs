//! Background color extraction worker.
//!
//! Decoding a large cover image can take long enough to stutter the event
//! loop, so extraction runs on a worker thread and reports back over a
//! channel. Every job carries the session's extraction token; the state
//! applies a result only when its token is still the latest, which closes
//! the race where a slow early job would overwrite a newer palette.

use crate::models::{ExtractionToken, RgbColor};
use crate::services::extractor;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

/// Message from the worker thread.
#[derive(Debug)]
pub enum ExtractionMessage {
    /// Extraction finished with these colors.
    Finished(ExtractionToken, Vec<RgbColor>),
    /// Extraction failed (unreadable or undecodable image).
    Failed(ExtractionToken, String),
}

/// A running extraction job.
#[derive(Debug)]
pub struct ExtractionJob {
    receiver: Option<Receiver<ExtractionMessage>>,
    /// Image path, kept for status display.
    pub source: PathBuf,
}

impl ExtractionJob {
    /// Spawns a worker that extracts `count` colors from `path`.
    #[must_use]
    pub fn spawn(path: PathBuf, count: usize, token: ExtractionToken) -> Self {
        let (sender, receiver) = channel();
        let source = path.clone();

        thread::spawn(move || {
            let message = match extractor::extract_from_path(&path, count) {
                Ok(colors) => ExtractionMessage::Finished(token, colors),
                Err(e) => ExtractionMessage::Failed(token, format!("{e:#}")),
            };
            // The receiver may be gone if the app quit; nothing to do then
            let _ = sender.send(message);
        });

        Self {
            receiver: Some(receiver),
            source,
        }
    }

    /// Polls for a result without blocking.
    ///
    /// Returns `Some(message)` when the worker finished. Once a message is
    /// delivered (or the worker died) the job is drained and subsequent
    /// polls return `None`.
    pub fn poll(&mut self) -> Option<ExtractionMessage> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(message) => {
                self.receiver = None;
                Some(message)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                None
            }
        }
    }

    /// Whether the job is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionState;
    use std::time::Duration;

    fn wait_for(job: &mut ExtractionJob) -> ExtractionMessage {
        for _ in 0..200 {
            if let Some(message) = job.poll() {
                return message;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("extraction worker did not finish in time");
    }

    #[test]
    fn test_failed_extraction_reports_error() {
        let mut session = SessionState::new();
        let token = session.begin_extraction();
        let mut job = ExtractionJob::spawn(PathBuf::from("/nonexistent/cover.png"), 5, token);

        match wait_for(&mut job) {
            ExtractionMessage::Failed(t, message) => {
                assert_eq!(t, token);
                assert!(!message.is_empty());
            }
            ExtractionMessage::Finished(..) => panic!("expected failure"),
        }
        assert!(!job.is_running());
    }

    #[test]
    fn test_successful_extraction_round_trip() {
        use image::{Rgba, RgbaImage};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        RgbaImage::from_pixel(8, 8, Rgba([10, 200, 40, 255]))
            .save(&path)
            .unwrap();

        let mut session = SessionState::new();
        let token = session.begin_extraction();
        let mut job = ExtractionJob::spawn(path, 3, token);

        match wait_for(&mut job) {
            ExtractionMessage::Finished(t, colors) => {
                assert!(session.accept_extraction(t, colors));
                assert_eq!(
                    session.palette.colors(),
                    &[crate::models::RgbColor::new(10, 200, 40)]
                );
            }
            ExtractionMessage::Failed(_, message) => panic!("unexpected failure: {message}"),
        }
    }
}
