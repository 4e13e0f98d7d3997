//! Capture `tracing` output for assertions on log side effects.

use std::sync::{Arc, Mutex};
use tracing::Level;

/// Shared in-memory log sink usable as a `MakeWriter`.
#[derive(Clone)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its result together
/// with every warning (and above) it logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let buffer = SharedBuffer(buffer.clone());
            move || buffer.clone()
        })
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.lock().unwrap()).into_owned();
    (result, logs)
}
