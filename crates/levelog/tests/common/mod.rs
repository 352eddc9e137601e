use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use levelog::capture::CaptureLogger;
use levelog::Level;

static SERIAL: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the global facade and reset it to a fresh
/// capture backend at the default threshold.
#[allow(dead_code)]
pub fn isolated() -> (MutexGuard<'static, ()>, CaptureLogger) {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    let capture = CaptureLogger::new();
    levelog::set_backend(capture.clone());
    levelog::set_level(Level::Info);
    (guard, capture)
}

/// Writer whose contents can be read back after handing a clone to a logger.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
