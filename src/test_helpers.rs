use std::{
    any::Any,
    io,
    sync::{Arc, Mutex},
};

use assert_call::call;
use tracing::Level;

use crate::{ChangeSignal, EffectFn, EffectScheduler};

pub fn call_on_drop(s: &'static str) -> impl Any {
    struct OnDrop(&'static str);
    impl Drop for OnDrop {
        fn drop(&mut self) {
            call!("{}", self.0);
        }
    }
    OnDrop(s)
}

/// Scheduler that records every signal and never runs the callback.
#[derive(Default)]
pub struct RecordingScheduler {
    pub signals: Vec<ChangeSignal>,
}
impl EffectScheduler for RecordingScheduler {
    fn schedule(&mut self, _callback: EffectFn, signal: ChangeSignal) {
        call!("schedule {}", signal[0]);
        self.signals.push(signal);
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);
impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
