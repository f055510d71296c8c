//! Tests that debug-mode diagnostics are emitted through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use parla::{Catalog, Options, Translator};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn debug_mode_logs_missing_translation() {
    let translator = Translator::builder()
        .options(Options::debug_mode())
        .build();
    let output = capture(|| {
        translator.t("missing.key");
    });
    assert!(output.contains("WARN"));
    assert!(output.contains("translation for 'missing.key' not found"));
}

#[test]
fn production_mode_is_silent() {
    let mut catalog = Catalog::new();
    catalog.insert("hi", "Hi {name}");
    let translator = Translator::with_catalog(catalog);
    let output = capture(|| {
        translator.t("missing.key");
        translator.t_with("hi", &parla::replacements! {});
    });
    assert!(output.is_empty());
}
