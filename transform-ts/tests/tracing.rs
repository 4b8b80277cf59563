use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use transform_ts::replace_missing_symbols;
use transform_ts::Collection;
use transform_ts::Type;

/// Log sink handed to the subscriber through a `Fn() -> impl Write` factory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
  fn text(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}

impl io::Write for Captured {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

#[test]
fn tracing_reports_resolution_decisions() {
  let logs = Captured::default();
  let sink = logs.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || sink.clone())
    .with_span_events(FmtSpan::CLOSE)
    .with_max_level(Level::DEBUG)
    .with_ansi(false)
    .finish();

  let collection = Collection::from_types([
    Type::new("X", "X", "{%Gone%} | {%Inline%}").with_missing_symbols(["Gone", "Inline"]),
    Type::inline("Inline", "string"),
  ])
  .unwrap();
  let result = tracing::subscriber::with_default(subscriber, || replace_missing_symbols(collection));
  assert_eq!(result.find("X").unwrap().transformed, "any | {%Inline%}");

  let output = logs.text();
  assert!(output.contains("replace_missing_symbols"), "missing pass span: {output}");
  assert!(output.contains("resolve_type"), "missing entry span: {output}");
  assert!(output.contains("unknown symbol"), "missing fallback event: {output}");
  assert!(
    output.contains("placeholder kept"),
    "missing inline pass-through event: {output}"
  );
}
