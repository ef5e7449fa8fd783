use super::*;

#[test]
fn test_memory_sink_seed_and_writes() {
    let mut sink = MemorySink::new();
    assert_eq!(sink.read(), None);

    sink.write("[]").unwrap();
    sink.write("[1]").unwrap();
    assert_eq!(sink.read().as_deref(), Some("[1]"));
    assert_eq!(sink.changes(), 2);

    let seeded = MemorySink::with_value("[2]");
    assert_eq!(seeded.read().as_deref(), Some("[2]"));
    assert_eq!(seeded.changes(), 0);
}

#[test]
fn test_memory_sink_notifies_listeners() {
    let mut sink = MemorySink::new();
    let rx = sink.subscribe();
    sink.write("a").unwrap();
    sink.write("b").unwrap();
    assert_eq!(rx.try_iter().collect::<Vec<_>>(), ["a", "b"]);

    drop(rx);
    sink.write("c").unwrap();
    assert_eq!(sink.value(), "c");
}

#[test]
fn test_file_sink_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path().join("out").join("formula.json"));
    assert_eq!(sink.read(), None);

    sink.write(r#"[{"type":"number","value":"1"}]"#).unwrap();
    assert_eq!(
        sink.read().as_deref(),
        Some(r#"[{"type":"number","value":"1"}]"#)
    );
    assert!(sink.path().exists());
}
