use crate::test_helpers::factory::Factory;

#[test]
fn creates_chunk_with_defaults() {
    let chunk = Factory::chunk().create();

    assert_eq!(chunk.start_line, 2);
    assert!(chunk.is_empty());
}

#[test]
fn creates_chunk_with_rows_and_start_line() {
    let chunk = Factory::chunk()
        .with_start_line(52)
        .with_row(&["c1", "100", "5", "10.0", "1"])
        .with_row(&["c2", "200", "8", "20.0", "2"])
        .create();

    assert_eq!(chunk.start_line, 52);
    assert_eq!(chunk.len(), 2);
    assert_eq!(chunk.records[0].get(0), Some("c1"));
    assert_eq!(chunk.records[1].get(3), Some("20.0"));
    assert_eq!(chunk.line_of(1), 53);
}
