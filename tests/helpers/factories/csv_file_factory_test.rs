use crate::test_helpers::factory::Factory;
use tempfile::tempdir;

#[test]
fn creates_csv_file_with_default_header() {
    let dir = tempdir().unwrap();
    let path = Factory::csv_file()
        .with_row("c1,100,5,10.0,1")
        .create_in(dir.path());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "campaign_id,impressions,clicks,spend,conversions\nc1,100,5,10.0,1\n"
    );
}

#[test]
fn creates_csv_file_with_custom_header() {
    let dir = tempdir().unwrap();
    let path = Factory::csv_file()
        .with_header("spend,campaign_id,impressions,clicks,conversions")
        .with_row("10.0,c1,100,5,1")
        .with_row("20.0,c2,200,8,2")
        .create_in(dir.path());

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "spend,campaign_id,impressions,clicks,conversions");
    assert_eq!(lines[2], "20.0,c2,200,8,2");
}
