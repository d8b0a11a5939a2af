use html2warc::warc::WriterOptions;
use html2warc_tests::{DATE, archive_to_memory, logger_init, read_records};
use std::fs;

#[test]
fn index_file_produces_file_and_directory_records() {
    logger_init();

    let directory = tempfile::tempdir().unwrap();
    fs::create_dir(directory.path().join("a")).unwrap();
    fs::write(directory.path().join("a").join("index.html"), b"0123456789").unwrap();

    let (summary, output) =
        archive_to_memory(directory.path(), "http://example.com", WriterOptions::default())
            .unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.records, 2);

    let records = read_records(&output).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].warc_field("WARC-Type"), Some("warcinfo"));

    let target_uris = records[1..]
        .iter()
        .map(|record| record.warc_field("WARC-Target-URI").unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        target_uris,
        ["http://example.com/a/index.html", "http://example.com/a/"]
    );

    for record in &records[1..] {
        assert_eq!(record.warc_field("WARC-Type"), Some("response"));
        assert_eq!(
            record.warc_field("WARC-Identified-Payload-Type"),
            Some("text/html")
        );
        // known nonstandard field: 110 + size + len(mime) + len(timestamp)
        let expected_content_length = 110 + 10 + "text/html".len() + DATE.len();
        assert_eq!(
            record.warc_field("Content-Length"),
            Some(expected_content_length.to_string().as_str())
        );
        assert_eq!(record.http_status.as_deref(), Some("HTTP/1.1 200 OK"));
        assert_eq!(record.http_field("Content-Length"), Some("10"));
        assert_eq!(record.block, b"0123456789");
    }

    // every record has own id
    assert_ne!(
        records[1].warc_field("WARC-Record-ID"),
        records[2].warc_field("WARC-Record-ID")
    );
}

#[test]
fn regular_file_produces_single_record() {
    logger_init();

    let directory = tempfile::tempdir().unwrap();
    fs::create_dir(directory.path().join("b")).unwrap();
    let photo = (0..500u32).map(|i| (i % 251) as u8).collect::<Vec<_>>();
    fs::write(directory.path().join("b").join("photo.jpg"), &photo).unwrap();

    let (summary, output) =
        archive_to_memory(directory.path(), "http://example.com/", WriterOptions::default())
            .unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.records, 1);

    let records = read_records(&output).unwrap();
    assert_eq!(records.len(), 2);

    let record = &records[1];
    assert_eq!(
        record.warc_field("WARC-Target-URI"),
        Some("http://example.com/b/photo.jpg")
    );
    assert_eq!(record.http_field("Content-Type"), Some("image/jpeg"));
    assert_eq!(
        record.warc_field("Content-Length"),
        Some((110 + 500 + "image/jpeg".len() + DATE.len()).to_string().as_str())
    );
    assert_eq!(record.block, photo);
}

#[test]
fn empty_directory_produces_warcinfo_only() {
    logger_init();

    let directory = tempfile::tempdir().unwrap();

    let (summary, output) =
        archive_to_memory(directory.path(), "http://example.com", WriterOptions::default())
            .unwrap();
    assert_eq!(summary.files, 0);
    assert_eq!(summary.records, 0);

    let records = read_records(&output).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].warc_field("WARC-Type"), Some("warcinfo"));
    assert_eq!(records[0].warc_field("WARC-Filename"), Some("test.warc"));
    assert_eq!(records[0].warc_field("WARC-Date"), Some(DATE));
}

#[test]
fn unknown_content_type_is_written_as_none() {
    logger_init();

    let directory = tempfile::tempdir().unwrap();
    fs::write(directory.path().join("LICENSE"), b"MIT").unwrap();

    let (_, output) =
        archive_to_memory(directory.path(), "http://example.com", WriterOptions::default())
            .unwrap();
    let records = read_records(&output).unwrap();

    let record = &records[1];
    assert_eq!(
        record.warc_field("WARC-Target-URI"),
        Some("http://example.com/LICENSE")
    );
    assert_eq!(record.warc_field("WARC-Identified-Payload-Type"), Some("None"));
    assert_eq!(record.http_field("Content-Type"), Some("None"));
    assert_eq!(
        record.warc_field("Content-Length"),
        Some((110 + 3 + 4 + DATE.len()).to_string().as_str())
    );
}
