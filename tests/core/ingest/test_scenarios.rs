// Concrete chunking scenarios with exact expected output

use crate::common::{pages, quiet_pipeline};
use pagechunk::ingest::normalize;
use pagechunk::{ChunkSegmenter, PageText, SegmentConfig};

/// Two four-character pages, size 6, overlap 2.
///
/// The stream is `"AAAA BBBB "` with page 1 on `[0, 4)` and page 2 on
/// `[5, 9)`. Windows start at 0, 4 and 8. The window `[4, 10)` begins
/// on the separator after page 1, so it only touches page 2.
#[test]
fn test_two_pages_small_window() {
    let chunks =
        quiet_pipeline(SegmentConfig::new(6, 2)).process_document(&pages(&["AAAA", "BBBB"]), "ab.pdf");

    let starts: Vec<usize> = chunks.iter().map(|c| c.start).collect();
    let ends: Vec<usize> = chunks.iter().map(|c| c.end).collect();
    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    let page_lists: Vec<Vec<u32>> = chunks.iter().map(|c| c.pages.clone()).collect();

    assert_eq!(starts, vec![0, 4, 8]);
    assert_eq!(ends, vec![6, 10, 10]);
    assert_eq!(texts, vec!["AAAA B", "BBBB", "B"]);
    assert_eq!(page_lists, vec![vec![1, 2], vec![2], vec![2]]);
}

#[test]
fn test_single_short_page_gives_one_chunk() {
    let segmenter = ChunkSegmenter::new(SegmentConfig::default()).unwrap();
    let segmentation = segmenter.segment(&[PageText::new(1, "Short text.")], "short.pdf");

    assert_eq!(segmentation.chunks.len(), 1);
    let chunk = &segmentation.chunks[0];
    assert_eq!(chunk.index, 0);
    assert_eq!(chunk.start, 0);
    assert_eq!(chunk.end, segmentation.stream_len);
    assert_eq!(chunk.text, "Short text.");
    assert_eq!(chunk.pages, vec![1]);
    assert!(!segmentation.truncated);
}

#[test]
fn test_cleaning_example() {
    let clean = normalize("This  is   a    test.   Page 42  ");

    assert!(!clean.contains("  "));
    assert!(!clean.contains("Page"));
    assert!(clean.contains("This is a test."));
    assert!(clean.ends_with('.'));
}

#[test]
fn test_pages_given_out_of_order() {
    let shuffled = vec![
        PageText::new(2, "BBBB"),
        PageText::new(1, "AAAA"),
    ];
    let chunks = quiet_pipeline(SegmentConfig::new(20, 5)).process_document(&shuffled, "x.pdf");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "AAAA BBBB");
    assert_eq!(chunks[0].pages, vec![1, 2]);
}

#[test]
fn test_blank_pages_keep_their_separator() {
    // Stream "AAAA   BBBB ": pages 2 and 3 clean to nothing but each
    // still adds one separator
    let input = pages(&["AAAA", "Page 2", "   ", "BBBB"]);
    let chunks = quiet_pipeline(SegmentConfig::new(20, 5)).process_document(&input, "x.pdf");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].end, 12);
    assert_eq!(chunks[0].text, "AAAA   BBBB");
    assert_eq!(chunks[0].pages, vec![1, 4]);
}

#[test]
fn test_empty_document_gives_no_chunks() {
    let pipeline = quiet_pipeline(SegmentConfig::default());

    assert!(pipeline.process_document(&[], "empty.pdf").is_empty());
    assert!(pipeline
        .process_document(&pages(&["", "Page 1", "42"]), "blank.pdf")
        .is_empty());
}

#[test]
fn test_page_numbers_cleaned_before_chunking() {
    let input = pages(&["Introduction to the topic. Page 1", "More detail follows. Page 2"]);
    let chunks = quiet_pipeline(SegmentConfig::new(200, 20)).process_document(&input, "doc.pdf");

    assert_eq!(chunks.len(), 1);
    assert_eq!(
        chunks[0].text,
        "Introduction to the topic. More detail follows."
    );
}
