// Guarantees that hold for every valid window geometry

use crate::common::{assert_valid_chunks, pages, quiet_pipeline};
use pagechunk::ingest::normalize;
use pagechunk::{ChunkSegmenter, DocumentPipeline, PageText, SegmentConfig};

/// A document of `count` pages with varied sentence lengths
fn sample_document(count: u32) -> Vec<PageText> {
    (1..=count)
        .map(|n| {
            let words = "lorem ipsum dolor sit amet ".repeat((n as usize % 7) + 3);
            PageText::new(n, format!("Section {n} begins. {words} Page {n}"))
        })
        .collect()
}

#[test]
fn test_offsets_within_stream_and_size() {
    let segmenter = ChunkSegmenter::new(SegmentConfig::new(120, 30)).unwrap();
    let segmentation = segmenter.segment(&sample_document(12), "doc.pdf");

    assert!(segmentation.chunks.len() > 1);
    for chunk in &segmentation.chunks {
        assert!(chunk.end <= segmentation.stream_len);
        assert!(chunk.end - chunk.start <= 120);
        assert!(chunk.text.chars().count() <= 120);
    }
}

#[test]
fn test_structure_across_geometries() {
    let document = sample_document(9);

    for (size, overlap) in [(50, 0), (50, 10), (64, 63), (200, 150), (1, 0)] {
        let config = SegmentConfig::new(size, overlap).with_max_chunks(None);
        let chunks = quiet_pipeline(config).process_document(&document, "doc.pdf");

        assert!(!chunks.is_empty(), "no chunks for {size}/{overlap}");
        assert_valid_chunks(&chunks, "doc.pdf", config.step());
    }
}

#[test]
fn test_every_chunk_has_pages() {
    let chunks = quiet_pipeline(SegmentConfig::new(40, 10)).process_document(&sample_document(6), "doc.pdf");

    for chunk in &chunks {
        assert!(!chunk.pages.is_empty(), "chunk {} has no pages", chunk.index);
    }
}

#[test]
fn test_every_page_is_covered() {
    let chunks = quiet_pipeline(SegmentConfig::new(40, 10)).process_document(&sample_document(6), "doc.pdf");

    for page in 1..=6 {
        assert!(
            chunks.iter().any(|c| c.pages.contains(&page)),
            "page {page} not covered"
        );
    }
}

#[test]
fn test_overlap_is_shared_text() {
    let input = pages(&["abcdefghijklmnopqrstuvwxyz"]);
    let chunks = quiet_pipeline(SegmentConfig::new(10, 4)).process_document(&input, "abc.txt");

    assert_eq!(chunks[0].text, "abcdefghij");
    assert_eq!(chunks[1].text, "ghijklmnop");
    assert_eq!(chunks[1].start, 6);
}

#[test]
fn test_truncation_stops_at_max_chunks() {
    let document = vec![PageText::new(1, "word ".repeat(2000))];

    for k in [1, 3, 10] {
        let config = SegmentConfig::new(100, 20).with_max_chunks(Some(k));
        let segmentation = ChunkSegmenter::new(config)
            .unwrap()
            .segment(&document, "long.pdf");

        assert_eq!(segmentation.chunks.len(), k);
        assert!(segmentation.truncated);
    }
}

#[test]
fn test_exact_fit_is_not_truncated() {
    // 18 chars + separator; windows at 0 and 10 cover everything
    let document = vec![PageText::new(1, "abcdefghijklmnopqr")];
    let config = SegmentConfig::new(10, 0).with_max_chunks(Some(2));
    let segmentation = ChunkSegmenter::new(config)
        .unwrap()
        .segment(&document, "fit.pdf");

    assert_eq!(segmentation.chunks.len(), 2);
    assert!(!segmentation.truncated);
}

#[test]
fn test_unlimited_chunks() {
    let document = vec![PageText::new(1, "word ".repeat(2000))];
    let config = SegmentConfig::new(100, 20).with_max_chunks(None);
    let segmentation = ChunkSegmenter::new(config)
        .unwrap()
        .segment(&document, "long.pdf");

    assert!(segmentation.chunks.len() > 100);
    assert!(!segmentation.truncated);
}

#[test]
fn test_invalid_geometry_rejected() {
    for (size, overlap) in [(100, 100), (100, 150), (0, 0)] {
        match DocumentPipeline::new(SegmentConfig::new(size, overlap)) {
            Err(e) => assert!(e.is_invalid_config()),
            Ok(_) => panic!("{size}/{overlap} accepted"),
        }
    }

    let err = ChunkSegmenter::new(SegmentConfig::new(100, 10).with_max_chunks(Some(0))).unwrap_err();
    assert!(err.is_invalid_config());
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "This  is   a    test.   Page 42  ",
        "Report © 2024 ™ final draft",
        "page 1 page 2 page 3",
        "Page Page 12 34 x",
        "\u{201C}Quoted\u{201D}\ttext\n\nwith breaks",
        "½ ¾ symbols #$% and 100%",
        "日本語のテキスト 123 です",
    ];

    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_same_input_same_chunks() {
    let pipeline = quiet_pipeline(SegmentConfig::new(64, 16));
    let document = sample_document(5);

    assert_eq!(
        pipeline.process_document(&document, "doc.pdf"),
        pipeline.process_document(&document, "doc.pdf")
    );
}
