//! Benchmarks for docx2wiki conversion performance.
//!
//! Run with: cargo bench
//!
//! Documents are generated in memory with a mix of headings, list items,
//! plain paragraphs and tables.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docx2wiki::RenderOptions;
use std::io::Cursor;

/// Creates a synthetic DOCX package with `block_count` groups of blocks.
fn create_test_docx(block_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
    )
    .unwrap();

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..block_count {
        content.push_str(&format!(
            r#"
    <w:p><w:pPr><w:pStyle w:val="2"/></w:pPr><w:r><w:t>Section {i}</w:t></w:r></w:p>
    <w:p><w:pPr><w:numPr><w:ilvl w:val="{level}"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>Item {i}</w:t></w:r></w:p>
    <w:p><w:r><w:t>This is paragraph {i} with some test content for benchmarking purposes.</w:t></w:r></w:p>
    <w:tbl>
      <w:tr><w:tc><w:p><w:r><w:t>key</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>value {i}</w:t></w:r></w:p><w:p><w:r><w:t>more</w:t></w:r></w:p></w:tc></w:tr>
    </w:tbl>"#,
            level = i % 3
        ));
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark package parsing into the element tree.
fn bench_docx_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_parsing");

    for block_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*block_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("blocks", block_count), &data, |b, data| {
            b.iter(|| {
                let _ = docx2wiki::parse_bytes(black_box(data));
            });
        });
    }

    group.finish();
}

/// Benchmark rendering an already parsed tree.
fn bench_wiki_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("wiki_rendering");

    for block_count in [10, 100, 500].iter() {
        let data = create_test_docx(*block_count);
        let tree = docx2wiki::parse_bytes(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("blocks", block_count), &tree, |b, tree| {
            b.iter(|| {
                let options = RenderOptions::default();
                let _ = docx2wiki::render::to_wiki(black_box(tree), &options);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_docx_parsing, bench_wiki_rendering);
criterion_main!(benches);
