//! Chunking Strategies
//!
//! Runs the same document through every strategy.
//!
//! ```bash
//! cargo run --example chunking_strategies
//! ```

use strata::{
    extract_toc, toc_to_markdown, Chunker, DelimiterChunker, MarkdownChunker, OverlapChunker,
};

fn main() {
    let document = "# User Guide\n\
        \n\
        Welcome to the product. This introduction explains the basics\n\
        and points to the detailed sections below.\n\
        \n\
        ## Installation\n\
        \n\
        Download the package and run the installer. The defaults work\n\
        for most setups.\n\
        \n\
        ## Configuration\n\
        \n\
        Every option lives in one file. Change a value, restart, done.";

    println!("Document: {} chars\n", document.chars().count());

    let markdown = MarkdownChunker::new(40, 120).unwrap();
    report("markdown (min 40 / max 120)", &markdown.chunk(document));

    let delimiter = DelimiterChunker::new("\n\n");
    report("delimiter (\"\\n\\n\")", &delimiter.chunk(document));

    let windows = OverlapChunker::new(120, 20).unwrap();
    report("overlap windows (120 / 20)", &windows.chunk(document));

    println!("table of contents:");
    println!("{}", toc_to_markdown(&extract_toc(document), true));
}

fn report(label: &str, chunks: &[strata::Chunk]) {
    println!("{label}: {} chunks", chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let preview: String = chunk.content.chars().take(40).collect();
        println!("  [{i}] {:>3} chars  {:?}", chunk.size, preview);
    }
    println!();
}
