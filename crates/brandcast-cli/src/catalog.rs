//! The `catalog` command: list what `run --types` and `--platforms` accept.

use brandcast_core::{CONTENT_KINDS, PLATFORMS};

pub(crate) fn print_catalog() {
    println!("content types:");
    for kind in &CONTENT_KINDS {
        println!(
            "  {:<12} {} [{}]",
            kind.id,
            kind.label,
            kind.structure.as_str()
        );
    }
    println!();
    println!("platforms:");
    for platform in &PLATFORMS {
        println!(
            "  {:<12} {} (caption limit {})",
            platform.id,
            platform.label,
            platform.caption_limit()
        );
    }
}
