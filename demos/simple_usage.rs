//! Simple example demonstrating how to use the bookstats library

use anyhow::Result;
use bookstats::analyze_book;
use bookstats::utils::output_formatter::format_text_report;

fn main() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file_path = dir.path().join("sample_book.txt");

    std::fs::write(
        &file_path,
        "It is a truth universally acknowledged, that a single man in possession\n\
         of a good fortune, must be in want of a wife.\n",
    )?;

    let report = analyze_book(&file_path)?;

    println!("{} words, {} distinct letters", report.word_count, report.letters.len());
    for entry in report.letters.entries().iter().take(3) {
        println!("  {} appears {} times", entry.character, entry.count);
    }

    println!();
    print!("{}", format_text_report(&report, false));

    Ok(())
}
