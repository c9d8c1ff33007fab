//! Example: Using chatlens as a library
//!
//! This example demonstrates how to use chatlens in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatlens::prelude::*;

const CHAT: &str = "\
[2023-01-01, 12:00 PM] Alice: Hello, how are you?
[2023-01-01, 1:00 PM] Bob: I'm good, thanks!
Messages and calls are end-to-end encrypted.
[2023-01-01, 1:05 PM] Alice: Say hello to Carol
[2023-01-02, 9:15 AM] Carol: hello hello
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatlens Library Usage Examples ===\n");

    // Example 1: Load from a file
    println!("1. Loading a chat log from disk:");
    let dir = std::env::temp_dir().join("chatlens-demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("_chat.txt");
    std::fs::write(&path, CHAT)?;

    let table = load(&path, true)?;
    println!("   {} messages, columns {:?}", table.len(), table.columns());

    // Example 2: Inspect the table
    println!("\n2. The parsed table:");
    print!("{}", to_text(&table));

    // Example 3: Keep the combined timestamp
    println!("\n3. Without timestamp splitting:");
    let raw = load(&path, false)?;
    for row in &raw {
        println!("   [{}] {}", row.timestamp.combined(), row.sender);
    }

    // Example 4: Sender distribution report
    println!("\n4. Sender distribution:");
    report_sender_distribution(&table)?;

    // Example 5: Pure counts and an SVG chart
    println!("\n5. Counts as data:");
    let dist = sender_distribution(&table);
    for (sender, count) in dist.iter() {
        println!("   {sender}: {count}");
    }
    let svg_path = dir.join("senders.svg");
    BarChart::from_distribution(&dist, &ChartConfig::default()).write_svg(&svg_path)?;
    println!("   Chart written to {}", svg_path.display());

    // Example 6: Keyword search
    println!("\n6. Searching for 'hello':");
    let hits = search("hello", &table)?;
    print!("{}", to_text(&hits));
    println!("   ({} matches)", count_word_usage("hello", &table)?);

    // Example 7: Search options
    println!("\n7. Case-sensitive pattern search:");
    let config = SearchConfig::new().pattern().with_case_sensitive(true);
    let hits = search_with("^[A-Z]", &table, &config)?;
    println!("   {} messages start with a capital letter", hits.len());

    // Example 8: Errors are typed
    println!("\n8. Searching a table without dates:");
    match search("hello", &raw) {
        Err(e) if e.is_missing_column() => println!("   {e}"),
        other => println!("   unexpected: {other:?}"),
    }

    // Example 9: Other renderings
    println!("\n9. CSV and JSON:");
    print!("{}", to_csv(&hits)?);
    println!("{}", to_json(&hits)?);

    println!("\n=== Examples complete! ===");
    Ok(())
}
