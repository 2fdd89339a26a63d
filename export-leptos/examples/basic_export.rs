//! Documentation export example.
//!
//! Run with: `cargo run --example basic_export`

use docs_content::SiteConfig;
use docs_export::render_docs;

fn main() {
    // Default config uses the /Yardr-Doc deployment prefix
    let config = SiteConfig::default();

    // Render to HTML
    let html = render_docs(&config);

    // Write to file
    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write export");

    println!("Docs written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
