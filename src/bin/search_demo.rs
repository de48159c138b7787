//! Hardcoded demonstration driver for the Boyer-Moore matcher.
//!
//! Builds a matcher for a fixed pattern, searches a fixed text, and logs
//! every match offset. Acquiring pattern/text from files or arguments is
//! deliberately left to real callers.

use bmsearch::BoyerMooreMatcher;
use tracing::info;

fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    // A second subscriber registration only happens in tests; ignore it.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> bmsearch::Result<()> {
    init_logging();

    let text = b"alfa beta alfa charly";
    let pattern = b"alfa";

    let matcher = BoyerMooreMatcher::new(pattern)?;
    info!(
        pattern = %String::from_utf8_lossy(pattern),
        text = %String::from_utf8_lossy(text),
        "searching"
    );

    for offset in matcher.find_all(text) {
        println!("Pattern found at index {offset}");
    }

    Ok(())
}
