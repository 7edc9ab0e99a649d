// ============================================================================
// Basic Usage Example
// ============================================================================

use apportion_engine::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Apportionment Engine Example ===\n");

    // Create an engine with the largest-remainder strategy
    let engine = Apportioner::new(
        Box::new(LargestRemainder::new()),
        Arc::new(LoggingDiagnosticHandler),
    );

    // Split a bill of 100 across three equal diners
    println!("Splitting 100 across equal weights 1/1/1...");
    report(&engine, "100", &["1", "1", "1"]);

    // Proportional budget split
    println!("Splitting 10 across weights 1/2/3...");
    report(&engine, "10", &["1", "2", "3"]);

    // A fractional total still reconciles to one decimal place
    println!("Splitting 123.4 across weights 2/3/5/7...");
    report(&engine, "123.4", &["2", "3", "5", "7"]);

    // Error path: nothing to weight against
    println!("Splitting 50 across zero weights...");
    report(&engine, "50", &["0", "0"]);
}

fn report<S: AsRef<str>>(engine: &Apportioner, total: &str, proportions: &[S]) {
    match engine.apportion(total, proportions) {
        Ok(result) => {
            for (i, share) in result.rendered.iter().enumerate() {
                println!("  share {}: {}", i, share);
            }
            println!("  sum: {}\n", result.total());
        },
        Err(err) => println!("  error: {}\n", err),
    }
}
