//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contactbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use contactbook_core::{default_log_level, init_logging, ContactBook};

fn main() {
    let log_dir = std::env::temp_dir().join("contactbook-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("contactbook_core version={}", contactbook_core::core_version());

    let book = ContactBook::with_seed();
    println!("mode={}", book.mode());
    for contact in book.contacts() {
        println!("contact id={} name={}", contact.id, contact.name);
    }
}
