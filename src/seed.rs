//! Demonstration seed data
//!
//! Loads the small catalog and membership roll used by the demo flow so a
//! fresh server can be exercised immediately.

use crate::registry::LibraryRegistry;

/// Seed the demonstration catalog: four books, three patrons.
pub fn seed_demo_data(registry: &mut LibraryRegistry) {
    let books = [
        ("Python编程从入门到实践", "Eric Matthes", "9787115428028"),
        ("算法导论", "Thomas H. Cormen", "9787111407010"),
        ("设计模式", "Erich Gamma", "9787111075776"),
        ("深入理解计算机系统", "Randal E. Bryant", "9787111321330"),
    ];
    let patrons = [
        ("张三", "CARD001"),
        ("李四", "CARD002"),
        ("王五", "CARD003"),
    ];

    for (title, author, isbn) in books {
        if registry.add_book(title, author, isbn).is_err() {
            tracing::warn!("Seed book {} already present, skipping", isbn);
        }
    }
    for (name, card) in patrons {
        if registry.register_patron(name, card).is_err() {
            tracing::warn!("Seed patron {} already present, skipping", card);
        }
    }

    tracing::info!("Seeded demo catalog ({} books, {} patrons)", books.len(), patrons.len());
}
