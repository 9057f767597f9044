use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use address_book::prelude::{AddressBook, ContactDetails};

// Helper to create a book prepopulated with `n` contacts.
fn make_book_with_n(n: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..n {
        book.add(ContactDetails::new(
            format!("User{i}"),
            "08885499529".to_string(),
            format!("{i} Main St"),
        ));
    }
    book
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                book.add(ContactDetails::new(
                    "Zoe".to_string(),
                    "08885499529".to_string(),
                    "1 Side St".to_string(),
                ));
                black_box(book.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let book = make_book_with_n(50_000);

    // "User4999" matches 11 names out of 50k
    c.bench_function("Prefix search in 50k contacts", |b| {
        b.iter(|| black_box(book.search_by_prefix(black_box("User4999"))));
    });

    c.bench_function("Exact get in 50k contacts", |b| {
        b.iter(|| black_box(book.get_by_name(black_box("User25000"))));
    });
}

fn bench_list(c: &mut Criterion) {
    let book = make_book_with_n(5_000);

    c.bench_function("Listing 5k contacts", |b| {
        b.iter(|| black_box(book.list_all()));
    });
}

criterion_group!(benches, bench_add, bench_search, bench_list);
criterion_main!(benches);
