// benches/scan.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use canvas_roster::annotate::Annotator;
use canvas_roster::page::{PeoplePage, RosterRow};

fn build_page(n: usize) -> PeoplePage {
    PeoplePage {
        course_name: Some("CS 101".into()),
        rows: (0..n)
            .map(|i| {
                RosterRow::stub(
                    &format!("{}", i),
                    &format!("Last{}, First{} (they/them)", i, i),
                )
            })
            .collect(),
    }
}

fn bench_scan(c: &mut Criterion) {
    let base = build_page(1000);

    c.bench_function("scan_fresh_1k", |b| {
        b.iter(|| {
            let mut page = base.clone();
            let mut eng = Annotator::new();
            black_box(eng.scan(black_box(&mut page)).injected)
        })
    });

    // the cost the debounced full re-scan actually pays: all marked
    c.bench_function("rescan_marked_1k", |b| {
        let mut page = base.clone();
        let mut eng = Annotator::new();
        eng.scan(&mut page);
        b.iter(|| black_box(eng.scan(black_box(&mut page)).already_marked))
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
