use criterion::{Criterion, criterion_group, criterion_main};
use postdeck_engine::sectionize;

fn generate_post_body(pairs: usize) -> String {
    let mut body = String::from("A short introduction before the first photo.\n\n");
    for i in 0..pairs {
        body.push_str(&format!("![Photo {i}](img/{i}.jpg)\n"));
        body.push_str("A caption that runs for a sentence or two. It has (parens) and [brackets].\n\n");
    }
    body
}

fn bench_sectionize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sectionize");
    group.sample_size(20);

    for pairs in [10, 1000] {
        let content = generate_post_body(pairs);
        group.bench_function(format!("pairs_{pairs}"), |b| {
            b.iter(|| std::hint::black_box(sectionize(std::hint::black_box(&content))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sectionize);
criterion_main!(benches);
