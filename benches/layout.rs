use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use maquette::core::message::Message;
use maquette::ui::theme::Theme;
use maquette::ui::transcript::transcript_lines;
use maquette::utils::scroll::ScrollCalculator;
use std::collections::VecDeque;

fn make_messages(n_pairs: usize, base: &str) -> VecDeque<Message> {
    let mut v = VecDeque::new();
    for _ in 0..n_pairs {
        v.push_back(Message::user(base));
        v.push_back(Message::assistant(base));
    }
    v
}

fn bench_transcript_wrap(c: &mut Criterion) {
    let base = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";
    let theme = Theme::dark();
    let width_small = 80u16;
    let width_large = 120u16;

    for &pairs in &[100usize, 400usize] {
        // ~200 and ~800 messages
        let messages = make_messages(pairs, base);
        let built = transcript_lines(&messages, &theme);
        let logical_len = built.len();

        let mut group = c.benchmark_group(format!("transcript_wrap_pairs{}", pairs));
        group.throughput(Throughput::Elements(logical_len as u64));

        group.bench_function(BenchmarkId::new("prewrap", width_small), |b| {
            b.iter(|| ScrollCalculator::prewrap_lines(&built, width_small))
        });
        group.bench_function(BenchmarkId::new("prewrap", width_large), |b| {
            b.iter(|| ScrollCalculator::prewrap_lines(&built, width_large))
        });

        // Full redraw path: rebuild the styled lines, then wrap them
        group.bench_function(BenchmarkId::new("build_then_wrap", width_small), |b| {
            b.iter(|| {
                let lines = transcript_lines(&messages, &theme);
                ScrollCalculator::prewrap_lines(&lines, width_small)
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_transcript_wrap);
criterion_main!(benches);
