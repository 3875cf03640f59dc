criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        compacting_consolidated_lines,
        compacting_linear_lines,
        flattening_compacted_tree,
        computing_sibling_decisions,
        rendering_pgn_study,
}

fn compacting_consolidated_lines(c: &mut criterion::Criterion) {
    let lines = lines(1000);
    c.bench_function("compact 1000 lines with consolidation", |b| {
        b.iter(|| compact(&lines, true))
    });
}

fn compacting_linear_lines(c: &mut criterion::Criterion) {
    let lines = lines(1000);
    c.bench_function("compact 1000 lines without consolidation", |b| {
        b.iter(|| compact(&lines, false))
    });
}

fn flattening_compacted_tree(c: &mut criterion::Criterion) {
    let tree = compact(&lines(1000), true);
    c.bench_function("flatten a tree of 1000 lines", |b| {
        b.iter(|| flatten(&tree))
    });
}

fn computing_sibling_decisions(c: &mut criterion::Criterion) {
    let line = Line::root();
    let stats = BoardStats::from_moves(
        (0..20)
            .map(|i| MoveStat::new(format!("m{}", i), format!("M{}", i), Outcomes::new(i * 30, i * 20, i * 10)))
            .collect(),
    );
    c.bench_function("compute decisions for 20 candidate moves", |b| {
        b.iter(|| Decision::siblings(&line, &stats, 0))
    });
}

fn rendering_pgn_study(c: &mut criterion::Criterion) {
    let lines = lines(1000);
    c.bench_function("render 1000 lines as pgn", |b| {
        b.iter(|| lines.iter().map(|line| pgn(line)).collect::<Vec<String>>())
    });
}

/// random lines over a small move vocabulary so prefixes are shared
fn lines(n: usize) -> Vec<Vec<String>> {
    const TOKENS: [&str; 8] = ["e4", "e5", "d4", "d5", "Nf3", "Nc6", "c4", "c5"];
    let ref mut rng = SmallRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let len = rng.random_range(1..16);
            (0..len)
                .map(|_| TOKENS[rng.random_range(0..TOKENS.len())].to_string())
                .collect()
        })
        .collect()
}

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use repertoire::compact::compact;
use repertoire::compact::flatten;
use repertoire::decision::Decision;
use repertoire::export::pgn;
use repertoire::moves::BoardStats;
use repertoire::moves::Line;
use repertoire::moves::MoveStat;
use repertoire::moves::Outcomes;
