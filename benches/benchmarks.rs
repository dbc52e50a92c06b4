use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rosalind_rust::motif;
use rosalind_rust::overlap::{OverlapGraph, OverlapOpt};
use rosalind_rust::profile::Profile;
use rosalind_rust::stats;
use rosalind_rust::{Record, RecordSet};

fn make_sequence(len: usize, seed: u32) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = seed;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

/// 共享一段公共模体的随机序列集合
fn make_records(n: usize, len: usize) -> RecordSet {
    let shared = make_sequence(20, 7);
    (0..n)
        .map(|i| {
            let mut seq = make_sequence(len, 42 + i as u32);
            let at = (i * 37) % (len - shared.len());
            seq[at..at + shared.len()].copy_from_slice(&shared);
            Record::new(format!("seq_{}", i), seq)
        })
        .collect()
}

fn bench_profile(c: &mut Criterion) {
    let records = make_records(100, 1_000);
    c.bench_function("profile_100x1kbp", |b| {
        b.iter(|| {
            let profile = Profile::build(black_box(&records)).unwrap();
            black_box(profile.consensus());
        })
    });
}

fn bench_overlap_graph(c: &mut Criterion) {
    let records = make_records(1_000, 50);
    c.bench_function("overlap_graph_1000_k3", |b| {
        b.iter(|| {
            black_box(OverlapGraph::build(black_box(&records), OverlapOpt::default()).unwrap());
        })
    });
}

fn bench_lcs(c: &mut Criterion) {
    let records = make_records(20, 1_000);
    let seqs = records.sequences();
    c.bench_function("lcs_suffix_array_20x1kbp", |b| {
        b.iter(|| {
            black_box(motif::longest_common_substring(black_box(&seqs)).unwrap());
        })
    });
    c.bench_function("lcs_scan_20x1kbp", |b| {
        b.iter(|| {
            black_box(motif::longest_common_substring_scan(black_box(&seqs)).unwrap());
        })
    });
}

fn bench_palindromes(c: &mut Criterion) {
    let seq = make_sequence(1_000, 99);
    c.bench_function("reverse_palindromes_1kbp", |b| {
        b.iter(|| {
            black_box(motif::reverse_palindromes(black_box(&seq)));
        })
    });
}

fn bench_occurrences(c: &mut Criterion) {
    let seq = make_sequence(10_000, 3);
    let pattern = seq[100..104].to_vec();
    c.bench_function("find_all_occurrences_10k", |b| {
        b.iter(|| {
            black_box(stats::find_all_occurrences(black_box(&seq), black_box(&pattern)));
        })
    });
}

criterion_group!(
    benches,
    bench_profile,
    bench_overlap_graph,
    bench_lcs,
    bench_palindromes,
    bench_occurrences
);
criterion_main!(benches);
