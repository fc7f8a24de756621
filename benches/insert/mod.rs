use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interval_avl_map::IntervalMap;

use crate::{populated_map, Lfsr};

/// What each insert call in a benchmark iteration does to the map.
#[derive(Debug, Clone, Copy)]
enum InsertKind {
    /// Every lower bound is new, so each call adds a node.
    Fresh,
    /// Every lower bound is already stored, so each call replaces a value.
    Overwrite,
    /// Every interval is inverted, so each call is rejected.
    Rejected,
}

impl InsertKind {
    fn label(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Overwrite => "overwrite",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BenchName {
    kind: InsertKind,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(v.kind.label(), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_fresh(&mut g, n_values);
        bench_overwrite(&mut g, n_values);
        bench_rejected(&mut g, n_values);
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// intervals into an empty map.
fn bench_fresh<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        kind: InsertKind::Fresh,
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (IntervalMap::new(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    let (lo, hi) = rand.next_bounds();
                    t.insert(lo, hi, 42_usize).unwrap();
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}

/// Measure re-inserting every stored lower bound of a map holding `n_values`
/// intervals. Each call finds its node and swaps the value without touching
/// the tree shape.
fn bench_overwrite<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        kind: InsertKind::Overwrite,
        n_values,
    };
    let (t, _) = populated_map(n_values);

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (t.clone(), Lfsr::default()),
            |(mut t, mut rand)| {
                // Replaying the LFSR from its seed regenerates the stored bounds.
                for i in 0..n_values {
                    let (lo, hi) = rand.next_bounds();
                    assert!(t.insert(lo, hi, i).unwrap().is_some());
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}

/// Measure inserting `n_values` inverted intervals into a map already holding
/// `n_values` entries. Every call fails validation and leaves the map as is.
fn bench_rejected<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        kind: InsertKind::Rejected,
        n_values,
    };
    let (mut t, rand) = populated_map(n_values);

    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || rand.clone(),
            |mut rand| {
                for _i in 0..n_values {
                    // LFSR outputs are distinct, so "hi" is strictly less
                    // than "lo".
                    let (hi, lo) = rand.next_bounds();
                    assert!(t.insert(lo, hi, 42).is_err());
                }
            },
            BatchSize::SmallInput,
        );
    });

    assert_eq!(t.len(), n_values);
}
