use atbat::log5::LeagueAverage;
use atbat::mc::MonteCarloEngine;
use atbat::rates::MatchupRates;
use atbat::sampler::TrialProbs;
use atbat::stats::{BattingLine, PitchingLine};
use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{Seeded, Wyrand};

fn criterion_benchmark(c: &mut Criterion) {
    let batter = BattingLine {
        plate_appearances: Some(517.0),
        at_bats: Some(454.0),
        hits: Some(153.0),
        doubles: Some(27.0),
        triples: Some(1.0),
        home_runs: Some(20.0),
        walks: Some(50.0),
        strikeouts: Some(63.0),
        average: Some(0.337),
        ..BattingLine::default()
    };
    let probs = TrialProbs::new(
        &MatchupRates::estimate(&batter, &PitchingLine::default()),
        LeagueAverage::DEFAULT,
    );

    {
        // sanity check
        let engine = MonteCarloEngine::default().with_probs(probs);
        let tally = engine.simulate(&mut Wyrand::seed(42));
        assert_eq!(2_000, tally.trials());
    }

    c.bench_function("cri_mc_engine_2k", |b| {
        let engine = MonteCarloEngine::default().with_probs(probs);
        let mut rand = Wyrand::default();
        b.iter(|| engine.simulate(&mut rand));
    });
    c.bench_function("cri_mc_engine_100k", |b| {
        let engine = MonteCarloEngine::default()
            .with_trials(100_000)
            .with_probs(probs);
        let mut rand = Wyrand::default();
        b.iter(|| engine.simulate(&mut rand));
    });
    c.bench_function("cri_mc_engine_100k_sharded", |b| {
        let engine = MonteCarloEngine::default()
            .with_trials(100_000)
            .with_probs(probs);
        b.iter(|| engine.simulate_sharded(42, 10_000));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
