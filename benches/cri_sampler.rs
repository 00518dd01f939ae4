use atbat::log5::LeagueAverage;
use atbat::rates::MatchupRates;
use atbat::sampler;
use atbat::sampler::TrialProbs;
use atbat::stats::{BattingLine, PitchingLine};
use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{StdRand, Wyrand};
use tinyrand_alloc::Mock;

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
    let pitcher = PitchingLine {
        batters_faced: Some(574.0),
        walks: Some(25.0),
        strikeouts: Some(122.0),
        average: Some(0.267),
        ..PitchingLine::default()
    };
    let probs = TrialProbs::new(&MatchupRates::estimate(&batter, &pitcher), LeagueAverage::DEFAULT);

    // sanity check
    let result = sampler::run_once(&probs, &mut StdRand::default());
    assert_eq!(result.outcome.bases(), result.bases);

    c.bench_function("cri_sampler_wyrand", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| sampler::run_once(&probs, &mut rand));
    });

    // a constant draw of 0.3 is in play, a hit and a double, so every stage is exercised
    c.bench_function("cri_sampler_mock_hit", |b| {
        let mut rand = Mock::default().with_next_u128(|_| (u64::MAX / 10 * 3) as u128);
        b.iter(|| sampler::run_once(&probs, &mut rand));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
