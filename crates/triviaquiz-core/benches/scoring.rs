use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use triviaquiz_core::model::{AnswerLog, Question, QuestionSet};
use triviaquiz_core::scoring::score;
use triviaquiz_core::shuffle::present_options;

fn make_set(n: usize) -> QuestionSet {
    (0..n)
        .map(|i| {
            Question::new(
                format!("Question {i}?"),
                format!("correct-{i}"),
                vec![
                    format!("wrong-a-{i}"),
                    format!("wrong-b-{i}"),
                    format!("wrong-c-{i}"),
                ],
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_present_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("present_options");
    let set = make_set(1);
    let question = &set[0];

    group.bench_function("four_candidates", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| present_options(black_box(question), &mut rng))
    });

    let wide = Question::new(
        "Wide",
        "yes",
        (0..63).map(|i| format!("no-{i}")).collect(),
    );
    group.bench_function("sixty_four_candidates", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| present_options(black_box(&wide), &mut rng))
    });

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for n in [10usize, 1000] {
        let set = make_set(n);
        let answers: AnswerLog = set
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i % 2 == 0 {
                    q.correct_answer.clone()
                } else {
                    q.incorrect_answers[0].clone()
                }
            })
            .collect();
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| score(black_box(&set), black_box(&answers)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_present_options, bench_score);
criterion_main!(benches);
