use criterion::{criterion_group, criterion_main, Criterion};
use inn_validation::{SecondaryValidator, Validator, ValidatorConfig};
use std::sync::Arc;
use threadpool::ThreadPool;

pub fn multithread_validation(c: &mut Criterion) {
    let service =
        Arc::new(ValidatorConfig::new(SecondaryValidator::RussianInnChecksum).build());

    let sample_inputs = sample_inputs();

    let num_threads = 32;
    // There are more jobs than threads to test things that may take longer the first time
    // a thread does something (e.g. thread local storage)
    let num_jobs = num_threads * 25;
    let thread_pool = ThreadPool::new(num_threads);

    c.bench_function("validate inns (multi-threaded)", |b| {
        b.iter(|| {
            for _ in 0..num_jobs {
                let sample_inputs = sample_inputs.clone();
                let service = Arc::clone(&service);
                thread_pool.execute(move || {
                    let valid = sample_inputs
                        .iter()
                        .filter(|input| service.validate(input.as_str().into()))
                        .count();
                    assert_eq!(valid, 6);
                });
            }
            thread_pool.join();
        })
    });
}

fn sample_inputs() -> Vec<String> {
    [
        "7707083893",
        "7830002293",
        "7736207543",
        "7702070139",
        "500100732259",
        "770000000220",
        "7707083894",
        "500100732258",
        "77070838931",
        "7707-083893",
    ]
    .iter()
    .map(|input| input.to_string())
    .collect()
}

criterion_group!(benches, multithread_validation);
criterion_main!(benches);
