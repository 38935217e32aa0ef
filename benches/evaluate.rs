use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use remedi::{evaluate, Group, Rule, Task};

fn clinic_task() -> Task {
    Task::builder()
        .rule(Rule::intermediate(
            "fast heart rate",
            vec![Group::of(["bloating"])],
        ))
        .rule(Rule::intermediate(
            "low blood pressure",
            vec![Group::of(["dizziness"]), Group::of(["pale skin"])],
        ))
        .rule(Rule::conclusion(
            "tranquilizers",
            vec![
                Group::of(["migraine"]),
                Group::of(["thirsty"]),
                Group::of(["bloating"]),
            ],
        ))
        .rule(Rule::conclusion(
            "antiemetics",
            vec![Group::of(["vomiting"]), Group::of(["fast heart rate"])],
        ))
        .observe_all(["thirsty", "vomiting", "bloating", "migraine", "brain fog"])
        .build()
        .unwrap()
}

/// Worst-case shape for the scorer: every group fully available, so the
/// enumeration walks the entire Cartesian product (4^6 combinations).
fn wide_task() -> Task {
    let facts = ["s0", "s1", "s2", "s3"];
    let groups: Vec<Group> = (0..6).map(|_| Group::of(facts)).collect();
    Task::builder()
        .rule(Rule::conclusion("panacea", groups))
        .observe_all(facts)
        .build()
        .unwrap()
}

fn bench_evaluate_clinic(c: &mut Criterion) {
    let task = clinic_task();
    let mut group = c.benchmark_group("evaluate");
    group.throughput(Throughput::Elements(task.rules.len() as u64));
    group.bench_function("clinic_scenario", |b| b.iter(|| evaluate(&task)));
    group.finish();
}

fn bench_evaluate_wide_product(c: &mut Criterion) {
    let task = wide_task();
    c.bench_function("evaluate/wide_product", |b| b.iter(|| evaluate(&task)));
}

criterion_group!(benches, bench_evaluate_clinic, bench_evaluate_wide_product);
criterion_main!(benches);
