//! Benchmarks for transition lookup, menu aggregation and engine batches

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use land_workflow::workflow::{
    next_statuses, CatalogRules, CommandBuilder, InMemoryRoleDirectory, TransactionStatus,
    WorkflowCommand, WorkflowCommandType, WorkflowEngine, WorkflowRole, WorkflowTask,
};
use land_workflow::{
    AggregateRoot, ContactId, DocumentType, InMemoryTransactionRepository, Transaction,
    TransactionId, TransactionType,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn setup_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn selection(size: usize, owner: ContactId) -> Vec<Transaction> {
    (0..size)
        .map(|i| {
            let status = TransactionStatus::VARIANTS[i % TransactionStatus::VARIANTS.len()];
            let (transaction_type, document_type) = if i % 2 == 0 {
                (TransactionType::INSCRIPTION, DocumentType::NOTARIAL_DEED)
            } else {
                (TransactionType::CERTIFICATES, DocumentType::LIENS_CERTIFICATE)
            };
            Transaction::new(
                TransactionId::new(),
                transaction_type,
                document_type,
                WorkflowTask::new(status, owner, ""),
            )
        })
        .collect()
}

fn benchmark_transition_table(c: &mut Criterion) {
    let rules = CatalogRules::default();

    c.bench_function("next_statuses_all_rows", |b| {
        b.iter(|| {
            for status in TransactionStatus::VARIANTS {
                black_box(next_statuses(
                    black_box(status),
                    TransactionType::INSCRIPTION,
                    DocumentType::NOTARIAL_DEED,
                    &rules,
                ));
            }
        })
    });
}

fn benchmark_aggregate(c: &mut Criterion) {
    let user = ContactId::new();
    let roles = InMemoryRoleDirectory::new()
        .with_role(user, WorkflowRole::ControlClerk)
        .with_role(user, WorkflowRole::Signer);
    let rules = CatalogRules::default();
    let builder = CommandBuilder::new(&roles, &rules);

    let mut group = c.benchmark_group("aggregate_applicable_commands");

    for size in [1, 10, 100, 1_000].iter() {
        let transactions = selection(*size, ContactId::new());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(builder.aggregate(&user, &transactions)))
        });
    }

    group.finish();
}

fn benchmark_engine_batch(c: &mut Criterion) {
    let rt = setup_runtime();
    let clerk = ContactId::new();

    let mut group = c.benchmark_group("engine_set_next_status_batch");

    for size in [1, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, size| {
            b.iter(|| {
                rt.block_on(async {
                    let repository = InMemoryTransactionRepository::new();
                    let mut ids = Vec::with_capacity(*size);
                    for _ in 0..*size {
                        let transaction = Transaction::new(
                            TransactionId::new(),
                            TransactionType::INSCRIPTION,
                            DocumentType::NOTARIAL_DEED,
                            WorkflowTask::new(TransactionStatus::Control, clerk, ""),
                        );
                        ids.push(transaction.id());
                        repository.insert(transaction).await.unwrap();
                    }

                    let engine = WorkflowEngine::new(
                        Arc::new(repository),
                        Arc::new(InMemoryRoleDirectory::new()),
                        Arc::new(CatalogRules::default()),
                    );
                    let command = WorkflowCommand::new(
                        WorkflowCommandType::SetNextStatus,
                        ids,
                        TransactionStatus::Recording,
                    );
                    black_box(engine.execute(&command, &clerk).await.unwrap())
                })
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_transition_table,
    benchmark_aggregate,
    benchmark_engine_batch
);

criterion_main!(benches);
