mod common;

use common::{record, valid_input, FakeBackend, GatedBackend};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use student_registry::error::ErrorKind;
use student_registry::models::loaders::StudentBatch;
use student_registry::models::{StudentId, StudentInput};
use student_registry::{AppError, MutationGateway, RecordStore, StudentBackend};
use tokio_test::{assert_err, assert_ok};

fn gateway_with(backend: Arc<FakeBackend>) -> (MutationGateway, Arc<RecordStore>) {
    let backend_dyn: Arc<dyn StudentBackend> = backend;
    let store = Arc::new(RecordStore::new(Arc::clone(&backend_dyn)));
    (MutationGateway::new(backend_dyn, Arc::clone(&store)), store)
}

#[tokio::test]
async fn test_invalid_mobile_never_reaches_backend() {
    let backend = Arc::new(FakeBackend::default());
    let (gateway, _store) = gateway_with(Arc::clone(&backend));

    let input = StudentInput {
        mobile_number: "12345".to_string(),
        ..valid_input("Amy")
    };
    let err = assert_err!(gateway.register(&input).await);

    assert_eq!(err.kind(), ErrorKind::Validation);
    let errors = err.validation_errors().unwrap();
    assert!(errors.get("mobileNumber").is_some());
    assert_eq!(errors.len(), 1);
    assert_eq!(backend.calls(), (0, 0, 0));
}

#[tokio::test]
async fn test_register_refetches_collection() {
    let backend = Arc::new(FakeBackend::with_records(vec![record(1, "Bob", "MBA", "70")]));
    let (gateway, store) = gateway_with(Arc::clone(&backend));
    assert_ok!(store.refresh().await);

    assert_ok!(gateway.register(&valid_input("Amy")).await);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].name, "Amy");
    assert_eq!(snapshot[1].course, "Data Science");
    assert_eq!(backend.calls(), (2, 1, 0));
}

#[tokio::test]
async fn test_failed_create_keeps_prior_snapshot() {
    let backend = Arc::new(FakeBackend::with_records(vec![record(1, "Bob", "MBA", "70")]));
    let (gateway, store) = gateway_with(Arc::clone(&backend));
    let before = assert_ok!(store.refresh().await);

    backend.fail_create.store(true, Ordering::SeqCst);
    let err = assert_err!(gateway.register(&valid_input("Amy")).await);

    assert_eq!(err.kind(), ErrorKind::Transport);
    let after = store.snapshot().await;
    assert_eq!(*after, *before);
    // 失败后不刷新
    assert_eq!(backend.calls(), (1, 1, 0));
}

#[tokio::test]
async fn test_remove_refetches_and_unknown_id_is_not_found() {
    let backend = Arc::new(FakeBackend::with_records(vec![
        record(1, "Bob", "MBA", "70"),
        record(2, "Amy", "MBA", "90"),
    ]));
    let (gateway, store) = gateway_with(Arc::clone(&backend));
    assert_ok!(store.refresh().await);

    assert_ok!(gateway.remove(StudentId(1)).await);
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, StudentId(2));

    let err = assert_err!(gateway.remove(StudentId(99)).await);
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(store.snapshot().await.len(), 1);
    assert_eq!(backend.calls(), (2, 0, 2));
}

#[tokio::test]
async fn test_failed_refresh_keeps_snapshot() {
    let backend = Arc::new(FakeBackend::with_records(vec![record(1, "Bob", "MBA", "70")]));
    let (_gateway, store) = gateway_with(Arc::clone(&backend));
    assert_ok!(store.refresh().await);

    backend.fail_fetch.store(true, Ordering::SeqCst);
    let err = assert_err!(store.refresh().await);

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(store.snapshot().await.len(), 1);
    assert!(store.is_loaded().await);
}

#[tokio::test]
async fn test_import_reports_each_entry_and_refreshes_once() {
    let backend = Arc::new(FakeBackend::default());
    let (gateway, store) = gateway_with(Arc::clone(&backend));

    let bad = StudentInput {
        email: "not-an-email".to_string(),
        ..valid_input("Carl")
    };
    let batches = vec![
        StudentBatch {
            students: vec![valid_input("Amy"), bad],
            file_path: None,
        },
        StudentBatch {
            students: vec![valid_input("Bob")],
            file_path: None,
        },
    ];

    let summary = gateway.import(batches).await;

    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.failed.len(), 1);
    let (index, name, err) = &summary.failed[0];
    assert_eq!(*index, 2);
    assert_eq!(name, "Carl");
    assert!(err.validation_errors().unwrap().get("email").is_some());

    assert_eq!(backend.calls(), (1, 2, 0));
    let names: Vec<String> = store.snapshot().await.iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["Amy", "Bob"]);
}

#[tokio::test]
async fn test_stale_refresh_does_not_overwrite_newer_snapshot() {
    let backend = Arc::new(GatedBackend::default());
    let first = backend.gate();
    let second = backend.gate();
    let store = RecordStore::new(backend);

    let older = vec![record(1, "Old", "MBA", "50")];
    let newer = vec![record(1, "Old", "MBA", "50"), record(2, "New", "MBA", "60")];

    let release = async {
        tokio::task::yield_now().await;
        // 后发的请求先返回
        second.send(Ok(newer)).unwrap();
        tokio::task::yield_now().await;
        first.send(Ok(older)).unwrap();
    };

    let (a, b, ()) = tokio::join!(store.refresh(), store.refresh(), release);
    assert_ok!(a);
    assert_ok!(b);

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].name, "New");
}

#[tokio::test]
async fn test_stale_refresh_failure_is_dropped() {
    let backend = Arc::new(GatedBackend::default());
    let first = backend.gate();
    let second = backend.gate();
    let store = RecordStore::new(backend);

    let newer = vec![record(2, "New", "MBA", "60")];

    let release = async {
        tokio::task::yield_now().await;
        second.send(Ok(newer)).unwrap();
        tokio::task::yield_now().await;
        // 旧请求在新结果应用之后才失败
        first
            .send(Err(AppError::bad_status("/users", 503, None)))
            .unwrap();
    };

    let (a, b, ()) = tokio::join!(store.refresh(), store.refresh(), release);
    let stale = assert_ok!(a);
    assert_ok!(b);

    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].name, "New");
    assert_eq!(store.snapshot().await[0].name, "New");
}

#[tokio::test]
async fn test_latest_refresh_failure_is_reported() {
    let backend = Arc::new(GatedBackend::default());
    let first = backend.gate();
    let second = backend.gate();
    let store = RecordStore::new(backend);

    let release = async {
        tokio::task::yield_now().await;
        first.send(Ok(vec![record(1, "Old", "MBA", "50")])).unwrap();
        tokio::task::yield_now().await;
        second
            .send(Err(AppError::bad_status("/users", 503, None)))
            .unwrap();
    };

    let (a, b, ()) = tokio::join!(store.refresh(), store.refresh(), release);
    assert_ok!(a);
    let err = assert_err!(b);

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(store.snapshot().await[0].name, "Old");
}
