//! Service orchestration tests for the task board.

use std::sync::Arc;

use crate::identity::domain::EmailAddress;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId},
    services::{TaskBoardError, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskBoardService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
        "http://localhost:3000",
    )
}

fn owner() -> EmailAddress {
    EmailAddress::new("a@x.com").expect("valid email")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(service: TestService) {
    let created = service
        .create(owner(), "Buy milk", true)
        .await
        .expect("task creation should succeed");

    let fetched = service
        .find(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_text(service: TestService) {
    let result = service.create(owner(), "   ", false).await;

    assert!(matches!(
        result,
        Err(TaskBoardError::Domain(TaskDomainError::EmptyBody))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task(service: TestService) {
    let created = service
        .create(owner(), "Buy milk", false)
        .await
        .expect("task creation should succeed");

    service
        .delete(created.id())
        .await
        .expect("delete should succeed");

    let fetched = service
        .find(created.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_unknown_task_is_a_no_op(service: TestService) {
    service
        .delete(TaskId::new())
        .await
        .expect("delete should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn share_url_is_the_canonical_public_link(service: TestService) {
    let created = service
        .create(owner(), "Buy milk", true)
        .await
        .expect("task creation should succeed");

    assert_eq!(
        service.share_url(created.id()),
        format!("http://localhost:3000/task/{}", created.id())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn share_url_tolerates_trailing_slash_in_base() {
    let with_slash: TestService = TaskBoardService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
        "http://localhost:3000/",
    );
    let id = TaskId::new();

    assert_eq!(
        with_slash.share_url(id),
        format!("http://localhost:3000/task/{id}")
    );
}
