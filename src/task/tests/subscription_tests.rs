//! Live-query behaviour tests for the in-memory task repository.

use super::{FixedClock, instant};
use crate::identity::domain::EmailAddress;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskBody},
    ports::TaskRepository,
};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn owner() -> EmailAddress {
    EmailAddress::new("a@x.com").expect("valid email")
}

fn task_at(text: &str, owner_email: &EmailAddress, timestamp: &str) -> Task {
    Task::new(
        TaskBody::new(text).expect("valid body"),
        owner_email.clone(),
        false,
        &FixedClock(instant(timestamp)),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subscribe_delivers_the_current_list_newest_first(repository: InMemoryTaskRepository) {
    let owner_email = owner();
    let older = task_at("older", &owner_email, "2024-05-01T08:00:00Z");
    let newer = task_at("newer", &owner_email, "2024-05-01T09:00:00Z");
    repository.insert(&older).await.expect("insert succeeds");
    repository.insert(&newer).await.expect("insert succeeds");

    let feed = repository
        .watch_owned(&owner_email)
        .await
        .expect("subscription succeeds");

    assert_eq!(feed.current(), vec![newer, older]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_replaces_the_list_and_moves_the_new_task_to_the_top(
    repository: InMemoryTaskRepository,
) {
    let owner_email = owner();
    let mut feed = repository
        .watch_owned(&owner_email)
        .await
        .expect("subscription succeeds");
    assert!(feed.current().is_empty());

    let first = task_at("first", &owner_email, "2024-05-01T08:00:00Z");
    repository.insert(&first).await.expect("insert succeeds");
    feed.changed().await.expect("feed delivers");
    assert_eq!(feed.current(), vec![first.clone()]);

    let second = task_at("second", &owner_email, "2024-05-01T09:00:00Z");
    repository.insert(&second).await.expect("insert succeeds");
    feed.changed().await.expect("feed delivers");
    assert_eq!(feed.current(), vec![second, first]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task_from_the_live_list(repository: InMemoryTaskRepository) {
    let owner_email = owner();
    let keep = task_at("keep", &owner_email, "2024-05-01T08:00:00Z");
    let remove = task_at("remove", &owner_email, "2024-05-01T09:00:00Z");
    repository.insert(&keep).await.expect("insert succeeds");
    repository.insert(&remove).await.expect("insert succeeds");

    let mut feed = repository
        .watch_owned(&owner_email)
        .await
        .expect("subscription succeeds");

    repository
        .delete(remove.id())
        .await
        .expect("delete succeeds");
    feed.changed().await.expect("feed delivers");
    assert_eq!(feed.current(), vec![keep]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feeds_are_scoped_to_their_owner(repository: InMemoryTaskRepository) {
    let owner_email = owner();
    let other = EmailAddress::new("b@x.com").expect("valid email");
    let feed = repository
        .watch_owned(&owner_email)
        .await
        .expect("subscription succeeds");

    let others_task = task_at("not yours", &other, "2024-05-01T08:00:00Z");
    repository
        .insert(&others_task)
        .await
        .expect("insert succeeds");

    assert!(feed.current().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resubscribing_after_drop_sees_the_current_store_contents(
    repository: InMemoryTaskRepository,
) {
    let owner_email = owner();
    let feed = repository
        .watch_owned(&owner_email)
        .await
        .expect("subscription succeeds");
    drop(feed);

    let task = task_at("created while unobserved", &owner_email, "2024-05-01T08:00:00Z");
    repository.insert(&task).await.expect("insert succeeds");

    let fresh = repository
        .watch_owned(&owner_email)
        .await
        .expect("subscription succeeds");
    assert_eq!(fresh.current(), vec![task]);
}
