//! End-to-end board flow over the in-memory adapters.
//!
//! Exercises the share-a-task story at the service level: an owner
//! creates tasks, a visitor comments on a public one, and deletion
//! behaviour stays scoped to the addressed record.

use std::sync::Arc;

use mockable::DefaultClock;
use quadro::comment::adapters::memory::InMemoryCommentRepository;
use quadro::comment::services::CommentThreadService;
use quadro::identity::domain::{DisplayName, EmailAddress, Session, UserProfile};
use quadro::task::adapters::memory::InMemoryTaskRepository;
use quadro::task::ports::TaskFeed;
use quadro::task::services::TaskBoardService;
use rstest::{fixture, rstest};

type Board = TaskBoardService<InMemoryTaskRepository, DefaultClock>;
type Thread = CommentThreadService<InMemoryCommentRepository, DefaultClock>;

struct World {
    board: Board,
    thread: Thread,
}

#[fixture]
fn world() -> World {
    let clock = Arc::new(DefaultClock);
    World {
        board: TaskBoardService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&clock),
            "http://board.test",
        ),
        thread: CommentThreadService::new(Arc::new(InMemoryCommentRepository::new()), clock),
    }
}

fn email(raw: &str) -> EmailAddress {
    EmailAddress::new(raw).expect("valid email")
}

fn session_for(address: &str, name: &str) -> Session {
    Session::new(UserProfile::new(
        email(address),
        DisplayName::new(name).expect("valid display name"),
    ))
}

/// Asserts the feed currently lists exactly the given task texts, in order.
fn assert_feed_texts(feed: &TaskFeed, expected: &[&str]) -> Result<(), eyre::Report> {
    let texts: Vec<String> = feed
        .current()
        .iter()
        .map(|task| task.body().as_str().to_owned())
        .collect();
    eyre::ensure!(texts == expected, "feed mismatch: {texts:?} != {expected:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn shared_task_collects_and_releases_comments(world: World) {
    // User A creates a public task and it tops the live list.
    let owner = email("a@x.com");
    let mut feed = world
        .board
        .watch_owned(&owner)
        .await
        .expect("subscription succeeds");

    let task = world
        .board
        .create(owner.clone(), "Buy milk", true)
        .await
        .expect("task creation succeeds");
    feed.changed().await.expect("feed delivers");
    assert_feed_texts(&feed, &["Buy milk"]).expect("list shows the new task");

    // The share link is the canonical public URL.
    assert_eq!(
        world.board.share_url(task.id()),
        format!("http://board.test/task/{}", task.id())
    );

    // The task passes the public-page guard and starts with no comments.
    let fetched = world
        .board
        .find(task.id())
        .await
        .expect("lookup succeeds")
        .expect("task exists");
    assert!(fetched.is_public());
    assert!(
        world
            .thread
            .find_by_task(task.id())
            .await
            .expect("lookup succeeds")
            .is_empty()
    );

    // Signed-in user B posts a comment; it lists with B's name.
    let visitor = session_for("b@x.com", "Bruno");
    let comment = world
        .thread
        .post(task.id(), &visitor, "On it")
        .await
        .expect("comment post succeeds");
    let listed = world
        .thread
        .find_by_task(task.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|c| c.author_name().as_str()), Some("Bruno"));

    // Only B's own identity passes the advisory delete check.
    assert!(comment.authored_by(&email("b@x.com")));
    assert!(!comment.authored_by(&email("a@x.com")));

    // B deletes the comment and the thread returns to empty.
    world
        .thread
        .delete(comment.id())
        .await
        .expect("delete succeeds");
    assert!(
        world
            .thread
            .find_by_task(task.id())
            .await
            .expect("lookup succeeds")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_leaves_its_comments_queryable(world: World) {
    let owner = email("a@x.com");
    let task = world
        .board
        .create(owner, "Buy milk", true)
        .await
        .expect("task creation succeeds");

    let visitor = session_for("b@x.com", "Bruno");
    world
        .thread
        .post(task.id(), &visitor, "On it")
        .await
        .expect("comment post succeeds");

    // No cascade: the task goes away, the comment stays behind.
    world.board.delete(task.id()).await.expect("delete succeeds");
    assert!(
        world
            .board
            .find(task.id())
            .await
            .expect("lookup succeeds")
            .is_none()
    );

    let orphaned = world
        .thread
        .find_by_task(task.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(orphaned.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn live_list_tracks_creation_and_deletion_per_owner(world: World) {
    let owner = email("a@x.com");
    let mut feed = world
        .board
        .watch_owned(&owner)
        .await
        .expect("subscription succeeds");

    let first = world
        .board
        .create(owner.clone(), "first", false)
        .await
        .expect("task creation succeeds");
    feed.changed().await.expect("feed delivers");

    world
        .board
        .create(owner.clone(), "second", false)
        .await
        .expect("task creation succeeds");
    feed.changed().await.expect("feed delivers");
    assert_feed_texts(&feed, &["second", "first"]).expect("newest first");

    // Another owner's task never shows up in this feed.
    world
        .board
        .create(email("b@x.com"), "not yours", false)
        .await
        .expect("task creation succeeds");
    assert_feed_texts(&feed, &["second", "first"]).expect("feed stays scoped");

    world
        .board
        .delete(first.id())
        .await
        .expect("delete succeeds");
    feed.changed().await.expect("feed delivers");
    assert_feed_texts(&feed, &["second"]).expect("deletion reflected");
}

mod repository_failures {
    //! Store failures surface as repository errors for the view to log.

    use super::{DefaultClock, email};
    use quadro::identity::domain::EmailAddress;
    use quadro::task::domain::{Task, TaskId};
    use quadro::task::ports::{TaskFeed, TaskRepositoryError, TaskRepositoryResult};
    use quadro::task::services::{TaskBoardError, TaskBoardService};
    use std::sync::Arc;

    mockall::mock! {
        TaskStore {}

        #[async_trait::async_trait]
        impl quadro::task::ports::TaskRepository for TaskStore {
            async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;
            async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
            async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
            async fn watch_owned(&self, owner: &EmailAddress) -> TaskRepositoryResult<TaskFeed>;
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_propagates_store_failures() {
        let mut store = MockTaskStore::new();
        store.expect_insert().returning(|_| {
            Err(TaskRepositoryError::persistence(std::io::Error::other(
                "store unavailable",
            )))
        });

        let service: TaskBoardService<MockTaskStore, DefaultClock> =
            TaskBoardService::new(Arc::new(store), Arc::new(DefaultClock), "http://board.test");

        let result = service.create(email("a@x.com"), "Buy milk", false).await;

        assert!(matches!(
            result,
            Err(TaskBoardError::Repository(
                TaskRepositoryError::Persistence(_)
            ))
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_does_not_reach_the_store_for_blank_text() {
        // No insert expectation: reaching the store would fail the test.
        let store = MockTaskStore::new();
        let service: TaskBoardService<MockTaskStore, DefaultClock> =
            TaskBoardService::new(Arc::new(store), Arc::new(DefaultClock), "http://board.test");

        let result = service.create(email("a@x.com"), "   ", false).await;

        assert!(matches!(result, Err(TaskBoardError::Domain(_))));
    }
}
