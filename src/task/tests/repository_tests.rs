//! In-memory store tests for positional id assignment and renumbering.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Priority, Task, TaskDetails, TaskId, Topic},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn details(title: &str) -> TaskDetails {
    TaskDetails::new(Topic::Mathematics, title, Priority::Critical).expect("valid details")
}

fn new_task(title: &str) -> NewTask {
    NewTask::new(details(title), &DefaultClock)
}

fn replacement(id: i64, title: &str) -> NewTask {
    NewTask::replacing(TaskId::new(id), details(title), &DefaultClock)
}

async fn seed(repo: &InMemoryTaskRepository, titles: &[&str]) -> Vec<Task> {
    let mut stored = Vec::new();
    for title in titles {
        stored.push(repo.create(new_task(title)).await.expect("create succeeds"));
    }
    stored
}

fn assert_dense(tasks: &[Task]) {
    for (index, task) in tasks.iter().enumerate() {
        assert_eq!(task.id(), TaskId::from_index(index), "task {index} out of place");
    }
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
#[tokio::test]
async fn list_is_empty_initially(repo: InMemoryTaskRepository) {
    let tasks = repo.list().await.expect("list succeeds");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test]
async fn create_appends_with_next_position(repo: InMemoryTaskRepository) {
    seed(&repo, &["A", "B"]).await;

    let created = repo.create(new_task("C")).await.expect("create succeeds");

    assert_eq!(created.id(), TaskId::new(2));
    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks.last(), Some(&created));
}

#[rstest]
#[tokio::test]
async fn create_with_occupied_id_replaces_in_place(repo: InMemoryTaskRepository) {
    seed(&repo, &["A", "B", "C"]).await;

    let stored = repo
        .create(replacement(1, "B2"))
        .await
        .expect("replace succeeds");

    assert_eq!(stored.id(), TaskId::new(1));
    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(titles(&tasks), vec!["A", "B2", "C"]);
    assert_eq!(tasks.get(1), Some(&stored));
    assert_dense(&tasks);
}

#[rstest]
#[tokio::test]
async fn replacement_keeps_stored_creation_time(repo: InMemoryTaskRepository) {
    let seeded = seed(&repo, &["A", "B", "C"]).await;
    let previous = seeded.get(1).expect("seeded task");

    let stored = repo
        .create(replacement(1, "B2"))
        .await
        .expect("replace succeeds");

    assert_eq!(stored.created_at(), previous.created_at());
    assert!(stored.updated_at() >= previous.updated_at());
}

#[rstest]
#[tokio::test]
async fn replacement_after_shift_keeps_creation_time_of_current_occupant(
    repo: InMemoryTaskRepository,
) {
    let seeded = seed(&repo, &["A", "B", "C"]).await;
    let occupant = seeded.get(2).expect("seeded task");
    let pending = replacement(1, "C2");

    repo.delete(TaskId::new(0)).await.expect("delete succeeds");
    let stored = repo.create(pending).await.expect("replace succeeds");

    assert_eq!(stored.id(), TaskId::new(1));
    assert_eq!(stored.created_at(), occupant.created_at());
    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(titles(&tasks), vec!["B", "C2"]);
}

#[rstest]
#[case(3)]
#[case(10)]
#[case(-1)]
#[tokio::test]
async fn create_with_unoccupied_id_appends(#[case] requested: i64) {
    let repo = InMemoryTaskRepository::new();
    seed(&repo, &["A", "B", "C"]).await;

    let stored = repo
        .create(replacement(requested, "D"))
        .await
        .expect("create succeeds");

    assert_eq!(stored.id(), TaskId::new(3));
    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(titles(&tasks), vec!["A", "B", "C", "D"]);
}

#[rstest]
#[tokio::test]
async fn get_by_position_returns_stored_task(repo: InMemoryTaskRepository) {
    let stored = seed(&repo, &["A", "B"]).await;

    let found = repo
        .get_by_position(TaskId::new(1))
        .await
        .expect("lookup succeeds");

    assert_eq!(Some(&found), stored.get(1));
}

#[rstest]
#[case(-1)]
#[case(2)]
#[case(99)]
#[tokio::test]
async fn get_by_position_rejects_out_of_range(#[case] id: i64) {
    let repo = InMemoryTaskRepository::new();
    seed(&repo, &["A", "B"]).await;

    let result = repo.get_by_position(TaskId::new(id)).await;

    let Err(TaskRepositoryError::OutOfRange { id: requested, len }) = result else {
        panic!("expected out of range error, got {result:?}");
    };
    assert_eq!(requested, TaskId::new(id));
    assert_eq!(len, 2);
}

#[rstest]
#[tokio::test]
async fn get_by_position_on_empty_store_is_out_of_range(repo: InMemoryTaskRepository) {
    let result = repo.get_by_position(TaskId::new(0)).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::OutOfRange { len: 0, .. })
    ));
}

#[rstest]
#[tokio::test]
async fn delete_renumbers_later_tasks(repo: InMemoryTaskRepository) {
    seed(&repo, &["A", "B", "C"]).await;

    let removed = repo.delete(TaskId::new(1)).await.expect("delete succeeds");

    assert_eq!(removed.title(), "B");
    assert_eq!(removed.id(), TaskId::new(1));
    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(titles(&tasks), vec!["A", "C"]);
    assert_dense(&tasks);
}

#[rstest]
#[tokio::test]
async fn delete_last_task_leaves_others_untouched(repo: InMemoryTaskRepository) {
    let stored = seed(&repo, &["A", "B"]).await;

    repo.delete(TaskId::new(1)).await.expect("delete succeeds");

    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(tasks.as_slice(), stored.get(..1).expect("one task seeded"));
}

#[rstest]
#[case(-1)]
#[case(3)]
#[tokio::test]
async fn delete_rejects_out_of_range(#[case] id: i64) {
    let repo = InMemoryTaskRepository::new();
    seed(&repo, &["A", "B", "C"]).await;

    let result = repo.delete(TaskId::new(id)).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::OutOfRange { len: 3, .. })
    ));
    assert_eq!(repo.list().await.expect("list succeeds").len(), 3);
}

#[rstest]
#[tokio::test]
async fn find_by_title_matches_substrings_in_order(repo: InMemoryTaskRepository) {
    seed(&repo, &["Task 1", "Unrelated", "Another Task"]).await;

    let found = repo.find_by_title("Task").await.expect("search succeeds");

    assert_eq!(titles(&found), vec!["Task 1", "Another Task"]);
}

#[rstest]
#[case("Nonexistent")]
#[case("task")]
#[tokio::test]
async fn find_by_title_returns_empty_without_match(#[case] needle: &str) {
    let repo = InMemoryTaskRepository::new();
    seed(&repo, &["Task 1", "Another Task"]).await;

    let found = repo.find_by_title(needle).await.expect("search succeeds");

    assert!(found.is_empty());
}

#[rstest]
#[tokio::test]
async fn ids_stay_dense_across_mixed_operations(repo: InMemoryTaskRepository) {
    seed(&repo, &["A", "B", "C", "D", "E"]).await;

    repo.delete(TaskId::new(0)).await.expect("delete succeeds");
    repo.create(replacement(2, "D2")).await.expect("replace succeeds");
    repo.delete(TaskId::new(3)).await.expect("delete succeeds");
    repo.create(new_task("F")).await.expect("create succeeds");
    repo.delete(TaskId::new(1)).await.expect("delete succeeds");

    let tasks = repo.list().await.expect("list succeeds");
    assert_eq!(titles(&tasks), vec!["B", "D2", "F"]);
    assert_dense(&tasks);
}

#[rstest]
#[tokio::test]
async fn clones_share_one_store(repo: InMemoryTaskRepository) {
    let other = repo.clone();

    other.create(new_task("A")).await.expect("create succeeds");

    assert_eq!(repo.list().await.expect("list succeeds").len(), 1);
}
