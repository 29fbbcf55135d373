//! Behavioural tests for the phonebook service backed by the in-memory
//! repository.
use std::sync::Arc;

use phonebook::domain::ports::UserRepository;
use phonebook::domain::{OperationStatus, OperationType, User, UserId, UserOperation, UserService};
use phonebook::outbound::memory::InMemoryUserRepository;
use rstest::{fixture, rstest};

#[fixture]
fn seeded_repo() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::with_users([User::new(
        Some(UserId::new("id")),
        "name",
        "phone",
    )]))
}

fn stored_user(id: &str, name: &str, phone: &str) -> User {
    User::new(Some(UserId::new(id)), name, phone)
}

#[rstest]
#[tokio::test]
async fn walkthrough_of_every_operation(seeded_repo: Arc<InMemoryUserRepository>) {
    let service = UserService::new(seeded_repo.clone());

    let users = service.get_all_users().await.expect("list users");
    assert_eq!(users, vec![stored_user("id", "name", "phone")]);

    let added = service.post_user(stored_user("id2", "n2", "p2")).await;
    assert_eq!(
        added,
        UserOperation::new(
            Some(UserId::new("id2")),
            OperationType::Add,
            OperationStatus::Success
        )
    );

    let edited = service.edit_user(stored_user("id", "renamed", "phone")).await;
    assert!(edited.is_success());
    let renamed = seeded_repo
        .find_by_id(&UserId::new("id"))
        .await
        .expect("lookup succeeds");
    assert_eq!(renamed.map(|user| user.name), Some("renamed".to_owned()));

    let deleted = service.delete_user(stored_user("id2", "n2", "p2")).await;
    assert_eq!(deleted.operation_status, OperationStatus::Success);

    let remaining = service.get_all_users().await.expect("list users");
    assert_eq!(remaining, vec![stored_user("id", "renamed", "phone")]);
}

#[rstest]
#[tokio::test]
async fn add_without_id_is_listed_with_assigned_id(seeded_repo: Arc<InMemoryUserRepository>) {
    let service = UserService::new(seeded_repo);

    let outcome = service.post_user(User::new(None, "Ada", "555")).await;
    let assigned = outcome.user_id.clone().expect("assigned id");

    let users = service.get_all_users().await.expect("list users");
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|user| user.id() == Some(&assigned)));
}

#[rstest]
#[tokio::test]
async fn repeated_delete_reports_missing_user(seeded_repo: Arc<InMemoryUserRepository>) {
    let service = UserService::new(seeded_repo);
    let user = stored_user("id", "name", "phone");

    let first = service.delete_user(user.clone()).await;
    let second = service.delete_user(user).await;

    assert_eq!(first.operation_status, OperationStatus::Success);
    assert_eq!(second.operation_status, OperationStatus::UserDoesNotExist);
    assert_eq!(second.user_id, Some(UserId::new("id")));
}

#[rstest]
#[case(OperationType::Edit, OperationStatus::Fail)]
#[case(OperationType::Delete, OperationStatus::UserIdIsNull)]
#[tokio::test]
async fn mutations_without_id_leave_store_untouched(
    seeded_repo: Arc<InMemoryUserRepository>,
    #[case] operation: OperationType,
    #[case] expected: OperationStatus,
) {
    let service = UserService::new(seeded_repo);
    let user = User::new(None, "name", "phone");

    let outcome = match operation {
        OperationType::Edit => service.edit_user(user).await,
        _ => service.delete_user(user).await,
    };

    assert_eq!(outcome.operation_status, expected);
    assert!(outcome.user_id.is_none());
    let users = service.get_all_users().await.expect("list users");
    assert_eq!(users, vec![stored_user("id", "name", "phone")]);
}
