//! Integration tests for HttpService against a real server.
//!
//! Each test spawns an in-process axum server on 127.0.0.1:0 with an empty
//! in-memory store, then exercises the HTTP client through the full
//! request/response cycle.

use taskdeck_core::view::derive;
use taskdeck_core::{SortKey, Task};
use taskdeck_service::{HttpService, ServiceError, TaskService};

async fn spawn_server() -> String {
    let server = taskdeck_server::test_helpers::spawn_test_server().await;
    server.base_url
}

fn dated(title: &str, due: Option<&str>) -> Task {
    Task {
        due_date: due.map(String::from),
        ..Task::new(title)
    }
}

#[tokio::test]
async fn health_check_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    svc.health_check().await.unwrap();
}

#[tokio::test]
async fn health_check_fails_without_server() {
    let svc = HttpService::new("http://127.0.0.1:1/api");
    assert!(svc.health_check().await.is_err());
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let url = spawn_server().await;
    let svc = HttpService::new(&format!("{url}/"));
    assert_eq!(svc.base_url(), url);
    assert!(svc.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn task_crud_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    // Create
    let task = svc.create_task(&Task::new("My Task")).await.unwrap();
    assert_eq!(task.title, "My Task");
    let id = task.id.clone().unwrap();

    // List
    let all = svc.list_tasks().await.unwrap();
    assert_eq!(all.len(), 1);

    // Update
    let updated = svc
        .update_task(
            &id,
            &Task {
                title: "Updated".into(),
                ..task.clone()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));

    // Delete
    svc.delete_task(&id).await.unwrap();
    assert!(svc.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn created_task_lists_with_server_id_and_same_fields() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let input = Task {
        id: None,
        title: "Buy milk".into(),
        description: String::new(),
        completed: false,
        due_date: None,
    };
    svc.create_task(&input).await.unwrap();

    let all = svc.list_tasks().await.unwrap();
    assert_eq!(all.len(), 1);
    let listed = &all[0];
    assert!(listed.id.as_deref().is_some_and(|id| !id.is_empty()));
    assert_eq!(listed.title, "Buy milk");
    assert_eq!(listed.description, "");
    assert!(!listed.completed);
    assert_eq!(listed.due_date, None);
}

#[tokio::test]
async fn completing_a_task_changes_only_completed() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let created = svc
        .create_task(&Task {
            description: "two litres".into(),
            ..dated("Buy milk", Some("2024-01-01"))
        })
        .await
        .unwrap();
    let id = created.id.clone().unwrap();

    svc.update_task(
        &id,
        &Task {
            completed: true,
            ..created.clone()
        },
    )
    .await
    .unwrap();

    let refetched = svc
        .list_tasks()
        .await
        .unwrap()
        .into_iter()
        .find(|t| t.id.as_deref() == Some(id.as_str()))
        .unwrap();
    assert_eq!(
        refetched,
        Task {
            completed: true,
            ..created
        }
    );
}

#[tokio::test]
async fn due_date_sort_over_fetched_collection() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    for t in [
        dated("March", Some("2024-03-01")),
        dated("January", Some("2024-01-01")),
        dated("Whenever", None),
    ] {
        svc.create_task(&t).await.unwrap();
    }

    let tasks = svc.list_tasks().await.unwrap();
    let order: Vec<Option<&str>> = derive(&tasks, "", SortKey::DueDate)
        .into_iter()
        .map(|t| t.due_date.as_deref())
        .collect();
    assert_eq!(order, vec![None, Some("2024-01-01"), Some("2024-03-01")]);
}

#[tokio::test]
async fn search_over_fetched_collection() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    svc.create_task(&Task::new("Walk dog")).await.unwrap();
    svc.create_task(&Task::new("Buy milk")).await.unwrap();

    let tasks = svc.list_tasks().await.unwrap();
    let titles = |term: &str| -> Vec<String> {
        derive(&tasks, term, SortKey::Title)
            .into_iter()
            .map(|t| t.title.clone())
            .collect()
    };
    assert_eq!(titles("milk"), vec!["Buy milk"]);
    assert_eq!(titles(""), vec!["Buy milk", "Walk dog"]);
}

#[tokio::test]
async fn blank_title_maps_to_invalid_input() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let err = svc.create_task(&Task::new("")).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)), "{err:?}");
}

#[tokio::test]
async fn update_unknown_id_maps_to_not_found() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let err = svc
        .update_task("does-not-exist", &Task::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn delete_unknown_id_succeeds() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    svc.delete_task("does-not-exist").await.unwrap();
}

#[tokio::test]
async fn connection_failure_is_internal() {
    let svc = HttpService::new("http://127.0.0.1:1/api");
    let err = svc.list_tasks().await.unwrap_err();
    assert!(matches!(err, ServiceError::Internal(_)), "{err:?}");
}
