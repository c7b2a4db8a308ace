//! Multi-field search semantics against an in-process store
//! Run: cargo test -p employee-server --test search_semantics

use employee_server::db::repository::EmployeeRepository;
use employee_server::{AppState, Config};
use shared::models::Employee;
use shared::types::SearchMode;

fn mem_config() -> Config {
    Config {
        http_port: 0,
        database_url: "mem://".into(),
        database_ns: "test".into(),
        database_db: "test".into(),
        database_user: None,
        database_pass: None,
        search_mode: SearchMode::Union,
        environment: "test".into(),
    }
}

/// Fresh store seeded with Ada (id 1) and Bob (id 2), both engineers
async fn seeded_repo() -> EmployeeRepository {
    let state = AppState::initialize(&mem_config()).await.unwrap();
    let repo = EmployeeRepository::new(state.db.clone());
    repo.create(Employee {
        id: 1,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "plain-ada".into(),
        phone_no: 5_551_001,
        role: "Engineer".into(),
        salary: 1200.5,
    })
    .await
    .unwrap();
    repo.create(Employee {
        id: 2,
        first_name: "Bob".into(),
        last_name: "Babbage".into(),
        email: "bob@example.com".into(),
        password: "plain-bob".into(),
        phone_no: 5_551_002,
        role: "Engineer".into(),
        salary: 1100.0,
    })
    .await
    .unwrap();
    repo
}

fn filters(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn union_concatenates_per_filter_matches() {
    let repo = seeded_repo().await;

    let found = repo
        .search(
            &filters(&[("role", "Engineer"), ("firstName", "Ada")]),
            SearchMode::Union,
        )
        .await
        .unwrap();

    // Ada matches both filters and appears twice, Bob once
    assert_eq!(found.len(), 3);
    assert_eq!(found.iter().filter(|e| e.id == 1).count(), 2);
    assert_eq!(found.iter().filter(|e| e.id == 2).count(), 1);
}

#[tokio::test]
async fn intersect_returns_conjunctive_matches_once() {
    let repo = seeded_repo().await;

    let found = repo
        .search(
            &filters(&[("role", "Engineer"), ("firstName", "Ada")]),
            SearchMode::Intersect,
        )
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[tokio::test]
async fn unknown_field_matches_nothing() {
    let repo = seeded_repo().await;

    let union = repo
        .search(&filters(&[("nickname", "Countess")]), SearchMode::Union)
        .await
        .unwrap();
    assert!(union.is_empty());

    // In intersect mode an impossible conjunct empties the whole result
    let intersect = repo
        .search(
            &filters(&[("role", "Engineer"), ("nickname", "Countess")]),
            SearchMode::Intersect,
        )
        .await
        .unwrap();
    assert!(intersect.is_empty());
}

#[tokio::test]
async fn mistyped_numeric_operand_matches_nothing() {
    let repo = seeded_repo().await;

    let found = repo
        .search(&filters(&[("id", "abc")]), SearchMode::Union)
        .await
        .unwrap();
    assert!(found.is_empty());

    let found = repo
        .search(&filters(&[("id", "1")]), SearchMode::Union)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Ada");
}

#[tokio::test]
async fn numeric_columns_filter_by_typed_value() {
    let repo = seeded_repo().await;

    let by_salary = repo
        .search(&filters(&[("salary", "1200.5")]), SearchMode::Union)
        .await
        .unwrap();
    assert_eq!(by_salary.len(), 1);
    assert_eq!(by_salary[0].id, 1);

    let by_phone = repo
        .search(&filters(&[("phoneNo", "5551002")]), SearchMode::Union)
        .await
        .unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].id, 2);
}

#[tokio::test]
async fn empty_filter_list_matches_nothing() {
    let repo = seeded_repo().await;

    let union = repo.search(&[], SearchMode::Union).await.unwrap();
    assert!(union.is_empty());

    let intersect = repo.search(&[], SearchMode::Intersect).await.unwrap();
    assert!(intersect.is_empty());
}
