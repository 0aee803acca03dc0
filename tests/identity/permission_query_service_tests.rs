use std::time::Duration;

use identity_actions::identity::domain::{
    model::{
        enums::identity_domain_error::IdentityDomainError, value_objects::username::Username,
    },
    services::permission_query_service::PermissionQueryService,
};

use crate::support::{ALICE, BOB, GHOST, create_query_harness};

fn username(value: &str) -> Username {
    Username::new(value.to_string()).expect("valid username")
}

#[tokio::test]
async fn lookup_returns_stored_permissions_in_order() {
    let harness = create_query_harness(Duration::from_secs(1));
    harness.repository.set_stored(ALICE, &["write", "read"]);

    let permissions = harness
        .service
        .lookup(&username(ALICE))
        .await
        .expect("alice exists");

    assert_eq!(permissions.values(), vec!["read", "write"]);
}

#[tokio::test]
async fn lookup_of_principal_without_record_fails_with_not_found() {
    let harness = create_query_harness(Duration::from_secs(1));

    let result = harness.service.lookup(&username(GHOST)).await;

    assert_eq!(
        result,
        Err(IdentityDomainError::PrincipalNotFound(GHOST.to_string()))
    );
}

#[tokio::test]
async fn lookup_of_principal_with_empty_record_yields_empty_set() {
    let harness = create_query_harness(Duration::from_secs(1));
    harness.repository.set_stored(BOB, &[]);

    let permissions = harness
        .service
        .lookup(&username(BOB))
        .await
        .expect("bob exists");

    assert!(permissions.is_empty());
}

#[tokio::test]
async fn slow_store_fails_with_service_unavailable() {
    let harness = create_query_harness(Duration::from_millis(20));
    harness.repository.set_stored(ALICE, &["read"]);
    harness.repository.set_delay(Duration::from_millis(500));

    let result = harness.service.lookup(&username(ALICE)).await;

    assert_eq!(
        result,
        Err(IdentityDomainError::ServiceUnavailable(
            "permission lookup timed out".to_string()
        ))
    );
    assert_eq!(harness.repository.find_calls(), 1);
}

#[tokio::test]
async fn store_errors_are_surfaced_as_is() {
    let harness = create_query_harness(Duration::from_secs(1));
    harness
        .repository
        .set_failure(IdentityDomainError::InfrastructureError(
            "connection reset".to_string(),
        ));

    let result = harness.service.lookup(&username(ALICE)).await;

    assert_eq!(
        result,
        Err(IdentityDomainError::InfrastructureError(
            "connection reset".to_string()
        ))
    );
}

#[tokio::test]
async fn invalid_stored_permission_is_an_infrastructure_error() {
    let harness = create_query_harness(Duration::from_secs(1));
    harness.repository.set_stored(ALICE, &["read", "not valid"]);

    let result = harness.service.lookup(&username(ALICE)).await;

    assert!(matches!(
        result,
        Err(IdentityDomainError::InfrastructureError(message)) if message.contains("alice")
    ));
}
