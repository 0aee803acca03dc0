use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    time::Duration,
};

use identity_actions::action_framework::{
    application::{
        dispatch::transport_action_executor::TransportActionExecutor,
        listeners::{
            fn_action_listener::fn_listener, oneshot_action_listener::listener_future,
        },
    },
    domain::{
        model::enums::{
            action_dispatch_error::ActionDispatchError,
            action_execution_error::ActionExecutionError,
        },
        services::action_filter::ActionFilter,
    },
};

use crate::support::{
    BadlyNamedHandler, EchoError, EchoResponse, Outcome, RecordingListener, RejectingFilter,
    create_executor_harness, echo_request,
};

#[tokio::test]
async fn execute_delivers_response_to_listener() {
    let harness = create_executor_harness(Vec::new());

    let (listener, response) = listener_future();
    harness.executor.execute(echo_request("alice"), listener);

    let response = response.await.expect("response expected");
    assert_eq!(
        response,
        EchoResponse {
            message: "alice".to_string()
        }
    );
    assert_eq!(harness.calls(), 1);
}

#[tokio::test]
async fn execute_rejects_invalid_request_without_invoking_handler() {
    let harness = create_executor_harness(Vec::new());
    let (listener, outcomes) = RecordingListener::<EchoResponse, EchoError>::new();

    harness.executor.execute(echo_request("   "), listener);

    // Validation happens before anything is spawned.
    let outcomes = outcomes.lock().expect("mutex poisoned").clone();
    assert_eq!(
        outcomes,
        vec![Outcome::Failure(EchoError::Execution(
            ActionExecutionError::InvalidRequest("message is empty".to_string())
        ))]
    );
    tokio::task::yield_now().await;
    assert_eq!(harness.calls(), 0);
}

#[tokio::test]
async fn execute_surfaces_handler_error_unmodified() {
    let harness = create_executor_harness(Vec::new());

    let (listener, response) = listener_future::<EchoResponse, EchoError>();
    harness.executor.execute(echo_request("fail:store offline"), listener);

    let error = response.await.expect_err("failure expected");
    assert_eq!(error, EchoError::Failed("store offline".to_string()));
}

#[tokio::test]
async fn execute_converts_handler_panic_into_aborted_failure() {
    let harness = create_executor_harness(Vec::new());

    let (listener, response) = listener_future::<EchoResponse, EchoError>();
    harness.executor.execute(echo_request("panic"), listener);

    let error = response.await.expect_err("failure expected");
    assert!(matches!(
        error,
        EchoError::Execution(ActionExecutionError::Aborted(_))
    ));
}

#[tokio::test]
async fn execute_returns_before_handler_completes() {
    let harness = create_executor_harness(Vec::new());
    let (listener, outcomes) = RecordingListener::<EchoResponse, EchoError>::new();

    harness.executor.execute(echo_request("slow:bob"), listener);
    assert!(outcomes.lock().expect("mutex poisoned").is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;

    let outcomes = outcomes.lock().expect("mutex poisoned").clone();
    assert_eq!(
        outcomes,
        vec![Outcome::Response(EchoResponse {
            message: "bob".to_string()
        })]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_executions_receive_their_own_results() {
    let harness = create_executor_harness(Vec::new());

    let mut pending = Vec::new();
    for index in 0..32 {
        let username = format!("user-{index}");
        let (listener, response) = listener_future::<EchoResponse, EchoError>();
        harness
            .executor
            .execute(echo_request(&format!("slow:{username}")), listener);
        pending.push((username, response));
    }

    for (username, response) in pending {
        let response = response.await.expect("response expected");
        assert_eq!(response.message, username);
    }
    assert_eq!(harness.calls(), 32);
}

#[tokio::test]
async fn identical_requests_complete_independently() {
    let harness = create_executor_harness(Vec::new());
    let (first_listener, first_outcomes) = RecordingListener::<EchoResponse, EchoError>::new();
    let (second_listener, second_outcomes) = RecordingListener::<EchoResponse, EchoError>::new();

    let first_task = harness.executor.execute(echo_request("alice"), first_listener);
    let second_task = harness.executor.execute(echo_request("alice"), second_listener);

    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_ne!(first_task, second_task);
    assert_eq!(first_outcomes.lock().expect("mutex poisoned").len(), 1);
    assert_eq!(second_outcomes.lock().expect("mutex poisoned").len(), 1);
    assert_eq!(harness.calls(), 2);
}

#[tokio::test]
async fn rejecting_filter_short_circuits_handler() {
    let filter = Arc::new(RejectingFilter::new("maintenance"));
    let harness = create_executor_harness(vec![filter.clone() as Arc<dyn ActionFilter>]);

    let (listener, response) = listener_future::<EchoResponse, EchoError>();
    harness.executor.execute(echo_request("alice"), listener);

    let error = response.await.expect_err("failure expected");
    assert_eq!(
        error,
        EchoError::Execution(ActionExecutionError::Rejected("maintenance".to_string()))
    );
    assert_eq!(filter.calls(), 1);
    assert_eq!(harness.calls(), 0);
}

#[tokio::test]
async fn task_ids_are_unique_per_call() {
    let harness = create_executor_harness(Vec::new());

    let mut task_ids = HashSet::new();
    for _ in 0..20 {
        let (listener, _response) = listener_future::<EchoResponse, EchoError>();
        task_ids.insert(harness.executor.execute(echo_request("alice"), listener));
    }

    assert_eq!(task_ids.len(), 20);
}

#[test]
fn execute_outside_runtime_fails_listener_instead_of_panicking() {
    let harness = create_executor_harness(Vec::new());
    let (listener, outcomes) = RecordingListener::<EchoResponse, EchoError>::new();

    harness.executor.execute(echo_request("alice"), listener);

    let outcomes = outcomes.lock().expect("mutex poisoned").clone();
    assert_eq!(outcomes.len(), 1);
    assert!(matches!(
        outcomes[0],
        Outcome::Failure(EchoError::Execution(ActionExecutionError::Aborted(_)))
    ));
    assert_eq!(harness.calls(), 0);
}

#[test]
fn executor_rejects_invalid_action_name() {
    let result = TransportActionExecutor::new(BadlyNamedHandler, Vec::new());

    assert!(matches!(
        result,
        Err(ActionDispatchError::InvalidActionName(name)) if name == "Not A Valid Name"
    ));
}

#[test]
fn runtime_shutdown_fails_in_flight_listener_with_aborted() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime builds");
    let harness = create_executor_harness(Vec::new());
    let outcomes: Arc<Mutex<Vec<Result<EchoResponse, EchoError>>>> = Arc::default();

    let recorded = outcomes.clone();
    runtime.block_on(async {
        harness.executor.execute(
            echo_request("slow:never delivered"),
            fn_listener(move |outcome| recorded.lock().expect("mutex poisoned").push(outcome)),
        );
        tokio::task::yield_now().await;
    });
    drop(runtime);

    assert_eq!(
        *outcomes.lock().expect("mutex poisoned"),
        vec![Err(EchoError::Execution(ActionExecutionError::Aborted(
            "action task dropped before completion".to_string()
        )))]
    );
}
