//! Request validation, in the order the backend applies it.

use fakelambda::prelude::*;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

mod common;
use common::{CountingHandler, reverse_fake};

#[tokio::test]
async fn test_no_input() {
    let err = reverse_fake().invoke(None).await.unwrap_err();
    assert!(matches!(err, InvokeError::NoInput));
    assert_eq!(err.to_string(), "no input");
}

#[tokio::test]
async fn test_no_input_with_context() {
    let err = reverse_fake()
        .invoke_with_context(Context::background(), None, InvokeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, InvokeError::NoInput));
}

#[tokio::test]
async fn test_no_function_name() {
    let input = InvokeInput {
        payload: Some(Bytes::from_static(b"abc")),
        invocation_type: Some(InvocationType::Event),
        ..Default::default()
    };
    let err = reverse_fake().invoke(Some(input)).await.unwrap_err();
    assert!(matches!(err, InvokeError::NoFunctionName));
    assert_eq!(err.to_string(), "no function name");
}

#[tokio::test]
async fn test_unknown_function_names_it() {
    let err = reverse_fake()
        .invoke(Some(InvokeInput::new("g")))
        .await
        .unwrap_err();
    assert!(matches!(err, InvokeError::FunctionNotFound(ref name) if name == "g"));
    assert_eq!(err.to_string(), "not found function: g");
}

#[tokio::test]
async fn test_unknown_event_function_is_rejected() {
    let err = reverse_fake()
        .invoke(Some(InvokeInput::new("g").invocation_type("Event")))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains('g'));
}

#[tokio::test]
async fn test_names_are_exact() {
    let fake = reverse_fake();
    for name in ["F", " f", "f ", ""] {
        let err = fake.invoke(Some(InvokeInput::new(name))).await.unwrap_err();
        assert!(matches!(err, InvokeError::FunctionNotFound(_)), "{name:?}");
    }
}

#[tokio::test]
async fn test_validation_runs_before_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let fake = Fake::new([with_function(
        "counted",
        CountingHandler {
            calls: calls.clone(),
            reply: "ok",
        },
    )]);

    fake.invoke(None).await.unwrap_err();
    fake.invoke(Some(InvokeInput::default())).await.unwrap_err();
    fake.invoke(Some(InvokeInput::new("other"))).await.unwrap_err();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    fake.invoke(Some(InvokeInput::new("counted"))).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
