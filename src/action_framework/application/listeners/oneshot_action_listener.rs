use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot;

use crate::action_framework::domain::{
    model::enums::action_execution_error::ActionExecutionError,
    services::action_listener::ActionListener,
};

pub struct OneshotActionListener<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

/// Resolves with whatever the paired [`OneshotActionListener`] delivers.
pub struct ActionFuture<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

pub fn listener_future<T, E>() -> (OneshotActionListener<T, E>, ActionFuture<T, E>) {
    let (sender, receiver) = oneshot::channel();
    (
        OneshotActionListener { sender },
        ActionFuture { receiver },
    )
}

impl<T, E> ActionListener<T, E> for OneshotActionListener<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn on_response(self: Box<Self>, response: T) {
        // A closed receiver means the caller stopped waiting.
        let _ = self.sender.send(Ok(response));
    }

    fn on_failure(self: Box<Self>, error: E) {
        let _ = self.sender.send(Err(error));
    }
}

impl<T, E> Future for ActionFuture<T, E>
where
    E: From<ActionExecutionError>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.receiver).poll(cx).map(|received| match received {
            Ok(result) => result,
            Err(_) => Err(E::from(ActionExecutionError::Aborted(
                "listener dropped before completion".to_string(),
            ))),
        })
    }
}
