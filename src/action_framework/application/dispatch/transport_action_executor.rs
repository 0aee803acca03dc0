use std::sync::Arc;

use chrono::Utc;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::action_framework::{
    application::listeners::guarded_action_listener::GuardedActionListener,
    domain::{
        model::{
            entities::action_task::ActionTask,
            enums::{
                action_dispatch_error::ActionDispatchError,
                action_execution_error::ActionExecutionError,
            },
            value_objects::action_name::ActionName,
        },
        services::{
            action_filter::ActionFilter,
            action_listener::ActionListener,
            transport_action_handler::{ActionRequest, TransportActionHandler},
        },
    },
};

/// Runs one [`TransportActionHandler`] per call: validates the request, applies
/// the filter chain, awaits the handler on the runtime and completes the
/// listener exactly once. Holds no per-call state, so a single executor can be
/// shared by any number of concurrent callers.
pub struct TransportActionExecutor<H> {
    action_name: ActionName,
    handler: Arc<H>,
    filters: Arc<Vec<Arc<dyn ActionFilter>>>,
}

impl<H> TransportActionExecutor<H>
where
    H: TransportActionHandler,
{
    pub fn new(handler: H, filters: Vec<Arc<dyn ActionFilter>>) -> Result<Self, ActionDispatchError> {
        Ok(Self {
            action_name: ActionName::new(H::NAME.to_string())?,
            handler: Arc::new(handler),
            filters: Arc::new(filters),
        })
    }

    pub fn action_name(&self) -> &ActionName {
        &self.action_name
    }

    /// Starts the action and returns its task id without waiting for the
    /// handler. Never panics and never reports an error other than through
    /// `listener`.
    pub fn execute<L>(&self, request: H::Request, listener: L) -> Uuid
    where
        L: ActionListener<H::Response, H::Error>,
    {
        let mut task = ActionTask::new(self.action_name.clone());
        let task_id = task.id();
        let listener: GuardedActionListener<H::Response, H::Error> =
            GuardedActionListener::new(Box::new(listener));

        tracing::debug!(task_id = %task_id, action = %self.action_name, "action task created");

        if let Err(error) = request.validate_request() {
            tracing::warn!(
                task_id = %task_id,
                action = %self.action_name,
                %error,
                "request rejected before dispatch"
            );
            close_task(&mut task);
            listener.complete(Err(H::Error::from(error)));
            return task_id;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(error) => {
                close_task(&mut task);
                listener.complete(Err(H::Error::from(ActionExecutionError::Aborted(
                    error.to_string(),
                ))));
                return task_id;
            }
        };

        let handler = Arc::clone(&self.handler);
        let filters = Arc::clone(&self.filters);

        runtime.spawn(async move {
            let result = Self::run(handler, filters, &mut task, request).await;
            close_task(&mut task);
            let elapsed_ms = (Utc::now() - task.started_at()).num_milliseconds();

            match &result {
                Ok(_) => tracing::info!(
                    task_id = %task.id(),
                    action = %task.action_name(),
                    elapsed_ms,
                    "action completed"
                ),
                Err(error) => tracing::warn!(
                    task_id = %task.id(),
                    action = %task.action_name(),
                    elapsed_ms,
                    %error,
                    "action failed"
                ),
            }
            listener.complete(result);
        });

        task_id
    }

    async fn run(
        handler: Arc<H>,
        filters: Arc<Vec<Arc<dyn ActionFilter>>>,
        task: &mut ActionTask,
        request: H::Request,
    ) -> Result<H::Response, H::Error> {
        for filter in filters.iter() {
            filter.apply(task).await?;
        }

        task.mark_awaiting_service()?;

        // Separate task so a panicking handler still completes the listener.
        let snapshot = task.clone();
        match tokio::spawn(async move { handler.do_execute(&snapshot, request).await }).await {
            Ok(result) => result,
            Err(join_error) if join_error.is_panic() => Err(H::Error::from(
                ActionExecutionError::Aborted("action handler panicked".to_string()),
            )),
            Err(join_error) => Err(H::Error::from(ActionExecutionError::Aborted(
                join_error.to_string(),
            ))),
        }
    }
}

fn close_task(task: &mut ActionTask) {
    if let Err(error) = task.mark_completed() {
        tracing::warn!(
            task_id = %task.id(),
            action = %task.action_name(),
            %error,
            "action task could not be closed"
        );
    }
}
