use crate::action_framework::domain::services::action_listener::ActionListener;

/// Converts a typed outcome before forwarding it to `delegate`. A response
/// conversion may itself fail, in which case the delegate sees a failure.
pub struct MappedActionListener<U, F, MR, ME> {
    delegate: Box<dyn ActionListener<U, F>>,
    map_response: MR,
    map_failure: ME,
}

impl<U, F, MR, ME> MappedActionListener<U, F, MR, ME> {
    pub fn new(delegate: Box<dyn ActionListener<U, F>>, map_response: MR, map_failure: ME) -> Self {
        Self {
            delegate,
            map_response,
            map_failure,
        }
    }
}

impl<T, E, U, F, MR, ME> ActionListener<T, E> for MappedActionListener<U, F, MR, ME>
where
    U: 'static,
    F: 'static,
    MR: FnOnce(T) -> Result<U, F> + Send + 'static,
    ME: FnOnce(E) -> F + Send + 'static,
{
    fn on_response(self: Box<Self>, response: T) {
        let Self {
            delegate,
            map_response,
            ..
        } = *self;
        delegate.complete(map_response(response));
    }

    fn on_failure(self: Box<Self>, error: E) {
        let Self {
            delegate,
            map_failure,
            ..
        } = *self;
        delegate.on_failure(map_failure(error));
    }
}
