use crate::action_framework::domain::services::action_listener::ActionListener;

/// Hands the outcome to a closure.
pub struct FnActionListener<F> {
    callback: F,
}

pub fn fn_listener<F>(callback: F) -> FnActionListener<F> {
    FnActionListener { callback }
}

impl<T, E, F> ActionListener<T, E> for FnActionListener<F>
where
    F: FnOnce(Result<T, E>) + Send + 'static,
{
    fn on_response(self: Box<Self>, response: T) {
        (self.callback)(Ok(response))
    }

    fn on_failure(self: Box<Self>, error: E) {
        (self.callback)(Err(error))
    }
}
