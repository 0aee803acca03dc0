/// Receives the single outcome of an asynchronous action.
///
/// Both callbacks consume the listener, so it is completed at most once by
/// construction. Implementations must be `Send`: completion usually happens on
/// a different worker than the one that called `execute`.
pub trait ActionListener<T, E>: Send + 'static {
    fn on_response(self: Box<Self>, response: T);

    fn on_failure(self: Box<Self>, error: E);

    fn complete(self: Box<Self>, result: Result<T, E>) {
        match result {
            Ok(response) => self.on_response(response),
            Err(error) => self.on_failure(error),
        }
    }
}
