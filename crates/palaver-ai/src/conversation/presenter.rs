/// Rendering collaborator notified at each transition of the cycle.
pub trait Presenter {
    /// Show a message. `is_user` is false for replies and error notices.
    fn add_message(&mut self, text: &str, is_user: bool);

    /// A request is in flight.
    fn show_pending(&mut self);

    /// The in-flight request resolved.
    fn hide_pending(&mut self);
}
