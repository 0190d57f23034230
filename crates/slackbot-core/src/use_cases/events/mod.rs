pub(crate) mod handle_event_callback;

pub use handle_event_callback::HandleEventCallbackInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::handle_event_callback::MockHandleEventCallbackInterface;
