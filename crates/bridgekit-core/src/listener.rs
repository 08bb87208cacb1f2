//! Lifecycle event listeners.
//!
//! A listener is one of three closed shapes, matching the payload the host
//! delivers for its event (see [`EventName::payload_shape`]).

use std::sync::Arc;

use bridgekit_types::event::{EventName, PayloadShape};
use bridgekit_types::payload::{Activity, ActivityResultPayload, Intent};

type BasicFn = dyn Fn() + Send + Sync;
type IntentFn = dyn Fn(&Intent) + Send + Sync;
type ActivityResultFn = dyn Fn(&Activity, &ActivityResultPayload) + Send + Sync;

#[derive(Clone)]
pub enum EventListener {
    /// No payload.
    Basic(Arc<BasicFn>),
    /// One payload: the incoming intent.
    WithPayload(Arc<IntentFn>),
    /// The sending activity plus its result.
    WithSenderAndPayload(Arc<ActivityResultFn>),
}

impl EventListener {
    pub fn basic<F>(body: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::Basic(Arc::new(body))
    }

    pub fn with_payload<F>(body: F) -> Self
    where
        F: Fn(&Intent) + Send + Sync + 'static,
    {
        Self::WithPayload(Arc::new(body))
    }

    pub fn with_sender_and_payload<F>(body: F) -> Self
    where
        F: Fn(&Activity, &ActivityResultPayload) + Send + Sync + 'static,
    {
        Self::WithSenderAndPayload(Arc::new(body))
    }

    pub fn shape(&self) -> PayloadShape {
        match self {
            EventListener::Basic(_) => PayloadShape::None,
            EventListener::WithPayload(_) => PayloadShape::Payload,
            EventListener::WithSenderAndPayload(_) => PayloadShape::SenderAndPayload,
        }
    }

    /// Whether this listener can receive the payload delivered for `event`.
    pub fn accepts(&self, event: EventName) -> bool {
        self.shape() == event.payload_shape()
    }

    /// Invoke a no-payload listener. Returns `false` for other shapes.
    pub fn call(&self) -> bool {
        match self {
            EventListener::Basic(body) => {
                body();
                true
            }
            _ => false,
        }
    }

    /// Invoke a payload listener. Returns `false` for other shapes.
    pub fn call_with_payload(&self, intent: &Intent) -> bool {
        match self {
            EventListener::WithPayload(body) => {
                body(intent);
                true
            }
            _ => false,
        }
    }

    /// Invoke a sender-and-payload listener. Returns `false` for other shapes.
    pub fn call_with_sender_and_payload(
        &self,
        sender: &Activity,
        payload: &ActivityResultPayload,
    ) -> bool {
        match self {
            EventListener::WithSenderAndPayload(body) => {
                body(sender, payload);
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EventListener").field(&self.shape()).finish()
    }
}
