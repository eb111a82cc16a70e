//! Routes authenticated callback events to the collaborator.
//!
//! Every event is handled independently and exactly once per call. There are
//! no transitions kept here and no delivery deduplication.
use std::sync::Arc;

use log::{info, warn};
use strum::Display;

use super::CallbackHandler;
use crate::{
    metrics::CALLBACKS_TOTAL,
    models::{CallbackEvent, CallbackEventType},
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DispatchOutcome {
    Handled,
    /// The collaborator returned an error. It is logged and counted, never retried.
    HandlerFailed,
    /// Unrecognized event type.
    Ignored,
}

pub struct CallbackDispatcher<H>
where
    H: CallbackHandler,
{
    handler: Arc<H>,
}

impl<H> CallbackDispatcher<H>
where
    H: CallbackHandler,
{
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    pub async fn dispatch(&self, event: &CallbackEvent) -> DispatchOutcome {
        let result = match event.event_type {
            CallbackEventType::Succeeded => Some(self.handler.on_succeeded(event).await),
            CallbackEventType::Failed => Some(self.handler.on_failed(event).await),
            CallbackEventType::Pending => Some(self.handler.on_pending(event).await),
            CallbackEventType::Unknown => None,
        };

        let outcome = match result {
            Some(Ok(())) => DispatchOutcome::Handled,
            Some(Err(e)) => {
                warn!(
                    "Handler for {} event on {} failed: {}",
                    event.event_type, event.subject_id, e
                );
                DispatchOutcome::HandlerFailed
            }
            None => {
                info!("Ignoring unrecognized callback event type {}", event.raw_type);
                DispatchOutcome::Ignored
            }
        };

        CALLBACKS_TOTAL
            .with_label_values(&[&event.event_type.to_string(), &outcome.to_string()])
            .inc();

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CallbackHandlerError, MockCallbackHandler};

    fn event(event_type: &str, id: &str) -> CallbackEvent {
        let payload = format!(r#"{{"type":"{}","data":{{"id":"{}"}}}}"#, event_type, id);
        CallbackEvent::from_payload(payload.as_bytes()).unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_succeeded() {
        let mut handler = MockCallbackHandler::new();
        handler
            .expect_on_succeeded()
            .withf(|event| event.subject_id == "T")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        handler.expect_on_failed().never();
        handler.expect_on_pending().never();
        let dispatcher = CallbackDispatcher::new(Arc::new(handler));

        let outcome = dispatcher
            .dispatch(&event("transaction_intent.succeeded", "T"))
            .await;

        assert_eq!(outcome, DispatchOutcome::Handled);
    }

    #[tokio::test]
    async fn test_dispatch_failed_carries_error() {
        let mut handler = MockCallbackHandler::new();
        handler
            .expect_on_failed()
            .withf(|event| event.subject_id == "T" && event.error.as_deref() == Some("reverted"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        handler.expect_on_succeeded().never();
        let dispatcher = CallbackDispatcher::new(Arc::new(handler));
        let event = CallbackEvent::from_payload(
            br#"{"type":"transaction_intent.failed","data":{"id":"T","error":"reverted"}}"#,
        )
        .unwrap();

        assert_eq!(dispatcher.dispatch(&event).await, DispatchOutcome::Handled);
    }

    #[tokio::test]
    async fn test_dispatch_pending() {
        let mut handler = MockCallbackHandler::new();
        handler
            .expect_on_pending()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let dispatcher = CallbackDispatcher::new(Arc::new(handler));

        let outcome = dispatcher
            .dispatch(&event("transaction_intent.pending", "T"))
            .await;

        assert_eq!(outcome, DispatchOutcome::Handled);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_is_noop() {
        let mut handler = MockCallbackHandler::new();
        handler.expect_on_succeeded().never();
        handler.expect_on_failed().never();
        handler.expect_on_pending().never();
        let dispatcher = CallbackDispatcher::new(Arc::new(handler));

        let outcome = dispatcher.dispatch(&event("account.created", "acc_1")).await;

        assert_eq!(outcome, DispatchOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_handler_failure_is_not_retried() {
        let mut handler = MockCallbackHandler::new();
        handler.expect_on_succeeded().times(1).returning(|_| {
            Box::pin(async { Err(CallbackHandlerError::Collaborator("db down".to_string())) })
        });
        let dispatcher = CallbackDispatcher::new(Arc::new(handler));

        let outcome = dispatcher
            .dispatch(&event("transaction_intent.succeeded", "T"))
            .await;

        assert_eq!(outcome, DispatchOutcome::HandlerFailed);
    }

    #[tokio::test]
    async fn test_redelivery_is_dispatched_again() {
        let mut handler = MockCallbackHandler::new();
        handler
            .expect_on_succeeded()
            .times(2)
            .returning(|_| Box::pin(async { Ok(()) }));
        let dispatcher = CallbackDispatcher::new(Arc::new(handler));
        let delivery = event("transaction_intent.succeeded", "T");

        dispatcher.dispatch(&delivery).await;
        dispatcher.dispatch(&delivery).await;
    }

    #[tokio::test]
    async fn test_logging_handler_accepts_every_type() {
        let dispatcher = CallbackDispatcher::new(Arc::new(crate::domain::LoggingCallbackHandler));

        for event_type in [
            "transaction_intent.succeeded",
            "transaction_intent.failed",
            "transaction_intent.pending",
        ] {
            assert_eq!(
                dispatcher.dispatch(&event(event_type, "T")).await,
                DispatchOutcome::Handled
            );
        }
    }
}
