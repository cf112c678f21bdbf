//! Call responses for the Alert Notification client.
//!
//! The UI never talks to the BLE stack directly. Answering, hanging up or
//! muting a call queues a one-byte event that the BLE task sends to the phone
//! the next time it runs. The queue is bounded and never blocks the UI: when
//! it is full the oldest pending response is dropped.

use heapless::Deque;
use platform::CallControl;

/// Depth of the pending-response queue.
pub const OUTBOX_DEPTH: usize = 4;

/// Event sent to the phone in reply to an incoming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CallResponse {
    /// Hang up (event 0x00).
    HangUp = 0x00,
    /// Answer (event 0x01).
    Answer = 0x01,
    /// Silence the ringer (event 0x02).
    Mute = 0x02,
}

impl CallResponse {
    /// Event byte written to the phone.
    #[must_use]
    pub const fn event_code(self) -> u8 {
        self as u8
    }
}

/// [`CallControl`] implementation backed by a bounded outbox.
pub struct AlertNotificationClient {
    outbox: Deque<CallResponse, OUTBOX_DEPTH>,
}

impl AlertNotificationClient {
    /// Create a client with an empty outbox.
    pub const fn new() -> Self {
        Self {
            outbox: Deque::new(),
        }
    }

    /// Take the oldest response waiting to be sent.
    pub fn take_pending(&mut self) -> Option<CallResponse> {
        self.outbox.pop_front()
    }

    /// Number of responses waiting to be sent.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.outbox.len()
    }

    fn enqueue(&mut self, response: CallResponse) {
        if self.outbox.is_full() {
            let _dropped = self.outbox.pop_front();
            #[cfg(feature = "defmt")]
            defmt::warn!("call outbox full, dropped {}", _dropped);
        }
        // Cannot fail: a slot was freed above when the queue was full.
        self.outbox.push_back(response).ok();
    }
}

impl Default for AlertNotificationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CallControl for AlertNotificationClient {
    fn accept_incoming_call(&mut self) {
        self.enqueue(CallResponse::Answer);
    }

    fn reject_incoming_call(&mut self) {
        self.enqueue(CallResponse::HangUp);
    }

    fn mute_incoming_call(&mut self) {
        self.enqueue(CallResponse::Mute);
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertNotificationClient, CallResponse, OUTBOX_DEPTH};
    use platform::CallControl;

    #[test]
    fn test_event_codes() {
        assert_eq!(CallResponse::HangUp.event_code(), 0x00);
        assert_eq!(CallResponse::Answer.event_code(), 0x01);
        assert_eq!(CallResponse::Mute.event_code(), 0x02);
    }

    #[test]
    fn test_responses_drain_in_order() {
        let mut client = AlertNotificationClient::new();
        client.mute_incoming_call();
        client.accept_incoming_call();
        assert_eq!(client.take_pending(), Some(CallResponse::Mute));
        assert_eq!(client.take_pending(), Some(CallResponse::Answer));
        assert_eq!(client.take_pending(), None);
    }

    #[test]
    fn test_full_outbox_drops_oldest() {
        let mut client = AlertNotificationClient::new();
        client.reject_incoming_call();
        for _ in 0..OUTBOX_DEPTH {
            client.mute_incoming_call();
        }
        assert_eq!(client.pending(), OUTBOX_DEPTH);
        // The initial HangUp was evicted.
        assert_eq!(client.take_pending(), Some(CallResponse::Mute));
    }
}
