//! Dispatch of reducer notifications.

use race_core::{CompetitorId, OutgoingEvent, RaceOutcome};

use crate::logging::NOTIFICATION_TARGET;

/// Receiver of disqualification and finish notifications.
pub trait NotificationSink {
    fn notify(&mut self, competitor: CompetitorId, event: &OutgoingEvent);
}

/// Hands every competitor's notifications to `sink`, by ascending id and in
/// emission order. Returns the number dispatched.
pub fn dispatch_notifications<N>(outcome: &RaceOutcome, sink: &mut N) -> usize
where
    N: NotificationSink + ?Sized,
{
    let mut sent = 0;
    for competitor in outcome.iter() {
        for event in &competitor.outgoing {
            sink.notify(competitor.id, event);
            sent += 1;
        }
    }
    sent
}

/// Broadcasts notifications as `tracing` events on [`NOTIFICATION_TARGET`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&mut self, competitor: CompetitorId, event: &OutgoingEvent) {
        tracing::info!(
            target: NOTIFICATION_TARGET,
            competitor = %competitor,
            code = event.kind.code(),
            kind = %event.kind,
            time = %event.time,
            "outgoing event"
        );
    }
}

/// Collects notifications in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<(CompetitorId, OutgoingEvent)>,
}

impl NotificationSink for RecordingNotifier {
    fn notify(&mut self, competitor: CompetitorId, event: &OutgoingEvent) {
        self.sent.push((competitor, *event));
    }
}
