//! Verlauf der ausgeführten Commands für Diagnose und Flow-Tests.

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Über `CAPACITY` hinaus verdrängt jeder neue Eintrag den ältesten.
/// `total` zählt alle jemals aufgezeichneten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    recent: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    const CAPACITY: usize = 256;

    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen ausgeführten Command auf.
    pub fn record(&mut self, command: &AppCommand) {
        if self.recent.len() == Self::CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl der noch gehaltenen Commands.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Anzahl aller seit dem Start aufgezeichneten Commands.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.recent.back()
    }

    /// Die letzten `count` Commands in Ausführungsreihenfolge (ältester zuerst).
    pub fn tail(&self, count: usize) -> impl Iterator<Item = &AppCommand> {
        self.recent.iter().skip(self.recent.len().saturating_sub(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SurfaceSide, SyncPolicy};

    #[test]
    fn test_oldest_command_is_evicted_at_capacity() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::DeactivateDualViewport);
        for _ in 1..CommandLog::CAPACITY {
            log.record(&AppCommand::RequestExit);
        }
        assert!(matches!(
            log.tail(CommandLog::CAPACITY).next(),
            Some(AppCommand::DeactivateDualViewport)
        ));

        log.record(&AppCommand::RequestExit);

        assert_eq!(log.len(), CommandLog::CAPACITY);
        assert_eq!(log.total(), CommandLog::CAPACITY + 1);
        assert!(log
            .tail(CommandLog::CAPACITY)
            .all(|command| matches!(command, AppCommand::RequestExit)));
    }

    #[test]
    fn test_tail_keeps_execution_order() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::SetActiveSurface {
            side: SurfaceSide::Primary,
        });
        log.record(&AppCommand::ChangeSyncPolicy {
            policy: SyncPolicy::Mirrored,
        });
        log.record(&AppCommand::DeactivateDualViewport);

        let tail: Vec<&AppCommand> = log.tail(2).collect();

        assert_eq!(tail.len(), 2);
        assert!(matches!(tail[0], AppCommand::ChangeSyncPolicy { .. }));
        assert!(matches!(tail[1], AppCommand::DeactivateDualViewport));
        assert!(matches!(log.last(), Some(AppCommand::DeactivateDualViewport)));
    }

    #[test]
    fn test_tail_longer_than_log_returns_everything() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());
        assert_eq!(log.tail(5).count(), 0);

        log.record(&AppCommand::RequestExit);

        assert_eq!(log.tail(5).count(), 1);
        assert!(!log.is_empty());
    }
}
