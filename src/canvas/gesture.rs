#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Capturing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Begin,
    Move,
    End,
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    moves_in_gesture: usize,
}

impl GestureTracker {
    pub const fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
            moves_in_gesture: 0,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub const fn next_phase(phase: GesturePhase, event: GestureEvent) -> GesturePhase {
        match (phase, event) {
            (_, GestureEvent::Begin) | (_, GestureEvent::Move) => GesturePhase::Capturing,
            (_, GestureEvent::End) => GesturePhase::Idle,
        }
    }

    pub fn apply(&mut self, event: GestureEvent) -> GesturePhase {
        let from = self.phase;
        let next = Self::next_phase(from, event);
        match (from, event) {
            (_, GestureEvent::Begin) => self.moves_in_gesture = 0,
            (GesturePhase::Idle, GestureEvent::Move) => {
                tracing::debug!("move without gesture start; capturing implicitly");
                self.moves_in_gesture = 1;
            }
            (GesturePhase::Capturing, GestureEvent::Move) => {
                self.moves_in_gesture = self.moves_in_gesture.saturating_add(1);
            }
            (GesturePhase::Capturing, GestureEvent::End) => {
                tracing::debug!(moves = self.moves_in_gesture, "gesture ended");
            }
            (GesturePhase::Idle, GestureEvent::End) => {}
        }
        self.phase = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_move_end_cycles_back_to_idle() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.apply(GestureEvent::Begin), GesturePhase::Capturing);
        assert_eq!(tracker.apply(GestureEvent::Move), GesturePhase::Capturing);
        assert_eq!(tracker.apply(GestureEvent::Move), GesturePhase::Capturing);
        assert_eq!(tracker.moves_in_gesture, 2);
        assert_eq!(tracker.apply(GestureEvent::End), GesturePhase::Idle);
    }

    #[test]
    fn move_while_idle_starts_capturing() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.apply(GestureEvent::Move), GesturePhase::Capturing);
        assert_eq!(tracker.moves_in_gesture, 1);
    }

    #[test]
    fn end_while_idle_stays_idle() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.apply(GestureEvent::End), GesturePhase::Idle);
        assert_eq!(tracker.moves_in_gesture, 0);
    }

    #[test]
    fn begin_resets_move_count() {
        let mut tracker = GestureTracker::new();
        tracker.apply(GestureEvent::Begin);
        tracker.apply(GestureEvent::Move);
        tracker.apply(GestureEvent::End);
        tracker.apply(GestureEvent::Begin);
        assert_eq!(tracker.moves_in_gesture, 0);
    }
}
