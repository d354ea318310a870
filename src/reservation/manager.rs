use crate::reservation::models::{NewReservation, Reservation, Status};
use tracing::{debug, info};

/// Full copy of the queue and the served history at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueState {
    pub queue: Vec<Reservation>,
    pub history: Vec<Reservation>,
}

/// Owns the waiting queue, the served history and the undo/redo stacks.
///
/// Every forward mutation pushes the pre-mutation snapshot onto the undo stack
/// and clears the redo stack. Both stacks keep their top at the end of the Vec.
#[derive(Debug, Default)]
pub struct QueueHistoryManager {
    queue: Vec<Reservation>,
    history: Vec<Reservation>,
    undo_stack: Vec<QueueState>,
    redo_stack: Vec<QueueState>,
}

impl QueueHistoryManager {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            history: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn queue(&self) -> &[Reservation] {
        &self.queue
    }

    /// Served reservations, most recent first.
    pub fn history(&self) -> &[Reservation] {
        &self.history
    }

    pub fn undo_stack(&self) -> &[QueueState] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[QueueState] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn add_reservation(&mut self, input: NewReservation) {
        self.save_state();
        let reservation = Reservation::waiting(input);
        debug!(name = %reservation.name, position = self.queue.len(), "reservation queued");
        self.queue.push(reservation);
    }

    /// Serves the oldest waiting reservation. Does nothing on an empty queue.
    pub fn call_next(&mut self) -> Option<&Reservation> {
        if self.queue.is_empty() {
            debug!("call next ignored, queue is empty");
            return None;
        }

        self.save_state();
        let called = self.queue.remove(0).with_status(Status::Called);
        let served = called.with_status(Status::Done);
        debug!(name = %served.name, waiting = self.queue.len(), "reservation served");
        self.history.insert(0, served);
        self.history.first()
    }

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            debug!("undo ignored, undo stack is empty");
            return false;
        };

        let current = self.snapshot();
        self.redo_stack.push(current);
        self.restore(previous);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "undo applied");
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            debug!("redo ignored, redo stack is empty");
            return false;
        };

        let current = self.snapshot();
        self.undo_stack.push(current);
        self.restore(next);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "redo applied");
        true
    }

    /// Empties everything. Not undoable.
    pub fn clear_history(&mut self) {
        self.queue.clear();
        self.history.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        info!("queue, history and undo/redo stacks cleared");
    }

    fn snapshot(&self) -> QueueState {
        QueueState {
            queue: self.queue.clone(),
            history: self.history.clone(),
        }
    }

    fn save_state(&mut self) {
        let state = self.snapshot();
        self.undo_stack.push(state);
        self.redo_stack.clear();
    }

    fn restore(&mut self, state: QueueState) {
        self.queue = state.queue;
        self.history = state.history;
    }
}
