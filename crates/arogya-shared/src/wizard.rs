//! Generic multi-step form progression.
//!
//! A wizard owns a draft and an ordered list of steps, each gated by a
//! validity predicate over the draft. Forward navigation is a silent
//! no-op while the current step is incomplete; completion is one-way.

/// A single wizard step: a translation key for its title and the
/// predicate that must hold before the step may be left forwards.
pub struct WizardStep<D> {
    pub title_key: &'static str,
    pub is_valid: fn(&D) -> bool,
}

/// Result of a forward navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Current step predicate failed (or the wizard already completed);
    /// the step index is unchanged.
    Blocked,
    /// Moved to the next step.
    Moved,
    /// The final step was valid; the wizard is now complete.
    Completed,
}

pub struct Wizard<D> {
    steps: Vec<WizardStep<D>>,
    index: usize,
    complete: bool,
    draft: D,
}

impl<D> Wizard<D> {
    /// Panics when `steps` is empty; a wizard always has a current step.
    pub fn new(draft: D, steps: Vec<WizardStep<D>>) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self {
            steps,
            index: 0,
            complete: false,
            draft,
        }
    }

    /// Zero-based index of the active step.
    pub fn step_index(&self) -> usize {
        self.index
    }

    /// One-based step number, as shown to the user.
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &WizardStep<D> {
        &self.steps[self.index]
    }

    /// Whether the active step's predicate holds; drives the enabled
    /// state of the forward control.
    pub fn current_step_valid(&self) -> bool {
        (self.steps[self.index].is_valid)(&self.draft)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Advance past the current step if its predicate holds.
    ///
    /// Advancing past the final step completes the wizard; a completed
    /// wizard never reopens.
    pub fn advance(&mut self) -> Advance {
        if self.complete || !self.current_step_valid() {
            return Advance::Blocked;
        }
        if self.index + 1 == self.steps.len() {
            self.complete = true;
            Advance::Completed
        } else {
            self.index += 1;
            Advance::Moved
        }
    }

    /// Step back; a no-op on the first step or after completion.
    pub fn retreat(&mut self) -> bool {
        if self.complete || self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }
}
