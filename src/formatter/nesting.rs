//! Nesting state for the DML layout engine
//!
//! Each SELECT opens a frame: the parenthesis count and field context of the
//! enclosing level are saved and reset, and restored when the parenthesis
//! that wraps the subquery closes.

/// Open-parenthesis count since the innermost SELECT
#[derive(Debug, Default)]
pub(crate) struct ParenthesisTracker {
    depth: i32,
    saved: Vec<i32>,
}

impl ParenthesisTracker {
    pub(crate) fn open(&mut self) {
        self.depth += 1;
    }

    /// Count a closing parenthesis. Returns true when it closes past the
    /// innermost SELECT frame, which the caller must then pop.
    pub(crate) fn close(&mut self) -> bool {
        self.depth -= 1;
        self.depth < 0
    }

    /// Save the current count and start a fresh frame at zero
    pub(crate) fn push(&mut self) -> &mut Self {
        self.saved.push(self.depth);
        self.depth = 0;
        self
    }

    /// Restore the enclosing frame. The parenthesis that wrapped the
    /// subquery was counted there, so the restored count drops by one.
    /// With no saved frame the count is clamped back to zero.
    pub(crate) fn pop(&mut self) -> &mut Self {
        self.depth = match self.saved.pop() {
            Some(depth) => depth - 1,
            None => 0,
        };
        self
    }

    pub(crate) fn depth(&self) -> i32 {
        self.depth
    }
}

/// Whether a top-level comma starts a new line, saved per SELECT frame
#[derive(Debug, Default)]
pub(crate) struct FieldContext {
    newline: bool,
    saved: Vec<bool>,
}

impl FieldContext {
    pub(crate) fn push(&mut self) -> &mut Self {
        self.saved.push(self.newline);
        self.newline = false;
        self
    }

    /// Restore the enclosing frame's flag; an empty stack leaves it unchanged
    pub(crate) fn pop(&mut self) -> &mut Self {
        if let Some(newline) = self.saved.pop() {
            self.newline = newline;
        }
        self
    }

    pub(crate) fn allow_newline(&mut self) -> &mut Self {
        self.newline = true;
        self
    }

    pub(crate) fn set_newline(&mut self, newline: bool) -> &mut Self {
        self.newline = newline;
        self
    }

    pub(crate) fn is_newline(&self) -> bool {
        self.newline
    }
}

/// Depth of nested function-call argument lists
#[derive(Debug, Default)]
pub(crate) struct FunctionTracker {
    depth: u32,
}

impl FunctionTracker {
    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn is_inside(&self) -> bool {
        self.depth > 0
    }

    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }
}

/// Whether an `on` join condition is still open, saved per SELECT frame
#[derive(Debug, Default)]
pub(crate) struct OnCondition {
    pending: bool,
    saved: Vec<bool>,
}

impl OnCondition {
    pub(crate) fn open(&mut self) {
        self.pending = true;
    }

    /// Close the condition. Returns true if one was open.
    pub(crate) fn close(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn is_open(&self) -> bool {
        self.pending
    }

    pub(crate) fn push(&mut self) -> &mut Self {
        self.saved.push(self.pending);
        self.pending = false;
        self
    }

    /// Restore the enclosing frame's state. Returns true if the frame being
    /// left still had an open condition.
    pub(crate) fn pop(&mut self) -> bool {
        let open = self.pending;
        self.pending = self.saved.pop().unwrap_or(false);
        open
    }
}
