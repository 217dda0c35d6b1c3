//! The stack of active frames.

use crate::error::VmError;
use crate::frame::Frame;

/// Frames in call order; the last one is executing.
#[derive(Debug)]
pub struct CallStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Push a frame. Fails once the stack already holds `max_depth` frames.
    pub fn push(&mut self, frame: Frame) -> Result<(), VmError> {
        if self.frames.len() >= self.max_depth {
            return Err(VmError::CallStackOverflow {
                max: self.max_depth,
            });
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// The executing frame.
    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// The frame below the executing one.
    pub fn caller_mut(&mut self) -> Option<&mut Frame> {
        let len = self.frames.len();
        if len < 2 {
            return None;
        }
        self.frames.get_mut(len - 2)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Remove every frame, returning them bottom first.
    pub fn drain(&mut self) -> impl Iterator<Item = Frame> + '_ {
        self.frames.drain(..)
    }

    /// Frames from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}
