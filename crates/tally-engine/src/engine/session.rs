//! Circular reference detection for a single read.
//!
//! A [`Session`] lives for exactly one top-level read. Each cell reference is
//! marked in-progress while its value is being resolved and resolved once it
//! has a value. Meeting an in-progress cell again means the reference chain
//! loops back on itself (e.g., A1 references B1, B1 references A1).

use std::collections::HashMap;

use crate::error::{EvalError, Result};

/// Resolution state of a cell within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Resolved,
}

/// Cycle-tracking context shared by all nested resolutions of one read.
#[derive(Debug)]
pub struct Session {
    status: HashMap<String, Status>,
    path: Vec<String>,
    groups: usize,
    max_depth: usize,
}

impl Session {
    pub fn new(max_depth: usize) -> Session {
        Session {
            status: HashMap::new(),
            path: Vec::new(),
            groups: 0,
            max_depth,
        }
    }

    /// Start resolving `id`.
    ///
    /// Fails with [`EvalError::Circular`] when `id` is already in progress and
    /// with [`EvalError::DepthExceeded`] when the reference chain is too long.
    pub fn enter(&mut self, id: &str) -> Result<()> {
        if self.status(id) == Some(Status::InProgress) {
            let chain = self.cycle_path(id);
            log::debug!("circular reference: {}", chain);
            return Err(EvalError::Circular(chain));
        }
        if self.depth() >= self.max_depth {
            log::debug!("depth limit {} hit at {}", self.max_depth, id);
            return Err(EvalError::DepthExceeded(self.max_depth));
        }

        self.status.insert(id.to_string(), Status::InProgress);
        self.path.push(id.to_string());
        Ok(())
    }

    /// Finish resolving `id`.
    pub fn resolve(&mut self, id: &str) {
        self.status.insert(id.to_string(), Status::Resolved);
        if let Some(pos) = self.path.iter().rposition(|entry| entry == id) {
            self.path.truncate(pos);
        }
    }

    pub fn status(&self, id: &str) -> Option<Status> {
        self.status.get(id).copied()
    }

    /// Start evaluating a parenthesized group.
    ///
    /// Groups share the depth budget with references, so the total nesting of
    /// one read stays bounded however references and parentheses interleave.
    pub fn enter_group(&mut self) -> Result<()> {
        if self.depth() >= self.max_depth {
            log::debug!("depth limit {} hit in parenthesized group", self.max_depth);
            return Err(EvalError::DepthExceeded(self.max_depth));
        }
        self.groups += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.groups = self.groups.saturating_sub(1);
    }

    /// References being resolved plus groups being evaluated.
    pub fn depth(&self) -> usize {
        self.path.len() + self.groups
    }

    /// The part of the current chain that loops back to `id`, closed with `id`,
    /// e.g. `A1 -> B1 -> A1`.
    fn cycle_path(&self, id: &str) -> String {
        let start = self.path.iter().position(|entry| entry == id).unwrap_or(0);
        let mut cycle = self.path[start..].join(" -> ");
        if !cycle.is_empty() {
            cycle.push_str(" -> ");
        }
        cycle.push_str(id);
        cycle
    }
}
