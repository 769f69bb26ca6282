//! Action Registry
//!
//! The host shell launches top-level screens by action tag. The dashboard is
//! registered under [`DASHBOARD_ACTION_TAG`].

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::dashboard::DashboardController;

/// Fixed identifier of the dashboard action
pub const DASHBOARD_ACTION_TAG: &str = "twh_dashboard";

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Action already registered: {0}")]
    Duplicate(String),
}

/// A screen the host shell can launch
#[derive(Clone)]
pub struct RegisteredAction {
    pub tag: String,
    pub name: String,
    pub controller: DashboardController,
}

/// Public description of a registered action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionInfo {
    pub tag: String,
    pub name: String,
}

#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, RegisteredAction>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `controller` under `tag`. Tags are unique.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        name: impl Into<String>,
        controller: DashboardController,
    ) -> Result<(), ActionError> {
        let tag = tag.into();
        if self.actions.contains_key(&tag) {
            return Err(ActionError::Duplicate(tag));
        }

        tracing::debug!(tag = %tag, "Registered client action");
        self.actions.insert(
            tag.clone(),
            RegisteredAction {
                tag,
                name: name.into(),
                controller,
            },
        );
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<&RegisteredAction> {
        self.actions.get(tag)
    }

    /// Registered actions, ordered by tag
    pub fn list(&self) -> Vec<ActionInfo> {
        self.actions
            .values()
            .map(|action| ActionInfo {
                tag: action.tag.clone(),
                name: action.name.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
