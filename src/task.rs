use crate::donor::{AttorneyDecisions, Attorneys};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of one section of the LPA task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskState {
    pub fn as_str(&self) -> &'static str {
        use TaskState::*;
        match *self {
            NotStarted => "notStarted",
            InProgress => "inProgress",
            Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == TaskState::Completed
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task list state of the donor's LPA, one entry per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tasks {
    pub your_details: TaskState,
    pub choose_attorneys: TaskState,
    pub choose_replacement_attorneys: TaskState,
    pub certificate_provider: TaskState,
    pub people_to_notify: TaskState,
    pub choose_your_signatory: TaskState,
}

/// State of an attorneys section (original or replacement).
///
/// `NotStarted` without attorneys, `InProgress` while any attorney is missing
/// a name or an address, or when several attorneys have no decision on how
/// they act. `Completed` otherwise.
pub fn choose_attorneys_state(attorneys: &Attorneys, decisions: &AttorneyDecisions) -> TaskState {
    if attorneys.is_empty() {
        return TaskState::NotStarted;
    }

    for a in &attorneys.attorneys {
        if a.first_names.is_empty() || a.address.line1.is_empty() {
            return TaskState::InProgress;
        }
    }

    if let Some(ref trust_corporation) = attorneys.trust_corporation {
        if trust_corporation.name.is_empty() || trust_corporation.address.line1.is_empty() {
            return TaskState::InProgress;
        }
    }

    if attorneys.len() > 1 && !decisions.is_complete() {
        return TaskState::InProgress;
    }

    TaskState::Completed
}
