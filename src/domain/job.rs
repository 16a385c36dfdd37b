use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    SelectOne,
    SelectMultiple,
}

/// One choice offered by a multiple-choice step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOption {
    pub id: String,
    pub code: String,
    pub label: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoice {
    pub cardinality: Cardinality,
    pub options: Vec<StepOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    Text,
    MultipleChoice,
    Photo,
    Number,
    Date,
    Time,
}

/// A single data-collection question or instruction.
///
/// An empty `id` means the step has not been assigned one yet;
/// `JobService::convert_steps_list_to_map` generates ids for such steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub step_type: StepType,
    pub label: String,
    pub required: bool,
    pub index: usize,
    pub multiple_choice: Option<MultipleChoice>,
}

/// An aggregate of steps defining what data to collect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub steps: HashMap<String, Step>,
}

impl Task {
    pub fn new(id: impl Into<String>, steps: HashMap<String, Step>) -> Self {
        Self {
            id: id.into(),
            steps,
        }
    }
}

/// A unit of survey work, owning at most one task.
///
/// `index` is a display-order hint. `None` means the job has not been placed
/// yet; `JobService::add_or_update_job` resolves it exactly once before
/// persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub index: Option<usize>,
    pub name: Option<String>,
    pub tasks: HashMap<String, Task>,
}

impl Job {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            index: None,
            name: None,
            tasks: HashMap::new(),
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tasks(mut self, tasks: HashMap<String, Task>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// Snapshot of a survey as served by the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub title: Option<String>,
    pub jobs: HashMap<String, Job>,
}

impl Survey {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            jobs: HashMap::new(),
        }
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_has_no_index() {
        let job = Job::new("job1");
        assert_eq!(job.index, None);
        assert!(job.tasks.is_empty());
    }

    #[test]
    fn test_with_index_assigns_once() {
        let job = Job::new("job1").with_index(3);
        assert_eq!(job.index, Some(3));
    }
}
