use crate::domain::job::{Job, MultipleChoice, Step, StepOption, StepType, Task};
use crate::domain::ports::DataStore;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Assembles jobs, tasks, and steps, and persists jobs through the store
/// port. Ids are generated once at creation and never reassigned.
pub struct JobService<D: DataStore> {
    data_store: D,
}

impl<D: DataStore> JobService<D> {
    pub fn new(data_store: D) -> Self {
        Self { data_store }
    }

    /// Creates a new job with a generated unique identifier and no index;
    /// the index is assigned when the job is first persisted.
    pub fn create_new_job(&self) -> Job {
        Job::new(self.data_store.generate_id())
    }

    /// Creates a new step with a generated unique identifier.
    pub fn create_step(
        &self,
        step_type: StepType,
        label: impl Into<String>,
        required: bool,
        index: usize,
        multiple_choice: Option<MultipleChoice>,
    ) -> Step {
        Step {
            id: self.data_store.generate_id(),
            step_type,
            label: label.into(),
            required,
            index,
            multiple_choice,
        }
    }

    /// Creates a new multiple-choice option with a generated unique
    /// identifier.
    pub fn create_option(
        &self,
        code: impl Into<String>,
        label: impl Into<String>,
        index: usize,
    ) -> StepOption {
        StepOption {
            id: self.data_store.generate_id(),
            code: code.into(),
            label: label.into(),
            index,
        }
    }

    /// Rewrites a step sequence into a mapping keyed by step id, generating
    /// a fresh id for steps that lack one. Callers must not rely on the
    /// iteration order of the result.
    pub fn convert_steps_list_to_map(&self, steps: Vec<Step>) -> HashMap<String, Step> {
        let mut steps_map = HashMap::new();
        for step in steps {
            let step_id = if step.id.is_empty() {
                self.data_store.generate_id()
            } else {
                step.id.clone()
            };
            steps_map.insert(step_id, step);
        }
        steps_map
    }

    /// Returns a singleton task map wrapping the given steps, or `None` when
    /// there is nothing worth persisting: no steps at all, or a lone step
    /// whose label is blank.
    pub fn create_task(
        &self,
        id: Option<String>,
        steps: HashMap<String, Step>,
    ) -> Option<HashMap<String, Task>> {
        if Self::is_task_empty(&steps) {
            return None;
        }
        let task_id = id.unwrap_or_else(|| self.data_store.generate_id());
        let mut tasks = HashMap::new();
        tasks.insert(task_id.clone(), Task::new(task_id, steps));
        Some(tasks)
    }

    fn is_task_empty(steps: &HashMap<String, Step>) -> bool {
        steps.is_empty()
            || (steps.len() == 1
                && steps
                    .values()
                    .next()
                    .is_none_or(|step| step.label.trim().is_empty()))
    }

    /// Returns the task of a job, if any. A job owns zero or one task.
    pub fn get_task<'a>(&self, job: Option<&'a Job>) -> Option<&'a Task> {
        job.and_then(|job| job.tasks.values().next())
    }

    /// Adds or updates a job of the given survey. A job without an index is
    /// placed at the current job count of the active survey.
    ///
    /// The count is a single snapshot read, not a transaction: concurrent
    /// job creation from another session can produce duplicate indices.
    /// Index is a display-order hint, not a uniqueness constraint.
    pub async fn add_or_update_job(&self, survey_id: &str, job: Job) -> Result<()> {
        let job = match job.index {
            Some(_) => job,
            None => {
                let index = self.job_count().await?;
                tracing::debug!("placing job {} at index {}", job.id, index);
                job.with_index(index)
            }
        };
        self.data_store.add_or_update_job(survey_id, job).await
    }

    async fn job_count(&self) -> Result<usize> {
        Ok(self.data_store.active_survey().await?.job_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::Survey;
    use crate::utils::error::GroundError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockDataStore {
        next_id: AtomicUsize,
        survey: Arc<Mutex<Option<Survey>>>,
        saved_jobs: Arc<Mutex<Vec<(String, Job)>>>,
    }

    impl MockDataStore {
        fn new() -> Self {
            Self {
                next_id: AtomicUsize::new(1),
                survey: Arc::new(Mutex::new(None)),
                saved_jobs: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn with_survey(survey: Survey) -> Self {
            Self {
                next_id: AtomicUsize::new(1),
                survey: Arc::new(Mutex::new(Some(survey))),
                saved_jobs: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl DataStore for MockDataStore {
        fn generate_id(&self) -> String {
            format!("generated-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
        }

        async fn active_survey(&self) -> Result<Survey> {
            self.survey
                .lock()
                .await
                .clone()
                .ok_or_else(|| GroundError::DataStore {
                    message: "no active survey".to_string(),
                })
        }

        async fn add_or_update_job(&self, survey_id: &str, job: Job) -> Result<()> {
            self.saved_jobs
                .lock()
                .await
                .push((survey_id.to_string(), job));
            Ok(())
        }
    }

    fn step(id: &str, label: &str) -> Step {
        Step {
            id: id.to_string(),
            step_type: StepType::Text,
            label: label.to_string(),
            required: false,
            index: 0,
            multiple_choice: None,
        }
    }

    #[test]
    fn test_create_new_job_has_generated_id_and_no_index() {
        let service = JobService::new(MockDataStore::new());

        let job = service.create_new_job();

        assert_eq!(job.id, "generated-1");
        assert_eq!(job.index, None);
    }

    #[test]
    fn test_create_task_with_no_steps_returns_none() {
        let service = JobService::new(MockDataStore::new());

        assert_eq!(service.create_task(None, HashMap::new()), None);
    }

    #[test]
    fn test_create_task_with_single_blank_step_returns_none() {
        let service = JobService::new(MockDataStore::new());
        let mut steps = HashMap::new();
        steps.insert("s1".to_string(), step("s1", "   "));

        assert_eq!(service.create_task(None, steps), None);
    }

    #[test]
    fn test_create_task_wraps_steps_unchanged() {
        let service = JobService::new(MockDataStore::new());
        let mut steps = HashMap::new();
        steps.insert("s1".to_string(), step("s1", "Q1"));
        steps.insert("s2".to_string(), step("s2", ""));

        let tasks = service.create_task(None, steps.clone()).unwrap();

        assert_eq!(tasks.len(), 1);
        let (task_id, task) = tasks.iter().next().unwrap();
        assert_eq!(task_id, &task.id);
        assert_eq!(task.steps, steps);
    }

    #[test]
    fn test_create_task_uses_supplied_id() {
        let service = JobService::new(MockDataStore::new());
        let mut steps = HashMap::new();
        steps.insert("s1".to_string(), step("s1", "Q1"));

        let tasks = service
            .create_task(Some("task1".to_string()), steps)
            .unwrap();

        assert!(tasks.contains_key("task1"));
    }

    #[test]
    fn test_convert_steps_list_assigns_missing_ids() {
        let service = JobService::new(MockDataStore::new());
        let steps = vec![step("existing", "Q1"), step("", "Q2")];

        let steps_map = service.convert_steps_list_to_map(steps);

        assert_eq!(steps_map.len(), 2);
        assert_eq!(steps_map.get("existing").unwrap().label, "Q1");
        let generated_key = steps_map.keys().find(|key| *key != "existing").unwrap();
        assert!(!generated_key.is_empty());
        assert_eq!(steps_map.get(generated_key).unwrap().label, "Q2");
    }

    #[test]
    fn test_get_task_returns_first_task() {
        let service = JobService::new(MockDataStore::new());
        let mut steps = HashMap::new();
        steps.insert("s1".to_string(), step("s1", "Q1"));
        let tasks = service.create_task(None, steps).unwrap();
        let job = Job::new("job1").with_tasks(tasks);

        assert!(service.get_task(Some(&job)).is_some());
        assert_eq!(service.get_task(None), None);
        assert_eq!(service.get_task(Some(&Job::new("empty"))), None);
    }

    #[tokio::test]
    async fn test_add_or_update_job_resolves_missing_index_to_job_count() {
        let mut survey = Survey::new("survey1");
        survey.jobs.insert("a".to_string(), Job::new("a"));
        survey.jobs.insert("b".to_string(), Job::new("b"));
        let store = MockDataStore::with_survey(survey);
        let saved_jobs = store.saved_jobs.clone();
        let service = JobService::new(store);

        service
            .add_or_update_job("survey1", Job::new("job1"))
            .await
            .unwrap();

        let saved = saved_jobs.lock().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "survey1");
        assert_eq!(saved[0].1.index, Some(2));
    }

    #[tokio::test]
    async fn test_add_or_update_job_keeps_existing_index() {
        let store = MockDataStore::new();
        let saved_jobs = store.saved_jobs.clone();
        let service = JobService::new(store);

        service
            .add_or_update_job("survey1", Job::new("job1").with_index(7))
            .await
            .unwrap();

        // No survey snapshot was needed; the index stays as assigned.
        let saved = saved_jobs.lock().await;
        assert_eq!(saved[0].1.index, Some(7));
    }
}
