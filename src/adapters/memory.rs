use crate::domain::job::{Job, Survey};
use crate::domain::ports::DataStore;
use crate::utils::error::{GroundError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory document store holding a single active survey. Backs the CLI
/// and the tests; production callers supply their own `DataStore`.
#[derive(Clone, Default)]
pub struct MemoryDataStore {
    survey: Arc<Mutex<Option<Survey>>>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_survey(survey: Survey) -> Self {
        Self {
            survey: Arc::new(Mutex::new(Some(survey))),
        }
    }

    pub async fn set_active_survey(&self, survey: Survey) {
        *self.survey.lock().await = Some(survey);
    }
}

#[async_trait]
impl DataStore for MemoryDataStore {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
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
        let mut survey = self.survey.lock().await;
        let survey = survey.as_mut().ok_or_else(|| GroundError::DataStore {
            message: "no active survey".to_string(),
        })?;
        if survey.id != survey_id {
            return Err(GroundError::DataStore {
                message: format!("unknown survey: {}", survey_id),
            });
        }
        survey.jobs.insert(job.id.clone(), job);
        Ok(())
    }
}
