use crate::domain::job::{Job, Survey};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Contract of the remote document store. The conversion layer never talks
/// to the store directly; callers hand it an implementation of this port.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Returns a globally unique, non-empty id.
    fn generate_id(&self) -> String;

    /// Latest snapshot of the active survey.
    async fn active_survey(&self) -> Result<Survey>;

    /// Adds or replaces a job of the given survey.
    async fn add_or_update_job(&self, survey_id: &str, job: Job) -> Result<()>;
}
