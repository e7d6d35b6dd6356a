use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{Task, TaskList};
use crate::{Client, Error};

const TASK_BASE_PATH: &str = "/tasks";
const TASK_LIST_PATH: &str = "/tasks/list";

/// Task API. Actions such as clone or power changes return a task UUID that
/// can be looked up here.
pub struct TaskApi<'a> {
    client: &'a Client,
}

impl<'a> TaskApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Task, Error> {
        self.client
            .execute(Request::get(TASK_BASE_PATH).segment(uuid))
            .await
    }

    /// Lists tasks. Only the first page is returned.
    pub async fn list(&self, options: ListOptions) -> Result<TaskList, Error> {
        self.client
            .list(TASK_LIST_PATH, options.with_default_kind("task"))
            .await
    }
}
