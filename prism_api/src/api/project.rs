use super::{first_match, is_uuid, require_uuid};
use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{Project, ProjectList};
use crate::{Client, Error};

const PROJECT_BASE_PATH: &str = "/projects";
const PROJECT_LIST_PATH: &str = "/projects/list";

/// Project API. Projects group VMs, subnets and users for quota and access control.
pub struct ProjectApi<'a> {
    client: &'a Client,
}

impl<'a> ProjectApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, id_or_name: &str) -> Result<Project, Error> {
        if is_uuid(id_or_name) {
            self.get_by_uuid(id_or_name).await
        } else {
            self.get_by_name(id_or_name).await
        }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Project, Error> {
        self.client
            .execute(Request::get(PROJECT_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Project, Error> {
        let projects = self.list(ListOptions::by_name("name", name)).await?;
        first_match(projects, "project", name)
    }

    pub async fn list(&self, options: ListOptions) -> Result<ProjectList, Error> {
        self.client
            .list(PROJECT_LIST_PATH, options.with_default_kind("project"))
            .await
    }

    pub async fn all(&self) -> Result<ProjectList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    pub async fn create(&self, project: &Project) -> Result<Project, Error> {
        self.client
            .execute(Request::post(PROJECT_BASE_PATH).json(project)?)
            .await
    }

    /// Sends the new desired state without the server-owned `status`.
    pub async fn update(&self, project: &Project) -> Result<Project, Error> {
        let uuid = require_uuid(&project.metadata, "project")?;
        let mut body = project.clone();
        body.status = None;
        self.client
            .execute(Request::put(PROJECT_BASE_PATH).segment(uuid).json(&body)?)
            .await
    }

    pub async fn delete(&self, project: &Project) -> Result<(), Error> {
        let uuid = require_uuid(&project.metadata, "project")?;
        self.client
            .execute(Request::delete(PROJECT_BASE_PATH).segment(uuid))
            .await
    }
}
