use super::{first_match, is_uuid, require_uuid};
use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{Subnet, SubnetList};
use crate::{Client, Error};

const SUBNET_BASE_PATH: &str = "/subnets";
const SUBNET_LIST_PATH: &str = "/subnets/list";

/// Subnet API.
pub struct SubnetApi<'a> {
    client: &'a Client,
}

impl<'a> SubnetApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches a subnet by UUID when `id_or_name` parses as one, otherwise by name.
    pub async fn get(&self, id_or_name: &str) -> Result<Subnet, Error> {
        if is_uuid(id_or_name) {
            self.get_by_uuid(id_or_name).await
        } else {
            self.get_by_name(id_or_name).await
        }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Subnet, Error> {
        self.client
            .execute(Request::get(SUBNET_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Subnet, Error> {
        let subnets = self.list(ListOptions::by_name("name", name)).await?;
        first_match(subnets, "subnet", name)
    }

    pub async fn list(&self, options: ListOptions) -> Result<SubnetList, Error> {
        self.client
            .list(SUBNET_LIST_PATH, options.with_default_kind("subnet"))
            .await
    }

    pub async fn all(&self) -> Result<SubnetList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    pub async fn create(&self, subnet: &Subnet) -> Result<Subnet, Error> {
        self.client
            .execute(Request::post(SUBNET_BASE_PATH).json(subnet)?)
            .await
    }

    /// Sends the new desired state without the server-owned `status`.
    pub async fn update(&self, subnet: &Subnet) -> Result<Subnet, Error> {
        let uuid = require_uuid(&subnet.metadata, "subnet")?;
        let mut body = subnet.clone();
        body.status = None;
        self.client
            .execute(Request::put(SUBNET_BASE_PATH).segment(uuid).json(&body)?)
            .await
    }

    pub async fn delete(&self, subnet: &Subnet) -> Result<(), Error> {
        let uuid = require_uuid(&subnet.metadata, "subnet")?;
        self.client
            .execute(Request::delete(SUBNET_BASE_PATH).segment(uuid))
            .await
    }
}
