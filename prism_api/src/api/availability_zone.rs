use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{AvailabilityZone, AvailabilityZoneList};
use crate::{Client, Error};

const AVAILABILITY_ZONE_BASE_PATH: &str = "/availability_zones";
const AVAILABILITY_ZONE_LIST_PATH: &str = "/availability_zones/list";

pub struct AvailabilityZoneApi<'a> {
    client: &'a Client,
}

impl<'a> AvailabilityZoneApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<AvailabilityZone, Error> {
        self.client
            .execute(Request::get(AVAILABILITY_ZONE_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn list(&self, options: ListOptions) -> Result<AvailabilityZoneList, Error> {
        self.client
            .list(
                AVAILABILITY_ZONE_LIST_PATH,
                options.with_default_kind("availability_zone"),
            )
            .await
    }

    pub async fn all(&self) -> Result<AvailabilityZoneList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }
}
