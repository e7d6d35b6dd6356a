use serde::de::IgnoredAny;

use super::{first_match, is_uuid, require_uuid};
use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{File, Image, ImageList};
use crate::{Client, Error};

const IMAGE_BASE_PATH: &str = "/images";
const IMAGE_LIST_PATH: &str = "/images/list";

/// Image API. Image contents are either pulled by the server from
/// `source_uri` or pushed with [`ImageApi::upload`].
pub struct ImageApi<'a> {
    client: &'a Client,
}

impl<'a> ImageApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches an image by UUID when `id_or_name` parses as one, otherwise by name.
    pub async fn get(&self, id_or_name: &str) -> Result<Image, Error> {
        if is_uuid(id_or_name) {
            self.get_by_uuid(id_or_name).await
        } else {
            self.get_by_name(id_or_name).await
        }
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Image, Error> {
        self.client
            .execute(Request::get(IMAGE_BASE_PATH).segment(uuid))
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Image, Error> {
        let images = self.list(ListOptions::by_name("name", name)).await?;
        first_match(images, "image", name)
    }

    pub async fn list(&self, options: ListOptions) -> Result<ImageList, Error> {
        self.client
            .list(IMAGE_LIST_PATH, options.with_default_kind("image"))
            .await
    }

    pub async fn all(&self) -> Result<ImageList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    pub async fn create(&self, image: &Image) -> Result<Image, Error> {
        self.client
            .execute(Request::post(IMAGE_BASE_PATH).json(image)?)
            .await
    }

    /// Sends the new desired state without the server-owned `status`.
    pub async fn update(&self, image: &Image) -> Result<Image, Error> {
        let uuid = require_uuid(&image.metadata, "image")?;
        let mut body = image.clone();
        body.status = None;
        self.client
            .execute(Request::put(IMAGE_BASE_PATH).segment(uuid).json(&body)?)
            .await
    }

    pub async fn delete(&self, image: &Image) -> Result<(), Error> {
        let uuid = require_uuid(&image.metadata, "image")?;
        self.client
            .execute(Request::delete(IMAGE_BASE_PATH).segment(uuid))
            .await
    }

    /// Uploads the image contents for an image created without a source URI.
    pub async fn upload(&self, image: &Image, file: File) -> Result<(), Error> {
        let uuid = require_uuid(&image.metadata, "image")?;
        tracing::info!("Uploading {} bytes to image {}", file.bytes.len(), uuid);
        let request = Request::put(IMAGE_BASE_PATH)
            .segment(uuid)
            .segment("file")
            .upload(file);
        let _: IgnoredAny = self.client.execute(request).await?;
        Ok(())
    }
}
