//! Category API. Category keys are addressed by name; each key owns a set
//! of values.

use crate::query::ListOptions;
use crate::request::Request;
use crate::types::{CategoryKey, CategoryKeyList, CategoryKeyStatus, CategoryValueList};
use crate::{Client, Error};

const CATEGORY_BASE_PATH: &str = "/categories";
const CATEGORY_LIST_PATH: &str = "/categories/list";

pub struct CategoryApi<'a> {
    client: &'a Client,
}

impl<'a> CategoryApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, name: &str) -> Result<CategoryKeyStatus, Error> {
        self.client
            .execute(Request::get(CATEGORY_BASE_PATH).segment(name))
            .await
    }

    pub async fn list(&self, options: ListOptions) -> Result<CategoryKeyList, Error> {
        self.client
            .list(CATEGORY_LIST_PATH, options.with_default_kind("category"))
            .await
    }

    pub async fn all(&self) -> Result<CategoryKeyList, Error> {
        self.list(
            ListOptions::default()
                .with_length(self.client.page_size())
                .with_offset(0),
        )
        .await
    }

    /// Lists the values defined under the key `name`. Returned as one page.
    pub async fn list_values(&self, name: &str) -> Result<CategoryValueList, Error> {
        let request = Request::post(CATEGORY_BASE_PATH)
            .segment(name)
            .segment("list")
            .json(&ListOptions::default())?;
        self.client.execute(request).await
    }

    /// Creates or replaces the key named in `key`.
    pub async fn create(&self, key: &CategoryKey) -> Result<CategoryKeyStatus, Error> {
        self.client
            .execute(
                Request::put(CATEGORY_BASE_PATH)
                    .segment(&key.name)
                    .json(key)?,
            )
            .await
    }

    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        self.client
            .execute(Request::delete(CATEGORY_BASE_PATH).segment(name))
            .await
    }
}
