//! Request values handed to [`Client::execute`](crate::Client::execute).

use reqwest::Method;
use serde::Serialize;

use crate::types::File;
use crate::Error;

pub(crate) const MEDIA_TYPE_JSON: &str = "application/json";

/// API family a request is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// The current v3 API (`api/nutanix/v3`).
    #[default]
    V3,
    /// The older v2 gateway API, used for a few legacy operations.
    V2,
}

/// Which endpoint receives a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Target {
    /// The configured management endpoint.
    #[default]
    Central,
    /// The management endpoint of the cluster with this UUID. Its address
    /// is looked up through the central endpoint before every request.
    Cluster(String),
}

#[derive(Debug, Clone, Default)]
pub(crate) enum Payload {
    #[default]
    Empty,
    Json(Vec<u8>),
    Raw(File),
}

/// A single API call: method, target, path and body.
///
/// Path arguments added with [`Request::segment`] are percent-encoded, so
/// UUIDs and names can never alter the path structure.
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) version: ApiVersion,
    pub(crate) target: Target,
    pub(crate) path: String,
    pub(crate) segments: Vec<String>,
    pub(crate) payload: Payload,
}

impl Request {
    /// A request for `path`, relative to the API version prefix (e.g. `/vms/list`).
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            version: ApiVersion::V3,
            target: Target::Central,
            path: path.to_string(),
            segments: Vec::new(),
            payload: Payload::Empty,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one encoded path segment.
    pub fn segment(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Routes the request to a cluster's own endpoint.
    pub fn on_cluster(mut self, cluster_uuid: &str) -> Self {
        self.target = Target::Cluster(cluster_uuid.to_string());
        self
    }

    /// Serializes `body` as the JSON payload. Fails without sending anything
    /// when the body cannot be encoded.
    pub fn json<B>(mut self, body: &B) -> Result<Self, Error>
    where
        B: Serialize + ?Sized,
    {
        let buf = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.payload = Payload::Json(buf);
        Ok(self)
    }

    /// Sends `file` verbatim with its own content type.
    pub fn upload(mut self, file: File) -> Self {
        self.payload = Payload::Raw(file);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn json_payload_is_encoded_up_front() {
        let req = Request::post("/vms/list")
            .json(&serde_json::json!({"filter": "vm_name==a"}))
            .unwrap();
        match req.payload {
            Payload::Json(buf) => assert_eq!(buf, br#"{"filter":"vm_name==a"}"#),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn unencodable_body_is_rejected() {
        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys are not valid JSON object keys");
        let err = Request::post("/vms").json(&body).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn builder_defaults() {
        let req = Request::get("/vms").segment("abc");
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.target(), &Target::Central);
        assert_eq!(req.version, ApiVersion::V3);
        assert_eq!(req.segments, vec!["abc".to_string()]);
        let req = req.on_cluster("c-1").version(ApiVersion::V2);
        assert_eq!(req.target(), &Target::Cluster("c-1".to_string()));
        assert_eq!(req.version, ApiVersion::V2);
    }
}
