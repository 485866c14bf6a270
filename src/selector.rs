use crate::api::{ApiClient, ApiResponse};
use crate::error::{unrecognized_response, ApiError, RbError};
use crate::http::HttpBackend;
use crate::model::StoredRequest;
use serde_json::Value;
use tracing::debug;

/// Which request of a bin to replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<'a> {
    /// The request with this identifier
    Direct(&'a str),
    /// The most recently received request
    Latest,
}

impl<'a> Target<'a> {
    pub fn from_request_id(request_id: Option<&'a str>) -> Self {
        match request_id {
            Some(id) => Target::Direct(id),
            None => Target::Latest,
        }
    }
}

/// Resolve `target` in `bin_id` to exactly one stored request
///
/// Issues a single API call. Transport failures come back as
/// `RbError::Http`; wrong statuses or body shapes as `RbError::Api`.
pub async fn select_request<B: HttpBackend + Send + Sync>(
    api: &ApiClient<B>,
    bin_id: &str,
    target: Target<'_>,
) -> Result<StoredRequest, RbError> {
    match target {
        Target::Direct(request_id) => {
            let resp = api.get_request(bin_id, request_id).await?;
            match &resp.body {
                Some(record @ Value::Object(_)) if resp.is_ok() => decode(&resp, record),
                _ => Err(unrecognized(&resp)),
            }
        }
        Target::Latest => {
            let resp = api.list_requests(bin_id).await?;
            let records = match &resp.body {
                Some(Value::Array(records)) if resp.is_ok() => records,
                _ => return Err(unrecognized(&resp)),
            };
            debug!(bin_id, count = records.len(), "picking latest request");
            let latest = latest_by(records, |record| record.get("time").and_then(Value::as_f64))
                .ok_or_else(|| ApiError::EmptyBin {
                    bin_id: bin_id.to_string(),
                })?;
            decode(&resp, latest)
        }
    }
}

/// The item with the strictly greatest timestamp, scanning front to back
///
/// Ties keep the earlier item. An item without a timestamp never replaces
/// the current candidate and is never replaced itself.
pub fn latest_by<T, F>(items: &[T], time: F) -> Option<&T>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut iter = items.iter();
    let mut latest = iter.next()?;
    for item in iter {
        if let (Some(candidate), Some(current)) = (time(item), time(latest)) {
            if candidate > current {
                latest = item;
            }
        }
    }
    Some(latest)
}

fn decode(resp: &ApiResponse, record: &Value) -> Result<StoredRequest, RbError> {
    StoredRequest::from_json(record).map_err(|e| {
        RbError::Api(ApiError::MalformedRequest {
            url: resp.url.clone(),
            reason: e.to_string(),
        })
    })
}

fn unrecognized(resp: &ApiResponse) -> RbError {
    unrecognized_response(&resp.url, resp.status, &resp.body_text)
}
