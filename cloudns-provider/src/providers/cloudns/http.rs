//! ClouDNS HTTP 请求方法

use crate::context::RequestContext;
use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{ClouDnsProvider, QueryParams};

impl ClouDnsProvider {
    /// `GET {base_url}{endpoint}?{query}` and return the raw body.
    ///
    /// The HTTP status code is not inspected; ClouDNS reports failures in the
    /// body.
    pub(crate) async fn send(
        &self,
        ctx: &RequestContext,
        endpoint: &str,
        query: &QueryParams,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}?{}", self.base_url, endpoint, query.encode());
        let request = self.client.get(&url);

        let (_status, body) =
            HttpUtils::execute_request(ctx, request, "cloudns", "GET", &url).await?;
        Ok(body)
    }
}
