use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::Result;
use crate::types::{ProviderMetadata, Record};

/// Record CRUD contract for a single DNS hosting provider.
///
/// Every operation targets one zone and runs under a [`RequestContext`].
/// Batch operations send one request per record, in order, and stop at the
/// first failure; records handled before the failure are not rolled back and
/// are not reported.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Provider 元数据（类型级别）
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Lists all records in `zone`.
    async fn get_records(&self, ctx: &RequestContext, zone: &str) -> Result<Vec<Record>>;

    /// Creates `records` in `zone` and returns them with their assigned ids.
    async fn append_records(
        &self,
        ctx: &RequestContext,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>>;

    /// Updates `records` by id, creating those without one.
    ///
    /// Records are returned unchanged, except created records carry their new id.
    async fn set_records(
        &self,
        ctx: &RequestContext,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>>;

    /// Deletes `records` by id and returns them unchanged.
    async fn delete_records(
        &self,
        ctx: &RequestContext,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>>;
}
