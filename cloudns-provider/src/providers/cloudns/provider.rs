//! ClouDNS DnsProvider trait 实现

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::{FieldType, ProviderCredentialField, ProviderMetadata, Record};

use super::response::{check_status, created_id, decode};
use super::{
    ClouDnsProvider, ENDPOINT_ADD_RECORD, ENDPOINT_DELETE_RECORD, ENDPOINT_LIST_RECORDS,
    ENDPOINT_MOD_RECORD, QueryParams, RecordCollection,
};

/// Sets the parameters describing `record` itself.
fn set_record_params(query: &mut QueryParams, record: &Record) {
    query.set("record-type", &record.record_type);
    query.set("host", &record.name);
    query.set("record", &record.value);
    query.set("ttl", record.ttl.as_secs().to_string());
}

impl ClouDnsProvider {
    async fn list_records(&self, ctx: &RequestContext, zone: &str) -> Result<Vec<Record>> {
        let query = self.zone_query(zone)?;
        let body = self.send(ctx, ENDPOINT_LIST_RECORDS, &query).await?;
        let records = decode::<RecordCollection>(&body)?.into_records();
        log::debug!("[cloudns] {} records in {zone}", records.len());
        Ok(records)
    }

    /// Creates `record` and returns it with the assigned id.
    async fn add_record(
        &self,
        ctx: &RequestContext,
        base: &QueryParams,
        record: &Record,
    ) -> Result<Record> {
        let mut query = base.clone();
        set_record_params(&mut query, record);

        let body = self.send(ctx, ENDPOINT_ADD_RECORD, &query).await?;
        let id = created_id(&body)?;
        log::debug!("[cloudns] added {} {} as {id}", record.record_type, record.name);
        Ok(record.clone().with_id(id))
    }

    async fn modify_record(
        &self,
        ctx: &RequestContext,
        base: &QueryParams,
        record: &Record,
    ) -> Result<()> {
        let mut query = base.clone();
        set_record_params(&mut query, record);
        query.set("record-id", &record.id);

        let body = self.send(ctx, ENDPOINT_MOD_RECORD, &query).await?;
        check_status(&body)?;
        log::debug!("[cloudns] modified record {}", record.id);
        Ok(())
    }

    async fn remove_record(
        &self,
        ctx: &RequestContext,
        base: &QueryParams,
        record: &Record,
    ) -> Result<()> {
        let mut query = base.clone();
        query.set("record-id", &record.id);

        let body = self.send(ctx, ENDPOINT_DELETE_RECORD, &query).await?;
        check_status(&body)?;
        log::debug!("[cloudns] deleted record {}", record.id);
        Ok(())
    }
}

#[async_trait]
impl DnsProvider for ClouDnsProvider {
    fn id(&self) -> &'static str {
        "cloudns"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "cloudns".to_string(),
            name: "ClouDNS".to_string(),
            description: "ClouDNS HTTP API".to_string(),
            required_fields: vec![
                ProviderCredentialField {
                    key: "auth_id".to_string(),
                    label: "Auth ID".to_string(),
                    field_type: FieldType::Text,
                    help_text: Some("auth-id, or sub-auth-id for a sub-account".to_string()),
                },
                ProviderCredentialField {
                    key: "sub".to_string(),
                    label: "Sub-account".to_string(),
                    field_type: FieldType::Toggle,
                    help_text: Some("\"true\" authenticates as a sub-account".to_string()),
                },
                ProviderCredentialField {
                    key: "auth_password".to_string(),
                    label: "Auth Password".to_string(),
                    field_type: FieldType::Password,
                    help_text: None,
                },
            ],
        }
    }

    async fn get_records(&self, ctx: &RequestContext, zone: &str) -> Result<Vec<Record>> {
        let _guard = ctx.run(self.lock.lock()).await?;
        self.list_records(ctx, zone).await
    }

    async fn append_records(
        &self,
        ctx: &RequestContext,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let _guard = ctx.run(self.lock.lock()).await?;
        let base = self.zone_query(zone)?;

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            created.push(self.add_record(ctx, &base, record).await?);
        }
        Ok(created)
    }

    async fn set_records(
        &self,
        ctx: &RequestContext,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let _guard = ctx.run(self.lock.lock()).await?;
        let base = self.zone_query(zone)?;

        let mut updated = Vec::with_capacity(records.len());
        for record in records {
            if record.id.is_empty() {
                updated.push(self.add_record(ctx, &base, record).await?);
            } else {
                self.modify_record(ctx, &base, record).await?;
                updated.push(record.clone());
            }
        }
        Ok(updated)
    }

    async fn delete_records(
        &self,
        ctx: &RequestContext,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let _guard = ctx.run(self.lock.lock()).await?;
        let base = self.zone_query(zone)?;

        for record in records {
            self.remove_record(ctx, &base, record).await?;
        }
        Ok(records.to_vec())
    }
}
