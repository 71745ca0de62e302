//! ClouDNS Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! CLOUDNS_AUTH_ID=xxx CLOUDNS_AUTH_PASSWORD=xxx TEST_DOMAIN=example.com \
//!     cargo test -p cloudns-provider --test cloudns_test -- --ignored --nocapture --test-threads=1
//! ```
//!
//! `CLOUDNS_SUB=true` authenticates as a sub-account.

mod common;

use std::time::Duration;

use cloudns_provider::{DnsProvider, Record};
use common::{TestContext, generate_test_record_name, test_txt_record};

#[tokio::test]
#[ignore]
async fn test_cloudns_get_records() {
    skip_if_no_credentials!("CLOUDNS_AUTH_ID", "CLOUDNS_AUTH_PASSWORD", "TEST_DOMAIN");

    let t = TestContext::cloudns().expect("创建测试上下文失败");
    let records = require_ok!(
        t.provider.get_records(&t.ctx, &t.domain).await,
        "get_records 调用失败"
    );

    for record in &records {
        assert!(!record.id.is_empty(), "记录缺少 id: {record:?}");
    }

    println!("✓ get_records 测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore]
async fn test_cloudns_record_lifecycle() {
    skip_if_no_credentials!("CLOUDNS_AUTH_ID", "CLOUDNS_AUTH_PASSWORD", "TEST_DOMAIN");

    let t = TestContext::cloudns().expect("创建测试上下文失败");
    let name = generate_test_record_name();

    // 1. 创建
    let created = require_ok!(
        t.provider
            .append_records(&t.ctx, &t.domain, &[test_txt_record(&name, "lifecycle-1")])
            .await,
        "append_records 调用失败"
    );
    let record = created[0].clone();
    assert!(!record.id.is_empty(), "创建的记录缺少 id");
    println!("✓ 创建记录: {} ({})", record.name, record.id);

    // 2. 查询
    let records = require_ok!(
        t.provider.get_records(&t.ctx, &t.domain).await,
        "get_records 调用失败"
    );
    let found = records.iter().find(|r| r.id == record.id);
    assert!(found.is_some(), "新记录未出现在列表中");
    if let Some(found) = found {
        assert_eq!(found.name, name);
        assert_eq!(found.value, "lifecycle-1");
    }

    // 3. 更新
    let modified = Record {
        value: "lifecycle-2".to_string(),
        ttl: Duration::from_secs(3600),
        ..record.clone()
    };
    let updated = require_ok!(
        t.provider
            .set_records(&t.ctx, &t.domain, std::slice::from_ref(&modified))
            .await,
        "set_records 调用失败"
    );
    assert_eq!(updated, vec![modified.clone()]);
    println!("✓ 更新记录: {}", modified.id);

    // 4. 删除
    let deleted = require_ok!(
        t.provider
            .delete_records(&t.ctx, &t.domain, std::slice::from_ref(&modified))
            .await,
        "delete_records 调用失败"
    );
    assert_eq!(deleted.len(), 1);

    let records = require_ok!(t.provider.get_records(&t.ctx, &t.domain).await);
    assert!(
        records.iter().all(|r| r.id != modified.id),
        "删除后记录仍然存在"
    );

    println!("✓ 记录生命周期测试通过");
}

#[tokio::test]
#[ignore]
async fn test_cloudns_delete_unknown_record() {
    skip_if_no_credentials!("CLOUDNS_AUTH_ID", "CLOUDNS_AUTH_PASSWORD", "TEST_DOMAIN");

    let t = TestContext::cloudns().expect("创建测试上下文失败");
    let ghost = test_txt_record(&generate_test_record_name(), "x").with_id("1");
    let result = t.provider.delete_records(&t.ctx, &t.domain, &[ghost]).await;

    let err = result.expect_err("删除不存在的记录应该失败");
    assert!(err.is_expected(), "应为 API 错误: {err:?}");
    println!("✓ 删除不存在记录返回: {err}");
}
