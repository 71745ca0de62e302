//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use cloudns_provider::{ClouDnsProvider, Credentials, Record, RequestContext};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// TXT record used by the write tests.
pub fn test_txt_record(name: &str, value: &str) -> Record {
    Record::new("TXT", name, value, Duration::from_secs(300))
}

/// Provider pointed at a mock server.
pub fn mock_provider(base_url: &str, credentials: Credentials) -> ClouDnsProvider {
    ClouDnsProvider::builder(credentials)
        .base_url(base_url)
        .build()
        .expect("构建 Provider 失败")
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: ClouDnsProvider,
    pub domain: String,
    pub ctx: RequestContext,
}

impl TestContext {
    /// 从环境变量创建 ClouDNS 测试上下文
    ///
    /// `CLOUDNS_AUTH_ID`, `CLOUDNS_AUTH_PASSWORD`, `TEST_DOMAIN`; `CLOUDNS_SUB=true`
    /// selects a sub-account.
    pub fn cloudns() -> Option<Self> {
        let auth_id = env::var("CLOUDNS_AUTH_ID").ok()?;
        let auth_password = env::var("CLOUDNS_AUTH_PASSWORD").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials = Credentials {
            sub: env::var("CLOUDNS_SUB").unwrap_or_default(),
            ..Credentials::new(auth_id, auth_password)
        };
        let provider = ClouDnsProvider::new(credentials).ok()?;

        Some(Self {
            provider,
            domain,
            ctx: RequestContext::new().with_timeout(Duration::from_secs(60)),
        })
    }
}
