//! 日志初始化与校验指标。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 校验指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub owners_resolved: u64,
    pub owners_not_found: u64,
    pub roles_resolved: u64,
    pub roles_not_found: u64,
    pub datasources_resolved: u64,
    pub datasources_not_found: u64,
    pub datasource_type_invalid: u64,
}

/// 校验指标（进程级计数器）。
pub struct TelemetryMetrics {
    owners_resolved: AtomicU64,
    owners_not_found: AtomicU64,
    roles_resolved: AtomicU64,
    roles_not_found: AtomicU64,
    datasources_resolved: AtomicU64,
    datasources_not_found: AtomicU64,
    datasource_type_invalid: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            owners_resolved: AtomicU64::new(0),
            owners_not_found: AtomicU64::new(0),
            roles_resolved: AtomicU64::new(0),
            roles_not_found: AtomicU64::new(0),
            datasources_resolved: AtomicU64::new(0),
            datasources_not_found: AtomicU64::new(0),
            datasource_type_invalid: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            owners_resolved: self.owners_resolved.load(Ordering::Relaxed),
            owners_not_found: self.owners_not_found.load(Ordering::Relaxed),
            roles_resolved: self.roles_resolved.load(Ordering::Relaxed),
            roles_not_found: self.roles_not_found.load(Ordering::Relaxed),
            datasources_resolved: self.datasources_resolved.load(Ordering::Relaxed),
            datasources_not_found: self.datasources_not_found.load(Ordering::Relaxed),
            datasource_type_invalid: self.datasource_type_invalid.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info，`RUST_LOG` 优先）。
pub fn init_tracing() {
    init_tracing_with("info");
}

/// 以指定的默认过滤规则初始化 tracing；重复调用无副作用。
pub fn init_tracing_with(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 记录成功解析的 owner 数量。
pub fn record_owners_resolved(count: u64) {
    metrics().owners_resolved.fetch_add(count, Ordering::Relaxed);
}

pub fn record_owners_not_found() {
    metrics().owners_not_found.fetch_add(1, Ordering::Relaxed);
}

/// 记录成功解析的角色数量。
pub fn record_roles_resolved(count: u64) {
    metrics().roles_resolved.fetch_add(count, Ordering::Relaxed);
}

pub fn record_roles_not_found() {
    metrics().roles_not_found.fetch_add(1, Ordering::Relaxed);
}

pub fn record_datasource_resolved() {
    metrics().datasources_resolved.fetch_add(1, Ordering::Relaxed);
}

pub fn record_datasource_not_found() {
    metrics()
        .datasources_not_found
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录非法或不支持的数据源类型。
pub fn record_datasource_type_invalid() {
    metrics()
        .datasource_type_invalid
        .fetch_add(1, Ordering::Relaxed);
}
