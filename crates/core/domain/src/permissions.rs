//! 角色与权限码常量。

/// 租户管理员角色：可以替换对象的全部 owner（包括移除自己）。
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ALPHA: &str = "alpha";
pub const ROLE_GAMMA: &str = "gamma";

pub const DASHBOARD_WRITE: &str = "DASHBOARD.WRITE";
pub const DATASET_WRITE: &str = "DATASET.WRITE";
pub const CHART_WRITE: &str = "CHART.WRITE";

/// 全部权限码（用于内置管理员）。
pub const PERMISSION_CODES: &[&str] = &[DASHBOARD_WRITE, DATASET_WRITE, CHART_WRITE];
