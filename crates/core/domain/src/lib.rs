pub mod datasource;
pub mod identity;
pub mod permissions;

pub use datasource::{
    Datasource, DatasourceKind, DatasetRecord, ParseDatasourceKindError, QueryRecord,
    SavedQueryRecord, SlTableRecord, TableRecord,
};
pub use identity::{Owner, Role};

/// 租户上下文：命令执行时的当前调用者身份。
///
/// 显式传入每个解析函数，不依赖任何全局的"当前用户"。
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant_id: String,
    pub user: Owner,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl TenantContext {
    /// 构造显式身份与权限范围的租户上下文。
    pub fn new(
        tenant_id: impl Into<String>,
        user: Owner,
        roles: Vec<String>,
        permissions: Vec<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user,
            roles,
            permissions,
        }
    }

    /// 当前调用者的用户 ID。
    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    /// 当前调用者（作为 Owner）。
    pub fn current_user(&self) -> Owner {
        self.user.clone()
    }

    /// 是否为租户管理员（拥有 admin 角色）。
    pub fn is_admin(&self) -> bool {
        self.has_role(permissions::ROLE_ADMIN)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|item| item == role)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|item| item == permission)
    }
}

impl Default for TenantContext {
    /// 空上下文（仅用于测试或占位）。
    fn default() -> Self {
        Self {
            tenant_id: "".to_string(),
            user: Owner::default(),
            roles: Vec::new(),
            permissions: Vec::new(),
        }
    }
}
