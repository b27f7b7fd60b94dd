//! 用户与角色实体（只被引用，不在本层创建）。

use serde::{Deserialize, Serialize};

/// 用户实体：可作为领域对象的 owner。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub tenant_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
}

impl Owner {
    pub fn new(id: i64, tenant_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            tenant_id: tenant_id.into(),
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            active: true,
        }
    }

    /// 展示名：优先 "名 姓"，缺省时回退到用户名。
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// 角色实体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub tenant_id: String,
    pub name: String,
}

impl Role {
    pub fn new(id: i64, tenant_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            tenant_id: tenant_id.into(),
            name: name.into(),
        }
    }
}
