//! 命令层写前校验。
//!
//! 创建/更新仪表盘、数据集等对象之前，把调用方提交的引用解析为已校验的实体：
//!
//! - [`populate_owners`]：owner ID 列表 → `Vec<Owner>`，非管理员不能把自己移出 owner
//! - [`populate_roles`]：角色 ID 列表 → `Vec<Role>`，任一不存在即失败
//! - [`get_datasource_by_id`]：`(id, type)` → `Datasource`，存储层 NotFound 翻译为校验错误
//!
//! 三个函数互相独立、无状态、只读；当前用户通过 `TenantContext` 显式传入。
//! [`CommandValidator`] 把存储打包在一起，[`CommandInvalid`] 汇总一次命令中的全部校验失败。

mod datasource;
mod error;
mod owners;
mod roles;
mod validator;

pub use datasource::get_datasource_by_id;
pub use error::{BootstrapError, CommandError, CommandInvalid, ValidationError};
pub use owners::populate_owners;
pub use roles::populate_roles;
pub use validator::CommandValidator;
