//! StudySync - 在线作业提交平台后端服务
//!
//! 基于 Actix Web 与 MongoDB 构建的作业发布 / 提交 / 批改后端。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话认证中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（MongoDB）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
