pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod matcher;
pub mod model;
pub mod recommend;
pub mod session;
pub mod storage;
pub mod summary;
