//! Command implementations

pub mod init_schema;
pub mod serve;
