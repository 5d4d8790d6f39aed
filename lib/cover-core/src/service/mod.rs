pub mod claim;
pub mod common_dto;
pub mod error;
pub mod navigation;
pub mod policy;
pub mod session;
