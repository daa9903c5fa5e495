pub mod file_backend;
pub mod memory_backend;
pub mod storage_service;
