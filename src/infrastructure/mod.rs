// Infrastructure layer - configuration and dashboard file access
pub mod config;
pub mod dashboard_repository;
