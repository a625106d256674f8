//! Business logic services for the application layer.

pub mod health_service;
pub mod mapping_service;

pub use health_service::{HealthReport, HealthService, ServiceStatus};
pub use mapping_service::MappingService;
