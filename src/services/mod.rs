pub mod lookup_service;
pub mod submission_service;
