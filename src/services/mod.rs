pub mod candidate_service;
pub mod job_service;
pub mod navigation_service;
pub mod notification_service;
pub mod scoring_service;
pub mod screening_service;
pub mod toast_service;
pub mod view_service;
