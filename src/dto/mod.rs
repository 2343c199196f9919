pub mod candidate_dto;
pub mod job_dto;
pub mod navigation_dto;
pub mod view_dto;
