pub mod analysis;
pub mod candidate;
pub mod job;
pub mod screening;
pub mod toast;
pub mod view;
