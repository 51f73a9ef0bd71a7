pub mod export;
pub mod market;
pub mod recruiter;
