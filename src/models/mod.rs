pub mod review;
pub mod sentiment;
