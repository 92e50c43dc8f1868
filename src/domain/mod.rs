pub mod diff;
pub mod review;
