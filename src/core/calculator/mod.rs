pub mod breaks;
pub mod windows;
