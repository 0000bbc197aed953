pub mod deployment;
pub mod pool;
