//! Configuration types shared by the Snowflake target binary and library.

pub mod shared;
