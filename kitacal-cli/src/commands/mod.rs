pub mod ics;
pub mod xlsx;
