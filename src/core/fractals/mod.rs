pub mod analytic;
pub mod escape_time;
pub mod family;
pub mod family_kinds;
pub mod ifs;
