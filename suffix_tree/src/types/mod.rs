pub mod active_point;
pub mod end_marker;
pub mod label_data;
pub mod node;
