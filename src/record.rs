pub mod price;
pub mod usage;
