// Week Layout Library
// Calendar week geometry: day bucketing, overlap columns, banners and the "now" line

pub mod models;
pub mod services;
pub mod utils;
pub mod views;
