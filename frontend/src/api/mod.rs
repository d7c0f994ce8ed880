pub mod parks_api;
