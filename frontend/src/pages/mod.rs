pub mod parks_page;
