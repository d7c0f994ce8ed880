pub mod error_boundary;
pub mod loading_indicator;
pub mod page_header;
pub mod park_components;
