use dioxus::prelude::*;

use crate::components::page_header::PageHeader;
use crate::pages::parks_page::ParksPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageHeader)]


    // both query segments hold comma-joined filter values
    #[route("/?:facility&:suburb")]
    ParksPage {
        facility: String,
        suburb: String,
    },

}
