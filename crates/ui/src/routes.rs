use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::PortalView;

// The session lives in memory only, so a single route hosts both screens.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", PortalView)] Portal {},
}
