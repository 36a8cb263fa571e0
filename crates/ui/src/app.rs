use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "EduPortal" }

        main { class: "portal-shell",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::error!(?errors, "portal failed to render");
                    rsx! {
                        div { class: "alert alert-error portal-fatal",
                            "The portal could not be displayed. Restart the app and sign in again."
                        }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
