use dioxus::prelude::*;
use portal_core::StudentRecord;

use crate::views::ProgressRing;
use crate::vm::{SubjectCardVm, map_dashboard};

#[component]
pub fn DashboardView(student: StudentRecord, on_logout: EventHandler<()>) -> Element {
    let vm = map_dashboard(&student);

    rsx! {
        div { class: "dashboard",
            nav { class: "navbar",
                div { class: "brand",
                    span { class: "brand-mark", "▦" }
                    span { class: "brand-name", "EduPortal" }
                }
                button {
                    class: "logout",
                    r#type: "button",
                    title: "Log out",
                    onclick: move |_| on_logout.call(()),
                    "Log out"
                }
            }

            main { class: "dashboard-body",
                h1 { class: "greeting", "Hello, {vm.name} 👋" }
                p { class: "roll-number", "Roll No. {vm.roll_number}" }

                section { class: "overall-card",
                    div { class: "overall-text",
                        p { class: "eyebrow", "Overall Performance" }
                        h2 { class: "overall-value", "{vm.overall.label}" }
                        span { class: "standing band-{vm.overall.band_class}",
                            "{vm.overall.standing_icon} {vm.overall.standing_label}"
                        }
                    }
                    ProgressRing { ring: vm.overall.ring.clone() }
                }

                div { class: "section-header",
                    h3 { "Subject Wise Details" }
                }

                if vm.subjects.is_empty() {
                    p { class: "empty", "No subjects found for this roll number." }
                } else {
                    div { class: "subject-grid",
                        for card in vm.subjects.iter() {
                            SubjectCard { key: "{card.key}", card: card.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectCard(card: SubjectCardVm) -> Element {
    rsx! {
        article { class: "subject-card",
            h3 { class: "subject-name", "{card.name}" }
            ProgressRing { ring: card.ring.clone() }
            div { class: "marks",
                for mark in card.marks.iter() {
                    div { class: "mark",
                        div { class: "mark-label", "{mark.label}" }
                        div { class: "mark-value", "{mark.value}" }
                    }
                }
            }
        }
    }
}
