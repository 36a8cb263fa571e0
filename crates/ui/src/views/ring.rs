use dioxus::prelude::*;

use crate::vm::RingVm;

/// Circular attendance indicator. The fill is drawn with a dash offset so the
/// arc length is proportional to the percentage.
#[component]
pub fn ProgressRing(ring: RingVm) -> Element {
    rsx! {
        div { class: "ring",
            svg {
                class: "ring-svg",
                width: "{ring.size}",
                height: "{ring.size}",
                view_box: "0 0 {ring.size} {ring.size}",
                circle {
                    class: "ring-track",
                    cx: "{ring.center}",
                    cy: "{ring.center}",
                    r: "{ring.radius}",
                    stroke: "currentColor",
                    stroke_width: "{ring.stroke_width}",
                    fill: "transparent",
                }
                circle {
                    class: "ring-fill band-{ring.band_class}",
                    cx: "{ring.center}",
                    cy: "{ring.center}",
                    r: "{ring.radius}",
                    stroke: "currentColor",
                    stroke_width: "{ring.stroke_width}",
                    fill: "transparent",
                    stroke_dasharray: "{ring.circumference}",
                    stroke_dashoffset: "{ring.dash_offset}",
                    stroke_linecap: "round",
                    // Start the arc at twelve o'clock.
                    transform: "rotate(-90 {ring.center} {ring.center})",
                }
            }
            span { class: "ring-label band-{ring.band_class}", "{ring.label}" }
        }
    }
}
