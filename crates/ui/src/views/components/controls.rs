use dioxus::prelude::*;

use crate::styles::{CLOSE_BUTTON_ID, TRACK_SELECT_ID, WidgetStyles};
use crate::vm::TrackOptionVm;

/// Track `<select>`. Change handling is bound by the host after mounting.
#[component]
pub fn TrackSelector(tracks: Vec<TrackOptionVm>, styles: WidgetStyles) -> Element {
    rsx! {
        select { id: TRACK_SELECT_ID, style: "{styles.dropdown}",
            for track in tracks {
                if track.selected {
                    option { value: "{track.name}", selected: true, "{track.name}" }
                } else {
                    option { value: "{track.name}", "{track.name}" }
                }
            }
        }
    }
}

#[component]
pub fn CloseButton(label: String, styles: WidgetStyles) -> Element {
    rsx! {
        div { style: "{styles.button_container}",
            button {
                id: CLOSE_BUTTON_ID,
                r#type: "button",
                style: "{styles.close_button}",
                "{label}"
            }
        }
    }
}
