use dioxus::prelude::*;

use crate::views::components::{CertificationGroup, CloseButton, CourseList, TrackSelector};
use crate::vm::{LoadingVm, LoginPromptVm, TrackVm, WidgetVm};

/// Inner markup of the widget container for any state.
#[component]
pub fn WidgetMarkup(view: WidgetVm) -> Element {
    match view {
        WidgetVm::Loading(vm) => rsx! { LoadingNotice { vm } },
        WidgetVm::LoginPrompt(vm) => rsx! { LoginPrompt { vm } },
        WidgetVm::Progress(vm) => rsx! { TrackProgressView { vm } },
    }
}

#[component]
fn LoadingNotice(vm: LoadingVm) -> Element {
    rsx! {
        strong { style: "{vm.styles.header}", "{vm.label}" }
    }
}

/// Shown for any failed fetch; logged-out users and network errors look alike.
#[component]
fn LoginPrompt(vm: LoginPromptVm) -> Element {
    rsx! {
        strong { style: "{vm.styles.header}", "{vm.headline}" }
        p { style: "{vm.styles.login_prompt}",
            "{vm.prompt} "
            a { href: "{vm.link_url}", style: "{vm.styles.link}", "{vm.link_text}" }
        }
    }
}

#[component]
fn TrackProgressView(vm: TrackVm) -> Element {
    let container = vm.styles.container_for(vm.completed);
    let styles = vm.styles;

    rsx! {
        div { style: "{container}",
            strong { style: "{styles.header}",
                "{vm.heading}"
                if let Some(label) = vm.completed_label {
                    span { style: "{styles.success_text}", " {label}" }
                }
            }
            div { TrackSelector { tracks: vm.tracks, styles: styles.clone() } }
            for group in vm.groups {
                CertificationGroup { group, styles: styles.clone() }
            }
            if !vm.remaining.is_empty() {
                div { style: "{styles.group}",
                    CourseList { courses: vm.remaining, styles: styles.clone() }
                }
            }
            CloseButton { label: vm.close_label, styles: styles.clone() }
        }
    }
}
