use dioxus::prelude::*;

use crate::styles::WidgetStyles;
use crate::views::components::CourseList;
use crate::vm::CertificationGroupVm;

#[component]
pub fn CertificationGroup(group: CertificationGroupVm, styles: WidgetStyles) -> Element {
    let container = styles.cert_group_for(group.completed);

    rsx! {
        div { style: "{container}",
            h3 { style: "{styles.cert_header}",
                "{group.heading}"
                if let Some(label) = group.completed_label {
                    span { style: "{styles.success_text}", " {label}" }
                }
            }
            if let Some(description) = group.description {
                p { style: "{styles.cert_description}", "{description}" }
            }
            CourseList { courses: group.courses, styles: styles.clone() }
        }
    }
}
