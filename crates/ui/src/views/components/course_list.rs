use dioxus::prelude::*;

use crate::styles::WidgetStyles;
use crate::vm::CourseRowVm;

#[component]
pub fn CourseList(courses: Vec<CourseRowVm>, styles: WidgetStyles) -> Element {
    rsx! {
        ul { style: "{styles.list}",
            for course in courses {
                CourseItem { course, styles: styles.clone() }
            }
        }
    }
}

#[component]
fn CourseItem(course: CourseRowVm, styles: WidgetStyles) -> Element {
    rsx! {
        li { style: "{styles.list_item}",
            a { href: "{course.url}", style: "{styles.link}",
                strong { "{course.title}" }
            }
            ": "
            span {
                style: "{course.status_style}",
                title: course.tooltip.clone(),
                "{course.status_text}"
            }
        }
    }
}
