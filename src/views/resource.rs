use maud::{html, Markup};

use crate::models::Resource;

use super::mcq;

/// All retained questions of one resource, in item order.
pub fn html(resource: &Resource) -> Markup {
    html! {
        @for m in resource.mcqs() {
            (mcq::html(m))
        }
    }
}

/// Plain-text rendering, one blank line between questions.
pub fn text(resource: &Resource) -> String {
    let mut out = String::new();
    for m in resource.mcqs() {
        out.push_str(&mcq::text(m));
        out.push('\n');
    }
    out
}
