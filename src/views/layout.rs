use maud::{html, Markup, DOCTYPE};

use crate::models::Resource;

use super::resource;

/// The full review document: a bare page holding every resource's
/// questions in manifest order.
pub fn document(resources: &[Resource]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            body {
                @for r in resources {
                    (resource::html(r))
                }
            }
        }
    }
}
