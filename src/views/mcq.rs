use maud::{html, Markup, PreEscaped};

use crate::models::Mcq;

/// One question as a paragraph holding the question text and an ordered
/// list of its choices, the correct one in bold. Cleaned text is embedded
/// verbatim; cleaning already reduced it to plain text.
pub fn html(mcq: &Mcq) -> Markup {
    html! {
        p {
            (PreEscaped(mcq.question.as_str()))
            ol {
                @for choice in &mcq.choices {
                    li {
                        @if mcq.is_correct_choice(choice) {
                            b { (PreEscaped(choice.text.as_str())) }
                        } @else {
                            (PreEscaped(choice.text.as_str()))
                        }
                    }
                }
            }
        }
        br;
    }
}

/// Plain-text counterpart: question line, then a 1-based numbered list with
/// the correct choice prefixed by `* `.
pub fn text(mcq: &Mcq) -> String {
    let mut out = String::new();
    out.push_str(&mcq.question);
    out.push('\n');
    for (n, choice) in mcq.choices.iter().enumerate() {
        let marker = if mcq.is_correct_choice(choice) {
            "* "
        } else {
            ""
        };
        out.push_str(&format!("   {}. {marker}{}\n", n + 1, choice.text));
    }
    out
}
