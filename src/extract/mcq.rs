use roxmltree::Node;

use crate::errors::ItemError;
use crate::models::{Choice, Mcq};
use crate::names;

use super::{attr, child, children, text};

/// Builds one question from a QTI `item` element.
///
/// The presentation's flow children are discriminated by their `class`
/// attribute: the question block supplies the question text, the response
/// block the choices. A missing question block fails the item; a missing
/// response block just leaves the choice list empty. Correctness is
/// optional throughout and never fails the item.
pub fn from_item(item: Node) -> Result<Mcq, ItemError> {
    let mut question = None;
    let mut choices = Vec::new();

    let flows = child(item, "presentation").and_then(|p| child(p, "flow"));
    if let Some(flow) = flows {
        for block in children(flow, "flow") {
            match attr(block, "class") {
                Some(names::QUESTION_BLOCK) => question = Some(extract_question(block)?),
                Some(names::RESPONSE_BLOCK) => choices = extract_choices(block)?,
                _ => {}
            }
        }
    }

    let question = question.ok_or_else(|| ItemError::Question {
        reason: "no question block in presentation".to_owned(),
    })?;

    Ok(Mcq {
        question,
        choices,
        correct_choice_id: correct_choice_id(item),
    })
}

fn extract_question(block: Node) -> Result<String, ItemError> {
    let formatted = child(block, "flow")
        .and_then(|f| child(f, "material"))
        .and_then(|m| child(m, "mat_extension"))
        .and_then(|m| child(m, "mat_formattedtext"))
        .ok_or_else(|| ItemError::Question {
            reason: "material path did not resolve".to_owned(),
        })?;

    text::clean(formatted).map_err(|e| ItemError::Question {
        reason: e.to_string(),
    })
}

fn extract_choices(block: Node) -> Result<Vec<Choice>, ItemError> {
    let render = child(block, "response_lid")
        .and_then(|r| child(r, "render_choice"))
        .ok_or_else(|| choice_error("render_choice path did not resolve"))?;

    let mut choices = Vec::new();
    for label in children(render, "flow_label") {
        let response = child(label, "response_label")
            .ok_or_else(|| choice_error("flow_label has no response_label"))?;
        let ident = attr(response, "ident")
            .ok_or_else(|| choice_error("response_label has no ident"))?
            .to_owned();
        let formatted = child(response, "flow_mat")
            .and_then(|f| child(f, "material"))
            .and_then(|m| child(m, "mat_extension"))
            .and_then(|m| child(m, "mat_formattedtext"))
            .ok_or_else(|| choice_error("choice material path did not resolve"))?;
        let text = text::clean(formatted).map_err(|e| choice_error(&e.to_string()))?;

        choices.push(Choice { text, ident });
    }

    Ok(choices)
}

fn choice_error(reason: &str) -> ItemError {
    ItemError::Choice {
        reason: reason.to_owned(),
    }
}

/// The identifier named by the first response condition titled "correct".
/// Absence anywhere along the path means no choice is marked correct.
fn correct_choice_id(item: Node) -> Option<String> {
    let processing = child(item, "resprocessing")?;
    children(processing, "respcondition")
        .find(|condition| attr(*condition, "title") == Some(names::CORRECT_TITLE))
        .and_then(|condition| child(condition, "conditionvar"))
        .and_then(|var| child(var, "varequal"))
        .and_then(|equal| equal.text())
        .map(str::to_owned)
}
