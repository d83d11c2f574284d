//! Prompt rendering for the completion model.

use super::session::Exchange;

/// Build the completion prompt from the question, the image description, and
/// the recent transcript.
///
/// The instruction deliberately tells the model to speak about "the image"
/// rather than "the description" so answers read as if the model saw the
/// picture itself. An empty description still renders; the model is expected
/// to answer from the question and history alone in that case.
pub fn render_prompt(question: &str, description: &str, history: &[Exchange]) -> String {
    let mut prompt = String::new();

    if !history.is_empty() {
        prompt.push_str("Previous conversation about this image:\n");
        for exchange in history {
            prompt.push_str("Q: ");
            prompt.push_str(&exchange.question);
            prompt.push('\n');
            prompt.push_str("A: ");
            prompt.push_str(&exchange.answer);
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "you are an expert text analyzer. based on the following description: \
         \"{description}\", answer the following question: \"{question}\". \
         if i make a wrong statement, correct me. Do not mention about the \
         description. Refer to the image instead."
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_and_question() {
        let prompt = render_prompt("what color is the cat?", "a ginger cat on a sofa", &[]);
        assert!(prompt.contains("\"a ginger cat on a sofa\""));
        assert!(prompt.contains("\"what color is the cat?\""));
        assert!(prompt.contains("Refer to the image instead"));
    }

    #[test]
    fn test_prompt_without_history_has_no_context_block() {
        let prompt = render_prompt("q", "d", &[]);
        assert!(!prompt.contains("Previous conversation"));
    }

    #[test]
    fn test_prompt_renders_history_in_order() {
        let history = vec![
            Exchange {
                question: "is it a cat?".to_string(),
                answer: "Yes, a ginger cat.".to_string(),
            },
            Exchange {
                question: "is it sleeping?".to_string(),
                answer: "It appears to be awake.".to_string(),
            },
        ];
        let prompt = render_prompt("where is it?", "a ginger cat", &history);

        assert!(prompt.starts_with("Previous conversation about this image:\n"));
        let first = prompt.find("is it a cat?").unwrap();
        let second = prompt.find("is it sleeping?").unwrap();
        let current = prompt.find("where is it?").unwrap();
        assert!(first < second && second < current);
    }

    #[test]
    fn test_prompt_with_empty_description_still_renders() {
        let prompt = render_prompt("what is shown?", "", &[]);
        assert!(prompt.contains("the following description: \"\""));
    }
}
