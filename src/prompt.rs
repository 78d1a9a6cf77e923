/// Multi-field input collected one prompt at a time.
///
/// The GUI shows [`current`](Self::current), feeds the answer back through
/// [`submit`](Self::submit) and moves on. Dropping the sequence before it
/// completes discards everything collected so far.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSequence {
    title: String,
    prompts: Vec<String>,
    answers: Vec<String>,
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Next,
    Complete(Vec<String>),
}

impl PromptSequence {
    pub fn new<I, S>(title: impl Into<String>, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PromptSequence {
            title: title.into(),
            prompts: prompts.into_iter().map(Into::into).collect(),
            answers: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text of the prompt awaiting an answer.
    pub fn current(&self) -> Option<&str> {
        self.prompts.get(self.answers.len()).map(String::as_str)
    }

    /// 1-based index of the current prompt and the total count.
    pub fn position(&self) -> (usize, usize) {
        ((self.answers.len() + 1).min(self.prompts.len()), self.prompts.len())
    }

    pub fn remaining(&self) -> usize {
        self.prompts.len() - self.answers.len()
    }

    pub fn submit(&mut self, answer: impl Into<String>) -> Step {
        if self.remaining() > 0 {
            self.answers.push(answer.into());
        }
        if self.remaining() == 0 {
            Step::Complete(std::mem::take(&mut self.answers))
        } else {
            Step::Next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_prompts_in_order() {
        let mut seq = PromptSequence::new("Register", ["Full Name:", "Employee ID:", "Job Title:"]);
        assert_eq!(seq.title(), "Register");
        assert_eq!(seq.current(), Some("Full Name:"));
        assert_eq!(seq.position(), (1, 3));

        assert_eq!(seq.submit("Ann Lee"), Step::Next);
        assert_eq!(seq.current(), Some("Employee ID:"));
        assert_eq!(seq.position(), (2, 3));
        assert_eq!(seq.remaining(), 2);

        assert_eq!(seq.submit("E1"), Step::Next);
        assert_eq!(
            seq.submit("Engineer"),
            Step::Complete(vec!["Ann Lee".into(), "E1".into(), "Engineer".into()])
        );
    }

    #[test]
    fn single_prompt_completes_immediately() {
        let mut seq = PromptSequence::new("Search", ["Enter Employee ID:"]);
        assert_eq!(seq.submit(""), Step::Complete(vec![String::new()]));
    }
}
