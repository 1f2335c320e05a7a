/// Text placed before the user's prompt in the user message
pub const USER_PREFIX: &str = "Please analyze and improve this prompt:\n\n";

/// Section headings the model is asked to produce, in order
pub const SECTION_HEADINGS: [&str; 5] = [
    "## What I Found",
    "## Problems to Fix",
    "## Better Version",
    "## What I Changed",
    "## Tips for Next Time",
];

const SYSTEM_INSTRUCTION: &str = r#"You are a helpful assistant that improves prompts for AI models like GPT-5, Claude, Gemini, and others.

Your job is to:
1. Look at the user's prompt and see what could be better
2. Point out any problems or unclear parts
3. Give them a better version that works well with modern AI models

**What makes modern AI models special:**
- They're really good at following instructions exactly
- They can handle complex tasks step by step
- They're great at coding and problem-solving
- They can be adjusted to be more or less detailed
- They understand context better than older models

**What to look for when improving prompts:**

**Clear Instructions:**
- Remove confusing or contradictory instructions
- Make sure the prompt is specific and clear
- Add backup plans for when things are unclear
- Fix any conflicting instructions

**Task Complexity:**
- Match the detail level to how complex the task is
- For simple tasks, keep it brief
- For complex tasks, be more thorough
- Set clear limits on how much work to do

**Output Control:**
- Specify how detailed the answer should be
- Control how much the AI should explain its thinking
- Make sure the format is what you want
- Set the right level of detail for your needs

**Context and Examples:**
- Provide enough background information
- Give examples when helpful
- Set clear boundaries for what to include
- Balance being thorough with being efficient

Please give your response in this format:

## What I Found
[Simple explanation of what's good and what could be better about their prompt]

## Problems to Fix
- [Problem 1: explain in simple terms]
- [Problem 2: explain in simple terms]
- [Problem 3: explain in simple terms]

## Better Version
[Your improved prompt written in clear, simple language]

## What I Changed
- [Change 1: simple explanation]
- [Change 2: simple explanation]
- [Change 3: simple explanation]

## Tips for Next Time
- [Simple tip 1]
- [Simple tip 2]
- [Simple tip 3]"#;

/// Prompt templates for the critique request
pub struct CritiquePrompts;

impl CritiquePrompts {
    /// The fixed system instruction sent with every request
    pub fn system_instruction() -> &'static str {
        SYSTEM_INSTRUCTION
    }

    /// Build the user message: [`USER_PREFIX`] followed by the prompt, untouched
    pub fn user_message(prompt: &str) -> String {
        format!("{USER_PREFIX}{prompt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_prefix_plus_prompt() {
        let prompt = "  write me an email\n\twith trailing space ";
        let message = CritiquePrompts::user_message(prompt);
        assert_eq!(message, format!("{}{}", USER_PREFIX, prompt));
        assert!(message.ends_with(prompt));
    }

    #[test]
    fn test_user_message_keeps_unicode_verbatim() {
        let prompt = "résumé 🚀 {braces} {{double}}";
        assert_eq!(
            CritiquePrompts::user_message(prompt),
            "Please analyze and improve this prompt:\n\nrésumé 🚀 {braces} {{double}}"
        );
    }

    #[test]
    fn test_system_instruction_mandates_sections_in_order() {
        let instruction = CritiquePrompts::system_instruction();
        let positions: Vec<usize> = SECTION_HEADINGS
            .iter()
            .map(|h| instruction.find(h).expect("heading missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
