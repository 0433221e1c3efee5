//! Prompt text sent to the model by each tool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Locale, ValidationError};

/// Prompt asking the model for writing suggestions as a JSON array.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and provide specific suggestions for improvement. Focus on grammar, spelling, punctuation, style, and clarity.

Text to analyze:
"{text}"

Respond with a JSON array of suggestion objects. Each object should have:
- category: one of "grammar", "spelling", "punctuation", "style", or "clarity"
- issue: the EXACT text that needs improvement
- suggestion: the corrected or improved version
- explanation: a brief explanation of why this change improves the text

Only include actual issues that need correction. If the text is perfect, return an empty array.

Your entire response must be a valid JSON array. DO NOT include any text outside the JSON structure."#
    )
}

/// Tone of a composed email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTone {
    #[default]
    Professional,
    Warm,
    Concise,
    Formal,
    Casual,
    Persuasive,
}

impl EmailTone {
    pub fn all() -> [EmailTone; 6] {
        [
            EmailTone::Professional,
            EmailTone::Warm,
            EmailTone::Concise,
            EmailTone::Formal,
            EmailTone::Casual,
            EmailTone::Persuasive,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailTone::Professional => "professional",
            EmailTone::Warm => "warm",
            EmailTone::Concise => "concise",
            EmailTone::Formal => "formal",
            EmailTone::Casual => "casual",
            EmailTone::Persuasive => "persuasive",
        }
    }
}

impl fmt::Display for EmailTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmailTone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailTone::all()
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("tone", format!("unknown tone '{}'", s)))
    }
}

/// Input for composing an email from rough notes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailDraft {
    pub raw_thoughts: String,
    pub tone: EmailTone,
    /// Email being replied to, if any.
    pub context_email: Option<String>,
    pub locale: Locale,
}

impl EmailDraft {
    pub fn new(raw_thoughts: impl Into<String>, tone: EmailTone, locale: Locale) -> Self {
        Self {
            raw_thoughts: raw_thoughts.into(),
            tone,
            context_email: None,
            locale,
        }
    }

    pub fn replying_to(mut self, email: impl Into<String>) -> Self {
        self.context_email = Some(email.into());
        self
    }

    pub fn prompt(&self) -> String {
        let context = match self.context_email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => {
                format!("\n\nContext - I am responding to this email:\n\"{}\"\n\n", email)
            }
            _ => String::new(),
        };
        let tone = self.tone;
        let locale = self.locale;
        let raw = &self.raw_thoughts;

        format!(
            r#"You are an expert email writer. Transform the following raw thoughts into a well-crafted email with a {tone} tone.

Raw thoughts: "{raw}"{context}

Instructions:
- Write a complete, professional email body
- Use a {tone} tone throughout
- Make it clear, engaging, and well-structured
- Ensure proper email etiquette
- Do not include a subject line

Please respond in {locale} language.

Respond with ONLY the email body content. Do not include any explanations or additional text outside of the email."#
        )
    }
}

/// Kind of prompt to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    #[default]
    Creative,
    Technical,
    Educational,
    Business,
    Research,
    Storytelling,
}

impl PromptType {
    pub fn all() -> [PromptType; 6] {
        [
            PromptType::Creative,
            PromptType::Technical,
            PromptType::Educational,
            PromptType::Business,
            PromptType::Research,
            PromptType::Storytelling,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Creative => "creative",
            PromptType::Technical => "technical",
            PromptType::Educational => "educational",
            PromptType::Business => "business",
            PromptType::Research => "research",
            PromptType::Storytelling => "storytelling",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptType::Creative => "For artistic and imaginative tasks",
            PromptType::Technical => "For coding and analytical tasks",
            PromptType::Educational => "For learning and teaching content",
            PromptType::Business => "For professional and marketing content",
            PromptType::Research => "For academic and analytical work",
            PromptType::Storytelling => "For narrative and character development",
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PromptType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptType::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("prompt_type", format!("unknown type '{}'", s))
            })
    }
}

/// Target length of a generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl PromptLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptLength::Short => "short",
            PromptLength::Medium => "medium",
            PromptLength::Long => "long",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptLength::Short => "Concise and focused",
            PromptLength::Medium => "Balanced detail level",
            PromptLength::Long => "Comprehensive and detailed",
        }
    }
}

impl fmt::Display for PromptLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PromptLength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(PromptLength::Short),
            "medium" => Ok(PromptLength::Medium),
            "long" => Ok(PromptLength::Long),
            _ => Err(ValidationError::invalid_format(
                "length",
                format!("unknown length '{}'", s),
            )),
        }
    }
}

/// Input for turning rough text into a model prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptBrief {
    pub text: String,
    pub prompt_type: PromptType,
    pub length: PromptLength,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub context: Option<String>,
}

impl PromptBrief {
    pub fn new(text: impl Into<String>, prompt_type: PromptType, length: PromptLength) -> Self {
        Self {
            text: text.into(),
            prompt_type,
            length,
            ..Default::default()
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn prompt(&self) -> String {
        let optional = |label: &str, value: &Option<String>| match value.as_deref() {
            Some(v) if !v.trim().is_empty() => format!("\n{}: {}", label, v),
            _ => String::new(),
        };
        let extras = [
            optional("Target Audience", &self.audience),
            optional("Desired Tone", &self.tone),
            optional("Additional Context", &self.context),
        ]
        .concat();

        let text = &self.text;
        let kind = self.prompt_type;
        let kind_desc = kind.description();
        let length = self.length;
        let length_desc = length.description();

        format!(
            r#"You are an expert prompt engineer. Transform the following basic text into a detailed, effective prompt for AI models.

Original Text: "{text}"

Requirements:
- Prompt Type: {kind} ({kind_desc})
- Length: {length} ({length_desc}){extras}

Instructions:
- Create a clear, specific, and actionable prompt
- Include relevant context and constraints
- Structure the prompt for optimal AI understanding
- Make it engaging and result-oriented
- Add specific formatting instructions if needed
- Include examples or guidance where appropriate

Generate a {length} {kind} prompt that will produce high-quality results when used with AI models.

Respond with ONLY the enhanced prompt. Do not include explanations or additional text."#
        )
    }
}

/// Prompt asking the model to improve an already generated prompt.
pub fn enhance_prompt(existing: &str) -> String {
    format!(
        r#"Take this existing prompt and enhance it further by adding more detail, specificity, and effectiveness:

"{existing}"

Make it more:
- Specific and detailed
- Result-oriented
- Structured for AI understanding
- Include better examples or constraints
- Add formatting requirements if beneficial
- Provide guidance or examples where needed
- Write clear, actionable instructions
- Write the prompt point wise and clearly and use line breaks

Respond with ONLY the enhanced prompt."#
    )
}

/// Source code to translate between programming languages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub from_language: String,
    #[serde(default)]
    pub to_language: String,
}

impl TranslationRequest {
    pub fn new(
        code: impl Into<String>,
        from_language: impl Into<String>,
        to_language: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            from_language: from_language.into(),
            to_language: to_language.into(),
        }
    }

    /// Name of the first blank field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("code", &self.code),
            ("fromLanguage", &self.from_language),
            ("toLanguage", &self.to_language),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    pub fn prompt(&self) -> String {
        let (from, to, code) = (&self.from_language, &self.to_language, &self.code);
        format!(
            r#"Translate the following {from} code to {to}.

Requirements:
- Only return the translated code without any explanations
- Write all Code needed for the target language
- Do not include markdown formatting or code blocks
- Maintain the same functionality and logic
- Use best practices for the target language
- Preserve comments if they exist

Source code:
{code}"#
        )
    }
}
