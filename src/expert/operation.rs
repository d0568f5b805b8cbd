use std::fmt;

/// The questions the language expert can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Definition,
    Synonym,
    ReverseDefinition,
    UsageExamples,
    PosTag,
    Translation,
    Correction,
}

impl Operation {
    pub const ALL: [Self; 7] = [
        Self::Definition,
        Self::Synonym,
        Self::ReverseDefinition,
        Self::UsageExamples,
        Self::PosTag,
        Self::Translation,
        Self::Correction,
    ];

    /// Name of the instruction template rendered for this operation.
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Definition => "get-simple-definition",
            Self::Synonym => "get-synonym",
            Self::ReverseDefinition => "get-reverse-definition",
            Self::UsageExamples => "get-usage-examples",
            Self::PosTag => "get-pos-tag",
            Self::Translation => "get-translation",
            Self::Correction => "get-correction",
        }
    }

    /// Template variables bound, in order, to the request's language codes.
    pub const fn language_variables(self) -> &'static [&'static str] {
        match self {
            Self::Translation => &["from_language_name", "to_language_name"],
            _ => &["language_name"],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::Synonym => "synonym",
            Self::ReverseDefinition => "reverse-definition",
            Self::UsageExamples => "usage-examples",
            Self::PosTag => "pos-tag",
            Self::Translation => "translation",
            Self::Correction => "correction",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One query: an operation, the text it acts upon and its language codes.
///
/// `languages` holds one ISO 639-3 code per entry of
/// [`Operation::language_variables`].
#[derive(Debug, Clone, Copy)]
pub struct OperationRequest<'a> {
    pub operation: Operation,
    pub payload: &'a str,
    pub languages: &'a [&'a str],
}

impl<'a> OperationRequest<'a> {
    pub const fn new(operation: Operation, payload: &'a str, languages: &'a [&'a str]) -> Self {
        Self {
            operation,
            payload,
            languages,
        }
    }
}
