use clap::{Parser, Subcommand};

use crate::expert::Operation;

#[derive(Parser, Debug)]
#[command(name = "word-guru")]
#[command(about = "word-guru: your language expert")]
#[command(version)]
pub struct Args {
    /// Disable the response cache for this call
    #[arg(short = 'n', long, global = true)]
    pub no_cache: bool,

    /// Model name (overrides the configuration file)
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// OpenAI-compatible API endpoint URL (overrides the configuration file)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Only print the answer
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print cache and request diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get the definition of a word in the given language
    GetDefinition {
        /// The word you ask for the definition
        word: String,
        /// The ISO 639-3 code of the language, e.g. eng
        language: String,
    },
    /// Get synonyms of a word in the given language
    GetSynonym {
        /// The word you ask synonyms for
        word: String,
        /// The ISO 639-3 code of the language, e.g. eng
        language: String,
    },
    /// Get the words that best match a description
    GetReverseDefinition {
        /// The description of the word you are looking for
        text: String,
        /// The ISO 639-3 code of the language, e.g. eng
        language: String,
    },
    /// Get sentences using a word in its different meanings
    GetUsageExamples {
        /// The word you want usage examples for
        word: String,
        /// The ISO 639-3 code of the language, e.g. eng
        language: String,
    },
    /// Get the part-of-speech tags of the most common uses of a word
    GetPosTag {
        /// The word you want part-of-speech tags for
        word: String,
        /// The ISO 639-3 code of the language, e.g. eng
        language: String,
    },
    /// Translate a word, an expression or a text
    Translate {
        /// The word or expression you want to translate
        word: String,
        /// The ISO 639-3 code of the original language, e.g. eng
        #[arg(value_name = "FROM_LANGUAGE")]
        from_language: String,
        /// The ISO 639-3 code of the translation, e.g. fra
        #[arg(value_name = "TO_LANGUAGE")]
        to_language: String,
    },
    /// Get the corrected version of a text
    CorrectText {
        /// The text you want a correction for
        text: String,
        /// The ISO 639-3 code of the language, e.g. eng
        language: String,
    },
    /// List supported language codes
    Languages,
    /// Show the configuration file in use
    Setup {
        #[command(subcommand)]
        command: Option<SetupCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SetupCommand {
    /// Create a configuration file in the current directory
    Init,
}

impl Command {
    /// The query this subcommand asks: operation, payload and language codes.
    ///
    /// `None` for subcommands that do not query the model.
    pub fn query(&self) -> Option<(Operation, &str, Vec<&str>)> {
        let query = match self {
            Self::GetDefinition { word, language } => {
                (Operation::Definition, word.as_str(), vec![language.as_str()])
            }
            Self::GetSynonym { word, language } => {
                (Operation::Synonym, word.as_str(), vec![language.as_str()])
            }
            Self::GetReverseDefinition { text, language } => (
                Operation::ReverseDefinition,
                text.as_str(),
                vec![language.as_str()],
            ),
            Self::GetUsageExamples { word, language } => (
                Operation::UsageExamples,
                word.as_str(),
                vec![language.as_str()],
            ),
            Self::GetPosTag { word, language } => {
                (Operation::PosTag, word.as_str(), vec![language.as_str()])
            }
            Self::Translate {
                word,
                from_language,
                to_language,
            } => (
                Operation::Translation,
                word.as_str(),
                vec![from_language.as_str(), to_language.as_str()],
            ),
            Self::CorrectText { text, language } => {
                (Operation::Correction, text.as_str(), vec![language.as_str()])
            }
            Self::Languages | Self::Setup { .. } => return None,
        };
        Some(query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_translate_query_keeps_language_order() {
        let args = Args::try_parse_from(["word-guru", "translate", "word", "eng", "fra"]).unwrap();
        let (operation, payload, languages) = args.command.query().unwrap();

        assert_eq!(operation, Operation::Translation);
        assert_eq!(payload, "word");
        assert_eq!(languages, vec!["eng", "fra"]);
    }

    #[test]
    fn test_every_operation_has_a_subcommand() {
        let cases = [
            ("get-definition", Operation::Definition),
            ("get-synonym", Operation::Synonym),
            ("get-reverse-definition", Operation::ReverseDefinition),
            ("get-usage-examples", Operation::UsageExamples),
            ("get-pos-tag", Operation::PosTag),
            ("correct-text", Operation::Correction),
        ];
        for (subcommand, expected) in cases {
            let args = Args::try_parse_from(["word-guru", subcommand, "payload", "ita"]).unwrap();
            let (operation, payload, languages) = args.command.query().unwrap();
            assert_eq!(operation, expected);
            assert_eq!(payload, "payload");
            assert_eq!(languages, vec!["ita"]);
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "word-guru",
            "get-synonym",
            "passion",
            "eng",
            "--no-cache",
            "-m",
            "gpt-4o-mini",
        ])
        .unwrap();

        assert!(args.no_cache);
        assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["word-guru", "-q", "-v", "languages"]).is_err());
    }

    #[test]
    fn test_non_query_subcommands() {
        let args = Args::try_parse_from(["word-guru", "setup", "init"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Setup {
                command: Some(SetupCommand::Init)
            }
        ));
        assert!(args.command.query().is_none());
    }
}
