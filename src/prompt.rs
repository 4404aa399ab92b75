//! Prompt assembly for Mistral-instruct style completion models.

/// Opening instruction delimiter required by the Mistral-instruct
/// model family.
pub const INST_OPEN: &str = "[INST]";

/// Closing instruction delimiter required by the Mistral-instruct
/// model family.
pub const INST_CLOSE: &str = "[/INST]";

/// Assembles retrieval results and a user query into a fixed-structure
/// instruction prompt.
///
/// The output always contains exactly one `[INST] … [/INST]` pair, the
/// literal query text, and a `SUGGESTED_TITLES:` marker the model is
/// asked to continue after. Retrieved snippets are listed under a
/// `RETRIEVED_TITLES:` block so the model can condition on their style;
/// the block is omitted when nothing was retrieved.
///
/// # Example
///
/// ```rust,ignore
/// use movie_rag::PromptAssembler;
///
/// let assembler = PromptAssembler::new();
/// let prompt = assembler.assemble("Western romance", &retrieved);
/// assert!(prompt.contains("[INST]"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAssembler;

impl PromptAssembler {
    /// Create a new prompt assembler.
    pub fn new() -> Self {
        Self
    }

    /// Build the instruction prompt for `query_text` and the retrieved
    /// documents.
    ///
    /// Deterministic: the same inputs always produce the same prompt.
    pub fn assemble(&self, query_text: &str, retrieved: &[String]) -> String {
        let mut prompt = String::new();
        prompt.push_str(INST_OPEN);
        prompt.push_str("\n\n");
        prompt.push_str(
            "Your main task is to generate 5 SUGGESTED_TITLES based on the MOVIE_TITLE and PLOT.\n\n",
        );
        prompt.push_str(
            "You should mimic a similar style and length as the RETRIEVED_TITLES but PLEASE DO NOT \
             include them in the SUGGESTED_TITLES, only generate versions of the MOVIE_TITLE.\n\n",
        );

        if !retrieved.is_empty() {
            prompt.push_str("RETRIEVED_TITLES:\n");
            for text in retrieved {
                prompt.push_str("- ");
                prompt.push_str(text);
                prompt.push('\n');
            }
            prompt.push('\n');
        }

        prompt.push_str("MOVIE_TITLE and PLOT: ");
        prompt.push_str(query_text);
        prompt.push_str("\n\n");
        prompt.push_str("SUGGESTED_TITLES:\n\n");
        prompt.push_str(INST_CLOSE);
        prompt
    }
}
