//! Per-format writing instructions for content drafting.
//!
//! Ten known format identifiers; anything else falls back to the plain
//! text-post instruction rather than failing validation.

pub const DEFAULT_FORMAT: &str = "text";

const TEXT: &str = "Create a compelling LinkedIn text post. Use short, punchy sentences. \
     Include line breaks for readability. Add relevant emojis sparingly. \
     Keep it conversational and authentic.";

/// Returns the writing instruction for a content format identifier.
///
/// Unrecognized identifiers return the `text` instruction.
#[must_use]
pub fn instruction_for(format: &str) -> &'static str {
    match format {
        "image-text" => {
            "Create text for an image post. Write a brief caption (2-3 sentences) that \
             complements the visual. Include a clear call-to-action. Keep it concise \
             and impactful."
        }
        "carousel" => {
            "Create a carousel post with 5-7 slides. For each slide, provide a title and \
             2-3 bullet points. Structure it as: [Slide 1] Title | Point 1 | Point 2. \
             Make each slide self-contained but part of a cohesive story."
        }
        "poll" => {
            "Create a poll post. Write an engaging question, then provide 4 poll options. \
             Add context explaining why this matters to your audience. Include what \
             insights the poll will reveal."
        }
        "short-video" => {
            "Write a 45-60 second video script. Include: Hook (first 3 seconds), Main \
             points (3-4 key ideas), Call-to-action. Use conversational language. Mark \
             visual cues in [brackets]."
        }
        "long-video" => {
            "Write a 2-3 minute video script. Structure: Strong hook, Problem statement, \
             Solution/insights (3-5 points), Examples, Call-to-action. Include [visual \
             cues] and timing markers."
        }
        "article" => {
            "Write a LinkedIn article/newsletter format. Include: Compelling headline, \
             Brief intro, 3-4 main sections with subheadings, Bullet points or numbered \
             lists, Strong conclusion with takeaway."
        }
        "thread" => {
            "Create a multi-post thread (5-7 posts). Number each post. Start with a hook \
             post. Each subsequent post should expand on one key idea. End with a summary \
             and CTA. Keep each post under 200 characters."
        }
        "quote" => {
            "Create a quote card post. Write a powerful, original quote (1-2 sentences \
             max) that encapsulates the main idea. Add a brief context paragraph \
             explaining the quote's significance."
        }
        "case-study" => {
            "Write a case study snapshot. Structure: Problem, Approach, Key actions \
             (2-3), Result/outcome, Lesson learned. Use specific details. Keep it \
             scannable with clear sections."
        }
        // "text" and everything unrecognized.
        _ => TEXT,
    }
}
