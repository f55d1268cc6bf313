//! Prompt templates for the three generation call sites.
//!
//! Pure string assembly: niche and persona are embedded verbatim, the
//! requested output cardinality and JSON shape are spelled out, and each
//! template ends with a JSON-only instruction. The model may still wrap its
//! answer in prose; recovering from that is the extractor's job, not ours.
//!
//! User input is intentionally not sanitized or length-capped here.
//! Hostile niche/persona strings flow straight into the prompt; the only
//! hard limit on prompt size is the caller-truncated scrape excerpt.

use crate::formats::instruction_for;

/// Prompt asking for 10-12 ranked content sources as a JSON array.
#[must_use]
pub fn discover_sources(niche: &str, persona: &str) -> String {
    format!(
        r#"You are a content discovery assistant. Given the niche "{niche}" and target persona "{persona}", identify and rank the top 10-12 most relevant content sources for content inspiration.

Your task:
1. Find highly relevant, popular, and actively updated content sources
2. Rank them by relevance to the specific niche and target persona
3. For each source, explain in one short line (max 80 characters) why it's useful for content inspiration

For each source, provide:
- name: The exact name of the website, blog, YouTube channel, or creator
- url: The full URL (must be a real, working URL)
- description: A one-line description showing what they cover
- type: One of: Website, Blog, YouTube, LinkedIn, Newsletter, Podcast
- relevanceReason: One short line explaining why this source is valuable for content inspiration (max 80 characters)

Criteria for ranking:
- Direct relevance to the niche and target persona (highest priority)
- Quality and trustworthiness of content
- Popularity and influence in the space
- Active content production
- Diversity of content types

Respond ONLY with a valid JSON array, ranked from most relevant to least relevant, in this exact format:
[
  {{
    "name": "Example Blog",
    "url": "https://example.com",
    "description": "Leading insights on topic",
    "type": "Blog",
    "relevanceReason": "Top authority in the space with daily actionable content"
  }}
]

Do not include any other text, just the JSON array with 10-12 sources ranked by relevance."#
    )
}

/// Prompt asking for exactly 5 post ideas drawn from a scraped excerpt.
///
/// `excerpt` is expected to be already cleaned and truncated by the caller.
#[must_use]
pub fn generate_ideas(niche: &str, persona: &str, source_url: &str, excerpt: &str) -> String {
    format!(
        r#"Given this content, generate EXACTLY 5 LinkedIn-ready ideas for the {niche} that resonate with {persona}. For each, output a 'hook' and a one-line 'why_it_works' tied to the audience's pains/desires. Keep it concise, practical, and non-generic.

Source URL: {source_url}
Scraped Excerpt:
{excerpt}

Format your response as a JSON array with this exact structure:
[
  {{
    "hook": "compelling 1-line LinkedIn hook",
    "why_it_works": "1 sentence explaining why this idea fits the niche and persona"
  }}
]

Make sure each idea is specifically tailored to {niche} professionals and addresses the real needs and desires of {persona}."#
    )
}

/// Prompt asking for a complete post draft in the given format.
///
/// Unlike the other two templates the expected output is free-form text,
/// not JSON. Unknown formats silently use the plain-text instruction.
#[must_use]
pub fn generate_content(
    hook: &str,
    why_it_works: &str,
    format: &str,
    niche: &str,
    persona: &str,
) -> String {
    let format_instruction = instruction_for(format);
    format!(
        r"You are a LinkedIn content creator for {niche} professionals targeting {persona}.

Content Idea Hook: {hook}
Why It Works: {why_it_works}

Format: {format}
{format_instruction}

Create engaging, human-like content based on this idea. Use short sentences. Be conversational. Sound authentic, not robotic. Make it practical and actionable for {persona}.

Write the complete {format} content now:"
    )
}
