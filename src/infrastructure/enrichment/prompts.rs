//! Fixed prompt templates and sampling parameters for the enrichment calls.

pub const TEMPERATURE: f32 = 0.3;
pub const METADATA_MAX_TOKENS: u32 = 512;
pub const SUMMARY_MAX_TOKENS: u32 = 256;

pub const METADATA_SYSTEM_PROMPT: &str = "You analyse news articles. \
Extract the entities mentioned in the article and categorize them into organizations, \
locations, and individuals. Also assign the article to a few topical categories and rate \
its overall sentiment as Positive, Negative, or Neutral. \
Reply with a single JSON object and nothing else, shaped exactly like: \
{\"sentimentScore\": \"Neutral\", \"categories\": [\"National Security\", \"Conflict\"], \
\"entities\": {\"organizations\": [], \"locations\": [], \"individuals\": []}}";

pub const SUMMARY_SYSTEM_PROMPT: &str = "You summarize news articles. \
Write a neutral summary of the article in at most three sentences. \
Reply with the summary text only.";
