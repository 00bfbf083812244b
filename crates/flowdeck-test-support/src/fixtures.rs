//! Catalog and settings payloads shared by integration suites.
//!
//! Fixtures are plain JSON so consumers decode them through their own public
//! entry points.

use serde_json::{Value, json};

/// Small registry payload mixing active, legacy, beta, and unflagged records.
#[must_use]
pub fn registry_catalog() -> Value {
    json!({
        "inputs": {
            "ChatInput": {
                "display_name": "Chat Input",
                "description": "Get chat inputs from the Playground.",
                "legacy": false,
                "icon": "MessagesSquare"
            },
            "TextInput": {
                "display_name": "Text Input",
                "description": "Get text inputs from the Playground."
            },
            "PromptInput": {
                "display_name": "Prompt Input",
                "legacy": true
            }
        },
        "models": {
            "OpenAIModel": {
                "display_name": "OpenAI",
                "description": "Generates text using OpenAI LLMs.",
                "legacy": false
            },
            "AgentModel": {
                "display_name": "Agent",
                "beta": true
            }
        },
        "deprecated": {
            "OldSplitter": {
                "display_name": "Character Text Splitter",
                "legacy": true,
                "template": { "chunk_size": { "value": 1000 } }
            }
        },
        "helpers": {}
    })
}

/// Number of records in [`registry_catalog`].
pub const REGISTRY_ITEM_COUNT: usize = 6;

/// Number of legacy records in [`registry_catalog`].
pub const REGISTRY_LEGACY_COUNT: usize = 2;

/// Settings document exercising every supported field.
#[must_use]
pub fn sidebar_settings() -> Value {
    json!({
        "show_legacy": false,
        "show_beta": false,
        "search": "input",
        "hide_empty_categories": true,
        "log_level": "debug",
        "log_format": "json"
    })
}
