//! Names of the component categories under the component package.

/// Categories published by the top-level registry, in listing order.
pub const CATEGORIES: [&str; 73] = [
    "Notion", "agentql", "agents", "aiml", "amazon", "anthropic", "apify", "arxiv",
    "assemblyai", "azure", "baidu", "bing", "cleanlab", "cloudflare", "cohere", "composio",
    "confluence", "crewai", "custom_component", "data", "datastax", "deepseek", "docling",
    "duckduckgo", "embeddings", "exa", "firecrawl", "git", "glean", "google", "groq", "helpers",
    "homeassistant", "huggingface", "ibm", "icosacomputing", "input_output",
    "langchain_utilities", "langwatch", "lmstudio", "logic", "maritalk", "mem0", "mistral",
    "models", "needle", "notdiamond", "novita", "nvidia", "olivya", "ollama", "openai",
    "openrouter", "perplexity", "processing", "prototypes", "redis", "sambanova", "scrapegraph",
    "searchapi", "serpapi", "tavily", "tools", "twelvelabs", "unstructured", "vectorstores",
    "vertexai", "wikipedia", "wolframalpha", "xai", "yahoosearch", "youtube", "zep",
];

/// Categories with a recorded location, in registration order. Every entry is
/// the sub-module of the same name under the package.
///
/// Maintained apart from [`CATEGORIES`]; building the registry proves the two agree.
pub const MAPPED: [&str; 73] = [
    "agents", "data", "processing", "vectorstores", "tools", "models", "embeddings", "helpers",
    "input_output", "logic", "custom_component", "prototypes", "openai", "anthropic", "google",
    "azure", "huggingface", "ollama", "groq", "cohere", "mistral", "deepseek", "nvidia",
    "amazon", "vertexai", "xai", "perplexity", "openrouter", "lmstudio", "sambanova",
    "maritalk", "novita", "olivya", "notdiamond", "needle", "cloudflare", "baidu", "aiml",
    "ibm", "langchain_utilities", "crewai", "composio", "mem0", "datastax", "cleanlab",
    "langwatch", "icosacomputing", "homeassistant", "agentql", "assemblyai", "twelvelabs",
    "docling", "unstructured", "redis", "zep", "bing", "duckduckgo", "serpapi", "searchapi",
    "tavily", "exa", "glean", "yahoosearch", "apify", "arxiv", "confluence", "firecrawl", "git",
    "wikipedia", "youtube", "scrapegraph", "Notion", "wolframalpha",
];
