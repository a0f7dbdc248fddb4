/// One leaf component of the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    /// Sub-module of the category the component lives in.
    pub module: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

const fn entry(
    name: &'static str,
    module: &'static str,
    display_name: &'static str,
    description: &'static str,
) -> Entry {
    Entry { name, module, display_name, description }
}

/// Public names of the category, in listing order.
pub const DECLARED: [&str; 28] = [
    "AlterMetadataComponent",
    "BatchRunComponent",
    "CombineTextComponent",
    "CreateDataComponent",
    "DataFilterComponent",
    "DataFrameOperationsComponent",
    "DataOperationsComponent",
    "DataToDataFrameComponent",
    "ExtractDataKeyComponent",
    "FilterDataComponent",
    "JSONCleaner",
    "LLMRouterComponent",
    "LambdaFilterComponent",
    "MergeDataComponent",
    "MessageToDataComponent",
    "ParseDataComponent",
    "ParseDataFrameComponent",
    "ParseJSONDataComponent",
    "ParserComponent",
    "PromptComponent",
    "PythonREPLComponent",
    "RegexExtractorComponent",
    "SaveToFileComponent",
    "SelectDataComponent",
    "SplitTextComponent",
    "StructuredOutputComponent",
    "TypeConverterComponent",
    "UpdateDataComponent",
];

/// Where each name lives. Kept apart from [`DECLARED`] so the two lists are
/// checked against each other when the category registry is built.
pub const ENTRIES: [Entry; 28] = [
    entry("AlterMetadataComponent", "alter_metadata", "Alter Metadata", "Adds or removes key-value pairs in the metadata of messages and data."),
    entry("BatchRunComponent", "batch_run", "Batch Run", "Runs a language model over each row of a DataFrame column."),
    entry("CombineTextComponent", "combine_text", "Combine Text", "Concatenates two text sources into one using a delimiter."),
    entry("TypeConverterComponent", "converter", "Type Convert", "Converts between message, data and DataFrame values."),
    entry("CreateDataComponent", "create_data", "Create Data", "Builds a data object from a dynamic set of fields."),
    entry("DataOperationsComponent", "data_operations", "Data Operations", "Performs selection, filtering and key operations on data."),
    entry("DataToDataFrameComponent", "data_to_dataframe", "Data to DataFrame", "Collects data objects into a single DataFrame."),
    entry("DataFrameOperationsComponent", "dataframe_operations", "DataFrame Operations", "Filters, sorts and reshapes a DataFrame."),
    entry("ExtractDataKeyComponent", "extract_key", "Extract Key", "Extracts one key from a data object or a list of them."),
    entry("FilterDataComponent", "filter_data", "Filter Data", "Keeps only the selected keys of a data object."),
    entry("DataFilterComponent", "filter_data_values", "Filter Values", "Filters a list of data objects by a key and value condition."),
    entry("JSONCleaner", "json_cleaner", "JSON Cleaner", "Repairs and normalizes JSON strings produced by language models."),
    entry("LambdaFilterComponent", "lambda_filter", "Smart Function", "Uses a language model to generate a filter function for data."),
    entry("LLMRouterComponent", "llm_router", "LLM Router", "Routes a request to the most suitable model for the task."),
    entry("MergeDataComponent", "merge_data", "Combine Data", "Combines several data sources into one DataFrame."),
    entry("MessageToDataComponent", "message_to_data", "Message to Data", "Converts a message into a data object."),
    entry("ParseDataComponent", "parse_data", "Data to Message", "Renders data objects into text through a template."),
    entry("ParseDataFrameComponent", "parse_dataframe", "Parse DataFrame", "Renders each DataFrame row into text through a template."),
    entry("ParseJSONDataComponent", "parse_json_data", "Parse JSON", "Queries JSON input with a JQ expression."),
    entry("ParserComponent", "parser", "Parser", "Formats data or DataFrame input into text."),
    entry("PromptComponent", "prompt", "Prompt Template", "Creates a prompt template with dynamic variables."),
    entry("PythonREPLComponent", "python_repl_core", "Python Interpreter", "Runs Python code with a configurable set of imports."),
    entry("RegexExtractorComponent", "regex", "Regex Extractor", "Extracts patterns from text with a regular expression."),
    entry("SaveToFileComponent", "save_file", "Save File", "Writes data, messages or DataFrames to a file."),
    entry("SelectDataComponent", "select_data", "Select Data", "Picks one data object from a list by index."),
    entry("SplitTextComponent", "split_text", "Split Text", "Splits text into chunks by length and separator."),
    entry("StructuredOutputComponent", "structured_output", "Structured Output", "Extracts structured fields from model output against a schema."),
    entry("UpdateDataComponent", "update_data", "Update Data", "Updates fields of existing data objects."),
];
