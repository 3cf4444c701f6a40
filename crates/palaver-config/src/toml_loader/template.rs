//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Palaver Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[completion]
# endpoint = "https://api.openai.com/v1/chat/completions"
# model = "gpt-3.5-turbo"
# max_tokens = 150            # 1-32768
# temperature = 0.7           # 0.0-2.0
# connect_timeout_secs = 10   # 1-300
# request_timeout_secs = 120  # 1-600
# The credential is read from PALAVER_API_KEY or OPENAI_API_KEY first.
# api_key = ""

[session]
# max_turns = 20              # 1-1000, system prompt included
# system_prompt = "You are a helpful AI assistant. Keep your responses conversational and friendly."

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
}
