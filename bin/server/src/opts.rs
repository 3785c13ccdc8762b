use axum_client_ip::ClientIpSource;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
pub struct HttpOpts {
    /// Address/port for the HTTP listener
    #[arg(long, env = "TEXTPOLISH_HOST", default_value = "0.0.0.0:3030")]
    pub host: String,

    #[arg(
        long,
        value_delimiter = ';',
        default_value = "http://localhost:3000;http://127.0.0.1:3000",
        env = "TEXTPOLISH_CORS_ORIGINS"
    )]
    pub origins: Vec<String>,

    /// Client IP extraction source (default: raw socket via ConnectInfo).
    #[arg(long, default_value = "ConnectInfo", env = "TEXTPOLISH_CLIENT_IP_SOURCE")]
    pub client_ip_source: ClientIpSource,
}

#[derive(Clone, Debug, Parser)]
pub struct UpstreamOpts {
    /// OpenAI API key. When unset the server still boots and every request
    /// answers with a configuration error.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    /// Chat model used for every operation
    #[arg(long, default_value = "gpt-4o-mini", env = "TEXTPOLISH_MODEL")]
    pub model: String,

    /// Base URL of the chat-completions API
    #[arg(
        long,
        default_value = "https://api.openai.com/v1",
        env = "TEXTPOLISH_UPSTREAM_URL"
    )]
    pub upstream_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value = "30", env = "TEXTPOLISH_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: u64,
}
