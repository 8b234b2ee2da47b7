use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "prompt-image-gateway")]
#[command(about = "Caching web front end for a remote image generation API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    // Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Image API base url, "/generate-image" is appended
    #[arg(long, default_value = "https://nano-gpt.com/api")]
    pub api_base: String,

    // API credential. Not validated here, a missing key shows up as an upstream auth error
    #[arg(long, env = "NANOGPT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    // Model identifier sent with every request
    #[arg(short, long, default_value = "hidream")]
    pub model: String,

    // Output resolution
    #[arg(short, long, default_value = "1024x1024")]
    pub size: String,

    // Cache TTL in seconds (4 hours)
    #[arg(short, long, default_value_t = 14400)]
    pub cache_ttl: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_service() {
        let args = Args::try_parse_from(["prompt-image-gateway"]).unwrap();
        assert_eq!(args.port, 5000);
        assert_eq!(args.api_base, "https://nano-gpt.com/api");
        assert_eq!(args.model, "hidream");
        assert_eq!(args.size, "1024x1024");
        assert_eq!(args.cache_ttl, 4 * 60 * 60);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "prompt-image-gateway",
            "--port",
            "9090",
            "--api-base",
            "http://localhost:1234",
            "--api-key",
            "secret",
            "--cache-ttl",
            "60",
        ])
        .unwrap();
        assert_eq!(args.port, 9090);
        assert_eq!(args.api_base, "http://localhost:1234");
        assert_eq!(args.api_key.as_deref(), Some("secret"));
        assert_eq!(args.cache_ttl, 60);
    }
}
