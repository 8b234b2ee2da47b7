use serde::{Deserialize, Serialize};

// Image API request format
#[derive(Serialize, Debug)]
pub struct ImageRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u32,
    pub size: &'a str,
}

// Image API response format
#[derive(Deserialize, Debug)]
pub struct ImageResponse {
    pub data: Vec<ImageOutput>,
}

#[derive(Deserialize, Debug)]
pub struct ImageOutput {
    pub b64_json: String,
}

// Query string of GET /generate
#[derive(Debug, Default)]
pub struct GenerateParams {
    pub prompt: String,
    pub embed: Option<String>,
}

impl GenerateParams {
    // First occurrence wins for repeated keys
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = GenerateParams::default();
        let mut seen_prompt = false;
        for (key, value) in pairs {
            match key.as_str() {
                "prompt" if !seen_prompt => {
                    params.prompt = value;
                    seen_prompt = true;
                }
                "embed" if params.embed.is_none() => params.embed = Some(value),
                _ => {}
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let params = GenerateParams::from_pairs(pairs(&[
            ("prompt", "fox"),
            ("embed", "true"),
            ("prompt", "wolf"),
            ("embed", "false"),
        ]));
        assert_eq!(params.prompt, "fox");
        assert_eq!(params.embed.as_deref(), Some("true"));
    }

    #[test]
    fn missing_keys_default() {
        let params = GenerateParams::from_pairs(pairs(&[("other", "x")]));
        assert!(params.prompt.is_empty());
        assert!(params.embed.is_none());
    }
}
