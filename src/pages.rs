//! HTML pages served by the front end.

const STYLE: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;padding:0 1rem}\
img{max-width:100%;height:auto}.error{color:#b00020}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Percent-encodes everything outside the unreserved set
fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

pub fn index_page() -> String {
    layout(
        "Image Generator",
        "<h1>Image Generator</h1>\n\
         <form action=\"/generate\" method=\"get\">\n\
         <input type=\"text\" name=\"prompt\" placeholder=\"Describe an image\" size=\"60\" required>\n\
         <label><input type=\"checkbox\" name=\"embed\" value=\"true\"> image only</label>\n\
         <button type=\"submit\">Generate</button>\n\
         </form>",
    )
}

pub fn result_page(prompt: &str, image_data: &str) -> String {
    let prompt_html = escape_html(prompt);
    let image_html = escape_html(image_data);
    let embed_url = format!("/generate?prompt={}&amp;embed=true", encode_query_value(prompt));
    layout(
        "Generated Image",
        &format!(
            "<h1>Generated Image</h1>\n\
             <p class=\"prompt\">{prompt_html}</p>\n\
             <img src=\"data:image/png;base64,{image_html}\" alt=\"{prompt_html}\">\n\
             <p><a href=\"{embed_url}\">Direct image link</a> | <a href=\"/\">New prompt</a></p>"
        ),
    )
}

pub fn error_page(message: &str) -> String {
    layout(
        "Error",
        &format!(
            "<h1>Error</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back</a></p>",
            escape_html(message)
        ),
    )
}
