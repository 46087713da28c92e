pub mod block_parser;
pub mod config;
pub mod renderer;
pub mod syntax;

pub use config::Config;
pub use config::ConfigBuilder;
pub use config::LineEnding;
pub use renderer::{HtmlRenderer, RenderOptions};
pub use syntax::Document;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn detect_line_ending(input: &str) -> &str {
    // Check for first occurrence of \r\n or \n
    let rn_pos = input.find("\r\n");
    let n_pos = input.find('\n');

    if let (Some(rn), Some(n)) = (rn_pos, n_pos) {
        if rn < n {
            return "\r\n";
        }
    } else if rn_pos.is_some() {
        return "\r\n";
    }

    "\n"
}

/// Parses a Markdown document into its block tree.
///
/// Line endings are normalized to `\n` first, so the returned document's
/// source may differ from `input`.
///
/// # Examples
///
/// ```rust
/// use fancylists::parse;
///
/// let doc = parse("a. one\nb. two\n", None);
/// print!("{}", doc.dump());
/// ```
pub fn parse(input: &str, config: Option<Config>) -> Document {
    let normalized_input = input.replace("\r\n", "\n");
    let config = config.unwrap_or_default();
    let tree = block_parser::BlockParser::new(&normalized_input, &config).parse();
    Document::new(normalized_input, tree)
}

/// Renders a parsed document to HTML.
pub fn render(document: &Document, config: &Config) -> String {
    HtmlRenderer::new(document, RenderOptions::from(config)).render()
}

/// Converts Markdown to HTML.
///
/// # Examples
///
/// ```rust
/// let html = fancylists::to_html("i. one\nii. two\n", None);
/// assert!(html.starts_with(r#"<ol class="fancy fl-lcroman" type="i" start="1">"#));
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown source
/// * `config` - Optional configuration (defaults to default config)
pub fn to_html(input: &str, config: Option<Config>) -> String {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let line_ending = match config.line_ending {
        LineEnding::Auto => detect_line_ending(input),
        LineEnding::Lf => "\n",
        LineEnding::Crlf => "\r\n",
    };

    let document = parse(input, Some(config.clone()));
    let out = render(&document, &config);

    if line_ending == "\r\n" {
        out.replace('\n', "\r\n")
    } else {
        out
    }
}
