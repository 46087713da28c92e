use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fancylists")]
#[command(author, version)]
#[command(about = "Render Markdown with fancy list markers to HTML")]
#[command(
    long_about = "fancylists converts Markdown to HTML with Pandoc-style fancy ordered lists: \
    alphabetic (a. A.), roman (i. I.) and numeric markers, plus #. for auto-numbered items. \
    A marker whose type differs from the open list starts a new list."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    fancylists render notes.md

    # Render from stdin to a file
    cat notes.md | fancylists render -o notes.html

    # Inspect the block tree
    fancylists parse notes.md

CONFIGURATION:

fancylists looks for configuration files in this order:
  1. Explicit --config path
  2. fancylists.toml or .fancylists.toml in current/parent directories
  3. ~/.config/fancylists/config.toml (XDG)
  4. Built-in defaults

Example .fancylists.toml:

    xhtml = false
    line_ending = \"auto\"

    [extensions]
    fancy_lists = true
    block_attributes = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, fancylists will \
        search for .fancylists.toml or fancylists.toml in the input's directory and its \
        parents, then fall back to ~/.config/fancylists/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Markdown document to HTML
    #[command(
        long_about = "Convert a Markdown document to HTML. Ordered lists are emitted as \
        <ol class=\"fancy fl-...\" type=\"...\" start=\"...\"> so the marker style survives \
        in browsers and stylesheets."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    fancylists render notes.md

    # Render from stdin
    printf 'a. one\\nb. two\\n' | fancylists render

    # Self-closing void elements
    fancylists render --xhtml notes.md")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(short, long)]
        #[arg(help = "Write HTML to this file")]
        output: Option<PathBuf>,

        /// Emit `<br />` and `<hr />`
        #[arg(long)]
        #[arg(help = "Self-close void elements, overriding the config")]
        xhtml: bool,
    },
    /// Parse and display the block tree for debugging
    #[command(
        long_about = "Parse a document and print its block tree, one node per line. Lists \
        show their marker, start number and tightness; list attributes such as the fancy \
        type appear in brackets."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the tree
    fancylists parse notes.md

    # Parse from stdin
    echo 'i. one' | fancylists parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to parse. If not provided, reads from stdin. \
            The parser respects extension flags from the configuration file."
        )]
        file: Option<PathBuf>,
    },
}
