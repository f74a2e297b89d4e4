use clap::{Parser, Subcommand};
use prettify_html::PrettyConfig;
use std::path::Path;

#[derive(Parser)]
#[command(name = "prettify")]
#[command(about = "prettify — source-code syntax highlighter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a source file to a standalone highlighted HTML page
    Render {
        /// Input source file
        path: String,

        /// JSON config file ({"trimSpace", "tabLength", "commentLinks"})
        #[arg(long)]
        config: Option<String>,

        /// Leading space columns to strip from every line
        #[arg(long)]
        trim_space: Option<usize>,

        /// Spaces substituted for each tab
        #[arg(long)]
        tab_length: Option<usize>,

        /// Rewrite [text](url) patterns inside comments as anchors
        #[arg(long)]
        comment_links: bool,
    },

    /// Print the line count a render of the file would report
    Count {
        /// Input source file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            path,
            config,
            trim_space,
            tab_length,
            comment_links,
        } => cmd_render(&path, config.as_deref(), trim_space, tab_length, comment_links),
        Command::Count { path } => cmd_count(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_config(
    config_path: Option<&str>,
    trim_space: Option<usize>,
    tab_length: Option<usize>,
    comment_links: bool,
) -> PrettyConfig {
    let mut config = match config_path {
        Some(path) => {
            let json = read_source(path);
            match PrettyConfig::from_json(&json) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error in {path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => PrettyConfig::default(),
    };

    // Flags override the config file
    if let Some(trim_space) = trim_space {
        config.trim_space = trim_space;
    }
    if let Some(tab_length) = tab_length {
        config.tab_length = tab_length;
    }
    if comment_links {
        config.comment_links = true;
    }
    config
}

fn cmd_render(
    path: &str,
    config_path: Option<&str>,
    trim_space: Option<usize>,
    tab_length: Option<usize>,
    comment_links: bool,
) {
    let source = read_source(path);
    let config = load_config(config_path, trim_space, tab_length, comment_links);

    let out = prettify_html::prettify(&source, &config);

    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("prettified");
    let dir = Path::new(path).parent().unwrap_or(Path::new("."));
    let html_path = dir.join(format!("{stem}.html"));

    // Build a standalone HTML page around the fragment
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{stem}</title>\n"));
    html.push_str("  <style>\n");
    html.push_str(STYLESHEET);
    html.push_str("  </style>\n</head>\n<body>\n<ol class=\"code\">\n");
    html.push_str(&out.markup);
    html.push_str("\n</ol>\n</body>\n</html>\n");

    if let Err(e) = std::fs::write(&html_path, &html) {
        eprintln!("Error writing {}: {e}", html_path.display());
        std::process::exit(1);
    }

    eprintln!("Rendered {} lines: {}", out.line_count, html_path.display());
}

fn cmd_count(path: &str) {
    let source = read_source(path);
    let out = prettify_html::prettify(&source, &PrettyConfig::default());
    println!("{}", out.line_count);
}

/// Default colors for the span-class vocabulary.
const STYLESHEET: &str = "\
    ol.code { font-family: monospace; background: #fdfdfd; }\n\
    .defKey { color: #0000ff; font-weight: bold; }\n\
    .resKey { color: #0000ff; }\n\
    .natKey { color: #267f99; }\n\
    .valKey { color: #0000ff; font-style: italic; }\n\
    .cliKey { color: #267f99; font-style: italic; }\n\
    .jquKey { color: #7a3e9d; }\n\
    .idt { color: #001080; }\n\
    .str { color: #a31515; }\n\
    .cmt { color: #008000; font-style: italic; }\n\
    .rgx { color: #811f3f; }\n\
    .num { color: #098658; }\n\
    .opr { color: #000000; }\n\
    .brc { color: #000000; }\n\
    .cmm, .smc, .cln, .per { color: #000000; }\n\
    .spc { }\n\
    .msc { color: #666666; }\n";
