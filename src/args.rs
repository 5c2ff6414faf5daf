use clap::Parser;
use log::LevelFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Builds an HTTP request the way a web framework would receive it and prints its decomposed form.
#[derive(Parser, Debug)]
#[command(author = AUTHORS, version = VERSION, about)]
pub struct Args {
    /// The request URI. Required unless --cgi is given.
    #[arg(required_unless_present = "cgi")]
    pub uri: Option<String>,
    /// (Optional) Request method.
    #[arg(short, long, default_value_t = String::from("GET"))]
    pub method: String,
    /// (Optional) Request data entry, as KEY=VALUE. May be repeated.
    #[arg(short, long = "data", value_parser = parse_pair)]
    pub data: Vec<(String, String)>,
    /// (Optional) Query data entry, as KEY=VALUE. Replaces the URI's query string when given.
    #[arg(short, long = "query", value_parser = parse_pair)]
    pub query: Vec<(String, String)>,
    /// (Optional) Server data entry, as KEY=VALUE. May be repeated.
    #[arg(short, long = "server", value_parser = parse_pair)]
    pub server: Vec<(String, String)>,
    /// (Optional) Cookie, as NAME=VALUE. May be repeated.
    #[arg(short, long = "cookie", value_parser = parse_pair)]
    pub cookie: Vec<(String, String)>,
    /// (Optional) Raw `Cookie` header to read cookies from.
    #[arg(long)]
    pub cookie_header: Option<String>,
    /// (Optional) Raw request body.
    #[arg(long)]
    pub content: Option<String>,
    /// Build the request from this process's CGI environment and standard input instead.
    #[arg(long, conflicts_with_all = ["uri", "data", "query", "server", "cookie", "cookie_header", "content"])]
    pub cgi: bool,
    /// Log more. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The log level asked for on the command line.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", raw))
}
