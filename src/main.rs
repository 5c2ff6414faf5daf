use std::process;

use air_http::args::Args;
use air_http::common::{cookie, query};
use air_http::{cgi, Request, RequestError};
use clap::Parser;
use log::{error, info};
use serde_json::{json, Value};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let args = Args::parse();

    if let Err(err) = TermLogger::init(args.log_level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("could not start logger: {}", err);
    }

    let request = match build_request(args) {
        Ok(request) => request,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    info!("{} {} -> {}", request.method(), request.uri(), request.uri_path());

    match serde_json::to_string_pretty(&describe(&request)) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            error!("could not serialize request: {}", err);
            process::exit(1);
        }
    }
}

fn build_request(args: Args) -> Result<Request, RequestError> {
    if args.cgi {
        return cgi::from_process();
    }

    let mut cookies = args.cookie_header.as_deref().map(cookie::parse_header).unwrap_or_default();
    cookies.extend(args.cookie);

    let mut builder = Request::builder(args.uri.unwrap_or_default())
        .method(args.method)
        .request_data(query::from_pairs(args.data))
        .server_data(args.server.into_iter().collect())
        .cookies(cookies)
        .content(args.content.unwrap_or_default());

    if !args.query.is_empty() {
        builder = builder.query_data(query::from_pairs(args.query));
    }

    builder.build()
}

fn describe(request: &Request) -> Value {
    json!({
        "request": request,
        "referer": request.referer(),
        "content": String::from_utf8_lossy(request.content()),
    })
}
