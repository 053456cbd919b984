//! Server implementation

#![warn(missing_docs)]

mod http;

use std::thread;

use coffee_machine_core::{Config, RequestHandler};
use eyre::{eyre, Result};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Configuration of the coffee machine
    config: Config,

    /// Port for the HTTP server to listen on
    port: u16,
    /// Host for the HTTP server to listen on
    host: String,
    /// Number of handler threads
    handler_threads: u32,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            port: 8585,
            host: String::from("127.0.0.1"),
            config: Config::default(),
            handler_threads: 8,
        };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-port" => opts.port = arg.parse().expect("-port takes a decimal u16"),
                    "-host" => opts.host = arg,
                    "-handler-threads" => {
                        opts.handler_threads =
                            arg.parse().expect("-handler-threads takes a decimal u32")
                    }
                    "-unavailable-every" => {
                        opts.config.unavailable_every = arg
                            .parse()
                            .expect("-unavailable-every takes a decimal u64 greater than 0")
                    }
                    _ => {
                        eprintln!("Error: ignoring unknown option {opt}");
                        std::process::exit(1);
                    }
                }
                option = None;
            } else {
                option = Some(arg);
            }
        }
        if let Some(opt) = option {
            eprintln!("Error: ignoring leftover option {opt}");
            std::process::exit(1);
        }
        assert_ne!(opts.config.unavailable_every, 0);

        opts
    }
}

fn http_loop<H: RequestHandler>(server: &tiny_http::Server, handler: &H) {
    loop {
        let rq = server.recv().expect("HTTP receive failed");
        if let Some(rq) = http::parse(rq) {
            handler.handle(rq);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coffee_machine_server=info,coffee_machine_barista=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let opts = Opts::from_args();

    let server = tiny_http::Server::http((opts.host.as_str(), opts.port))
        .map_err(|err| eyre!("failed to bind {}:{}: {err}", opts.host, opts.port))?;
    info!(
        host = %opts.host,
        port = opts.port,
        threads = opts.handler_threads,
        "coffee machine listening"
    );

    let barista = coffee_machine_barista::launch(&opts.config);

    thread::scope(|s| {
        for i in 0..opts.handler_threads {
            thread::Builder::new()
                .name(format!("handler_{i}"))
                .spawn_scoped(s, || http_loop(&server, &barista))
                .unwrap();
        }
    });

    Ok(())
}
