// SPDX-License-Identifier: MPL-2.0
use catalog_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
catalog_lens - product catalog viewer

USAGE:
    catalog_lens [OPTIONS] [MANIFEST]

ARGS:
    <MANIFEST>    Catalog manifest path or http(s) URL

OPTIONS:
    --lang <ID>          UI language (e.g. en-US, es)
    --config-dir <DIR>   Directory holding settings.toml
    -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let manifest = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        manifest,
        config_dir,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_lens=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
