// SPDX-License-Identifier: MPL-2.0
use flipmenu::app::{self, paths, Flags};
use flipmenu::config::{self, Config};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: flipmenu [OPTIONS] [PAGE...]

Arguments:
  [PAGE...]              Page images (URLs or paths) replacing the configured menu

Options:
  --lang <LOCALE>        UI language (e.g. en-US, fr, ru)
  --config-dir <DIR>     Directory holding settings.toml
  --init-config          Write a settings.toml with default values and exit
  -h, --help             Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flipmenu=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let init_config = args.contains("--init-config");
    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");
    let pages = args
        .finish()
        .into_iter()
        .filter_map(|arg| match arg.into_string() {
            Ok(page) => Some(page),
            Err(raw) => {
                tracing::warn!(?raw, "ignoring non UTF-8 page argument");
                None
            }
        })
        .collect();

    paths::init_cli_override(config_dir);

    if init_config {
        write_default_config();
        return Ok(());
    }

    app::run(Flags { lang, pages })
}

/// Writes the default settings unless a settings file already exists.
fn write_default_config() {
    let Some(path) = config::config_path() else {
        tracing::error!("no configuration directory available");
        return;
    };
    if path.exists() {
        tracing::info!(path = %path.display(), "configuration already exists, leaving it untouched");
        return;
    }
    match config::save(&Config::default()) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default configuration"),
        Err(err) => tracing::error!(path = %path.display(), %err, "could not write configuration"),
    }
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring invalid option");
            None
        }
    }
}
