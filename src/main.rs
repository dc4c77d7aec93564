// SPDX-License-Identifier: MPL-2.0
use vidskin::app::{self, Flags};

fn print_usage() {
    println!(
        "Usage: vidskin [OPTIONS]\n\n\
         Options:\n  \
         --config-dir <DIR>   Directory containing settings.toml\n  \
         --duration <SECS>    Length of the simulated clip\n  \
         --block-autoplay     Refuse the first play request\n  \
         -h, --help           Print this help"
    );
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print_usage();
        return Ok(());
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        }),
        duration_secs: args.opt_value_from_str("--duration").unwrap_or_else(|err| {
            log::warn!("ignoring --duration: {err}");
            None
        }),
        block_autoplay: args.contains("--block-autoplay"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    app::run(flags)
}
