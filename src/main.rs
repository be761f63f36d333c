// SPDX-License-Identifier: MPL-2.0
use camview::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        fps: args.opt_value_from_str("--fps").unwrap_or(None),
        resolution: args.opt_value_from_str("--resolution").unwrap_or(None),
    };

    app::run(flags)
}
