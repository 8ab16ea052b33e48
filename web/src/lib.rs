use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod http;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    round: game::RoundProps,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#-vvv&--categories=4&--seed=7`.
    ///
    /// `&` and `#` separate arguments, so a value containing them (a `--base-url` with a query
    /// string) has to be percent-encoded; each argument is decoded after splitting.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash
            .split(['#', '&'])
            .filter(|arg| !arg.is_empty())
            .map(utils::decode_hash_arg);
        Self::try_parse_from(std::iter::once("trivio".to_string()).chain(args))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).unwrap_or_else(|err| {
        gloo::console::warn!(format!("ignoring page arguments: {}", err));
        Args::parse_from(["trivio"])
    });
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.round).render();
}
