use clap::Parser;

use palette_preview::cli::args::{CommandsEnum, PalettePreviewArgs};
use palette_preview::cli::preview::{
    list_palettes, preview_custom, preview_named, run_default_sequence,
};

fn main() {
    let args: PalettePreviewArgs = PalettePreviewArgs::parse();

    match &args.command {
        Some(CommandsEnum::Preview(params)) => {
            for name in &params.names {
                preview_named(name, params.date_time_out).unwrap();
            }
        }

        Some(CommandsEnum::Custom(params)) => {
            preview_custom(&params.params_path, params.date_time_out).unwrap();
        }

        Some(CommandsEnum::List) => {
            list_palettes();
        }

        None => {
            run_default_sequence().unwrap();
        }
    }
}
