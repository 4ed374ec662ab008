//! Renders the component gallery to stdout or a file.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use leptos::logging::log;
use server_ui::AssetConfig;
use ui_showcase::{parse_args, print_usage, render_gallery, ShowcaseArgs, ShowcaseCommand};

fn main() -> ExitCode {
    let command = match parse_args(env::args().skip(1).collect()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    let result = match command {
        ShowcaseCommand::Help => {
            print_usage();
            Ok(())
        }
        ShowcaseCommand::Render(args) => run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(args: ShowcaseArgs) -> Result<(), String> {
    let assets = match &args.assets {
        Some(path) => AssetConfig::load(path).map_err(|err| err.to_string())?,
        None => AssetConfig::default(),
    };
    let html = render_gallery(assets).map_err(|err| err.to_string())?;

    match &args.out {
        Some(path) => {
            fs::write(path, &html)
                .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
            log!("wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|err| format!("failed to write stdout: {err}"))?;
        }
    }
    Ok(())
}
