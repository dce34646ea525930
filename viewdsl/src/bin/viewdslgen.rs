use std::{borrow::Cow, env, fs};

use viewdsl_designer::GeneratorConfig;

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args_os().collect();

    if args.len() != 5 {
        eprintln!("Usage: viewdslgen ARTIFACT WIDGETS.bin HELPERS.txt OUTPUT.kt");
        std::process::exit(1);
    }

    let widgets_path = &args[2];
    let widgets = match fs::read(widgets_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!(
                "Could not read the widget metadata '{}': {}",
                widgets_path.to_string_lossy(),
                e
            );
            std::process::exit(1);
        }
    };

    GeneratorConfig::new()
        .artifact_name(args[1].to_string_lossy())
        .link(widgets_path.to_string_lossy(), Cow::Owned(widgets))
        .helper_constructors_file(&args[3])
        .out_source_file(&args[4])
        .run_and_exit_on_error();
}
