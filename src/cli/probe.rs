use {
    crate::cli::ProbeArgs,
    glbind::{
        Gl, GlConfig, LibraryLoader, Wgl, dispatch::CommandStatus, utils::errorfmt::ErrorFmt,
    },
};

pub fn main(args: ProbeArgs) {
    let mut config = GlConfig::from_env();
    if let Some(library) = args.library {
        config.library = Some(library);
    }
    let mut loader = match LibraryLoader::open(args.api.into(), &config) {
        Ok(l) => l,
        Err(e) => fatal!("Could not open the GL library: {}", ErrorFmt(e)),
    };
    println!("library: {}", loader.name());
    let gl = Gl::load(&mut loader, config.clone());
    print_table("gl", &gl.commands(), args.missing);
    if args.wgl {
        let wgl = Wgl::load(&mut loader, config);
        print_table("wgl", &wgl.commands(), args.missing);
    }
}

fn print_table(table: &str, commands: &[CommandStatus], missing_only: bool) {
    let width = commands.iter().map(|c| c.logical.len()).max().unwrap_or(0);
    for c in commands {
        if missing_only && c.selected.is_some() {
            continue;
        }
        println!(
            "{:width$} -> {}",
            c.logical,
            c.selected.unwrap_or("-"),
            width = width
        );
    }
    let resolved = commands.iter().filter(|c| c.selected.is_some()).count();
    println!(
        "{}: {} of {} commands resolved",
        table,
        resolved,
        commands.len()
    );
}
